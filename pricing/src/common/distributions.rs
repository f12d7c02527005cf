use probability::distribution::{Continuous, Distribution, Gaussian};

/// Narrow seam over the standard normal distribution so the pricing formulas
/// do not commit to a particular special-function backend.
pub trait StandardNormal {
    /// cumulative distribution function N(x)
    fn cdf(&self, x: f64) -> f64;
    /// probability density function phi(x)
    fn density(&self, x: f64) -> f64;
}

/// Standard normal backed by [`probability::distribution::Gaussian`],
/// which evaluates the CDF via the error function and stays accurate in
/// the tails.
#[derive(Clone, Copy, Debug, Default)]
pub struct ErfNormal;

impl StandardNormal for ErfNormal {
    fn cdf(&self, x: f64) -> f64 {
        Gaussian::new(0.0, 1.0).distribution(x)
    }

    fn density(&self, x: f64) -> f64 {
        Gaussian::new(0.0, 1.0).density(x)
    }
}
