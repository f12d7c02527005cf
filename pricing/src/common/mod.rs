mod distributions;
mod models;

pub use distributions::{ErfNormal, StandardNormal};
pub use models::{MarketParameters, PricingResult};
