use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter '{field}': got {value}, must be {constraint}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },
    #[error("numeric overflow: '{quantity}' is not finite")]
    NumericOverflow { quantity: &'static str },
}

impl PricingError {
    pub(crate) fn invalid(field: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            field,
            value,
            constraint,
        }
    }
}
