pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::{BlackScholesMerton, OptionPricer};
pub use common::{ErfNormal, MarketParameters, PricingResult, StandardNormal};
pub use error::PricingError;
