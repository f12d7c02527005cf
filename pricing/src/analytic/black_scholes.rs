use crate::common::{ErfNormal, MarketParameters, PricingResult, StandardNormal};
use crate::error::PricingError;

pub trait OptionPricer {
    type Params;
    fn price(params: &Self::Params) -> Result<PricingResult, PricingError>;
}

/// European Put and Call option prices and greeks for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPricer for BlackScholesMerton {
    type Params = MarketParameters;

    fn price(params: &MarketParameters) -> Result<PricingResult, PricingError> {
        BlackScholesMerton::price_with(params, &ErfNormal)
    }
}

impl BlackScholesMerton {
    /// Price with a caller-supplied standard normal backend.
    /// Pure and stateless, safe to call concurrently.
    pub fn price_with<N: StandardNormal>(
        mp: &MarketParameters,
        normal: &N,
    ) -> Result<PricingResult, PricingError> {
        validate(mp)?;

        let sigma_exp = mp.vola * mp.time_to_expiration.sqrt();
        let d1 = ((mp.asset_price / mp.strike).ln()
            + (mp.rfr + mp.vola.powi(2) / 2.0) * mp.time_to_expiration)
            / sigma_exp;
        // subtraction, not a second log/sqrt, so d1 - d2 == sigma_exp holds
        let d2 = d1 - sigma_exp;
        let discounted_strike = mp.strike * (-mp.rfr * mp.time_to_expiration).exp();

        let call_delta = normal.cdf(d1);
        let call_price = call_delta * mp.asset_price - normal.cdf(d2) * discounted_strike;
        let put_price = normal.cdf(-d2) * discounted_strike - normal.cdf(-d1) * mp.asset_price;
        let gamma = normal.density(d1) / (mp.asset_price * sigma_exp);

        let result = PricingResult {
            d1,
            d2,
            call_price,
            put_price,
            call_delta,
            put_delta: call_delta - 1.0,
            call_gamma: gamma,
            put_gamma: gamma,
        };
        guard_finite(&result)?;
        Ok(result)
    }
}

fn validate(mp: &MarketParameters) -> Result<(), PricingError> {
    let positive = [
        ("vola", mp.vola),
        ("asset_price", mp.asset_price),
        ("strike", mp.strike),
        ("time_to_expiration", mp.time_to_expiration),
    ];
    for (field, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(PricingError::invalid(field, value, "a finite positive number"));
        }
    }
    if !mp.rfr.is_finite() {
        return Err(PricingError::invalid("rfr", mp.rfr, "a finite number"));
    }
    Ok(())
}

fn guard_finite(result: &PricingResult) -> Result<(), PricingError> {
    let quantities = [
        ("d1", result.d1),
        ("d2", result.d2),
        ("call_price", result.call_price),
        ("put_price", result.put_price),
        ("call_gamma", result.call_gamma),
    ];
    for (quantity, value) in quantities {
        if !value.is_finite() {
            return Err(PricingError::NumericOverflow { quantity });
        }
    }
    Ok(())
}
