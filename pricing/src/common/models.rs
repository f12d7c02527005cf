#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketParameters {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl MarketParameters {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }
}

/// Prices and sensitivities derived from one [`MarketParameters`] instance.
/// Recomputed wholesale when the inputs change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingResult {
    /// standardized log-moneyness term, argument of N and phi
    pub d1: f64,
    /// d1 - vola * sqrt(time_to_expiration)
    pub d2: f64,
    pub call_price: f64,
    pub put_price: f64,
    /// N(d1), in (0, 1)
    pub call_delta: f64,
    /// N(d1) - 1, in (-1, 0)
    pub put_delta: f64,
    pub call_gamma: f64,
    /// identical to call_gamma under Black-Scholes
    pub put_gamma: f64,
}
