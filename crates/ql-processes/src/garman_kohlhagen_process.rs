//! Garman-Kohlhagen process for an FX rate.
//!
//! `dS/S = (r_d − r_f) dt + σ dW`
//!
//! The foreign interest rate plays the role of a continuous dividend
//! yield; discounting happens on the domestic curve.  The process owns no
//! market data of its own: it is a read-only view over the spot quote and
//! the three curves, each held through a [`Handle`].

use crate::stochastic_process::StochasticProcess1D;
use ql_core::{
    ensure_arg,
    errors::{Error, Result},
    DiscountFactor, Handle, Real, Time,
};
use ql_quotes::Quote;
use ql_termstructures::{BlackVolTermStructure, YieldTermStructure};
use ql_time::Date;

/// Spot FX quote plus foreign, domestic and volatility curves.
#[derive(Debug, Clone)]
pub struct GarmanKohlhagenProcess {
    spot: Handle<dyn Quote>,
    foreign_rate: Handle<dyn YieldTermStructure>,
    domestic_rate: Handle<dyn YieldTermStructure>,
    black_vol: Handle<dyn BlackVolTermStructure>,
}

impl GarmanKohlhagenProcess {
    /// Assemble the process.
    ///
    /// No validation happens here; each input enforces its own invariants
    /// and an empty handle surfaces as an error when it is first queried.
    pub fn new(
        spot: Handle<dyn Quote>,
        foreign_rate: Handle<dyn YieldTermStructure>,
        domestic_rate: Handle<dyn YieldTermStructure>,
        black_vol: Handle<dyn BlackVolTermStructure>,
    ) -> Self {
        Self {
            spot,
            foreign_rate,
            domestic_rate,
            black_vol,
        }
    }

    /// Current spot rate, in domestic units per unit of foreign currency.
    ///
    /// Fails if the quote is empty, unset, or not strictly positive.
    pub fn spot(&self) -> Result<Real> {
        let s = self
            .spot
            .current()?
            .value()
            .ok_or_else(|| Error::NullValue("spot quote has no value".into()))?;
        ensure_arg!(s.is_finite() && s > 0.0, "spot must be positive, got {s}");
        Ok(s)
    }

    /// The foreign (carry) curve.
    pub fn foreign_rate(&self) -> Result<&dyn YieldTermStructure> {
        self.foreign_rate.current()
    }

    /// The domestic (discounting) curve.
    pub fn domestic_rate(&self) -> Result<&dyn YieldTermStructure> {
        self.domestic_rate.current()
    }

    /// The Black volatility surface.
    pub fn black_volatility(&self) -> Result<&dyn BlackVolTermStructure> {
        self.black_vol.current()
    }

    /// Domestic discount factor to `date`.
    pub fn risk_free_discount(&self, date: Date) -> Result<DiscountFactor> {
        self.domestic_rate()?.discount(date)
    }

    /// Foreign discount factor to `date`.
    pub fn dividend_discount(&self, date: Date) -> Result<DiscountFactor> {
        self.foreign_rate()?.discount(date)
    }

    /// Total Black variance to `date` at `strike`.
    pub fn black_variance(&self, date: Date, strike: Real) -> Result<Real> {
        self.black_volatility()?.black_variance(date, strike)
    }

    /// Outright forward rate `S · Df / Dd` for delivery on `date`.
    pub fn forward(&self, date: Date) -> Result<Real> {
        Ok(self.spot()? * self.dividend_discount(date)? / self.risk_free_discount(date)?)
    }

    /// Year fraction to `date` under the domestic curve's day counter.
    pub fn time(&self, date: Date) -> Result<Time> {
        Ok(self.domestic_rate()?.time_from_reference(date))
    }
}

impl StochasticProcess1D for GarmanKohlhagenProcess {
    fn x0(&self) -> Result<Real> {
        self.spot()
    }

    /// `(r_d − r_f) · x`
    fn drift(&self, t: Time, x: Real) -> Result<Real> {
        let rd = self.domestic_rate()?.forward_rate_impl(t);
        let rf = self.foreign_rate()?.forward_rate_impl(t);
        Ok((rd - rf) * x)
    }

    /// `σ(t, x) · x`
    fn diffusion(&self, t: Time, x: Real) -> Result<Real> {
        Ok(self.black_volatility()?.black_vol_impl(t, x) * x)
    }

    /// `x · exp((r_d − r_f)·Δt)`
    fn expectation(&self, t: Time, x: Real, dt: Time) -> Result<Real> {
        let rd = self.domestic_rate()?.forward_rate_impl(t);
        let rf = self.foreign_rate()?.forward_rate_impl(t);
        Ok(x * ((rd - rf) * dt).exp())
    }

    /// Exact log-normal step with σ frozen over `[t, t+Δt]`.
    fn evolve(&self, t: Time, x: Real, dt: Time, dw: Real) -> Result<Real> {
        let rd = self.domestic_rate()?.forward_rate_impl(t);
        let rf = self.foreign_rate()?.forward_rate_impl(t);
        let sigma = self.black_volatility()?.black_vol_impl(t, x);
        Ok(x * ((rd - rf - 0.5 * sigma * sigma) * dt + sigma * dt.sqrt() * dw).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_quotes::SimpleQuote;
    use ql_termstructures::{BlackConstantVol, FlatForward};
    use ql_time::EvaluationContext;
    use std::sync::Arc;

    fn ctx() -> EvaluationContext {
        EvaluationContext::new(Date::from_ymd(2025, 1, 2).unwrap())
    }

    fn process(spot: &Arc<SimpleQuote>) -> GarmanKohlhagenProcess {
        let ctx = ctx();
        let foreign: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::from_context(&ctx, 0.01).unwrap());
        let domestic: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::from_context(&ctx, 0.03).unwrap());
        let vol: Arc<dyn BlackVolTermStructure> =
            Arc::new(BlackConstantVol::from_context(&ctx, 0.10).unwrap());
        GarmanKohlhagenProcess::new(
            Handle::from_arc(spot.clone() as Arc<dyn Quote>),
            Handle::from_arc(foreign),
            Handle::from_arc(domestic),
            Handle::from_arc(vol),
        )
    }

    #[test]
    fn accessors_delegate_to_curves() {
        let spot = Arc::new(SimpleQuote::new(1.10).unwrap());
        let p = process(&spot);
        let maturity = ctx().maturity_after_days(365).unwrap();

        assert_abs_diff_eq!(p.spot().unwrap(), 1.10);
        assert_abs_diff_eq!(p.time(maturity).unwrap(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.risk_free_discount(maturity).unwrap(), (-0.03_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(p.dividend_discount(maturity).unwrap(), (-0.01_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(p.black_variance(maturity, 1.10).unwrap(), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(p.forward(maturity).unwrap(), 1.10 * (0.02_f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn spot_updates_are_visible() {
        let spot = Arc::new(SimpleQuote::new(1.10).unwrap());
        let p = process(&spot);
        spot.set_value(1.25).unwrap();
        assert_abs_diff_eq!(p.x0().unwrap(), 1.25);
    }

    #[test]
    fn empty_or_invalid_spot_is_an_error() {
        let spot = Arc::new(SimpleQuote::new(1.10).unwrap());
        let p = process(&spot);
        spot.reset();
        assert!(matches!(p.spot(), Err(Error::NullValue(_))));
        spot.set_value(-1.0).unwrap();
        assert!(p.spot().unwrap_err().is_invalid_argument());

        let null = GarmanKohlhagenProcess::new(
            Handle::null(),
            Handle::null(),
            Handle::null(),
            Handle::null(),
        );
        assert!(null.spot().is_err());
        assert!(null.forward(ctx().evaluation_date()).is_err());
    }

    #[test]
    fn discount_before_reference_is_domain_error() {
        let spot = Arc::new(SimpleQuote::new(1.10).unwrap());
        let p = process(&spot);
        let yesterday = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(p.risk_free_discount(yesterday).unwrap_err().is_domain());
    }

    #[test]
    fn diffusion_dynamics() {
        let spot = Arc::new(SimpleQuote::new(1.10).unwrap());
        let p = process(&spot);
        // (r_d − r_f)·x = 0.02 · 1.10
        assert_abs_diff_eq!(p.drift(0.0, 1.10).unwrap(), 0.022, epsilon = 1e-12);
        assert_abs_diff_eq!(p.diffusion(0.0, 1.10).unwrap(), 0.11, epsilon = 1e-15);
        assert_abs_diff_eq!(
            p.expectation(0.0, 1.10, 1.0).unwrap(),
            1.10 * (0.02_f64).exp(),
            epsilon = 1e-14
        );
        // Zero noise: deterministic growth corrected by −σ²/2.
        assert_abs_diff_eq!(
            p.evolve(0.0, 1.10, 1.0, 0.0).unwrap(),
            1.10 * (0.015_f64).exp(),
            epsilon = 1e-14
        );
    }
}
