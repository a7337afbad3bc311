//! The two pricing operations: `price` and `greeks`.
//!
//! Each call is self-contained.  It validates the request, builds its own
//! quote, curves, process, instrument and engine anchored at the supplied
//! [`EvaluationContext`], computes, and drops them.  Nothing is shared
//! between calls, so requests may run concurrently on any number of
//! threads, each with its own evaluation date.

use ql_core::{
    ensure_arg, ensure_domain,
    errors::{Error, Result},
    Handle, Rate, Real, Volatility,
};
use ql_instruments::{Greeks, Instrument, OptionResults, OptionType, VanillaOption};
use ql_pricingengines::AnalyticEuropeanEngine;
use ql_processes::GarmanKohlhagenProcess;
use ql_quotes::{Quote, SimpleQuote};
use ql_termstructures::{BlackConstantVol, BlackVolTermStructure, FlatForward, YieldTermStructure};
use ql_time::EvaluationContext;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Inputs of a European FX vanilla option valuation.
///
/// The spot is quoted in domestic currency per unit of foreign currency;
/// rates are continuously compounded annual rates; the maturity is a
/// number of calendar days after the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxOptionRequest {
    /// Call or put on the foreign currency.
    pub option_type: OptionType,
    /// Spot FX rate.
    pub spot: Real,
    /// Strike FX rate.
    pub strike: Real,
    /// Domestic (discounting) rate.
    pub domestic_rate: Rate,
    /// Foreign (carry) rate.
    pub foreign_rate: Rate,
    /// Annualized Black volatility.
    pub volatility: Volatility,
    /// Calendar days from the evaluation date to expiry.
    pub days_to_maturity: i32,
}

impl FxOptionRequest {
    /// Check every input before any market object is built.
    ///
    /// Fails with `InvalidArgument` on a non-positive spot or strike, a
    /// negative volatility, a negative maturity, or any non-finite number.
    /// Zero days and zero volatility are valid degenerate inputs.
    pub fn validate(&self) -> Result<()> {
        let r = self;
        ensure_arg!(r.spot.is_finite() && r.spot > 0.0, "spot must be positive, got {}", r.spot);
        ensure_arg!(
            r.strike.is_finite() && r.strike > 0.0,
            "strike must be positive, got {}",
            r.strike
        );
        ensure_arg!(
            r.domestic_rate.is_finite(),
            "domestic rate must be finite, got {}",
            r.domestic_rate
        );
        ensure_arg!(
            r.foreign_rate.is_finite(),
            "foreign rate must be finite, got {}",
            r.foreign_rate
        );
        ensure_arg!(
            r.volatility.is_finite() && r.volatility >= 0.0,
            "volatility must be non-negative, got {}",
            r.volatility
        );
        ensure_arg!(
            r.days_to_maturity >= 0,
            "days to maturity must be non-negative, got {}",
            r.days_to_maturity
        );
        Ok(())
    }
}

/// The five Greeks returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FxGreeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ.
    pub vega: Real,
    /// ∂V/∂t, per year.
    pub theta: Real,
    /// ∂V/∂r_d.
    pub rho: Real,
}

impl From<Greeks> for FxGreeks {
    fn from(g: Greeks) -> Self {
        Self {
            delta: g.delta,
            gamma: g.gamma,
            vega: g.vega,
            theta: g.theta,
            rho: g.rho,
        }
    }
}

/// Net present value in domestic currency.
///
/// A zero-day or zero-volatility request is priced at the discounted
/// intrinsic value of the forward.
pub fn price(ctx: &EvaluationContext, request: &FxOptionRequest) -> Result<Real> {
    Ok(evaluate(ctx, request)?.npv)
}

/// Delta, gamma, vega, theta and rho.
///
/// Fails with a domain error when the total variance is zero (zero days or
/// zero volatility), where the Greeks are undefined.
pub fn greeks(ctx: &EvaluationContext, request: &FxOptionRequest) -> Result<FxGreeks> {
    Ok(evaluate(ctx, request)?.greeks()?.into())
}

/// Full engine output: NPV, forward, Greeks, foreign rho and diagnostics.
pub fn evaluate(ctx: &EvaluationContext, request: &FxOptionRequest) -> Result<OptionResults> {
    request.validate()?;
    debug!(
        ?request,
        evaluation_date = %ctx.evaluation_date(),
        "pricing fx option"
    );

    let (option, engine) = build(ctx, request)?;
    ensure_domain!(
        !option.is_expired(ctx.evaluation_date()),
        "option expired before {}",
        ctx.evaluation_date()
    );
    option.price(&engine)
}

fn build(
    ctx: &EvaluationContext,
    request: &FxOptionRequest,
) -> Result<(VanillaOption, AnalyticEuropeanEngine)> {
    let spot: Arc<dyn Quote> = Arc::new(SimpleQuote::new(request.spot)?);
    let foreign: Arc<dyn YieldTermStructure> =
        Arc::new(FlatForward::from_context(ctx, request.foreign_rate)?);
    let domestic: Arc<dyn YieldTermStructure> =
        Arc::new(FlatForward::from_context(ctx, request.domestic_rate)?);
    let vol: Arc<dyn BlackVolTermStructure> =
        Arc::new(BlackConstantVol::from_context(ctx, request.volatility)?);

    let process = GarmanKohlhagenProcess::new(
        Handle::from_arc(spot),
        Handle::from_arc(foreign),
        Handle::from_arc(domestic),
        Handle::from_arc(vol),
    );

    let maturity = ctx.maturity_after_days(request.days_to_maturity).map_err(|e| {
        Error::InvalidArgument(format!(
            "{} days to maturity is out of the supported date range: {e}",
            request.days_to_maturity
        ))
    })?;
    let option = VanillaOption::european(request.option_type, request.strike, maturity)?;
    Ok((option, AnalyticEuropeanEngine::new(Arc::new(process))))
}
