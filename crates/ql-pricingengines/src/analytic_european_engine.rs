//! Analytic European engine for FX options (Garman-Kohlhagen).
//!
//! Prices European vanilla options with the Black-Scholes-Merton closed form
//! written on the forward, with the foreign rate as the carry:
//!
//! $$F = S \frac{D_f}{D_d}, \quad d_{1,2} = \frac{\ln(F/K) \pm v/2}{\sqrt v}$$
//! $$C = D_d\,(F N(d_1) - K N(d_2)), \quad P = D_d\,(K N(-d_2) - F N(-d_1))$$
//!
//! where `v = σ²T` is the total variance and `D_d`, `D_f` are the domestic
//! and foreign discount factors to expiry.

use ql_core::{ensure_arg, ensure_domain, errors::Result, DiscountFactor, Real, Time};
use ql_instruments::{Greeks, OptionResults, OptionType, PricingEngine, VanillaOptionArguments};
use ql_math::{
    comparison::is_zero,
    distributions::{normal_cdf, normal_pdf},
};
use ql_processes::GarmanKohlhagenProcess;
use ql_termstructures::TermStructure;
use std::sync::Arc;
use tracing::{debug, warn};

/// Analytic pricing engine for European vanilla FX options.
#[derive(Debug, Clone)]
pub struct AnalyticEuropeanEngine {
    process: Arc<GarmanKohlhagenProcess>,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine over the given Garman-Kohlhagen process.
    pub fn new(process: Arc<GarmanKohlhagenProcess>) -> Self {
        Self { process }
    }

    /// The process the engine reads its market data from.
    pub fn process(&self) -> &GarmanKohlhagenProcess {
        &self.process
    }
}

/// Closed-form Garman-Kohlhagen price and Greeks.
///
/// Inputs are the spot, the strike, the domestic and foreign discount
/// factors to expiry, the total Black variance `σ²T`, and the year fraction
/// `T`.  Rates and volatility are implied back from the discounts and the
/// variance, so the result is a pure function of its arguments.
///
/// When the variance is zero the NPV is the discounted intrinsic value of
/// the forward, `D_d · max(φ(F − K), 0)`, and no Greeks are produced:
/// [`OptionResults::greeks`] then reports a domain error.
///
/// Fails with `InvalidArgument` on a non-positive spot, strike or discount
/// factor, a negative variance or time, or any non-finite input.
pub fn garman_kohlhagen(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    domestic_discount: DiscountFactor,
    foreign_discount: DiscountFactor,
    variance: Real,
    t: Time,
) -> Result<OptionResults> {
    ensure_arg!(spot.is_finite() && spot > 0.0, "spot must be positive, got {spot}");
    ensure_arg!(strike.is_finite() && strike > 0.0, "strike must be positive, got {strike}");
    ensure_arg!(
        domestic_discount.is_finite() && domestic_discount > 0.0,
        "domestic discount must be positive, got {domestic_discount}"
    );
    ensure_arg!(
        foreign_discount.is_finite() && foreign_discount > 0.0,
        "foreign discount must be positive, got {foreign_discount}"
    );
    ensure_arg!(
        variance.is_finite() && variance >= 0.0,
        "variance must be non-negative, got {variance}"
    );
    ensure_arg!(t.is_finite() && t >= 0.0, "time to expiry must be non-negative, got {t}");

    let phi = option_type.sign();
    let forward = spot * foreign_discount / domestic_discount;

    let results = OptionResults::from_npv(0.0, forward)
        .with_result("domestic_discount", domestic_discount)
        .with_result("foreign_discount", foreign_discount)
        .with_result("variance", variance)
        .with_result("time_to_expiry", t);

    if is_zero(variance) {
        warn!(
            %option_type, forward, strike,
            "zero total variance; pricing at discounted intrinsic value"
        );
        return Ok(OptionResults {
            npv: domestic_discount * (phi * (forward - strike)).max(0.0),
            ..results
        });
    }

    let std_dev = variance.sqrt();
    let d1 = ((forward / strike).ln() + 0.5 * variance) / std_dev;
    let d2 = d1 - std_dev;
    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let npv = phi * domestic_discount * (forward * nd1 - strike * nd2);
    let mut results = OptionResults { npv, ..results };
    if d1.is_finite() && d2.is_finite() {
        results = results.with_result("d1", d1).with_result("d2", d2);
    }

    if is_zero(t) {
        // Variance without elapsed time: the price exists, rates and
        // volatility cannot be implied.
        warn!("positive variance at zero time to expiry; greeks are undefined");
        return Ok(results);
    }

    let sqrt_t = t.sqrt();
    let sigma = std_dev / sqrt_t;
    let rd = -domestic_discount.ln() / t;
    let rf = -foreign_discount.ln() / t;
    let spot_leg = spot * foreign_discount;
    let strike_leg = strike * domestic_discount;

    let spot_std_dev = spot * std_dev;
    if !(spot_std_dev > 0.0 && spot_std_dev.is_finite()) {
        // S·√v underflows for vanishing spots; gamma would be 0/0.
        warn!(spot, std_dev, "spot times standard deviation underflows; greeks are undefined");
        return Ok(results);
    }

    let greeks = Greeks {
        delta: phi * foreign_discount * nd1,
        gamma: foreign_discount * npd1 / spot_std_dev,
        vega: spot_leg * npd1 * sqrt_t,
        theta: -spot_leg * npd1 * sigma / (2.0 * sqrt_t)
            + phi * (rf * spot_leg * nd1 - rd * strike_leg * nd2),
        rho: phi * strike_leg * t * nd2,
    };
    let foreign_rho = -phi * spot_leg * t * nd1;
    let finite = [greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho, foreign_rho]
        .iter()
        .all(|g| g.is_finite());
    if !finite {
        warn!(?greeks, "non-finite greeks; reporting the price only");
        return Ok(results);
    }

    Ok(OptionResults {
        greeks: Some(greeks),
        foreign_rho: Some(foreign_rho),
        ..results
    })
}

impl PricingEngine<VanillaOptionArguments> for AnalyticEuropeanEngine {
    type Results = OptionResults;

    fn calculate(&self, args: &VanillaOptionArguments) -> Result<OptionResults> {
        let strike = args.payoff.strike();
        let option_type = args.payoff.option_type();
        let maturity = args.exercise.maturity_date();

        let reference_date = self.process.domestic_rate()?.reference_date();
        ensure_domain!(
            maturity >= reference_date,
            "option expired on {maturity}, before the reference date {reference_date}"
        );

        let spot = self.process.spot()?;
        let domestic_discount = self.process.risk_free_discount(maturity)?;
        let foreign_discount = self.process.dividend_discount(maturity)?;
        let variance = self.process.black_variance(maturity, strike)?;
        let t = self.process.time(maturity)?;

        debug!(
            %option_type, spot, strike, %maturity, t,
            domestic_discount, foreign_discount, variance,
            "analytic european engine inputs"
        );

        garman_kohlhagen(
            option_type,
            spot,
            strike,
            domestic_discount,
            foreign_discount,
            variance,
            t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Prices with flat continuously-compounded rates and constant vol.
    fn gk(
        option_type: OptionType,
        spot: Real,
        strike: Real,
        rd: Real,
        rf: Real,
        vol: Real,
        t: Time,
    ) -> OptionResults {
        garman_kohlhagen(
            option_type,
            spot,
            strike,
            (-rd * t).exp(),
            (-rf * t).exp(),
            vol * vol * t,
            t,
        )
        .unwrap()
    }

    #[test]
    fn eur_usd_reference_values() {
        let call = gk(OptionType::Call, 1.10, 1.10, 0.03, 0.01, 0.10, 1.0);
        let g = call.greeks().unwrap();
        assert_abs_diff_eq!(call.npv, 0.054_637_668_967, epsilon = 1e-9);
        assert_abs_diff_eq!(call.forward, 1.122_221_474_029, epsilon = 1e-9);
        assert_abs_diff_eq!(g.delta, 0.592_749_098_207, epsilon = 1e-9);
        assert_abs_diff_eq!(g.gamma, 3.480_188_225_061, epsilon = 1e-9);
        assert_abs_diff_eq!(g.vega, 0.421_102_775_232, epsilon = 1e-9);
        assert_abs_diff_eq!(g.theta, -0.032_456_488_853, epsilon = 1e-9);
        assert_abs_diff_eq!(g.rho, 0.597_386_339_061, epsilon = 1e-9);
        assert_abs_diff_eq!(call.foreign_rho.unwrap(), -0.652_024_008_028, epsilon = 1e-9);
    }

    #[test]
    fn usd_cnh_put_reference_values() {
        let t = 90.0 / 365.0;
        let put = gk(OptionType::Put, 7.15, 7.20, 0.02, 0.05, 0.08, t);
        let g = put.greeks().unwrap();
        assert_abs_diff_eq!(put.npv, 0.171_113_014_257, epsilon = 1e-9);
        assert_abs_diff_eq!(g.delta, -0.625_973_203_690, epsilon = 1e-9);
        assert_abs_diff_eq!(g.gamma, 1.308_640_821_986, epsilon = 1e-9);
        assert_abs_diff_eq!(g.vega, 1.319_690_769_967, epsilon = 1e-9);
        assert_abs_diff_eq!(g.theta, -0.344_932_161_257, epsilon = 1e-9);
        assert_abs_diff_eq!(g.rho, -1.145_791_583_172, epsilon = 1e-9);
        assert_abs_diff_eq!(put.foreign_rho.unwrap(), 1.103_599_333_081, epsilon = 1e-9);
    }

    #[test]
    fn negative_domestic_rate() {
        let call = gk(OptionType::Call, 1.10, 1.10, -0.005, 0.02, 0.12, 30.0 / 365.0);
        let g = call.greeks().unwrap();
        assert_abs_diff_eq!(call.npv, 0.013_984_681_588, epsilon = 1e-9);
        assert_abs_diff_eq!(g.theta, -0.078_416_105_328, epsilon = 1e-9);
        assert_abs_diff_eq!(g.rho, 0.042_450_930_754, epsilon = 1e-9);
    }

    #[test]
    fn put_call_parity() {
        for (s, k, rd, rf, vol, t) in [
            (1.10, 1.10, 0.03, 0.01, 0.10, 1.0),
            (100.0, 105.0, 0.08, 0.03, 0.25, 0.5),
            (7.15, 6.50, -0.01, 0.04, 0.30, 2.0),
        ] {
            let call = gk(OptionType::Call, s, k, rd, rf, vol, t);
            let put = gk(OptionType::Put, s, k, rd, rf, vol, t);
            let parity = s * (-rf * t).exp() - k * (-rd * t).exp();
            assert_abs_diff_eq!(call.npv - put.npv, parity, epsilon = 1e-12);
        }
    }

    #[test]
    fn greeks_match_finite_differences() {
        let (s, k, rd, rf, vol, t) = (1.10, 1.05, 0.03, 0.01, 0.12, 0.75);
        for ty in [OptionType::Call, OptionType::Put] {
            let g = gk(ty, s, k, rd, rf, vol, t).greeks().unwrap();
            let npv = |s: Real, rd: Real, rf: Real, vol: Real, t: Time| {
                gk(ty, s, k, rd, rf, vol, t).npv
            };
            let h = 1e-5;
            let delta = (npv(s + h, rd, rf, vol, t) - npv(s - h, rd, rf, vol, t)) / (2.0 * h);
            let gamma = (npv(s + h, rd, rf, vol, t) - 2.0 * npv(s, rd, rf, vol, t)
                + npv(s - h, rd, rf, vol, t))
                / (h * h);
            let vega = (npv(s, rd, rf, vol + h, t) - npv(s, rd, rf, vol - h, t)) / (2.0 * h);
            let theta = -(npv(s, rd, rf, vol, t + h) - npv(s, rd, rf, vol, t - h)) / (2.0 * h);
            let rho = (npv(s, rd + h, rf, vol, t) - npv(s, rd - h, rf, vol, t)) / (2.0 * h);
            let frho = (npv(s, rd, rf + h, vol, t) - npv(s, rd, rf - h, vol, t)) / (2.0 * h);

            assert_abs_diff_eq!(g.delta, delta, epsilon = 1e-7);
            assert_abs_diff_eq!(g.gamma, gamma, epsilon = 1e-3);
            assert_abs_diff_eq!(g.vega, vega, epsilon = 1e-7);
            assert_abs_diff_eq!(g.theta, theta, epsilon = 1e-7);
            assert_abs_diff_eq!(g.rho, rho, epsilon = 1e-7);
            let foreign_rho = gk(ty, s, k, rd, rf, vol, t).foreign_rho.unwrap();
            assert_abs_diff_eq!(foreign_rho, frho, epsilon = 1e-7);
        }
    }

    #[test]
    fn zero_variance_is_discounted_intrinsic() {
        let (s, rd, rf, t): (f64, f64, f64, f64) = (1.10, 0.03, 0.01, 1.0);
        let dd = (-rd * t).exp();
        let df = (-rf * t).exp();
        let forward = s * df / dd;
        for k in [1.00, forward, 1.25] {
            let call = garman_kohlhagen(OptionType::Call, s, k, dd, df, 0.0, t).unwrap();
            let put = garman_kohlhagen(OptionType::Put, s, k, dd, df, 0.0, t).unwrap();
            assert_abs_diff_eq!(call.npv, dd * (forward - k).max(0.0), epsilon = 1e-15);
            assert_abs_diff_eq!(put.npv, dd * (k - forward).max(0.0), epsilon = 1e-15);
            assert!(call.greeks().unwrap_err().is_domain());
            assert!(put.foreign_rho.is_none());
        }
    }

    #[test]
    fn vanishing_spot_prices_without_greeks() {
        let (k, rd, rf, t): (f64, f64, f64, f64) = (1.10, 0.03, 0.01, 1.0);
        let dd = (-rd * t).exp();
        let df = (-rf * t).exp();
        for spot in [5e-324, 1e-300] {
            let call = garman_kohlhagen(OptionType::Call, spot, k, dd, df, 0.01, t).unwrap();
            let put = garman_kohlhagen(OptionType::Put, spot, k, dd, df, 0.01, t).unwrap();
            assert!(call.npv.is_finite() && call.npv >= 0.0);
            assert_abs_diff_eq!(put.npv, dd * k, epsilon = 1e-12);
            assert!(call.additional_results.values().all(|v| v.is_finite()));
            match call.greeks() {
                Ok(g) => assert!(g.gamma.is_finite() && g.delta.is_finite()),
                Err(e) => assert!(e.is_domain()),
            }
        }
        let tiny = garman_kohlhagen(OptionType::Call, 5e-324, k, dd, df, 0.01, t).unwrap();
        assert!(tiny.greeks().unwrap_err().is_domain());
        assert!(tiny.foreign_rho.is_none());
    }

    #[test]
    fn invalid_inputs_rejected() {
        let bad = [
            (0.0, 1.0, 1.0, 1.0, 0.01, 1.0),
            (1.0, 0.0, 1.0, 1.0, 0.01, 1.0),
            (1.0, 1.0, 0.0, 1.0, 0.01, 1.0),
            (1.0, 1.0, 1.0, f64::NAN, 0.01, 1.0),
            (1.0, 1.0, 1.0, 1.0, -0.01, 1.0),
            (1.0, 1.0, 1.0, 1.0, 0.01, -1.0),
            (f64::INFINITY, 1.0, 1.0, 1.0, 0.01, 1.0),
        ];
        for (s, k, dd, df, v, t) in bad {
            let err = garman_kohlhagen(OptionType::Call, s, k, dd, df, v, t).unwrap_err();
            assert!(err.is_invalid_argument(), "{err}");
        }
    }

    #[test]
    fn delta_is_bounded_by_foreign_discount() {
        let df = (-0.04_f64).exp();
        for s in [0.5, 0.9, 1.0, 1.1, 2.0] {
            let call = gk(OptionType::Call, s, 1.0, 0.02, 0.04, 0.2, 1.0).greeks().unwrap();
            let put = gk(OptionType::Put, s, 1.0, 0.02, 0.04, 0.2, 1.0).greeks().unwrap();
            assert!(call.delta >= 0.0 && call.delta <= df);
            assert!(put.delta <= 0.0 && put.delta >= -df);
            assert_abs_diff_eq!(call.delta - put.delta, df, epsilon = 1e-14);
        }
    }

    #[test]
    fn engine_with_process() {
        use ql_core::Handle;
        use ql_instruments::VanillaOption;
        use ql_quotes::{Quote, SimpleQuote};
        use ql_termstructures::{
            BlackConstantVol, BlackVolTermStructure, FlatForward, YieldTermStructure,
        };
        use ql_time::{Date, EvaluationContext};

        let ctx = EvaluationContext::new(Date::from_ymd(2025, 1, 2).unwrap());
        let spot: Arc<dyn Quote> = Arc::new(SimpleQuote::new(100.0).unwrap());
        let foreign: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::from_context(&ctx, 0.03).unwrap());
        let domestic: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::from_context(&ctx, 0.05).unwrap());
        let vol: Arc<dyn BlackVolTermStructure> =
            Arc::new(BlackConstantVol::from_context(&ctx, 0.15).unwrap());
        let process = GarmanKohlhagenProcess::new(
            Handle::from_arc(spot),
            Handle::from_arc(foreign),
            Handle::from_arc(domestic),
            Handle::from_arc(vol),
        );
        let engine = AnalyticEuropeanEngine::new(Arc::new(process));

        let maturity = ctx.maturity_after_days(365).unwrap();
        let option = VanillaOption::european(OptionType::Call, 105.0, maturity).unwrap();
        let results = option.price(&engine).unwrap();
        let g = results.greeks().unwrap();
        assert_abs_diff_eq!(results.npv, 4.577_183_907_488, epsilon = 1e-9);
        assert_abs_diff_eq!(g.delta, 0.440_054_357_554, epsilon = 1e-9);
        assert_abs_diff_eq!(g.gamma, 0.025_634_259_396, epsilon = 1e-9);
        assert_abs_diff_eq!(g.vega, 38.451_389_094_005, epsilon = 1e-8);
        assert_abs_diff_eq!(g.theta, -3.535_103_701_784, epsilon = 1e-9);
        assert_abs_diff_eq!(g.rho, 39.428_251_847_918, epsilon = 1e-8);
        assert_abs_diff_eq!(results.additional_results["time_to_expiry"], 1.0);

        let expired = VanillaOption::european(
            OptionType::Call,
            105.0,
            Date::from_ymd(2025, 1, 1).unwrap(),
        )
        .unwrap();
        let err = expired.price(&engine).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("expired"), "{err}");
    }
}
