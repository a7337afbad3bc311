//! `StochasticProcess1D`: one-dimensional diffusion `dX = μ(t,X) dt + σ(t,X) dW`.
//!
//! The closed-form engine only needs the process as a parameter bundle, but
//! describing it as a diffusion keeps drift and volatility consistent with
//! the discount curves it is built from.

use ql_core::{errors::Result, Real, Time};

/// A 1-dimensional stochastic process.
///
/// Every accessor is fallible because the market data behind a process is
/// held through handles that may be empty.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Result<Real>;

    /// Drift `μ(t, x)`.
    fn drift(&self, t: Time, x: Real) -> Result<Real>;

    /// Diffusion `σ(t, x)`.
    fn diffusion(&self, t: Time, x: Real) -> Result<Real>;

    /// Expected value `E[x(t+Δt) | x(t) = x]`.
    ///
    /// Default: first-order Euler `x + μ(t,x)·Δt`.
    fn expectation(&self, t: Time, x: Real, dt: Time) -> Result<Real> {
        Ok(x + self.drift(t, x)? * dt)
    }

    /// Standard deviation `σ(t,x) · √Δt`.
    fn std_deviation(&self, t: Time, x: Real, dt: Time) -> Result<Real> {
        Ok(self.diffusion(t, x)? * dt.sqrt())
    }

    /// Variance `σ(t,x)² · Δt`.
    fn variance(&self, t: Time, x: Real, dt: Time) -> Result<Real> {
        let s = self.diffusion(t, x)?;
        Ok(s * s * dt)
    }

    /// Advance the state by one step driven by the normal variate `dw`.
    ///
    /// Default: Euler step `E + σ·√Δt · dw`.
    fn evolve(&self, t: Time, x: Real, dt: Time, dw: Real) -> Result<Real> {
        Ok(self.expectation(t, x, dt)? + self.std_deviation(t, x, dt)? * dw)
    }
}
