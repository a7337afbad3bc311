//! Vanilla option instrument.

use crate::exercise::EuropeanExercise;
use crate::instrument::{Instrument, PricingEngine};
use crate::payoff::{OptionType, PlainVanillaPayoff, StrikedPayoff};
use ql_core::{errors::Result, Real};
use ql_time::Date;
use std::sync::Arc;

/// Arguments handed to a pricing engine.
#[derive(Debug, Clone)]
pub struct VanillaOptionArguments {
    /// The payoff.
    pub payoff: Arc<dyn StrikedPayoff>,
    /// The exercise specification.
    pub exercise: EuropeanExercise,
}

/// A European vanilla option on a single underlying (here an FX rate).
///
/// Immutable once built; composed of exactly one payoff and one exercise.
#[derive(Debug, Clone)]
pub struct VanillaOption {
    payoff: Arc<dyn StrikedPayoff>,
    exercise: EuropeanExercise,
}

impl VanillaOption {
    /// Create a new vanilla option.
    pub fn new(payoff: Arc<dyn StrikedPayoff>, exercise: EuropeanExercise) -> Self {
        Self { payoff, exercise }
    }

    /// Convenience: a European call/put with a plain vanilla payoff.
    ///
    /// Fails with `InvalidArgument` if the strike is not positive.
    pub fn european(option_type: OptionType, strike: Real, maturity: Date) -> Result<Self> {
        let payoff = PlainVanillaPayoff::new(option_type, strike)?;
        Ok(Self::new(Arc::new(payoff), EuropeanExercise::new(maturity)))
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike()
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type()
    }

    /// The payoff.
    pub fn payoff(&self) -> &dyn StrikedPayoff {
        &*self.payoff
    }

    /// The exercise.
    pub fn exercise(&self) -> &EuropeanExercise {
        &self.exercise
    }

    /// Get the arguments for a pricing engine.
    pub fn arguments(&self) -> VanillaOptionArguments {
        VanillaOptionArguments {
            payoff: Arc::clone(&self.payoff),
            exercise: self.exercise,
        }
    }

    /// Price this option with `engine`.
    pub fn price<E>(&self, engine: &E) -> Result<E::Results>
    where
        E: PricingEngine<VanillaOptionArguments>,
    {
        engine.calculate(&self.arguments())
    }
}

impl Instrument for VanillaOption {
    fn maturity_date(&self) -> Option<Date> {
        Some(self.exercise.maturity_date())
    }
}
