//! Option payoffs.
//!
//! Payoffs describe the terminal payoff of an option as a function of the
//! underlying price at expiry.

use ql_core::{ensure_arg, errors::{Error, Result}, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy the foreign currency).
    Call,
    /// A put option (right to sell the foreign currency).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Decode the integer convention used by calling applications:
    /// 1 = Call, 2 = Put.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(OptionType::Call),
            2 => Ok(OptionType::Put),
            _ => Err(Error::InvalidArgument(format!(
                "option type code must be 1 (call) or 2 (put), got {code}"
            ))),
        }
    }

    /// The integer code of this option type.
    pub fn code(self) -> i32 {
        match self {
            OptionType::Call => 1,
            OptionType::Put => 2,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Accepts `call`/`put` (any case), `c`/`p`, or the codes `1`/`2`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" | "1" => Ok(OptionType::Call),
            "put" | "p" | "2" => Ok(OptionType::Put),
            other => Err(Error::InvalidArgument(format!("unknown option type '{other}'"))),
        }
    }
}

/// Base trait for option payoffs.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at expiry.
    fn value(&self, price: Real) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

/// A payoff depending on a strike price.
pub trait StrikedPayoff: Payoff {
    /// The strike price.
    fn strike(&self) -> Real;

    /// The option type (call / put).
    fn option_type(&self) -> OptionType;
}

/// Plain vanilla payoff `max(φ(S − K), 0)`, `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainVanillaPayoff {
    option_type: OptionType,
    strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    ///
    /// Fails with `InvalidArgument` unless the strike is finite and strictly
    /// positive.
    pub fn new(option_type: OptionType, strike: Real) -> Result<Self> {
        ensure_arg!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        Ok(Self {
            option_type,
            strike,
        })
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

impl StrikedPayoff for PlainVanillaPayoff {
    fn strike(&self) -> Real {
        self.strike
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_vanilla_call() {
        let p = PlainVanillaPayoff::new(OptionType::Call, 1.10).unwrap();
        assert!((p.value(1.25) - 0.15).abs() < 1e-15);
        assert_eq!(p.value(1.00), 0.0);
        assert_eq!(p.value(1.10), 0.0);
    }

    #[test]
    fn plain_vanilla_put() {
        let p = PlainVanillaPayoff::new(OptionType::Put, 100.0).unwrap();
        assert_eq!(p.value(90.0), 10.0);
        assert_eq!(p.value(110.0), 0.0);
        assert_eq!(p.description(), "Vanilla Put @ 100");
    }

    #[test]
    fn strike_must_be_positive() {
        for k in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = PlainVanillaPayoff::new(OptionType::Call, k).unwrap_err();
            assert!(err.is_invalid_argument(), "strike {k}");
        }
    }

    #[test]
    fn option_type_codes() {
        assert_eq!(OptionType::from_code(1).unwrap(), OptionType::Call);
        assert_eq!(OptionType::from_code(2).unwrap(), OptionType::Put);
        assert!(OptionType::from_code(0).unwrap_err().is_invalid_argument());
        assert_eq!(OptionType::Put.code(), 2);
    }

    #[test]
    fn option_type_parsing() {
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" p ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }
}
