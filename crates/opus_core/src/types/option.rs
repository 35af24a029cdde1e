//! Option type and exercise style definitions.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Call or put.
///
/// # Examples
/// ```
/// use opus_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
/// assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    /// Right to buy: max(S - K, 0)
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Exercise value at spot `spot` for strike `strike`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
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
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidRequest(format!(
                "unknown option type '{}': expected call or put",
                s
            ))),
        }
    }
}

/// Exercise style of the contract.
///
/// Which styles a pricing model can serve is decided by the pricing facade:
/// American needs a lattice, Asian needs path simulation, European works
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionStyle {
    /// Exercise only at expiry.
    European,
    /// Exercise at any lattice node up to expiry.
    American,
    /// Payoff on the arithmetic average of the simulated path.
    Asian,
}

impl OptionStyle {
    /// Returns whether the holder may exercise before expiry.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, OptionStyle::American)
    }

    /// Returns whether the payoff depends on the whole path.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        matches!(self, OptionStyle::Asian)
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::European => write!(f, "European"),
            OptionStyle::American => write!(f, "American"),
            OptionStyle::Asian => write!(f, "Asian"),
        }
    }
}

impl FromStr for OptionStyle {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "european" | "eu" => Ok(OptionStyle::European),
            "american" | "us" => Ok(OptionStyle::American),
            "asian" => Ok(OptionStyle::Asian),
            _ => Err(PricingError::InvalidRequest(format!(
                "unknown option style '{}': expected european, american or asian",
                s
            ))),
        }
    }
}
