//! Payoffs evaluated on simulated paths.

use opus_core::types::{OptionStyle, OptionType, PricingError};

/// Payoff of a vanilla or arithmetic-average option on one path.
///
/// European payoffs read the last point of the path. Asian payoffs use the
/// arithmetic mean of every point, the initial spot included.
///
/// # Examples
///
/// ```rust
/// use opus_core::types::{OptionStyle, OptionType};
/// use opus_pricing::mc::PathPayoff;
///
/// let path = [100.0, 110.0, 120.0];
///
/// let european = PathPayoff::new(OptionType::Call, OptionStyle::European, 105.0).unwrap();
/// assert_eq!(european.evaluate(&path), 15.0);
///
/// let asian = PathPayoff::new(OptionType::Call, OptionStyle::Asian, 105.0).unwrap();
/// assert_eq!(asian.evaluate(&path), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPayoff {
    option_type: OptionType,
    averaging: bool,
    strike: f64,
}

impl PathPayoff {
    /// Creates the payoff.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` for American style, which needs
    /// exercise decisions a forward simulation cannot make.
    pub fn new(
        option_type: OptionType,
        style: OptionStyle,
        strike: f64,
    ) -> Result<Self, PricingError> {
        let averaging = match style {
            OptionStyle::European => false,
            OptionStyle::Asian => true,
            OptionStyle::American => {
                return Err(PricingError::InvalidRequest(
                    "path simulation cannot price American options".to_string(),
                ))
            }
        };
        Ok(Self {
            option_type,
            averaging,
            strike,
        })
    }

    /// Returns whether the payoff depends on the path average.
    #[inline]
    pub fn is_averaging(&self) -> bool {
        self.averaging
    }

    /// Undiscounted payoff on `path`; an empty path pays nothing.
    #[inline]
    pub fn evaluate(&self, path: &[f64]) -> f64 {
        let underlying = if self.averaging {
            if path.is_empty() {
                return 0.0;
            }
            path.iter().sum::<f64>() / path.len() as f64
        } else {
            match path.last() {
                Some(&terminal) => terminal,
                None => return 0.0,
            }
        };
        self.option_type.intrinsic(underlying, self.strike)
    }
}
