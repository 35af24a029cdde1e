//! Continuous-compounding discount factors.

/// Discount factor for a flat continuously-compounded rate.
///
/// DF = exp(-r·t)
///
/// # Examples
/// ```
/// use opus_core::math::discount;
///
/// assert_eq!(discount(0.05, 0.0), 1.0);
/// assert!((discount(0.05, 1.0) - 0.951229424500714).abs() < 1e-15);
/// ```
#[inline]
pub fn discount(rate: f64, time: f64) -> f64 {
    (-rate * time).exp()
}
