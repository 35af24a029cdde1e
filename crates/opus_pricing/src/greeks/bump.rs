//! Shared bump-and-revalue routine.

use opus_core::types::{OptionParameters, PricingError};

use super::{Greeks, GreeksConfig};

/// How theta is differenced in expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ThetaScheme {
    /// `(V(T - h) - V(T)) / h`
    Backward,
    /// `(V(T - h) - V(T + h)) / 2h`
    Central,
}

/// Absolute bump sizes at one parameter point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BumpSizes {
    pub spot: f64,
    pub vol: f64,
    pub rate: f64,
    pub time: f64,
}

impl BumpSizes {
    pub(crate) fn new(config: &GreeksConfig, params: &OptionParameters) -> Self {
        Self {
            spot: config.spot_bump(params.spot()),
            vol: config.vol_bump(params.volatility()),
            rate: config.rate_bump(),
            time: config.time_bump(params.expiry()),
        }
    }

    /// Widens the spot bump to at least `width`, never beyond half the spot.
    pub(crate) fn widen_spot(self, width: f64, spot: f64) -> Self {
        Self {
            spot: self.spot.max(width).min(0.5 * spot),
            ..self
        }
    }
}

/// First difference from revaluations at `x + h` and `x - h`.
///
/// When one side has no valid model (`InvalidParameters`, e.g. a lattice
/// probability pushed outside (0, 1) by the bump) the one-sided difference
/// against `base` on the other side is used. Fails only if both sides fail
/// or an error of any other kind occurs.
fn first_difference(
    base: f64,
    h: f64,
    up: Result<f64, PricingError>,
    down: Result<f64, PricingError>,
) -> Result<f64, PricingError> {
    match (up, down) {
        (Ok(up), Ok(down)) => Ok((up - down) / (2.0 * h)),
        (Ok(up), Err(e)) if e.is_invalid_parameters() => Ok((up - base) / h),
        (Err(e), Ok(down)) if e.is_invalid_parameters() => Ok((base - down) / h),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Computes Greeks by revaluing at bumped parameters.
///
/// `base_price` must be `revalue(params)`. Delta, gamma, vega and rho use
/// central differences; theta follows `theta`. The closure is called with
/// revalidated copies of `params` only.
///
/// A revaluation failing with `InvalidParameters` on one side of a vega,
/// rho or theta difference falls back to the one-sided difference on the
/// other side, so a request whose own model is valid is never rejected
/// because of a bumped one. Spot bumps leave lattice probabilities
/// unchanged, so delta and gamma stay central; any error there propagates.
pub(crate) fn bump_and_revalue<F>(
    params: &OptionParameters,
    base_price: f64,
    bumps: &BumpSizes,
    theta: ThetaScheme,
    mut revalue: F,
) -> Result<Greeks, PricingError>
where
    F: FnMut(&OptionParameters) -> Result<f64, PricingError>,
{
    let spot = params.spot();
    let h_s = bumps.spot;
    let up = revalue(&params.with_spot(spot + h_s)?)?;
    let down = revalue(&params.with_spot(spot - h_s)?)?;
    let delta = (up - down) / (2.0 * h_s);
    let gamma = (up - 2.0 * base_price + down) / (h_s * h_s);

    let vol = params.volatility();
    let h_v = bumps.vol;
    let vega = first_difference(
        base_price,
        h_v,
        revalue(&params.with_volatility(vol + h_v)?),
        revalue(&params.with_volatility(vol - h_v)?),
    )?;

    let rate = params.rate();
    let h_r = bumps.rate;
    let rho = first_difference(
        base_price,
        h_r,
        revalue(&params.with_rate(rate + h_r)?),
        revalue(&params.with_rate(rate - h_r)?),
    )?;

    // -dV/dT: the shorter expiry plays the "up" side
    let expiry = params.expiry();
    let h_t = bumps.time;
    let shorter = revalue(&params.with_expiry(expiry - h_t)?);
    let theta = match (theta, shorter) {
        (ThetaScheme::Backward, Ok(shorter)) => (shorter - base_price) / h_t,
        (ThetaScheme::Backward, Err(e)) if e.is_invalid_parameters() => {
            let longer = revalue(&params.with_expiry(expiry + h_t)?)?;
            (base_price - longer) / h_t
        }
        (ThetaScheme::Backward, Err(e)) => return Err(e),
        (ThetaScheme::Central, shorter) => first_difference(
            base_price,
            h_t,
            shorter,
            revalue(&params.with_expiry(expiry + h_t)?),
        )?,
    };

    Ok(Greeks {
        delta,
        gamma,
        theta,
        vega,
        rho,
    })
}
