//! Shrinkage curves for gradual fine-tuning.
//!
//! The retained fraction per epoch is pluggable: any monotonically
//! non-increasing curve with `f(1) = 1` and `f(total_epochs) = beta`
//! works. [PowerLaw] is the default shape.
use crate::error::Error;

/// Fraction of the ranked corpus retained at a given epoch.
///
/// Implementations must be non-increasing in `epoch`, return 1.0 for
/// epoch 1 and their configured floor for the final epoch.
pub trait ShrinkCurve {
    fn fraction(&self, epoch: usize, total_epochs: usize) -> f64;
}

/// Power-law interpolation between the full corpus and the `beta` floor:
///
/// ```text
/// t(e) = ((e-1) / (total_epochs-1))^eta
/// f(e) = 1 - (1 - beta) * t(e)^alpha
/// ```
///
/// `alpha` controls convexity, `eta` how aggressively the window shrinks
/// early versus late.
#[derive(Debug, Clone, Copy)]
pub struct PowerLaw {
    alpha: f64,
    beta: f64,
    eta: f64,
}

impl PowerLaw {
    pub fn new(alpha: f64, beta: f64, eta: f64) -> Result<Self, Error> {
        if !(beta > 0.0 && beta <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "beta must be in (0, 1], got {}",
                beta
            )));
        }
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "alpha must be a positive finite number, got {}",
                alpha
            )));
        }
        if !(eta.is_finite() && eta > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "eta must be a positive finite number, got {}",
                eta
            )));
        }
        Ok(Self { alpha, beta, eta })
    }
}

impl ShrinkCurve for PowerLaw {
    fn fraction(&self, epoch: usize, total_epochs: usize) -> f64 {
        // a single epoch trains on the full corpus; beta is unreachable
        if total_epochs == 1 {
            return 1.0;
        }
        let t = ((epoch - 1) as f64 / (total_epochs - 1) as f64).powf(self.eta);
        1.0 - (1.0 - self.beta) * t.powf(self.alpha)
    }
}
