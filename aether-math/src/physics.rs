//! Relativistic kinematics guards.
//!
//! Division-by-zero-like situations (a particle configured at or beyond
//! the propagation limit) are expected inputs from interactive callers, so
//! they surface as a structured error here and degrade to a logged sentinel
//! at the infallible trait boundaries above.

use thiserror::Error;

use crate::consts::C2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Speed at or above the propagation limit: γ is undefined.
    #[error("speed {speed} m/s is at or above the speed of light")]
    Superluminal { speed: f64 },
}

/// Lorentz factor γ = 1 / sqrt(1 − v²/c²) for squared speed `v2` [m²/s²].
pub fn lorentz_factor(v2: f64) -> Result<f64, PhysicsError> {
    let ratio = v2 / C2;
    if ratio >= 1.0 {
        return Err(PhysicsError::Superluminal { speed: v2.sqrt() });
    }
    Ok(1.0 / (1.0 - ratio).sqrt())
}
