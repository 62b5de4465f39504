//! Point-source particle contract.
//!
//! The engine is polymorphic over this capability set and never inspects
//! the concrete kind: a particle exposes its source event, total energy,
//! wave vector, and the phase it contributes across a given interval.
//! Wave properties (frequency, wavelength, wave number, momentum) derive
//! from the total energy and are shared as default methods.

pub mod massive;
pub mod massless;

pub use massive::Massive;
pub use massless::Massless;

use nalgebra::Vector3;
use serde_json::{json, Value};

use aether_math::consts::{C, C2, EV_J, H};
use aether_math::{Event, Interval};

/// A point wave source in Minkowski space.
pub trait Particle {
    /// Unique name (uniqueness by convention, not enforced).
    fn name(&self) -> &str;

    /// Kind tag, e.g. `"MassLess"` or `"Massive"`.
    fn kind(&self) -> &'static str;

    /// Source event of the probability-density amplitude.
    fn position(&self) -> Event;

    /// Total energy in eV. May be NaN for degenerate configurations
    /// (e.g. superluminal velocity); the sentinel is logged at the point
    /// of computation.
    fn energy_ev(&self) -> f64;

    /// Spatial wave vector [rad/m]. Zero for isotropic radial sources.
    fn wave_vector(&self) -> Vector3<f64>;

    /// Phase contributed across the interval from the source event to a
    /// target event [rad].
    fn phase(&self, interval: &Interval) -> f64;

    /// Total energy in joules.
    fn energy_j(&self) -> f64 {
        EV_J * self.energy_ev()
    }

    /// Mass-equivalent m = E/c² [kg].
    fn mass_kg(&self) -> f64 {
        self.energy_j() / C2
    }

    /// Absolute momentum p = E/c [kg·m/s].
    fn abs_momentum(&self) -> f64 {
        self.energy_j() / C
    }

    /// Frequency f = E/h [Hz].
    fn frequency(&self) -> f64 {
        self.energy_j() / H
    }

    /// Angular frequency ω = 2πf [rad/s].
    fn angular_frequency(&self) -> f64 {
        std::f64::consts::TAU * self.frequency()
    }

    /// Wavelength λ = c/f [m].
    fn wavelength(&self) -> f64 {
        C / self.frequency()
    }

    /// Wave number k = 2π/λ [rad/m].
    fn wave_number(&self) -> f64 {
        std::f64::consts::TAU / self.wavelength()
    }

    /// Printable property lines.
    fn describe(&self) -> Vec<String> {
        let pos = self.position();
        vec![
            format!("Particle '{}' is of type '{}'", self.name(), self.kind()),
            format!(
                "position x={:e} m, y={:e} m, z={:e} m, t={:e} s",
                pos.x, pos.y, pos.z, pos.t
            ),
            format!(
                "total energy {:e} eV  ({:e} J)",
                self.energy_ev(),
                self.energy_j()
            ),
            format!(
                "mass {:e} kg, abs momentum {:e} kg*m/s",
                self.mass_kg(),
                self.abs_momentum()
            ),
            format!(
                "frequency {:e} Hz, omega {:e} rad/s",
                self.frequency(),
                self.angular_frequency()
            ),
            format!(
                "wavelength {:e} m, wave number {:e} rad/m",
                self.wavelength(),
                self.wave_number()
            ),
        ]
    }

    /// Pass-through summary record.
    fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "type": self.kind(),
            "eV": self.energy_ev(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_wave_properties_chain() {
        // A 1 eV massless particle: every derived property must be
        // consistent with E = h·f and λ·f = c.
        let p = Massless::new("u", Event::origin());
        let f = p.frequency();
        assert!((p.energy_j() - H * f).abs() / p.energy_j() < 1e-12);
        assert!((p.wavelength() * f - C).abs() / C < 1e-12);
        assert!(
            (p.wave_number() - std::f64::consts::TAU / p.wavelength()).abs()
                / p.wave_number()
                < 1e-12
        );
    }
}
