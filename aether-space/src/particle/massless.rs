//! Massless (light-like) particle: propagates at exactly c.

use nalgebra::Vector3;

use aether_math::consts::{C, EV_J, H};
use aether_math::{Event, Interval};

use super::Particle;

/// A massless point source, parameterized by total energy.
///
/// Wavefronts are radial and isotropic: the phase depends only on the
/// spatial distance from the source event, not on direction.
#[derive(Debug, Clone)]
pub struct Massless {
    name: String,
    pos: Event,
    energy_ev: f64,
}

impl Massless {
    /// Create with a default energy of 1 eV.
    pub fn new(name: impl Into<String>, pos: Event) -> Self {
        Self {
            name: name.into(),
            pos,
            energy_ev: 1.0,
        }
    }

    pub fn with_energy(name: impl Into<String>, pos: Event, energy_ev: f64) -> Self {
        Self {
            name: name.into(),
            pos,
            energy_ev,
        }
    }

    pub fn set_energy_ev(&mut self, energy_ev: f64) {
        self.energy_ev = energy_ev;
    }

    /// Set the energy from a wavelength in meters: E = h·c/λ.
    pub fn set_lambda(&mut self, lambda: f64) {
        self.energy_ev = H * C / lambda / EV_J;
    }

    pub fn set_position(&mut self, pos: Event) {
        self.pos = pos;
    }
}

impl Particle for Massless {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "MassLess"
    }

    fn position(&self) -> Event {
        self.pos
    }

    fn energy_ev(&self) -> f64 {
        self.energy_ev
    }

    fn wave_vector(&self) -> Vector3<f64> {
        // Radial source: no preferred propagation direction.
        Vector3::zeros()
    }

    /// φ = ω·(Δt − Δr/c), the retarded phase of a radial wavefront.
    fn phase(&self, interval: &Interval) -> f64 {
        let retarded_dt = interval.dt - interval.spatial() / C;
        self.angular_frequency() * retarded_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lambda_roundtrip() {
        let mut p = Massless::new("p1", Event::origin());
        p.set_lambda(0.5);
        assert!((p.wavelength() - 0.5).abs() < 1e-12);
        // 0.5 m photon is ~2.48 µeV.
        assert!((p.energy_ev() - 2.48e-6).abs() < 1e-8);
    }

    #[test]
    fn test_phase_vanishes_on_light_cone() {
        let mut p = Massless::new("p", Event::origin());
        p.set_lambda(0.5);
        // A point one light-second away, one second later.
        let iv = Interval {
            dx: C,
            dy: 0.0,
            dz: 0.0,
            dt: 1.0,
        };
        assert!(p.phase(&iv).abs() < 1e-5);
    }

    #[test]
    fn test_phase_isotropic_in_direction() {
        let mut p = Massless::new("p", Event::origin());
        p.set_lambda(0.6);
        let east = Interval {
            dx: 2.0,
            dy: 0.0,
            dz: 0.0,
            dt: 1e-8,
        };
        let west = Interval {
            dx: -2.0,
            dy: 0.0,
            dz: 0.0,
            dt: 1e-8,
        };
        assert!((p.phase(&east) - p.phase(&west)).abs() < 1e-9);
    }

    #[test]
    fn test_one_period_along_time_axis() {
        let mut p = Massless::new("p", Event::origin());
        p.set_lambda(0.5);
        // At fixed spatial point, advancing by one period adds 2π.
        let period = 1.0 / p.frequency();
        let iv = Interval {
            dx: 0.0,
            dy: 0.0,
            dz: 0.0,
            dt: period,
        };
        assert!((p.phase(&iv) - std::f64::consts::TAU).abs() < 1e-9);
    }
}
