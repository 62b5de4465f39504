//! Massive particle: rest mass plus a classical velocity vector.
//!
//! Relativistic quantities are exposed twice: `try_*` accessors return the
//! structured [`PhysicsError`] for superluminal configurations, while the
//! infallible [`Particle`] surface degrades to a logged NaN sentinel so
//! display and query code stays responsive for non-physical inputs.

use nalgebra::Vector3;
use tracing::warn;

use aether_math::consts::{C, EV_KG};
use aether_math::{lorentz_factor, Event, Interval, PhysicsError};

use super::Particle;

#[derive(Debug, Clone)]
pub struct Massive {
    name: String,
    pos: Event,
    /// Rest mass [eV/c²].
    rest_mass_ev: f64,
    /// Velocity [m/s].
    velocity: Vector3<f64>,
}

impl Massive {
    pub fn new(
        name: impl Into<String>,
        pos: Event,
        rest_mass_ev: f64,
        velocity: Vector3<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            pos,
            rest_mass_ev,
            velocity,
        }
    }

    pub fn rest_mass_ev(&self) -> f64 {
        self.rest_mass_ev
    }

    /// Set the rest mass from kilograms.
    pub fn set_mass_kg(&mut self, kg: f64) {
        self.rest_mass_ev = kg / EV_KG;
    }

    /// Set the velocity as a percentage of c per axis.
    pub fn set_perc_light_speed(&mut self, percent: Vector3<f64>) {
        self.velocity = percent / 100.0 * C;
    }

    pub fn set_position(&mut self, pos: Event) {
        self.pos = pos;
    }

    pub fn speed_sq(&self) -> f64 {
        self.velocity.norm_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// γ for the current velocity; `Superluminal` at or beyond c.
    pub fn try_lorentz_factor(&self) -> Result<f64, PhysicsError> {
        lorentz_factor(self.speed_sq())
    }

    /// Relativistic mass γ·m₀ [eV/c²].
    pub fn try_relativistic_mass_ev(&self) -> Result<f64, PhysicsError> {
        Ok(self.try_lorentz_factor()? * self.rest_mass_ev)
    }

    /// Relativistic total energy [eV].
    pub fn try_energy_ev(&self) -> Result<f64, PhysicsError> {
        // eV/c² rest mass times γ is directly the total energy in eV.
        self.try_relativistic_mass_ev()
    }
}

impl Particle for Massive {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "Massive"
    }

    fn position(&self) -> Event {
        self.pos
    }

    fn energy_ev(&self) -> f64 {
        self.try_energy_ev().unwrap_or_else(|err| {
            warn!(particle = %self.name, %err, "energy undefined, degrading to NaN");
            f64::NAN
        })
    }

    /// k̂ along the velocity with magnitude `wave_number`; zero at rest.
    fn wave_vector(&self) -> Vector3<f64> {
        let speed = self.speed();
        if speed == 0.0 {
            return Vector3::zeros();
        }
        self.velocity * (self.wave_number() / speed)
    }

    /// φ = ω·Δt − |k⃗·Δr⃗|. The absolute value keeps the wavefront
    /// symmetric about the source along the propagation axis.
    fn phase(&self, interval: &Interval) -> f64 {
        let dr = Vector3::new(interval.dx, interval.dy, interval.dz);
        self.angular_frequency() * interval.dt - self.wave_vector().dot(&dr).abs()
    }

    fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Particle '{}' is of type '{}'", self.name, self.kind()),
            format!("rest mass {:e} eV/c2", self.rest_mass_ev),
        ];
        match self.try_relativistic_mass_ev() {
            Ok(mr) => lines.push(format!("relativistic mass {mr:e} eV/c2")),
            Err(err) => lines.push(format!("relativistic mass undefined: {err}")),
        }
        lines.push(format!(
            "speed {:e} m/s ({:.3}% of c)",
            self.speed(),
            self.speed() / C * 100.0
        ));
        lines.push(format!(
            "frequency {:e} Hz, wavelength {:e} m",
            self.frequency(),
            self.wavelength()
        ));
        lines
    }
}
