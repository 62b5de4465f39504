//! Wave superposition over the lattice.
//!
//! Each pass walks every cell of the active collection, evaluates the
//! particle's phase across the interval from its source event to the cell,
//! and accumulates phase and a time-attenuated complex amplitude. The
//! accumulation is strictly additive across particles — superposition,
//! not replacement — and is applied exactly once per call: there is no
//! idempotence guarantee, so callers must not apply a particle twice.

use num_complex::Complex64;
use tracing::{debug, info};

use aether_math::Interval;

use crate::particle::Particle;
use crate::space::{CellMap, CollectionKind, Space};

/// Floor on the |Δt| attenuation denominator. Keeps the amplitude finite
/// at the particle's own event.
const ATTENUATION_FLOOR: f64 = 1e-9;

/// Accumulate one particle's contribution into every cell of `cells`.
pub(crate) fn superpose_into(cells: &mut CellMap, particle: &dyn Particle) {
    let source = particle.position();
    for cell in cells.values_mut() {
        let interval = Interval::between(&source, &cell.pos);
        let phase = particle.phase(&interval);
        let attenuation = interval.dt.abs().max(ATTENUATION_FLOOR);
        cell.accumulate(phase, Complex64::from_polar(1.0 / attenuation, phase));
    }
}

impl Space {
    /// Superpose one particle's wave into the active collection.
    pub fn apply_particle(&mut self, particle: &dyn Particle) {
        debug!(
            space = %self.name,
            particle = %particle.name(),
            cells = self.cell_count(),
            "superposing particle"
        );
        let cells = match self.active {
            CollectionKind::Base => &mut self.base,
            CollectionKind::Blur => &mut self.blur,
        };
        superpose_into(cells, particle);
    }

    /// Superpose every registered particle, in registration order.
    ///
    /// Order affects logging only: the accumulated sum is commutative.
    pub fn apply_all_particles(&mut self) {
        info!(
            space = %self.name,
            particles = self.particles.len(),
            "superposing all registered particles"
        );
        let cells = match self.active {
            CollectionKind::Base => &mut self.base,
            CollectionKind::Blur => &mut self.blur,
        };
        for particle in &self.particles {
            debug!(particle = %particle.name(), "superposing");
            superpose_into(cells, particle.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Massless;
    use crate::shape::Shape;
    use aether_math::Event;

    fn beat_space() -> Space {
        let mut space = Space::new("T");
        space
            .configure(Shape::new(-2, 3, 0, 1, 0, 1, -2, 3), 0.05, None)
            .unwrap();
        space
    }

    fn photon(name: &str, x: f64, lambda: f64) -> Massless {
        let mut p = Massless::new(name, Event::new(x, 0.0, 0.0, 0.0));
        p.set_lambda(lambda);
        p
    }

    #[test]
    fn test_single_pass_populates_every_cell() {
        let mut space = beat_space();
        space.apply_particle(&photon("p1", -0.1, 0.5));
        for (_, cell) in space.cells() {
            assert!(cell.phi.is_finite());
            assert!(cell.phs >= 0.0 && cell.phs < std::f64::consts::TAU);
            assert!(cell.amp.norm() > 0.0);
        }
    }

    #[test]
    fn test_double_application_double_counts() {
        let mut once = beat_space();
        let mut twice = beat_space();
        let p = photon("p1", -0.1, 0.5);
        once.apply_particle(&p);
        twice.apply_particle(&p);
        twice.apply_particle(&p);
        for ((_, a), (_, b)) in once.cells().zip(twice.cells()) {
            assert!((b.phi - 2.0 * a.phi).abs() < 1e-9);
        }
    }

    #[test]
    fn test_attenuation_floor_at_source_event() {
        let mut space = Space::new("T");
        space
            .configure(Shape::new(0, 1, 0, 1, 0, 1, 0, 1), 1.0, None)
            .unwrap();
        // Source sits exactly on the only cell: Δt = 0.
        space.apply_particle(&photon("p", 0.0, 0.5));
        let cell = space.lookup_cell("T#0#0#0#0").unwrap();
        assert!((cell.amp.norm() - 1.0 / ATTENUATION_FLOOR).abs() < 1e-3);
    }

    #[test]
    fn test_apply_all_matches_manual_order() {
        let mut registered = beat_space();
        registered.add_particle(Box::new(photon("p1", -0.1, 0.5)));
        registered.add_particle(Box::new(photon("p2", 0.1, 0.6)));
        registered.apply_all_particles();

        let mut manual = beat_space();
        manual.apply_particle(&photon("p1", -0.1, 0.5));
        manual.apply_particle(&photon("p2", 0.1, 0.6));

        for ((_, a), (_, b)) in registered.cells().zip(manual.cells()) {
            assert!((a.phi - b.phi).abs() < 1e-9);
            assert!((a.amp - b.amp).norm() < 1e-9);
        }
    }
}
