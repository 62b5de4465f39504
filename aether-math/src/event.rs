//! Space-time events and the relativistic interval between them.
//!
//! An `Event` is a point in Minkowski space: meters on x/y/z, seconds on t.
//! A `Grid` is the corresponding integer lattice index. The `Interval`
//! between two events decomposes into a timelike or spacelike separation
//! depending on the sign of the quadratic form `c²Δt² − Δl²`.

use serde::{Deserialize, Serialize};

use crate::consts::C;

/// A point in continuous space-time: (x, y, z) in meters, t in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl Event {
    pub fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    /// The origin event (0, 0, 0, 0).
    pub fn origin() -> Self {
        Self::default()
    }
}

/// Integer lattice indices (gx, gy, gz, gt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Grid {
    pub gx: i64,
    pub gy: i64,
    pub gz: i64,
    pub gt: i64,
}

impl Grid {
    pub fn new(gx: i64, gy: i64, gz: i64, gt: i64) -> Self {
        Self { gx, gy, gz, gt }
    }
}

/// Separation class of two events under the Minkowski metric.
///
/// The magnitude is `sqrt(|c²Δt² − Δl²|)` in meters; `Timelike` when the
/// events can be causally connected, `Spacelike` otherwise. A null (light-
/// like) interval is reported as `Timelike(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Separation {
    Timelike(f64),
    Spacelike(f64),
}

impl Separation {
    /// Real (timelike) component; exactly 0.0 for spacelike intervals.
    pub fn re(&self) -> f64 {
        match self {
            Separation::Timelike(m) => *m,
            Separation::Spacelike(_) => 0.0,
        }
    }

    /// Imaginary (spacelike) component; exactly 0.0 for timelike intervals.
    pub fn im(&self) -> f64 {
        match self {
            Separation::Timelike(_) => 0.0,
            Separation::Spacelike(m) => *m,
        }
    }
}

/// Per-axis deltas between two events, with interval helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub dt: f64,
}

impl Interval {
    /// Deltas from event `a` to event `b`.
    pub fn between(a: &Event, b: &Event) -> Self {
        Self {
            dx: b.x - a.x,
            dy: b.y - a.y,
            dz: b.z - a.z,
            dt: b.t - a.t,
        }
    }

    /// Squared spatial distance Δl² = Δx² + Δy² + Δz².
    pub fn spatial_sq(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy + self.dz * self.dz
    }

    /// Spatial distance Δr.
    pub fn spatial(&self) -> f64 {
        self.spatial_sq().sqrt()
    }

    /// Minkowski quadratic form s² = c²Δt² − Δl².
    pub fn s2(&self) -> f64 {
        C * C * self.dt * self.dt - self.spatial_sq()
    }

    /// Decompose into a timelike or spacelike separation magnitude.
    ///
    /// Exactly one component of the result is nonzero (a null interval is
    /// `Timelike(0.0)`).
    pub fn separation(&self) -> Separation {
        let s2 = self.s2();
        if s2 >= 0.0 {
            Separation::Timelike(s2.sqrt())
        } else {
            Separation::Spacelike((-s2).sqrt())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_deltas() {
        let a = Event::new(1.0, 2.0, 3.0, 0.0);
        let b = Event::new(4.0, 6.0, 3.0, 1e-8);
        let iv = Interval::between(&a, &b);
        assert_eq!(iv.dx, 3.0);
        assert_eq!(iv.dy, 4.0);
        assert_eq!(iv.dz, 0.0);
        assert!((iv.spatial() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_timelike_separation() {
        // 1 second apart, 1 meter apart: overwhelmingly timelike.
        let a = Event::origin();
        let b = Event::new(1.0, 0.0, 0.0, 1.0);
        let sep = Interval::between(&a, &b).separation();
        match sep {
            Separation::Timelike(m) => {
                assert!((m - (C * C - 1.0).sqrt()).abs() < 1e-3);
            }
            Separation::Spacelike(_) => panic!("expected timelike"),
        }
        assert_eq!(sep.im(), 0.0);
    }

    #[test]
    fn test_spacelike_separation() {
        // Simultaneous events 5 meters apart.
        let a = Event::origin();
        let b = Event::new(3.0, 4.0, 0.0, 0.0);
        let sep = Interval::between(&a, &b).separation();
        match sep {
            Separation::Spacelike(m) => assert!((m - 5.0).abs() < 1e-12),
            Separation::Timelike(_) => panic!("expected spacelike"),
        }
        assert_eq!(sep.re(), 0.0);
    }

    #[test]
    fn test_null_interval_is_timelike_zero() {
        // Light-like: Δr = c·Δt exactly.
        let a = Event::origin();
        let b = Event::new(C, 0.0, 0.0, 1.0);
        let sep = Interval::between(&a, &b).separation();
        match sep {
            Separation::Timelike(m) => assert!(m.abs() < 1e-3),
            Separation::Spacelike(_) => panic!("null interval must decompose as timelike"),
        }
    }

    #[test]
    fn test_exactly_one_component_nonzero() {
        let pairs = [
            (Event::origin(), Event::new(0.5, 0.5, 0.0, 1e-9)),
            (Event::origin(), Event::new(10.0, 0.0, 0.0, 1e-9)),
        ];
        for (a, b) in pairs {
            let sep = Interval::between(&a, &b).separation();
            let zeros = [sep.re(), sep.im()].iter().filter(|&&v| v == 0.0).count();
            assert_eq!(zeros, 1, "exactly one of re/im must be exactly zero");
        }
    }
}
