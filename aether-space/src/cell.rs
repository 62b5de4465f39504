//! Lattice cells and the composite cell-id codec.
//!
//! A cell's identity is the string `<name>#<gx>#<gy>#<gz>#<gt>` where
//! `name` is the owning space's name. Position and the interval-from-origin
//! decomposition are fixed at creation; only the superposition accumulator
//! mutates afterwards, and only additively.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use aether_math::{Event, Grid, Interval};

use crate::error::SpaceError;

/// One space-time lattice point with its accumulated wave state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Physical position, derived from grid indices at creation.
    pub pos: Event,
    /// Timelike interval-from-origin magnitude; 0.0 for spacelike cells.
    pub re_ds: f64,
    /// Spacelike interval-from-origin magnitude; 0.0 for timelike cells.
    pub im_ds: f64,
    /// Accumulated phase over all applied particles [rad].
    pub phi: f64,
    /// `phi` modulo 2π, kept in `[0, 2π)`.
    pub phs: f64,
    /// Accumulated complex amplitude over all applied particles.
    pub amp: Complex64,
    /// Open-ended cell-local options, passed through at creation.
    pub opt: Map<String, Value>,
}

impl Cell {
    /// Create a cell at `pos` with zeroed accumulators. The interval from
    /// the origin event is decomposed once here and never recomputed.
    pub fn at(pos: Event, opt: Map<String, Value>) -> Self {
        let sep = Interval::between(&Event::origin(), &pos).separation();
        Self {
            pos,
            re_ds: sep.re(),
            im_ds: sep.im(),
            phi: 0.0,
            phs: 0.0,
            amp: Complex64::new(0.0, 0.0),
            opt,
        }
    }

    /// Add one particle's contribution. Strictly additive: calling twice
    /// for the same particle double-counts it.
    pub fn accumulate(&mut self, phase: f64, amp: Complex64) {
        self.phi += phase;
        self.phs = self.phi.rem_euclid(std::f64::consts::TAU);
        // rem_euclid of a tiny negative phase can round up to exactly 2π.
        if self.phs >= std::f64::consts::TAU {
            self.phs = 0.0;
        }
        self.amp += amp;
    }

    /// Magnitude of the interval-from-origin decomposition.
    pub fn ab_ds(&self) -> f64 {
        // Exactly one of re_ds/im_ds is nonzero.
        self.re_ds + self.im_ds
    }

    /// Probability density |amp|².
    pub fn prob(&self) -> f64 {
        self.amp.norm_sqr()
    }
}

/// Compose the canonical cell id for `grid` in the space named `name`.
pub fn id_from_grid(name: &str, grid: &Grid) -> String {
    format!("{name}#{}#{}#{}#{}", grid.gx, grid.gy, grid.gz, grid.gt)
}

/// Parse a cell id back into grid indices, checking it belongs to `name`.
///
/// Fails with [`SpaceError::MalformedId`] unless the id splits into exactly
/// five `#`-delimited tokens with four parseable indices.
pub fn grid_from_id(name: &str, id: &str) -> Result<Grid, SpaceError> {
    let malformed = || SpaceError::MalformedId { id: id.to_string() };

    let tokens: Vec<&str> = id.split('#').collect();
    if tokens.len() != 5 || tokens[0] != name {
        return Err(malformed());
    }

    let mut idx = [0i64; 4];
    for (slot, token) in idx.iter_mut().zip(&tokens[1..]) {
        *slot = token.parse().map_err(|_| malformed())?;
    }
    Ok(Grid::new(idx[0], idx[1], idx[2], idx[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let grid = Grid::new(-3, 0, 12, 7);
        let id = id_from_grid("T", &grid);
        assert_eq!(id, "T#-3#0#12#7");
        assert_eq!(grid_from_id("T", &id).unwrap(), grid);
    }

    #[test]
    fn test_malformed_id_too_few_tokens() {
        let err = grid_from_id("T", "T#1#2#3").unwrap_err();
        assert!(matches!(err, SpaceError::MalformedId { .. }));
    }

    #[test]
    fn test_malformed_id_bad_index() {
        assert!(grid_from_id("T", "T#1#2#x#4").is_err());
        assert!(grid_from_id("T", "T#1#2#3#4#5").is_err());
    }

    #[test]
    fn test_id_from_wrong_space_rejected() {
        assert!(grid_from_id("T", "U#1#2#3#4").is_err());
    }

    #[test]
    fn test_accumulate_is_additive() {
        let mut cell = Cell::at(Event::origin(), Map::new());
        cell.accumulate(3.0, Complex64::new(1.0, 0.5));
        cell.accumulate(4.5, Complex64::new(-0.25, 0.25));
        assert!((cell.phi - 7.5).abs() < 1e-12);
        assert!((cell.phs - (7.5 - std::f64::consts::TAU)).abs() < 1e-12);
        assert!((cell.amp.re - 0.75).abs() < 1e-12);
        assert!((cell.amp.im - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_phs_stays_in_unit_circle() {
        let mut cell = Cell::at(Event::origin(), Map::new());
        cell.accumulate(-11.0, Complex64::new(0.0, 0.0));
        assert!(cell.phs >= 0.0 && cell.phs < std::f64::consts::TAU);
    }

    #[test]
    fn test_interval_fixed_at_creation() {
        // Simultaneous with the origin: purely spacelike.
        let cell = Cell::at(Event::new(3.0, 4.0, 0.0, 0.0), Map::new());
        assert_eq!(cell.re_ds, 0.0);
        assert!((cell.im_ds - 5.0).abs() < 1e-12);
        assert!((cell.ab_ds() - 5.0).abs() < 1e-12);
    }
}
