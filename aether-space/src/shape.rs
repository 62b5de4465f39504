//! Lattice bounds: a half-open index range `[min, max)` per axis.

use serde::{Deserialize, Serialize};

use aether_math::Grid;

use crate::error::SpaceError;

/// One of the four lattice axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    T,
}

/// Index bounds of the lattice: `[min, max)` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
    pub z_min: i64,
    pub z_max: i64,
    pub t_min: i64,
    pub t_max: i64,
}

impl Shape {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_min: i64,
        x_max: i64,
        y_min: i64,
        y_max: i64,
        z_min: i64,
        z_max: i64,
        t_min: i64,
        t_max: i64,
    ) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
            t_min,
            t_max,
        }
    }

    /// Every axis must span at least one index.
    pub fn validate(&self) -> Result<(), SpaceError> {
        for axis in [Axis::X, Axis::Y, Axis::Z, Axis::T] {
            if self.max(axis) <= self.min(axis) {
                return Err(SpaceError::InvalidShape {
                    reason: format!(
                        "{axis:?} bounds [{}, {}) are empty or inverted",
                        self.min(axis),
                        self.max(axis)
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn min(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x_min,
            Axis::Y => self.y_min,
            Axis::Z => self.z_min,
            Axis::T => self.t_min,
        }
    }

    pub fn max(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x_max,
            Axis::Y => self.y_max,
            Axis::Z => self.z_max,
            Axis::T => self.t_max,
        }
    }

    /// Number of indices along `axis`.
    pub fn extent(&self, axis: Axis) -> i64 {
        (self.max(axis) - self.min(axis)).max(0)
    }

    /// Smallest bound across all four axes (GUI slider span).
    pub fn min_bound(&self) -> i64 {
        [Axis::X, Axis::Y, Axis::Z, Axis::T]
            .into_iter()
            .map(|a| self.min(a))
            .min()
            .unwrap_or(0)
    }

    /// Largest bound across all four axes (GUI slider span).
    pub fn max_bound(&self) -> i64 {
        [Axis::X, Axis::Y, Axis::Z, Axis::T]
            .into_iter()
            .map(|a| self.max(a))
            .max()
            .unwrap_or(0)
    }

    /// Total number of lattice points: the product of the four extents.
    pub fn cell_count(&self) -> usize {
        [Axis::X, Axis::Y, Axis::Z, Axis::T]
            .into_iter()
            .map(|a| self.extent(a) as usize)
            .product()
    }

    pub fn contains(&self, grid: &Grid) -> bool {
        (self.x_min..self.x_max).contains(&grid.gx)
            && (self.y_min..self.y_max).contains(&grid.gy)
            && (self.z_min..self.z_max).contains(&grid.gz)
            && (self.t_min..self.t_max).contains(&grid.gt)
    }

    /// Iterate every lattice point, x-major and t-minor.
    pub fn grids(&self) -> impl Iterator<Item = Grid> {
        let s = *self;
        (s.x_min..s.x_max).flat_map(move |gx| {
            (s.y_min..s.y_max).flat_map(move |gy| {
                (s.z_min..s.z_max).flat_map(move |gz| {
                    (s.t_min..s.t_max).map(move |gt| Grid::new(gx, gy, gz, gt))
                })
            })
        })
    }
}
