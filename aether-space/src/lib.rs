//! Discrete Minkowski space-time lattice and wave-superposition engine.
//!
//! A [`Space`] owns a bounded 4D lattice of cells, the coordinate
//! transforms between continuous positions and integer grid indices, and a
//! registry of point-source particles. The superposition pass accumulates
//! each particle's phase and distance-attenuated complex amplitude into
//! every cell; the result is consumed through the `aether-plot` export.

pub mod cell;
pub mod error;
pub mod particle;
pub mod shape;
pub mod space;
pub mod superpose;

pub use cell::Cell;
pub use error::SpaceError;
pub use particle::{Massive, Massless, Particle};
pub use shape::{Axis, Shape};
pub use space::{CollectionKind, Space};
