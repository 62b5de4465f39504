//! Plot-data export for the space-time lattice.
//!
//! Flattens the active cell collection into parallel per-attribute arrays
//! plus per-attribute metadata (dimension label, SI prefix, rescaling
//! coefficient, observed min/max). This snapshot is the sole interface the
//! display layer consumes; it holds no references into the lattice.

pub mod data;
pub mod scale;

pub use data::{AttrMeta, PlotData};
pub use scale::{prefix_for_range, rescale, ScaleInfo};
