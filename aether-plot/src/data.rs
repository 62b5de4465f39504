//! The plot-data snapshot: parallel attribute arrays plus metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use aether_math::Grid;
use aether_space::{Cell, Space};

use crate::scale::{self, ScaleInfo};

/// Per-attribute metadata. `min`/`max` describe the arrays as shipped
/// (after rescaling); dividing by `coeff` restores raw physical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrMeta {
    /// Physical dimension label, e.g. "m", "s", "rad"; empty when
    /// dimensionless or a grid index.
    pub dim: String,
    /// SI prefix applied for display, e.g. "µ"; empty for coefficient 1.
    pub unit: String,
    /// Multiplicative rescaling coefficient applied to the data.
    pub coeff: f64,
    pub min: f64,
    pub max: f64,
}

/// Snapshot of the lattice flattened into parallel per-cell arrays, one
/// entry per cell in deterministic grid order. Holds no references into
/// the lattice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotData {
    pub meta: BTreeMap<String, AttrMeta>,
    pub data: BTreeMap<String, Vec<f64>>,
}

type Extract = fn(&Grid, &Cell) -> f64;

/// Attribute table: key, dimension label, rescaled-for-display flag,
/// extractor. Grid indices ship raw so the display layer can slice on
/// them exactly.
const COLUMNS: [(&str, &str, bool, Extract); 17] = [
    ("gx", "", false, |g, _| g.gx as f64),
    ("gy", "", false, |g, _| g.gy as f64),
    ("gz", "", false, |g, _| g.gz as f64),
    ("gt", "", false, |g, _| g.gt as f64),
    ("x", "m", true, |_, c| c.pos.x),
    ("y", "m", true, |_, c| c.pos.y),
    ("z", "m", true, |_, c| c.pos.z),
    ("t", "s", true, |_, c| c.pos.t),
    ("reDs", "m", true, |_, c| c.re_ds),
    ("imDs", "m", true, |_, c| c.im_ds),
    ("abDs", "m", true, |_, c| c.ab_ds()),
    ("phi", "rad", true, |_, c| c.phi),
    ("phs", "rad", true, |_, c| c.phs),
    ("reAmp", "", true, |_, c| c.amp.re),
    ("imAmp", "", true, |_, c| c.amp.im),
    ("abAmp", "", true, |_, c| c.amp.norm()),
    ("prob", "", true, |_, c| c.prob()),
];

impl PlotData {
    /// Flatten the active collection of `space` and run the display
    /// rescaling pass over every physical attribute.
    pub fn from_space(space: &Space) -> Self {
        let rows = space.cell_count();
        let mut columns: Vec<Vec<f64>> =
            COLUMNS.iter().map(|_| Vec::with_capacity(rows)).collect();

        for (grid, cell) in space.cells() {
            for (slot, (_, _, _, extract)) in columns.iter_mut().zip(COLUMNS.iter()) {
                slot.push(extract(grid, cell));
            }
        }

        let mut meta = BTreeMap::new();
        let mut data = BTreeMap::new();
        for ((key, dim, rescaled, _), mut values) in COLUMNS.into_iter().zip(columns) {
            let info = if rescaled {
                scale::rescale(key, &mut values)
            } else {
                ScaleInfo::IDENTITY
            };
            let (min, max) = min_max(&values);
            meta.insert(
                key.to_string(),
                AttrMeta {
                    dim: dim.to_string(),
                    unit: info.unit.to_string(),
                    coeff: info.coeff,
                    min,
                    max,
                },
            );
            data.insert(key.to_string(), values);
        }

        info!(
            space = %space.name(),
            rows,
            attrs = COLUMNS.len(),
            "built plot data export"
        );
        Self { meta, data }
    }

    /// Number of cells (rows) in the export.
    pub fn len(&self) -> usize {
        self.data.values().next().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn attr(&self, key: &str) -> Option<&[f64]> {
        self.data.get(key).map(Vec::as_slice)
    }
}

/// Min/max over finite entries; (0, 0) when there are none.
fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}
