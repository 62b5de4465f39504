//! The bounded 4D space-time lattice.
//!
//! A `Space` maps between continuous positions and integer grid indices
//! through two scale factors: `mpg` (meters per grid step, spatial axes)
//! and `spg` (seconds per grid step, time axis), related by `spg = mpg / c`
//! unless explicitly overridden. Cells live in one of two named
//! collections, `base` and `blur`; all read/write operations target the
//! collection selected by [`CollectionKind`].
//!
//! Configuring a space eagerly materializes one cell per lattice point, so
//! memory is proportional to the product of the four axis extents — the
//! reference 60×80×1×90 grid allocates 432,000 cells up front.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use aether_math::consts::C;
use aether_math::{Event, Grid};

use crate::cell::{self, Cell};
use crate::error::SpaceError;
use crate::particle::Particle;
use crate::shape::{Axis, Shape};

/// Cells keyed by grid index; BTreeMap keeps iteration deterministic.
pub type CellMap = BTreeMap<Grid, Cell>;

/// Which named cell collection operations target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollectionKind {
    #[default]
    Base,
    Blur,
}

pub struct Space {
    pub(crate) name: String,
    pub(crate) shape: Shape,
    /// Meters per grid step on x/y/z.
    pub(crate) mpg: f64,
    /// Seconds per grid step on t.
    pub(crate) spg: f64,
    pub(crate) base: CellMap,
    pub(crate) blur: CellMap,
    pub(crate) active: CollectionKind,
    /// Insertion-ordered registry; names unique by convention.
    pub(crate) particles: Vec<Box<dyn Particle>>,
}

impl Space {
    /// Create an unconfigured space. Default scales are 1 m per step and
    /// the matching light-consistent time step.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: Shape::default(),
            mpg: 1.0,
            spg: 1.0 / C,
            base: CellMap::new(),
            blur: CellMap::new(),
            active: CollectionKind::Base,
            particles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn mpg(&self) -> f64 {
        self.mpg
    }

    pub fn spg(&self) -> f64 {
        self.spg
    }

    pub fn active_kind(&self) -> CollectionKind {
        self.active
    }

    pub fn set_active(&mut self, kind: CollectionKind) {
        debug!(space = %self.name, ?kind, "switching active collection");
        self.active = kind;
    }

    pub(crate) fn active(&self) -> &CellMap {
        match self.active {
            CollectionKind::Base => &self.base,
            CollectionKind::Blur => &self.blur,
        }
    }

    pub(crate) fn active_mut(&mut self) -> &mut CellMap {
        match self.active {
            CollectionKind::Base => &mut self.base,
            CollectionKind::Blur => &mut self.blur,
        }
    }

    // ─── Lifecycle ──────────────────────────────────

    /// Reset the space and eagerly materialize one cell per lattice point.
    ///
    /// `spg` defaults to `mpg / c`. Validation happens before any state is
    /// touched: a failed configure leaves the prior lattice intact.
    pub fn configure(
        &mut self,
        shape: Shape,
        mpg: f64,
        spg: Option<f64>,
    ) -> Result<(), SpaceError> {
        shape.validate()?;
        if !mpg.is_finite() || mpg <= 0.0 {
            return Err(SpaceError::InvalidScale {
                reason: format!("mpg = {mpg} must be a positive length"),
            });
        }
        if let Some(s) = spg {
            if !s.is_finite() || s <= 0.0 {
                return Err(SpaceError::InvalidScale {
                    reason: format!("spg = {s} must be a positive duration"),
                });
            }
        }

        self.base.clear();
        self.blur.clear();
        self.particles.clear();
        self.active = CollectionKind::Base;
        self.shape = shape;
        self.mpg = mpg;
        self.spg = spg.unwrap_or(mpg / C);

        info!(
            space = %self.name,
            cells = shape.cell_count(),
            mpg = self.mpg,
            spg = self.spg,
            "materializing lattice"
        );
        for grid in shape.grids() {
            self.create_cell(grid, Map::new());
        }
        Ok(())
    }

    // ─── Coordinate transforms ──────────────────────

    /// Nearest grid index for a continuous position.
    pub fn grid_from_position(&self, pos: &Event) -> Grid {
        Grid::new(
            (pos.x / self.mpg).round() as i64,
            (pos.y / self.mpg).round() as i64,
            (pos.z / self.mpg).round() as i64,
            (pos.t / self.spg).round() as i64,
        )
    }

    /// Continuous position of a grid index: `pos = grid * scale`.
    pub fn position_from_grid(&self, grid: &Grid) -> Event {
        Event::new(
            grid.gx as f64 * self.mpg,
            grid.gy as f64 * self.mpg,
            grid.gz as f64 * self.mpg,
            grid.gt as f64 * self.spg,
        )
    }

    pub fn id_from_grid(&self, grid: &Grid) -> String {
        cell::id_from_grid(&self.name, grid)
    }

    pub fn id_from_position(&self, pos: &Event) -> String {
        self.id_from_grid(&self.grid_from_position(pos))
    }

    pub fn grid_from_id(&self, id: &str) -> Result<Grid, SpaceError> {
        cell::grid_from_id(&self.name, id)
    }

    pub fn shape_min(&self, axis: Axis) -> i64 {
        self.shape.min(axis)
    }

    pub fn shape_max(&self, axis: Axis) -> i64 {
        self.shape.max(axis)
    }

    // ─── Cell access ────────────────────────────────

    /// Create (or overwrite) the cell at `grid` in the active collection.
    pub fn create_cell(&mut self, grid: Grid, opt: Map<String, Value>) -> &mut Cell {
        let cell = Cell::at(self.position_from_grid(&grid), opt);
        match self.active_mut().entry(grid) {
            Entry::Occupied(mut slot) => {
                slot.insert(cell);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(cell),
        }
    }

    /// Direct lookup: `CellNotFound` when the id is absent.
    pub fn lookup_cell(&self, id: &str) -> Result<&Cell, SpaceError> {
        let grid = self.grid_from_id(id)?;
        self.active()
            .get(&grid)
            .ok_or_else(|| SpaceError::CellNotFound { id: id.to_string() })
    }

    /// Get-or-create: a default cell is materialized for ids outside the
    /// originally configured range. Errors only on a malformed id.
    pub fn cell(&mut self, id: &str) -> Result<&mut Cell, SpaceError> {
        let grid = self.grid_from_id(id)?;
        let pos = self.position_from_grid(&grid);
        Ok(self
            .active_mut()
            .entry(grid)
            .or_insert_with(|| Cell::at(pos, Map::new())))
    }

    /// Remove and return a cell; `CellNotFound` when absent.
    pub fn remove_cell(&mut self, id: &str) -> Result<Cell, SpaceError> {
        let grid = self.grid_from_id(id)?;
        self.active_mut()
            .remove(&grid)
            .ok_or_else(|| SpaceError::CellNotFound { id: id.to_string() })
    }

    /// Cells of the active collection in deterministic (grid) order.
    pub fn cells(&self) -> impl Iterator<Item = (&Grid, &Cell)> {
        self.active().iter()
    }

    pub fn cell_count(&self) -> usize {
        self.active().len()
    }

    // ─── Particle registry ──────────────────────────

    /// Register a particle. Re-registering a name overwrites in place
    /// (last write wins); registration order is otherwise preserved.
    pub fn add_particle(&mut self, particle: Box<dyn Particle>) {
        debug!(space = %self.name, particle = %particle.name(), "registering particle");
        if let Some(slot) = self
            .particles
            .iter_mut()
            .find(|p| p.name() == particle.name())
        {
            *slot = particle;
        } else {
            self.particles.push(particle);
        }
    }

    pub fn particles(&self) -> &[Box<dyn Particle>] {
        &self.particles
    }

    // ─── Extraction ─────────────────────────────────

    /// Human-readable dump of one cell.
    pub fn describe_cell(&self, id: &str) -> Result<String, SpaceError> {
        let cell = self.lookup_cell(id)?;
        Ok(format!(
            "cell {id}\n\
             pos      x={:e} m, y={:e} m, z={:e} m, t={:e} s\n\
             interval reDs={:e} m, imDs={:e} m\n\
             phase    phi={:e} rad, phs={:e} rad\n\
             amp      {:e} + {:e}i, prob={:e}",
            cell.pos.x,
            cell.pos.y,
            cell.pos.z,
            cell.pos.t,
            cell.re_ds,
            cell.im_ds,
            cell.phi,
            cell.phs,
            cell.amp.re,
            cell.amp.im,
            cell.prob(),
        ))
    }

    /// Pass-through export of the active collection's cell records.
    pub fn to_json(&self) -> Value {
        let records: Vec<Value> = self
            .cells()
            .map(|(grid, cell)| {
                json!({
                    "id": self.id_from_grid(grid),
                    "pos": cell.pos,
                    "val": {
                        "reDs": cell.re_ds,
                        "imDs": cell.im_ds,
                        "phi": cell.phi,
                        "phs": cell.phs,
                        "reAmp": cell.amp.re,
                        "imAmp": cell.amp.im,
                    },
                    "opt": cell.opt,
                })
            })
            .collect();
        Value::Array(records)
    }
}
