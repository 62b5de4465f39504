pub mod consts;
pub mod event;
pub mod info;
pub mod physics;

pub use event::{Event, Grid, Interval, Separation};
pub use physics::{lorentz_factor, PhysicsError};
