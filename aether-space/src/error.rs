//! Error taxonomy for lattice operations.
//!
//! Id and lookup errors are local and recoverable (the caller can retry
//! with a corrected id). Configuration errors are fatal to the configure
//! call only and leave the prior lattice state intact.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpaceError {
    /// A cell id did not decompose into `name#gx#gy#gz#gt`.
    #[error("malformed cell id '{id}': expected <name>#<gx>#<gy>#<gz>#<gt>")]
    MalformedId { id: String },

    /// Direct (non-creating) lookup of an absent cell id.
    #[error("no cell with id '{id}'")]
    CellNotFound { id: String },

    /// Inverted or empty shape bounds.
    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },

    /// Zero or negative scale factor.
    #[error("invalid scale: {reason}")]
    InvalidScale { reason: String },
}
