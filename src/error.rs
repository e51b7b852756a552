//! Defines [`FixtureError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FixtureError {
    /// The requested entity kind is not one of the fixture kinds.
    #[error("Unknown entity type: {0}")]
    UnrecognizedEntityKind(String),
}

/// Crate-specific result type.
pub type FixtureResult<T> = std::result::Result<T, FixtureError>;
