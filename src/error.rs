use std::path::PathBuf;

use thiserror::Error;

/// Result type for district extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the extraction pipeline. None of these are recovered
/// internally; every failure aborts the run and surfaces to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Source file missing, unreadable, or not a GeoJSON FeatureCollection.
    #[error("could not load {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// The bare city feature is absent or ambiguous in the source collection.
    #[error("expected exactly one feature named {city:?}, found {count}")]
    Lookup { city: String, count: usize },

    /// A feature's "iso" property is missing or not parseable as an integer.
    #[error("feature {feature:?} has no integer \"iso\" property (got {value})")]
    Value { feature: String, value: String },

    /// Destination file could not be written.
    #[error("could not write {path:?}: {reason}")]
    Write { path: PathBuf, reason: String },
}
