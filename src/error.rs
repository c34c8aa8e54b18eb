use thiserror::Error;

/// Convenience result type for fallible drill operations.
pub type DrillResult<T> = Result<T, DrillError>;

/// Error type shared across the crate.
///
/// Absence is never reported through this type; it is carried by
/// [`crate::optional::Optional`]. These variants cover the few places where something can
/// actually go wrong.
#[derive(Debug, Error)]
pub enum DrillError {
    /// A per-element projection failed. Only surfaced by
    /// [`crate::types::Sequence::map_and_collect_faults`].
    #[error("projection failed at element {index}: {message}")]
    Projection { index: usize, message: String },

    /// A caller-supplied JSON fixture could not be parsed.
    #[error("fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// The dish has no recorded country of origin.
    #[error("unknown country of origin for dish '{dish}'")]
    UnknownOrigin { dish: String },
}
