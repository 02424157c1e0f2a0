use crate::location::LocationId;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when assembling or mutating a world.
///
/// These are programmer errors (bad world content, internal inconsistency),
/// not player mistakes. Player mistakes are reported as ordinary feedback
/// text and never surface as `Err`. The interpreter catches any of these
/// that arise mid-command and degrades them to a reported message, so a
/// session never crashes on one.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The named item is not present in the container it was looked up in.
    #[error("item not found: \"{0}\"")]
    ItemNotFound(String),

    /// The location index does not exist in the world's location table.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),
}
