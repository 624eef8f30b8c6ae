use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the push and pull entry points.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] patterns::PatternError),
    /// The configured pattern or its parameters violated a precondition.
    #[error(transparent)]
    Validate(#[from] patterns::ValidateError),
    /// Filesystem traversal failed.
    #[error(transparent)]
    Walk(#[from] walk::WalkError),
    /// The pattern's globbing form could not be compiled for enumeration.
    #[error("failed to compile glob '{pattern}': {source}")]
    Glob {
        /// The globbing form that failed.
        pattern: String,
        /// Underlying error from the glob engine.
        #[source]
        source: globset::Error,
    },
    /// An explicit locale identifier matched nothing in the remote list.
    #[error("no remote locale matches '{identifier}'")]
    UnknownLocale {
        /// The identifier as configured.
        identifier: String,
    },
}
