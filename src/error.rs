use thiserror::Error;

use crate::model::{BarrierKey, ElementId, LevelId};

/// Top-level error type for the penetration placement engine.
#[derive(Debug, Error)]
pub enum PenetraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Query(#[from] GeometryQueryError),

    #[error(transparent)]
    Resolution(#[from] BarrierResolutionError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by a ray cast against the barrier index.
///
/// A query error aborts the cast of one element only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryQueryError {
    #[error("ray direction is the zero vector")]
    ZeroDirection,

    #[error("invalid search context `{context}`: {reason}")]
    InvalidContext { context: String, reason: String },

    #[error("no spatial index available for context `{0}`")]
    NoSpatialIndex(String),
}

/// Errors raised while resolving a hit barrier to its level.
///
/// A resolution error skips one opening only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarrierResolutionError {
    #[error("barrier {0} cannot be resolved")]
    NotFound(BarrierKey),

    #[error("barrier {barrier} references unknown level {level}")]
    MissingLevel { barrier: BarrierKey, level: LevelId },
}

/// Missing collaborators detected before a batch starts.
///
/// Any of these aborts the whole run with nothing applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("configuration rejected: {reason}")]
    InvalidConfig { reason: String },

    #[error("no source model with a title containing `{suffix}`")]
    SourceModelNotFound { suffix: String },

    #[error("opening template `{family}` is not loaded")]
    MissingTemplate { family: String },

    #[error("opening template `{family}` is not ready for instantiation")]
    TemplateInactive { family: String },

    #[error("no non-template 3D search context available")]
    NoSearchContext,
}

/// Errors related to engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A failure isolated to one element or one of its hits.
#[derive(Debug)]
pub struct PlacementFailure {
    /// The element being processed.
    pub element: ElementId,
    /// The barrier hit, when the failure concerns a single crossing.
    pub barrier: Option<BarrierKey>,
    /// What went wrong.
    pub error: PenetraError,
}

/// Convenience type alias for results using [`PenetraError`].
pub type Result<T> = std::result::Result<T, PenetraError>;
