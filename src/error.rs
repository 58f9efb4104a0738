use thiserror::Error;

/// Top-level error type for the Domus building modeler.
#[derive(Debug, Error)]
pub enum DomusError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors raised while looking up or inserting model entities.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("wall not found: {name}")]
    WallNotFound { name: String },

    #[error("wall already exists: {name}")]
    DuplicateWall { name: String },

    #[error("grid line not found: {label}")]
    GridLineNotFound { label: String },

    #[error("invalid grid node: {0}")]
    InvalidGridNode(String),

    #[error("building already has a foundation")]
    FoundationExists,
}

/// Errors raised by placement operations.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("grid nodes {from} and {to} share no grid line")]
    NotAxisAligned { from: String, to: String },
}

/// Errors raised at the CSG backend boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("solid not found")]
    SolidNotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`DomusError`].
pub type Result<T> = std::result::Result<T, DomusError>;
