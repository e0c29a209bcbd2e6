use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing tables have not been provisioned yet. Callers should offer
    /// the setup flow (`registry rebuild`) instead of a generic failure.
    #[error("Unable to reach the registry tables. Run `registry rebuild` to provision the schema.")]
    SchemaMissing,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cloud save failed: {0}")]
    SaveFailed(String),

    #[error("Registry update failed: {0}")]
    UpdateFailed(String),

    #[error("Registry deletion failed: {0}")]
    DeleteFailed(String),

    /// Uniqueness violation. The only error class with automatic recovery
    /// (a bounded retry with a fresh identifier).
    #[error("Duplicate key: {0}")]
    Conflict(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Authentication failed. Invalid credentials.")]
    Auth,

    /// A mutating action is already in flight (advisory busy flag).
    #[error("Another registry sync is still in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
