use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the flight tracker. Not exhaustive by intent: just enough
/// variants to map application errors to API status codes.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested resource type is unknown to the entity registry.
    #[error("unknown resource type '{0}'")]
    InvalidResourceType(String),

    /// A supplied filter name is not part of the resource's filter set.
    #[error("unknown filter '{name}' for resource '{resource}'")]
    InvalidFilterName { resource: String, name: String },

    /// A write referenced a row in another table that does not exist.
    #[error("referenced {resource} id={id} does not exist")]
    ReferencedEntityMissing { resource: &'static str, id: i32 },

    /// The row targeted by an update or delete does not exist.
    #[error("{resource} id={id} does not exist")]
    NotFound { resource: &'static str, id: i32 },

    /// Storage failures propagate unmodified; no retry, no partial results.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn invalid_filter(resource: &str, name: &str) -> Self {
        Self::InvalidFilterName {
            resource: resource.to_string(),
            name: name.to_string(),
        }
    }
}
