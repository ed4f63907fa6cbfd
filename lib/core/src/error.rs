use crate::item::ProductId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Invalid user id: {0}")]
    InvalidUser(String),

    #[error("Ranked product {0} is missing from the catalog")]
    Integrity(ProductId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Stable machine-readable name of the variant, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidQuery(_) => "invalid_query",
            Error::NotFound(_) => "not_found",
            Error::InvalidUser(_) => "invalid_user",
            Error::Integrity(_) => "integrity",
            Error::InvalidConfig(_) => "invalid_config",
            Error::Artifact(_) => "artifact",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
        }
    }

    /// True for errors caused by the caller's input rather than by the loaded data
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidQuery(_) | Error::NotFound(_) | Error::InvalidUser(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
