use thiserror::Error;

/// Failure of a single HTTP GET performed by a [`Fetch`](crate::Fetch) transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Failure of a whole catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to load creatures due to: {0}")]
    Network(String),
    #[error("Failed to read creature data: {0}")]
    Decode(String),
    #[error("Invalid API base url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<FetchError> for CatalogError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Decode(cause) => CatalogError::Decode(cause),
            network @ (FetchError::Network(_) | FetchError::Status { .. }) => {
                CatalogError::Network(network.to_string())
            }
        }
    }
}
