use serde::de::DeserializeOwned;

use crate::FetchError;

/// HTTP+JSON transport used by the catalog operations.
///
/// Implementations issue a `GET` to `url`, treat any non-success status as
/// [`FetchError::Status`] and decode the body as JSON into `T`.
/// Futures are not required to be `Send`; in the browser everything runs on
/// a single task.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

