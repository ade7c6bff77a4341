use catalog::{Fetch, FetchError};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// [`Fetch`] over the browser's `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetch;

impl Fetch for GlooFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = Request::get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: resp.status(),
            });
        }

        resp.json().await.map_err(|e| match e {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        })
    }
}
