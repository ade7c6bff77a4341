use serde::{Deserialize, Deserializer};
use url::{ParseError, Url};

use crate::CatalogError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Where the catalog lives and how much of it to load per page.
///
/// The base URL is validated on construction, so the URL builders cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the API, with or without a trailing slash.
    #[serde(deserialize_with = "deserialize_base_url")]
    base_url: Url,
    page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn new(base_url: &str, page_size: usize) -> Result<Self, CatalogError> {
        Ok(Self {
            base_url: check_base_url(Url::parse(base_url)?)?,
            page_size,
        })
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        Self { page_size, ..self }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Number of creatures requested per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `{base}/pokemon?limit={page_size}&offset={offset}`
    pub fn listing_url(&self, offset: usize) -> Url {
        let mut url = self.endpoint(&["pokemon"]);
        url.query_pairs_mut()
            .append_pair("limit", &self.page_size.to_string())
            .append_pair("offset", &offset.to_string());
        url
    }

    /// `{base}/pokemon/{name}`, with `name` encoded as a single path segment.
    pub fn search_url(&self, name: &str) -> Url {
        self.endpoint(&["pokemon", name])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `check_base_url` rules out URLs without path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn check_base_url(url: Url) -> Result<Url, CatalogError> {
    if url.cannot_be_a_base() {
        return Err(CatalogError::InvalidUrl(
            ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }
    Ok(url)
}

fn deserialize_base_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    let url = Url::deserialize(deserializer)?;
    check_base_url(url).map_err(serde::de::Error::custom)
}
