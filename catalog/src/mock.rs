//! In-memory [`Fetch`] transport serving canned PokeAPI payloads.
use std::{cell::RefCell, collections::HashMap};

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{CatalogConfig, Fetch, FetchError};

pub(crate) const BASE_URL: &str = "https://pokeapi.test/api/v2";

#[derive(Default)]
pub(crate) struct MockFetch {
    responses: HashMap<String, Value>,
    failures: HashMap<String, FetchError>,
    /// Number of times a request yields to the executor before completing.
    delays: HashMap<String, usize>,
    requested: RefCell<Vec<String>>,
    completed: RefCell<Vec<String>>,
}

pub(crate) fn config() -> CatalogConfig {
    config_with_page_size(10)
}

pub(crate) fn config_with_page_size(page_size: usize) -> CatalogConfig {
    CatalogConfig::new(BASE_URL, page_size).unwrap()
}

pub(crate) fn detail_url(id: usize) -> String {
    format!("{BASE_URL}/pokemon/{id}/")
}

pub(crate) fn species_url(id: usize) -> String {
    format!("{BASE_URL}/pokemon-species/{id}/")
}

pub(crate) fn creature_name(id: usize) -> String {
    format!("creature-{id}")
}

impl MockFetch {
    pub(crate) fn respond(&mut self, url: impl Into<String>, body: Value) -> &mut Self {
        self.responses.insert(url.into(), body);
        self
    }

    /// Fail every request to `url` with `error`, whatever is served there.
    pub(crate) fn fail(&mut self, url: impl Into<String>, error: FetchError) -> &mut Self {
        self.failures.insert(url.into(), error);
        self
    }

    pub(crate) fn delay(&mut self, url: impl Into<String>, yields: usize) -> &mut Self {
        self.delays.insert(url.into(), yields);
        self
    }

    /// Serve a creature with id `id` under both its id and its name.
    pub(crate) fn creature(&mut self, id: usize) -> &mut Self {
        let name = creature_name(id);
        let detail = json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": format!("https://img.test/{id}.png") },
            "species": { "name": name, "url": species_url(id) }
        });
        self.respond(detail_url(id), detail.clone());
        self.respond(format!("{BASE_URL}/pokemon/{name}"), detail);
        self.respond(
            species_url(id),
            json!({
                "flavor_text_entries": [
                    { "flavor_text": format!("Texte {id}"), "language": { "name": "fr" } },
                    { "flavor_text": format!("Text {id}"), "language": { "name": "en" } }
                ]
            }),
        )
    }

    /// Serve the listing page at `offset` with creatures `ids`.
    pub(crate) fn listing(
        &mut self,
        offset: usize,
        limit: usize,
        ids: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        let results = ids
            .into_iter()
            .map(|id| json!({ "name": creature_name(id), "url": detail_url(id) }))
            .collect::<Vec<_>>();
        let url = config_with_page_size(limit).listing_url(offset);
        self.respond(url.as_str(), json!({ "count": 1302, "results": results }))
    }

    /// A catalog of creatures `1..=total` paged by `limit`.
    pub(crate) fn pokedex(total: usize, limit: usize) -> Self {
        let mut mock = MockFetch::default();
        for id in 1..=total {
            mock.creature(id);
        }
        for offset in (0..total).step_by(limit) {
            let end = (offset + limit).min(total);
            mock.listing(offset, limit, offset + 1..=end);
        }
        mock
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub(crate) fn completed(&self) -> Vec<String> {
        self.completed.borrow().clone()
    }
}

impl Fetch for MockFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.requested.borrow_mut().push(url.to_owned());
        for _ in 0..self.delays.get(url).copied().unwrap_or_default() {
            tokio::task::yield_now().await;
        }
        self.completed.borrow_mut().push(url.to_owned());

        if let Some(error) = self.failures.get(url) {
            return Err(error.clone());
        }
        let body = self.responses.get(url).ok_or_else(|| FetchError::Status {
            url: url.to_owned(),
            status: 404,
        })?;
        serde_json::from_value(body.clone()).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
