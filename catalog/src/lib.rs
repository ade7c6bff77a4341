//! Fetching and searching the creature catalog.
//!
//! [`fetch_page`] assembles a page of [`CreatureRecord`]s from the listing
//! endpoint, resolving every listed item through its detail and species
//! resources. [`resolve_by_name`] looks a single creature up by name.
//! Neither touches shared state: callers fold results into a
//! [`BrowseState`].

mod config;
mod error;
#[cfg(test)]
mod mock;
mod page;
mod search;
mod state;
mod transport;

pub use config::CatalogConfig;
pub use creatures::{CreatureRecord, NO_DESCRIPTION};
pub use error::{CatalogError, FetchError};
pub use page::fetch_page;
pub use search::{Resolution, resolve_by_name};
pub use state::BrowseState;
pub use transport::Fetch;
