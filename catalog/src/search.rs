use creatures::CreatureRecord;
use tracing::debug;

use crate::{CatalogConfig, Fetch, page::resolve_item};

/// Outcome of a name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing to search for; show the catalog from the start instead.
    Browse,
    /// Zero or one matching creatures.
    Matches(Vec<CreatureRecord>),
}

/// Look a creature up by `name`, case-insensitively.
///
/// Failures of any kind are reported as an empty [`Resolution::Matches`].
pub async fn resolve_by_name<F: Fetch>(
    fetch: &F,
    config: &CatalogConfig,
    name: &str,
) -> Resolution {
    let name = name.trim();
    if name.is_empty() {
        return Resolution::Browse;
    }

    let name = name.to_lowercase();
    let url = config.search_url(&name);
    debug!(%url, "searching");
    match resolve_item(fetch, url.as_str()).await {
        Ok(record) => Resolution::Matches(vec![record]),
        Err(e) => {
            debug!(query = %name, error = %e, "no creature found");
            Resolution::Matches(Vec::new())
        }
    }
}
