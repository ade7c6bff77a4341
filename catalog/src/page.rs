use creatures::{
    CreatureRecord,
    api::{ItemDetail, ListingPage, SpeciesDetail},
};
use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::{CatalogConfig, CatalogError, Fetch, FetchError};

/// Fetch one page of creatures starting at `offset`.
///
/// Every listed item is resolved through its detail and species resources.
/// Items are resolved concurrently but returned in listing order. If any
/// request fails the whole page fails; partial pages are never returned.
/// The page holds at most [`CatalogConfig::page_size`] records.
pub async fn fetch_page<F: Fetch>(
    fetch: &F,
    config: &CatalogConfig,
    offset: usize,
) -> Result<Vec<CreatureRecord>, CatalogError> {
    let result = try_fetch_page(fetch, config, offset).await;
    match &result {
        Ok(records) => debug!(offset, count = records.len(), "fetched catalog page"),
        Err(e) => warn!(
            offset,
            page_size = config.page_size(),
            error = %e,
            "failed to fetch catalog page"
        ),
    }
    result
}

async fn try_fetch_page<F: Fetch>(
    fetch: &F,
    config: &CatalogConfig,
    offset: usize,
) -> Result<Vec<CreatureRecord>, CatalogError> {
    let url = config.listing_url(offset);
    debug!(%url, "fetching listing");
    let page: ListingPage = fetch.get_json(url.as_str()).await?;

    let items = page
        .results
        .iter()
        .take(config.page_size())
        .map(|item| resolve_item(fetch, &item.url));
    Ok(try_join_all(items).await?)
}

/// Follow an item's detail URL, then its species, and build the record.
pub(crate) async fn resolve_item<F: Fetch>(
    fetch: &F,
    detail_url: &str,
) -> Result<CreatureRecord, FetchError> {
    let detail: ItemDetail = fetch.get_json(detail_url).await?;
    let species: SpeciesDetail = fetch.get_json(&detail.species.url).await?;
    Ok(CreatureRecord::from_parts(detail, &species))
}
