use creatures::CreatureRecord;

use crate::{CatalogConfig, CatalogError};

/// What the catalog view shows, and whether it is waiting on the network.
///
/// Only one fetch may be outstanding at a time: the `begin_*` methods return
/// `None`/`false` while `loading` is set and the caller must then drop the
/// trigger. Every `begin_*` that succeeds must be paired with the matching
/// `finish_*`.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    records: Vec<CreatureRecord>,
    cursor: usize,
    page_size: usize,
    loading: bool,
    last_error: Option<String>,
}

impl BrowseState {
    /// Empty state paging by `config`'s page size, the one used by
    /// [`fetch_page`](crate::fetch_page).
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            page_size: config.page_size(),
            loading: false,
            last_error: None,
        }
    }

    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    /// Offset of the next page to load.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed page load, until the next successful load.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Start loading the next page. Returns its offset.
    pub fn begin_page(&mut self) -> Option<usize> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.cursor)
    }

    /// Turn a search that had nothing to look for into a reload from the
    /// first page, dropping everything shown. Returns the offset to fetch,
    /// to be completed with `finish_page`. Must only be called after a
    /// successful `begin_search`.
    pub fn browse_instead(&mut self) -> usize {
        debug_assert!(self.loading, "browse_instead without a pending search");
        self.records.clear();
        self.cursor = 0;
        self.cursor
    }

    /// Append a loaded page and move the cursor past it. A failed page leaves
    /// records and cursor untouched.
    pub fn finish_page(&mut self, page: Result<Vec<CreatureRecord>, CatalogError>) {
        self.loading = false;
        match page {
            Ok(records) => {
                self.records.extend(records);
                self.cursor += self.page_size;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub fn begin_search(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Replace everything shown with the search result.
    pub fn finish_search(&mut self, matches: Vec<CreatureRecord>) {
        self.loading = false;
        self.records = matches;
        self.cursor = 0;
        self.last_error = None;
    }
}
