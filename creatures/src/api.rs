//! Wire types for the subset of the PokeAPI v2 payloads the catalog reads.
//!
//! Only the fields used to build a [`CreatureRecord`](crate::CreatureRecord)
//! are modelled; everything else in the (large) responses is ignored.
use serde::{Deserialize, Serialize};

/// Response of `GET /pokemon?limit=N&offset=M`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub results: Vec<ItemRef>,
}

/// A reference to a single item, as listed on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub name: String,
    /// Detail URL of the item.
    pub url: String,
}

/// Response of `GET /pokemon/{name or id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub sprites: Sprites,
    pub species: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Response of `GET /pokemon-species/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDetail {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

impl SpeciesDetail {
    /// The first English flavor text, or [`NO_DESCRIPTION`](crate::NO_DESCRIPTION).
    pub fn english_description(&self) -> &str {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text.as_str())
            .unwrap_or(crate::NO_DESCRIPTION)
    }
}
