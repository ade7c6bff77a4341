use serde::{Deserialize, Serialize};

pub mod api;

/// Description used when a species carries no English flavor text.
pub const NO_DESCRIPTION: &str = "No description.";

/// A creature as displayed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    /// Sprite URL. `None` when the API has no default sprite.
    pub image: Option<String>,
    pub description: String,
}

impl CreatureRecord {
    /// Assemble a record from the two hops of the lookup chain.
    pub fn from_parts(detail: api::ItemDetail, species: &api::SpeciesDetail) -> Self {
        Self {
            name: detail.name,
            image: detail.sprites.front_default,
            description: species.english_description().to_owned(),
        }
    }
}
