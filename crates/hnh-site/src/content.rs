//! Content Loading and Resolution
//!
//! Beer reviews and recipes are authored as flat JSON arrays and read fully
//! into memory before any page renders. Lookups are exact-match on `id`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Where a beer was brewed.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Location {
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
}

/// One beer review.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Beer {
    /// URL-safe slug, unique within the collection.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Author-supplied rating in [0, 5].
    pub rating: f64,
    pub can_image: String,
    pub poured_image: String,
    pub brewery: String,
    pub location: Location,
    pub abv: f64,
    #[serde(default)]
    pub style: Option<String>,
    pub time_reviewed: Option<DateTime<Utc>>,
}

/// One recipe.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Recipe {
    /// URL-safe slug, unique within the collection.
    pub id: String,
    pub name: String,
    pub picture: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub time_cooked: DateTime<Utc>,
}

/// A fatal content-load failure. There is no partial-success mode: if either
/// collection is unreadable or unparsable, the whole load fails.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Data file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Data file is not a valid JSON array of records.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Store for all content, loaded once before the server starts.
///
/// Collections keep their source order. Ids are expected to be unique; a
/// duplicate in the source data is not deduplicated here, and lookups
/// resolve to the first match.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    beers: Vec<Beer>,
    recipes: Vec<Recipe>,
}

/// The data directory, from `DATA_PATH` (default `data`).
pub fn data_dir() -> PathBuf {
    PathBuf::from(std::env::var("DATA_PATH").unwrap_or_else(|_| "data".to_string()))
}

impl ContentStore {
    /// Load `beer.json` and `recipe.json` from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self, ContentError> {
        let beers: Vec<Beer> = load_collection(&dir.join("beer.json"))?;
        let recipes: Vec<Recipe> = load_collection(&dir.join("recipe.json"))?;

        tracing::info!(
            beers = beers.len(),
            recipes = recipes.len(),
            "loaded content from {}",
            dir.display()
        );

        Ok(Self { beers, recipes })
    }

    /// All beers in source order.
    pub fn beers(&self) -> &[Beer] {
        &self.beers
    }

    /// All recipes in source order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Every beer id in source order (duplicates pass through).
    pub fn beer_ids(&self) -> Vec<&str> {
        self.beers.iter().map(|b| b.id.as_str()).collect()
    }

    /// Every recipe id in source order (duplicates pass through).
    pub fn recipe_ids(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.id.as_str()).collect()
    }

    /// First beer whose id matches exactly, or `None`.
    pub fn beer(&self, id: &str) -> Option<&Beer> {
        self.beers.iter().find(|b| b.id == id)
    }

    /// First recipe whose id matches exactly, or `None`.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

fn load_collection<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.display().to_string(),
        source,
    })
}
