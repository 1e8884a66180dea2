//! Catalog loading.
//!
//! Recipes come from YAML or JSON catalog files. A file holds either a bare
//! list of recipes or a mapping with a `recipes` key. Directories are
//! scanned recursively and every catalog file found is merged in path
//! order.

use crate::model::{CatalogError, Recipe, RecipeStore};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

mod sample;

pub use sample::sample_catalog;

/// Errors that can occur when loading catalogs.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Failed to scan directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
}

impl CatalogFile {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            CatalogFile::List(recipes) => recipes,
            CatalogFile::Wrapped { recipes } => recipes,
        }
    }
}

/// Parses catalog text without validating ids.
pub fn parse_recipes(content: &str, format: CatalogFormat) -> Result<Vec<Recipe>, FetchError> {
    let file: CatalogFile = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Ok(file.into_recipes())
}

/// Parses catalog text into a validated store.
///
/// # Errors
///
/// Returns `FetchError` on malformed input or duplicate recipe ids.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<RecipeStore, FetchError> {
    let recipes = parse_recipes(content, format)?;
    Ok(RecipeStore::new(recipes)?)
}

/// Loads a single `.yaml`, `.yml` or `.json` catalog file.
///
/// # Examples
///
/// ```no_run
/// use recipe_catalog::load_catalog;
/// use camino::Utf8Path;
///
/// let store = load_catalog(Utf8Path::new("catalog/recipes.yaml"))?;
/// println!("{} recipes", store.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_catalog(path: &Utf8Path) -> Result<RecipeStore, FetchError> {
    let recipes = read_recipes(path)?;
    let store = RecipeStore::new(recipes)?;
    tracing::debug!(%path, count = store.len(), "loaded catalog");
    Ok(store)
}

/// Loads and merges every catalog file under `dir`, recursively.
///
/// Files are read in sorted path order, so the resulting catalog order is
/// deterministic. Ids must be unique across all files.
pub fn load_catalog_dir(dir: &Utf8Path) -> Result<RecipeStore, FetchError> {
    if !dir.is_dir() {
        return Err(FetchError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for ext in ["yaml", "yml", "json"] {
        let pattern = dir.join(format!("**/*.{ext}"));
        for entry in glob::glob(pattern.as_str())? {
            let path = Utf8PathBuf::from_path_buf(entry?)
                .map_err(|p| FetchError::InvalidPath(p.display().to_string()))?;
            paths.push(path);
        }
    }
    paths.sort();

    let mut recipes = Vec::new();
    for path in &paths {
        recipes.extend(read_recipes(path)?);
    }
    let store = RecipeStore::new(recipes)?;
    tracing::debug!(%dir, files = paths.len(), count = store.len(), "loaded catalog directory");
    Ok(store)
}

fn read_recipes(path: &Utf8Path) -> Result<Vec<Recipe>, FetchError> {
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| FetchError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path)?;
    parse_recipes(&content, format)
}
