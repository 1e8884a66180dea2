use crate::model::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};

/// Which subset of the catalog to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelector {
    All,
    Favorites,
    /// Strictly faster than the given number of minutes
    Quick(u32),
    Difficulty(Difficulty),
    Category(String),
}

impl FilterSelector {
    /// Classifies a selector string against the full recipe collection.
    ///
    /// Unrecognized values fall open to [`FilterSelector::All`]. A value only
    /// counts as a category when some recipe in `recipes` carries it.
    pub fn classify(selector: &str, recipes: &[Recipe], quick_threshold: u32) -> Self {
        match selector {
            "" | "all" => FilterSelector::All,
            "favorites" => FilterSelector::Favorites,
            "quick" => FilterSelector::Quick(quick_threshold),
            other => {
                if let Ok(difficulty) = other.parse::<Difficulty>() {
                    FilterSelector::Difficulty(difficulty)
                } else if recipes.iter().any(|r| r.category == other) {
                    FilterSelector::Category(other.to_string())
                } else {
                    FilterSelector::All
                }
            }
        }
    }
}

/// Order in which visible recipes are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSelector {
    /// Keep catalog order
    Default,
    NameAsc,
    NameDesc,
    Time,
}

impl SortSelector {
    /// Parses a selector string; unrecognized values keep catalog order.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "name" | "name-asc" => SortSelector::NameAsc,
            "name-desc" => SortSelector::NameDesc,
            "time" => SortSelector::Time,
            _ => SortSelector::Default,
        }
    }
}

/// The query-relevant part of the session: raw selector strings as the host
/// sent them, plus the committed search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub filter: String,
    pub sort: String,
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            filter: "all".to_string(),
            sort: "default".to_string(),
            search: String::new(),
        }
    }
}
