use super::recipe::{Recipe, RecipeId};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(RecipeId),
}

/// The immutable list of recipes for a session.
///
/// Identifiers are checked for uniqueness once, at construction. After that
/// the store only hands out shared references.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Creates a store from a list of recipes, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` for the first identifier that
    /// appears more than once.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }
        Ok(RecipeStore { recipes })
    }

    /// Wraps recipes whose ids are unique by construction.
    pub(crate) fn from_unique(recipes: Vec<Recipe>) -> Self {
        debug_assert!(RecipeStore::new(recipes.clone()).is_ok());
        RecipeStore { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
