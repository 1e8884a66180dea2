mod recipe;
mod store;

pub use recipe::{Difficulty, Recipe, RecipeId, Step};
pub use store::{CatalogError, RecipeStore};
