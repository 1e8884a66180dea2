//! The query pipeline: search, then filter, then sort.
//!
//! Every stage takes a slice of recipe references and returns a new vector
//! of references into the same recipes. Nothing here allocates recipes or
//! mutates its input.

use crate::favorites::FavoriteSet;
use crate::model::Recipe;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

mod model;

pub use model::{FilterSelector, QueryState, SortSelector};

/// Computes the recipes to display for the given session state.
///
/// Stages always run in the order search → filter → sort. The filter
/// selector is classified against the whole of `recipes`, so a known
/// category stays a category even when the search removed all its members.
pub fn compute_visible<'a>(
    recipes: &'a [Recipe],
    state: &QueryState,
    favorites: &FavoriteSet,
    quick_threshold: u32,
) -> Vec<&'a Recipe> {
    let all: Vec<&Recipe> = recipes.iter().collect();
    let filter_selector = FilterSelector::classify(&state.filter, recipes, quick_threshold);
    let sort_selector = SortSelector::parse(&state.sort);

    let searched = search(&all, &state.search);
    let filtered = filter(&searched, &filter_selector, favorites);
    let visible = sort(&filtered, sort_selector);

    tracing::debug!(
        total = recipes.len(),
        visible = visible.len(),
        filter = %state.filter,
        sort = %state.sort,
        "computed visible recipes"
    );
    visible
}

/// Keeps recipes whose title, description or any ingredient contains the
/// query, case-insensitively. A blank query keeps everything.
pub fn search<'a>(recipes: &[&'a Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim();
    if query.is_empty() {
        return recipes.to_vec();
    }
    let needle = query.to_lowercase();
    recipes
        .iter()
        .copied()
        .filter(|recipe| matches_query(recipe, &needle))
        .collect()
}

fn matches_query(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

/// Keeps recipes matching the selector.
pub fn filter<'a>(
    recipes: &[&'a Recipe],
    selector: &FilterSelector,
    favorites: &FavoriteSet,
) -> Vec<&'a Recipe> {
    let keep = |recipe: &Recipe| match selector {
        FilterSelector::All => true,
        FilterSelector::Favorites => favorites.contains(recipe.id),
        FilterSelector::Quick(threshold) => recipe.time < *threshold,
        FilterSelector::Difficulty(difficulty) => recipe.difficulty == *difficulty,
        FilterSelector::Category(category) => recipe.category == *category,
    };
    recipes.iter().copied().filter(|r| keep(r)).collect()
}

/// Returns a sorted copy. The sort is stable, so equal keys keep their
/// incoming relative order.
pub fn sort<'a>(recipes: &[&'a Recipe], selector: SortSelector) -> Vec<&'a Recipe> {
    let mut sorted = recipes.to_vec();
    match selector {
        SortSelector::Default => {}
        SortSelector::NameAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortSelector::NameDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortSelector::Time => sorted.sort_by_key(|r| r.time),
    }
    sorted
}

/// Dictionary-style title ordering. Titles compare by their folded form
/// (lowercase, accents stripped) first, so "Éclairs" sorts among the E's.
/// Ties break on accents, then on case with the lowercase form first.
fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_title(a)
        .cmp(&fold_title(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn fold_title(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
