//! Projection of visible recipes into a display tree.
//!
//! The renderer reads recipes, favorites and the expanded-panel set and
//! builds [`RenderedView`]. It owns nothing and mutates nothing; the
//! controller decides when to call it.

use crate::favorites::FavoriteSet;
use crate::model::{Recipe, Step};
use crate::query::QueryState;

mod html;
mod model;

pub use model::{
    Card, ExpandedPanels, Panel, PanelContent, PanelKey, PanelKind, RenderedView, StepItem,
    StepList, ROLE_FAVORITE, ROLE_TOGGLE_PANEL, STEP_INDENT_EM,
};

/// Renders the visible recipes as cards, plus the result counter.
///
/// `total` is the size of the whole catalog, used only for the counter.
pub fn render(
    visible: &[&Recipe],
    total: usize,
    favorites: &FavoriteSet,
    expanded: &ExpandedPanels,
    max_step_depth: usize,
) -> RenderedView {
    let cards: Vec<Card> = visible
        .iter()
        .map(|recipe| render_card(recipe, favorites, expanded, max_step_depth))
        .collect();

    let defaults = QueryState::default();
    RenderedView {
        shown: cards.len(),
        total,
        counter: counter_text(cards.len(), total),
        clear_visible: false,
        active_filter: defaults.filter,
        active_sort: defaults.sort,
        cards,
    }
}

pub fn counter_text(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} recipes")
}

pub fn favorite_label(favorite: bool) -> &'static str {
    if favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    }
}

fn render_card(
    recipe: &Recipe,
    favorites: &FavoriteSet,
    expanded: &ExpandedPanels,
    max_step_depth: usize,
) -> Card {
    let favorite = favorites.contains(recipe.id);
    let is_expanded = |kind| expanded.contains(&PanelKey::new(recipe.id, kind));

    let ingredients_expanded = is_expanded(PanelKind::Ingredients);
    let steps_expanded = is_expanded(PanelKind::Steps);

    Card {
        id: recipe.id,
        title: recipe.title.clone(),
        time_label: format!("{} min", recipe.time),
        difficulty: recipe.difficulty,
        description: recipe.description.clone(),
        category: recipe.category.clone(),
        favorite,
        favorite_label: favorite_label(favorite).to_string(),
        ingredients: Panel {
            kind: PanelKind::Ingredients,
            expanded: ingredients_expanded,
            toggle_label: PanelKind::Ingredients.toggle_label(ingredients_expanded),
            content: PanelContent::Ingredients {
                items: recipe.ingredients.clone(),
            },
        },
        steps: Panel {
            kind: PanelKind::Steps,
            expanded: steps_expanded,
            toggle_label: PanelKind::Steps.toggle_label(steps_expanded),
            content: PanelContent::Steps {
                list: render_steps(&recipe.steps, 0, max_step_depth),
            },
        },
    }
}

/// Renders a step list at `depth`, recursing into sub-steps.
///
/// Sub-steps that would land deeper than `max_depth` are dropped; their
/// parent still renders its own text.
pub fn render_steps(steps: &[Step], depth: usize, max_depth: usize) -> StepList {
    let items = steps
        .iter()
        .map(|step| {
            let substeps = step.substeps();
            let children = if substeps.is_empty() {
                None
            } else if depth >= max_depth {
                tracing::warn!(
                    depth,
                    max_depth,
                    step = step.text(),
                    "step nesting exceeds limit, dropping sub-steps"
                );
                None
            } else {
                Some(render_steps(substeps, depth + 1, max_depth))
            };
            StepItem {
                text: step.text().to_string(),
                children,
            }
        })
        .collect();

    StepList {
        depth,
        indent_em: depth as f32 * STEP_INDENT_EM,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, RecipeId};

    fn node(text: &str, substeps: Vec<Step>) -> Step {
        Step::Node {
            text: text.to_string(),
            substeps,
        }
    }

    fn recipe(id: RecipeId, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            time: 25,
            difficulty: Difficulty::Easy,
            description: "Creamy pasta".to_string(),
            category: "pasta".to_string(),
            ingredients: vec!["Spaghetti".to_string(), "Eggs".to_string()],
            steps: vec!["Boil pasta".into(), node("Make sauce", vec!["Whisk eggs".into()])],
        }
    }

    #[test]
    fn test_nested_step_list() {
        let steps = vec!["A".into(), node("B", vec!["C".into(), "D".into()])];
        let list = render_steps(&steps, 0, 32);

        assert_eq!(list.depth, 0);
        assert_eq!(list.indent_em, 0.0);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].text, "A");
        assert!(list.items[0].children.is_none());
        assert_eq!(list.items[1].text, "B");

        let nested = list.items[1].children.as_ref().unwrap();
        assert_eq!(nested.depth, 1);
        assert!(nested.indent_em > list.indent_em);
        let texts: Vec<&str> = nested.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["C", "D"]);
    }

    #[test]
    fn test_node_without_substeps_renders_as_plain_item() {
        let list = render_steps(&[node("Rest", vec![])], 0, 32);
        assert_eq!(list.items[0].text, "Rest");
        assert!(list.items[0].children.is_none());
    }

    #[test]
    fn test_deep_nesting_is_truncated_at_limit() {
        let mut step: Step = "leaf".into();
        for level in (0..50).rev() {
            step = node(&format!("level {level}"), vec![step]);
        }
        let list = render_steps(std::slice::from_ref(&step), 0, 10);

        let mut current = &list;
        let mut levels = 0;
        while let Some(children) = &current.items[0].children {
            current = children;
            levels += 1;
        }
        assert_eq!(levels, 10);
        assert_eq!(current.depth, 10);
        assert_eq!(current.items[0].text, "level 10");
    }

    #[test]
    fn test_render_cards_and_counter() {
        let recipes = [recipe(1, "Carbonara"), recipe(2, "Croissants")];
        let visible: Vec<&Recipe> = recipes.iter().take(1).collect();
        let favorites: FavoriteSet = [1].into_iter().collect();
        let view = render(&visible, recipes.len(), &favorites, &ExpandedPanels::new(), 32);

        assert_eq!(view.counter, "Showing 1 of 2 recipes");
        assert_eq!(view.shown, 1);
        assert_eq!(view.cards.len(), 1);

        let card = &view.cards[0];
        assert_eq!(card.title, "Carbonara");
        assert_eq!(card.time_label, "25 min");
        assert!(card.favorite);
        assert_eq!(card.favorite_label, "Remove from favorites");
        assert!(!card.ingredients.expanded);
        assert_eq!(card.ingredients.toggle_label, "Show Ingredients");
        assert_eq!(card.steps.toggle_label, "Show Steps");
    }

    #[test]
    fn test_expanded_panels_are_per_recipe_and_kind() {
        let recipes = [recipe(1, "Carbonara"), recipe(2, "Croissants")];
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let expanded: ExpandedPanels = [PanelKey::new(2, PanelKind::Steps)].into_iter().collect();
        let view = render(&visible, 2, &FavoriteSet::default(), &expanded, 32);

        assert!(!view.cards[0].steps.expanded);
        assert!(!view.cards[1].ingredients.expanded);
        assert!(view.cards[1].steps.expanded);
        assert_eq!(view.cards[1].panel(PanelKind::Steps).toggle_label, "Hide Steps");
        assert!(!view.cards[1].favorite);
    }

    #[test]
    fn test_empty_view() {
        let view = render(&[], 8, &FavoriteSet::default(), &ExpandedPanels::new(), 32);
        assert!(view.cards.is_empty());
        assert_eq!(view.counter, "Showing 0 of 8 recipes");
    }

    #[test]
    fn test_panel_kind_parse() {
        assert_eq!("steps".parse::<PanelKind>(), Ok(PanelKind::Steps));
        assert_eq!("ingredients".parse::<PanelKind>(), Ok(PanelKind::Ingredients));
        assert!("Steps".parse::<PanelKind>().is_err());
    }
}
