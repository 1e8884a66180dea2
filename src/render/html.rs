//! HTML markup for the display tree.
//!
//! Buttons carry `data-role`, `data-id` and `data-panel` attributes so a
//! single delegated click listener on the recipe container can hand them
//! back to the controller as a [`crate::controller::ClickTarget`].

use crate::model::RecipeId;
use maud::{html, Markup};

use super::model::{
    Card, Panel, PanelContent, RenderedView, StepList, ROLE_FAVORITE, ROLE_TOGGLE_PANEL,
};

impl RenderedView {
    /// Markup for the contents of the recipe container.
    pub fn to_html(&self) -> String {
        html! {
            @for card in &self.cards {
                (card.markup())
            }
        }
        .into_string()
    }
}

impl Card {
    pub fn to_html(&self) -> String {
        self.markup().into_string()
    }

    fn markup(&self) -> Markup {
        let id = self.id;
        let difficulty = self.difficulty.as_str();
        let favorite_class = if self.favorite {
            "favorite-btn active"
        } else {
            "favorite-btn"
        };

        html! {
            div class="recipe-card" data-id=(id) {
                h3 { (self.title) }
                div class="recipe-meta" {
                    span { (self.time_label) }
                    span class={ "difficulty " (difficulty) } { (difficulty) }
                }
                p { (self.description) }
                button class=(favorite_class) data-role=(ROLE_FAVORITE) data-id=(id) {
                    (self.favorite_label)
                }
                (panel_markup(id, &self.ingredients))
                (panel_markup(id, &self.steps))
            }
        }
    }
}

impl StepList {
    pub fn to_html(&self) -> String {
        self.markup().into_string()
    }

    fn markup(&self) -> Markup {
        html! {
            ol class={ "step-list depth-" (self.depth) }
                style={ "margin-left: " (self.indent_em) "em" } {
                @for item in &self.items {
                    li {
                        (item.text)
                        @if let Some(children) = &item.children {
                            (children.markup())
                        }
                    }
                }
            }
        }
    }
}

fn panel_markup(id: RecipeId, panel: &Panel) -> Markup {
    let kind = panel.kind.as_str();

    html! {
        button class="panel-toggle" data-role=(ROLE_TOGGLE_PANEL) data-id=(id) data-panel=(kind) {
            (panel.toggle_label)
        }
        div class={ "panel " (kind) } data-id=(id) data-panel=(kind) hidden[!panel.expanded] {
            @match &panel.content {
                PanelContent::Ingredients { items } => {
                    ul class="ingredient-list" {
                        @for item in items {
                            li { (item) }
                        }
                    }
                }
                PanelContent::Steps { list } => { (list.markup()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoriteSet;
    use crate::model::{Difficulty, Recipe, Step};
    use crate::render::{render, render_steps, ExpandedPanels, PanelKey, PanelKind};

    #[test]
    fn test_nested_step_markup() {
        let steps = vec![
            Step::from("A"),
            Step::Node {
                text: "B".to_string(),
                substeps: vec!["C".into(), "D".into()],
            },
        ];
        let html = render_steps(&steps, 0, 32).to_html();

        assert_eq!(
            html,
            "<ol class=\"step-list depth-0\" style=\"margin-left: 0em\">\
             <li>A</li>\
             <li>B<ol class=\"step-list depth-1\" style=\"margin-left: 1.5em\"><li>C</li><li>D</li></ol></li>\
             </ol>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let steps = vec![Step::from("Mix <dry> & \"wet\"")];
        let html = render_steps(&steps, 0, 32).to_html();

        assert!(html.contains("<li>Mix &lt;dry&gt; &amp; &quot;wet&quot;</li>"));
        assert!(!html.contains("<dry>"));
    }

    #[test]
    fn test_card_markup_carries_data_attributes() {
        let recipe = Recipe {
            id: 7,
            title: "Pad Thai".to_string(),
            time: 30,
            difficulty: Difficulty::Medium,
            description: "Rice noodles & peanuts".to_string(),
            category: "noodles".to_string(),
            ingredients: vec!["Noodles".to_string()],
            steps: vec!["Soak noodles".into()],
        };
        let expanded: ExpandedPanels = [PanelKey::new(7, PanelKind::Ingredients)].into_iter().collect();
        let view = render(&[&recipe], 1, &FavoriteSet::default(), &expanded, 32);
        let html = view.to_html();

        assert!(html.starts_with("<div class=\"recipe-card\" data-id=\"7\">"));
        assert!(html.contains("<p>Rice noodles &amp; peanuts</p>"));
        assert!(html.contains("data-role=\"favorite\" data-id=\"7\">Add to favorites</button>"));
        assert!(html.contains(
            "data-role=\"toggle-panel\" data-id=\"7\" data-panel=\"ingredients\">Hide Ingredients</button>"
        ));
        assert!(html.contains("<div class=\"panel ingredients\" data-id=\"7\" data-panel=\"ingredients\">"));
        assert!(html.contains("<div class=\"panel steps\" data-id=\"7\" data-panel=\"steps\" hidden>"));
        assert!(html.contains("<span class=\"difficulty medium\">medium</span>"));
    }
}
