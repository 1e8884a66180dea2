use crate::model::RecipeId;
use crate::render::{PanelKind, RenderedView};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Data attributes of a clicked element inside the recipe container.
///
/// Values are kept as the raw strings the host read from the DOM; the
/// controller decides whether they resolve to anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTarget {
    /// `data-role`
    pub role: Option<String>,
    /// `data-id`
    pub recipe_id: Option<String>,
    /// `data-panel`
    pub panel: Option<String>,
}

impl ClickTarget {
    pub fn favorite(recipe_id: RecipeId) -> Self {
        ClickTarget {
            role: Some(crate::render::ROLE_FAVORITE.to_string()),
            recipe_id: Some(recipe_id.to_string()),
            panel: None,
        }
    }

    pub fn toggle_panel(recipe_id: RecipeId, panel: PanelKind) -> Self {
        ClickTarget {
            role: Some(crate::render::ROLE_TOGGLE_PANEL.to_string()),
            recipe_id: Some(recipe_id.to_string()),
            panel: Some(panel.as_str().to_string()),
        }
    }

    pub(super) fn resolve_id(&self) -> Option<RecipeId> {
        self.recipe_id.as_deref()?.trim().parse().ok()
    }

    pub(super) fn resolve_panel(&self) -> Option<PanelKind> {
        self.panel.as_deref()?.parse().ok()
    }
}

/// What the host has to do after feeding an action to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed
    None,
    /// Replace the recipe container and counter
    Render(RenderedView),
    /// Show or hide a single panel and relabel its toggle
    Panel {
        recipe_id: RecipeId,
        panel: PanelKind,
        expanded: bool,
        label: String,
    },
    /// Search text is buffered; call `poll` at or after `deadline`
    SearchPending { deadline: Instant },
}

impl Effect {
    pub fn view(&self) -> Option<&RenderedView> {
        match self {
            Effect::Render(view) => Some(view),
            _ => None,
        }
    }
}
