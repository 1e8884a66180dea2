use crate::model::{Difficulty, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Left indentation applied per nesting level of a step list, in `em`.
pub const STEP_INDENT_EM: f32 = 1.5;

/// `data-role` of a card's favorite button.
pub const ROLE_FAVORITE: &str = "favorite";
/// `data-role` of a card's ingredients/steps toggle button.
pub const ROLE_TOGGLE_PANEL: &str = "toggle-panel";

/// The two collapsible sections of a recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Ingredients,
    Steps,
}

impl PanelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Ingredients => "ingredients",
            PanelKind::Steps => "steps",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Ingredients => "Ingredients",
            PanelKind::Steps => "Steps",
        }
    }

    /// Text of the toggle button for the given state.
    pub fn toggle_label(&self, expanded: bool) -> String {
        let verb = if expanded { "Hide" } else { "Show" };
        format!("{verb} {}", self.label())
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredients" => Ok(PanelKind::Ingredients),
            "steps" => Ok(PanelKind::Steps),
            _ => Err(()),
        }
    }
}

/// Identifies one panel of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelKey {
    pub recipe_id: RecipeId,
    pub kind: PanelKind,
}

impl PanelKey {
    pub fn new(recipe_id: RecipeId, kind: PanelKind) -> Self {
        PanelKey { recipe_id, kind }
    }
}

/// Panels currently expanded; everything else is collapsed.
pub type ExpandedPanels = BTreeSet<PanelKey>;

/// One level of a rendered step list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepList {
    /// Zero for the top-level list
    pub depth: usize,
    pub indent_em: f32,
    pub items: Vec<StepItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepItem {
    pub text: String,
    pub children: Option<StepList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelContent {
    Ingredients { items: Vec<String> },
    Steps { list: StepList },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub expanded: bool,
    pub toggle_label: String,
    pub content: PanelContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: RecipeId,
    pub title: String,
    /// e.g. "25 min"
    pub time_label: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub category: String,
    pub favorite: bool,
    pub favorite_label: String,
    pub ingredients: Panel,
    pub steps: Panel,
}

impl Card {
    pub fn panel(&self, kind: PanelKind) -> &Panel {
        match kind {
            PanelKind::Ingredients => &self.ingredients,
            PanelKind::Steps => &self.steps,
        }
    }
}

/// Everything the host needs to paint the recipe container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedView {
    pub cards: Vec<Card>,
    pub shown: usize,
    pub total: usize,
    /// "Showing {shown} of {total} recipes"
    pub counter: String,
    /// Whether the search box's clear affordance should be visible
    pub clear_visible: bool,
    /// Selector strings whose buttons are marked active
    pub active_filter: String,
    pub active_sort: String,
}
