use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a recipe within a catalog.
pub type RecipeId = u32;

/// How demanding a recipe is to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// One instruction of a recipe, optionally carrying nested sub-instructions.
///
/// In catalog files a bare string is a [`Step::Leaf`], and an object with
/// `text` and `substeps` is a [`Step::Node`]:
///
/// ```
/// # use recipe_catalog::Step;
/// let steps: Vec<Step> = serde_json::from_str(
///     r#"["Boil water", {"text": "Make sauce", "substeps": ["Whisk eggs"]}]"#,
/// ).unwrap();
/// assert_eq!(steps[1].substeps().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Leaf(String),
    Node {
        text: String,
        #[serde(default)]
        substeps: Vec<Step>,
    },
}

impl Step {
    pub fn text(&self) -> &str {
        match self {
            Step::Leaf(text) => text,
            Step::Node { text, .. } => text,
        }
    }

    pub fn substeps(&self) -> &[Step] {
        match self {
            Step::Leaf(_) => &[],
            Step::Node { substeps, .. } => substeps,
        }
    }

    /// Number of nesting levels below and including this step.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        1 + self.substeps().iter().map(Step::depth).max().unwrap_or(0)
    }
}

impl From<&str> for Step {
    fn from(text: &str) -> Self {
        Step::Leaf(text.to_string())
    }
}

/// A single catalog entry.
///
/// Recipes are created once when the catalog is loaded and never mutated
/// afterwards. Catalogs written against the older schema without
/// `ingredients` and `steps` still load; both default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Time to make, in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_difficulty_round_trip_through_str() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.as_str().parse::<Difficulty>(), Ok(difficulty));
        }
        assert!("Easy".parse::<Difficulty>().is_err());
        assert!("quick".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_step_deserialize_mixed_list() {
        let yaml = indoc! {r#"
            - Preheat the oven
            - text: Prepare the dough
              substeps:
                - Mix flour and butter
                - text: Laminate
                  substeps:
                    - Fold
                    - Chill
        "#};

        let steps: Vec<Step> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], Step::Leaf("Preheat the oven".to_string()));
        assert_eq!(steps[1].text(), "Prepare the dough");
        assert_eq!(steps[1].substeps().len(), 2);
        assert_eq!(steps[1].substeps()[1].substeps()[1].text(), "Chill");
        assert_eq!(steps[1].depth(), 3);
        assert_eq!(steps[0].depth(), 1);
    }

    #[test]
    fn test_recipe_without_ingredients_or_steps() {
        let json = r#"{
            "id": 4,
            "title": "Greek Salad",
            "time": 15,
            "difficulty": "easy",
            "description": "Fresh vegetables and feta.",
            "category": "salad"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 4);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_recipe_rejects_unknown_difficulty() {
        let json = r#"{
            "id": 1, "title": "x", "time": 1, "difficulty": "extreme",
            "description": "", "category": "misc"
        }"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }
}
