use crate::model::{Difficulty, Recipe, RecipeId, RecipeStore, Step};

fn node(text: &str, substeps: &[&str]) -> Step {
    Step::Node {
        text: text.to_string(),
        substeps: substeps.iter().map(|s| Step::from(*s)).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: RecipeId,
    title: &str,
    time: u32,
    difficulty: Difficulty,
    description: &str,
    category: &str,
    ingredients: &[&str],
    steps: Vec<Step>,
) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        time,
        difficulty,
        description: description.to_string(),
        category: category.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps,
    }
}

/// The built-in demo catalog.
pub fn sample_catalog() -> RecipeStore {
    RecipeStore::from_unique(vec![
        recipe(
            1,
            "Classic Spaghetti Carbonara",
            25,
            Difficulty::Easy,
            "A creamy Italian pasta dish made with eggs, cheese, pancetta, and black pepper.",
            "pasta",
            &["400g spaghetti", "4 egg yolks", "100g pecorino", "150g pancetta", "Black pepper"],
            vec![
                "Boil the spaghetti in salted water".into(),
                "Crisp the pancetta in a dry pan".into(),
                node(
                    "Make the sauce",
                    &["Whisk yolks with grated pecorino", "Season with black pepper"],
                ),
                "Toss pasta off the heat with sauce and pancetta".into(),
            ],
        ),
        recipe(
            2,
            "Chicken Tikka Masala",
            45,
            Difficulty::Medium,
            "Tender chicken pieces in a creamy, spiced tomato sauce.",
            "curry",
            &["600g chicken thighs", "Yogurt", "Garam masala", "Crushed tomatoes", "Cream"],
            vec![
                node("Marinate the meat", &["Mix yogurt and spices", "Coat and rest 20 minutes"]),
                "Grill until charred".into(),
                "Simmer tomatoes and cream, then add the meat".into(),
            ],
        ),
        recipe(
            3,
            "Homemade Croissants",
            180,
            Difficulty::Hard,
            "Buttery, flaky French pastries that require patience but deliver amazing results.",
            "baking",
            &["500g flour", "280g cold butter", "Milk", "Yeast", "Sugar", "Salt"],
            vec![
                "Make the dough and chill overnight".into(),
                Step::Node {
                    text: "Laminate".to_string(),
                    substeps: vec![
                        "Enclose the butter block".into(),
                        node("Give three letter folds", &["Roll out", "Fold in thirds", "Chill 30 minutes"]),
                    ],
                },
                "Shape, proof and bake at 200C".into(),
            ],
        ),
        recipe(
            4,
            "Greek Salad",
            15,
            Difficulty::Easy,
            "Fresh vegetables, feta cheese, and olives tossed in olive oil and herbs.",
            "salad",
            &["Tomatoes", "Cucumber", "Red onion", "Feta", "Kalamata olives", "Oregano"],
            vec![
                "Chop the vegetables".into(),
                "Top with feta and olives".into(),
                "Dress with olive oil and oregano".into(),
            ],
        ),
        recipe(
            5,
            "Beef Wellington",
            120,
            Difficulty::Hard,
            "Tender beef fillet coated with mushroom duxelles and wrapped in puff pastry.",
            "meat",
            &["Beef fillet", "Mushrooms", "Prosciutto", "Puff pastry", "Dijon mustard"],
            vec![
                "Sear the fillet and brush with mustard".into(),
                node("Make the duxelles", &["Chop mushrooms finely", "Cook until dry"]),
                "Wrap in prosciutto and pastry".into(),
                "Bake until golden and rest".into(),
            ],
        ),
        recipe(
            6,
            "Vegetable Stir Fry",
            20,
            Difficulty::Easy,
            "Colorful mixed vegetables cooked quickly in a savory sauce.",
            "vegetarian",
            &["Broccoli", "Bell peppers", "Snap peas", "Soy sauce", "Garlic", "Ginger"],
            vec![
                "Prep all vegetables".into(),
                "Stir fry on high heat".into(),
                "Add sauce and toss".into(),
            ],
        ),
        recipe(
            7,
            "Pad Thai",
            30,
            Difficulty::Medium,
            "Thai stir-fried rice noodles with shrimp, peanuts, and tangy tamarind sauce.",
            "noodles",
            &["Rice noodles", "Shrimp", "Eggs", "Tamarind paste", "Peanuts", "Bean sprouts"],
            vec![
                "Soak the noodles".into(),
                node("Cook", &["Fry shrimp", "Scramble eggs", "Add noodles and sauce"]),
                "Finish with peanuts and sprouts".into(),
            ],
        ),
        recipe(
            8,
            "Margherita Pizza",
            60,
            Difficulty::Medium,
            "Classic Italian pizza with fresh mozzarella, tomatoes, and basil.",
            "pizza",
            &["Pizza dough", "San Marzano tomatoes", "Fresh mozzarella", "Basil", "Olive oil"],
            vec![
                "Stretch the dough".into(),
                "Top with tomatoes and mozzarella".into(),
                "Bake on a hot stone, finish with basil".into(),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let store = sample_catalog();
        assert_eq!(store.len(), 8);
        assert!(RecipeStore::new(store.recipes().to_vec()).is_ok());
        assert!(store.recipes().iter().all(|r| !r.steps.is_empty()));
        assert_eq!(store.get(3).unwrap().steps[1].depth(), 3);
    }
}
