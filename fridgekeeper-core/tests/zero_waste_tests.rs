//! Orchestrator tests: recommendation rendering and fallbacks.

use chrono::{NaiveDate, TimeDelta};
use fridgekeeper_core::{
    recommend, FakeRecipeSearch, FridgeItem, Recipe, RecipeIngredient, NO_EXPIRING_MESSAGE,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
}

fn item(name: &str, quantity: &str, delta_days: i64) -> FridgeItem {
    FridgeItem {
        name: name.to_string(),
        quantity: quantity.to_string(),
        expiration_date: today() + TimeDelta::days(delta_days),
    }
}

#[tokio::test]
async fn test_nothing_expiring() {
    let items = vec![item("milk", "500ml", 6), item("butter", "1", 30)];
    let search = FakeRecipeSearch::new();

    let text = recommend(items, &search, today()).await;
    assert_eq!(text, NO_EXPIRING_MESSAGE);
}

#[tokio::test]
async fn test_unknown_placeholders_are_ignored() {
    let items = vec![item("unknown", "1", 0), item("Unknown", "2", 1)];
    let search = FakeRecipeSearch::new();

    let text = recommend(items, &search, today()).await;
    assert_eq!(text, NO_EXPIRING_MESSAGE);
}

#[tokio::test]
async fn test_fallback_lists_items_and_dishes() {
    let items = vec![item("kale", "1 bunch", 1)];
    let search = FakeRecipeSearch::new();

    let text = recommend(items, &search, today()).await;
    assert!(text.contains("kale (1 bunch)"));
    assert!(text.contains("salad"));
    assert!(text.contains("stir-fry"));
    assert!(text.contains("smoothie"));
    assert!(text.contains("roasted vegetables"));
}

#[tokio::test]
async fn test_search_failure_uses_fallback() {
    let items = vec![item("kale", "1 bunch", 1)];
    let search = FakeRecipeSearch::failing();

    let text = recommend(items, &search, today()).await;
    assert!(text.contains("kale (1 bunch)"));
    assert!(text.contains("No recipes found"));
}

#[tokio::test]
async fn test_first_recipe_is_scaled_and_rendered() {
    let recipe = Recipe {
        title: "Spinach smoothie".to_string(),
        used_ingredients: vec![
            RecipeIngredient {
                name: "spinach".to_string(),
                amount: 100.0,
                unit: "g".to_string(),
            },
            RecipeIngredient {
                name: "milk".to_string(),
                amount: 500.0,
                unit: "ml".to_string(),
            },
        ],
        instructions: Some("Blend everything until smooth.".to_string()),
    };
    let second = Recipe {
        title: "Should not appear".to_string(),
        used_ingredients: vec![],
        instructions: None,
    };
    let search = FakeRecipeSearch::new().with_recipe(recipe).with_recipe(second);

    let items = vec![item("spinach", "50g", 1), item("milk", "500ml", 2)];
    let text = recommend(items, &search, today()).await;

    assert!(text.contains("Zero-waste pick: Spinach smoothie"));
    // Spinach is the constraint: 50/100 halves the whole recipe.
    assert!(text.contains("- 50.00 g spinach"));
    assert!(text.contains("- 250.00 ml milk"));
    assert!(text.contains("Blend everything until smooth."));
    assert!(!text.contains("Should not appear"));
}

#[tokio::test]
async fn test_recipe_without_instructions_gets_placeholder() {
    let recipe = Recipe {
        title: "Kale chips".to_string(),
        used_ingredients: vec![RecipeIngredient {
            name: "kale".to_string(),
            amount: 1.0,
            unit: "bunch".to_string(),
        }],
        instructions: None,
    };
    let search = FakeRecipeSearch::new().with_recipe(recipe);

    let items = vec![item("kale", "1 bunch", 0)];
    let text = recommend(items, &search, today()).await;

    assert!(text.contains("Zero-waste pick: Kale chips"));
    assert!(text.contains("No instructions provided. Improvise!"));
}

#[tokio::test]
async fn test_expired_items_do_not_drive_recommendations() {
    let items = vec![item("milk", "500ml", -1)];
    let search = FakeRecipeSearch::new();

    let text = recommend(items, &search, today()).await;
    assert_eq!(text, NO_EXPIRING_MESSAGE);
}
