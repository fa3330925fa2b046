//! Zero-waste recommendation orchestrator.
//!
//! Composes the expiry tracker, the recipe-search client, and the scaler
//! into one rendered recommendation. Every failure mode ends in readable
//! text: no expiring items, no recipes, and search errors all have fixed
//! renderings. The caller never sees an error from here.

use chrono::NaiveDate;

use crate::expiry::{expiring_soon, DEFAULT_HORIZON_DAYS};
use crate::scale::scale_recipe;
use crate::services::RecipeSearch;
use crate::types::{FridgeItem, Recipe};

/// How many candidate recipes to request; only the first is rendered.
pub const DEFAULT_RECIPE_COUNT: u32 = 3;

/// Fixed message when nothing is close to expiring.
pub const NO_EXPIRING_MESSAGE: &str = "No items are expiring soon. Nothing to rescue!";

const NO_INSTRUCTIONS_PLACEHOLDER: &str = "No instructions provided. Improvise!";

/// Recommend a recipe that uses up items expiring within the default
/// horizon, scaled to the quantities on hand.
pub async fn recommend(
    items: Vec<FridgeItem>,
    search: &dyn RecipeSearch,
    today: NaiveDate,
) -> String {
    // Vision models emit "unknown" for things they cannot label; those
    // placeholders are not ingredients.
    let known: Vec<FridgeItem> = items
        .into_iter()
        .filter(|item| !item.name.eq_ignore_ascii_case("unknown"))
        .collect();

    let expiring = expiring_soon(known, DEFAULT_HORIZON_DAYS, today);
    if expiring.is_empty() {
        return NO_EXPIRING_MESSAGE.to_string();
    }

    let names: Vec<String> = expiring.iter().map(|item| item.name.clone()).collect();
    let recipes = match search.find_by_ingredients(&names, DEFAULT_RECIPE_COUNT).await {
        Ok(recipes) => recipes,
        Err(error) => {
            tracing::warn!(%error, "recipe search unavailable, using fallback suggestions");
            Vec::new()
        }
    };

    match recipes.first() {
        Some(recipe) => render_recipe(recipe, &expiring),
        None => fallback_recommendation(&expiring),
    }
}

/// Deterministic fallback when no recipes come back: list the expiring
/// items and suggest generic dishes.
fn fallback_recommendation(expiring: &[FridgeItem]) -> String {
    let mut out = String::from("Use these up soon:\n");
    for item in expiring {
        out.push_str(&format!("- {} ({})\n", item.name, item.quantity));
    }
    out.push_str(
        "\nNo recipes found. Try a crisp salad, a quick stir-fry, a smoothie, \
         or roasted vegetables to use them up.",
    );
    out
}

fn render_recipe(recipe: &Recipe, expiring: &[FridgeItem]) -> String {
    let scaled = scale_recipe(recipe, expiring);

    let mut out = format!("Zero-waste pick: {}\n\nIngredients:\n", recipe.title);
    for ingredient in &scaled {
        out.push_str(&format!(
            "- {} {} {}\n",
            ingredient.amount, ingredient.unit, ingredient.name
        ));
    }
    out.push_str("\nInstructions:\n");
    out.push_str(
        recipe
            .instructions
            .as_deref()
            .unwrap_or(NO_INSTRUCTIONS_PLACEHOLDER),
    );
    out
}
