//! Recipe-quantity scaling.
//!
//! Scales a candidate recipe down (or up) to what is actually on hand.
//! The most constrained matched ingredient caps the whole recipe.
//!
//! Known limitation, kept deliberately: the fridge quantity and the
//! recipe amount are divided without checking unit compatibility, so 200
//! grams of egg against "4 count" scales by 50. [`scale_recipe_with`]
//! accepts a compatibility predicate for callers that want to opt out of
//! incompatible matches.

use crate::types::{FridgeItem, Recipe, RecipeIngredient, ScaledIngredient};

/// Parse a fridge quantity string ("200g", "150 ml", "2") into a number.
/// Unit suffixes `g` and `ml` are stripped; anything else fails the parse.
pub fn parse_fridge_quantity(text: &str) -> Option<f64> {
    let trimmed = text.trim().to_lowercase();
    let numeric = trimmed
        .strip_suffix("ml")
        .or_else(|| trimmed.strip_suffix('g'))
        .unwrap_or(&trimmed);
    numeric.trim().parse::<f64>().ok()
}

/// Scale with the default (always-compatible) predicate. This preserves
/// the documented unit-mismatch behavior.
pub fn scale_recipe(recipe: &Recipe, fridge_items: &[FridgeItem]) -> Vec<ScaledIngredient> {
    scale_recipe_with(recipe, fridge_items, |_, _| true)
}

/// Scale a recipe's ingredient amounts to the on-hand quantities.
///
/// Per ingredient, the first fridge item whose name is a case-insensitive
/// substring of the ingredient name (and passes `compatible`) supplies a
/// factor of `fridge_quantity / recipe_amount`. A matched quantity that
/// does not parse to a positive, finite factor degrades to `1.0`.
/// Unmatched ingredients contribute no factor. The overall scale is the
/// minimum factor, `1.0` when there are none, and is always positive.
pub fn scale_recipe_with<F>(
    recipe: &Recipe,
    fridge_items: &[FridgeItem],
    compatible: F,
) -> Vec<ScaledIngredient>
where
    F: Fn(&FridgeItem, &RecipeIngredient) -> bool,
{
    let mut factors = Vec::new();
    for ingredient in &recipe.used_ingredients {
        let ingredient_name = ingredient.name.to_lowercase();
        let matched = fridge_items.iter().find(|item| {
            ingredient_name.contains(&item.name.to_lowercase()) && compatible(item, ingredient)
        });

        if let Some(item) = matched {
            let factor = parse_fridge_quantity(&item.quantity)
                .map(|qty| qty / ingredient.amount)
                .filter(|f| f.is_finite() && *f > 0.0)
                .unwrap_or(1.0);
            factors.push(factor);
        }
    }

    let overall = if factors.is_empty() {
        1.0
    } else {
        factors.iter().copied().fold(f64::INFINITY, f64::min)
    };
    tracing::debug!(scale = overall, "scaled recipe to on-hand quantities");

    recipe
        .used_ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            name: ingredient.name.clone(),
            amount: format!("{:.2}", ingredient.amount * overall),
            unit: ingredient.unit.clone(),
        })
        .collect()
}
