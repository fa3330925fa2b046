//! Fake service implementations for tests and offline runs.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::Recipe;

use super::{FoodCheck, RecipeSearch};

/// Treats every name as food. Used when no existence service is
/// configured, matching the fail-open policy.
#[derive(Debug, Default)]
pub struct AllowAllFoodCheck;

#[async_trait]
impl FoodCheck for AllowAllFoodCheck {
    async fn is_food(&self, _name: &str) -> Result<bool, ServiceError> {
        Ok(true)
    }
}

/// Food check with a fixed allowlist, or a permanent error when built
/// with [`FakeFoodCheck::failing`].
#[derive(Debug, Default)]
pub struct FakeFoodCheck {
    foods: HashSet<String>,
    fail: bool,
}

impl FakeFoodCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name the checker recognizes as food.
    pub fn with_food(mut self, name: &str) -> Self {
        self.foods.insert(name.to_lowercase());
        self
    }

    /// A checker whose every call errors, for exercising fail-open paths.
    pub fn failing() -> Self {
        FakeFoodCheck {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl FoodCheck for FakeFoodCheck {
    async fn is_food(&self, name: &str) -> Result<bool, ServiceError> {
        if self.fail {
            return Err(ServiceError::NotConfigured(
                "fake food check set to fail".to_string(),
            ));
        }
        Ok(self.foods.contains(&name.to_lowercase()))
    }
}

/// Recipe search returning canned recipes, or a permanent error when
/// built with [`FakeRecipeSearch::failing`]. The default instance returns
/// no recipes, which drives callers onto their fallback path.
#[derive(Debug, Default)]
pub struct FakeRecipeSearch {
    recipes: Vec<Recipe>,
    fail: bool,
}

impl FakeRecipeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    pub fn failing() -> Self {
        FakeRecipeSearch {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RecipeSearch for FakeRecipeSearch {
    async fn find_by_ingredients(
        &self,
        _ingredients: &[String],
        count: u32,
    ) -> Result<Vec<Recipe>, ServiceError> {
        if self.fail {
            return Err(ServiceError::NotConfigured(
                "fake recipe search set to fail".to_string(),
            ));
        }
        Ok(self.recipes.iter().take(count as usize).cloned().collect())
    }
}
