//! External service clients.
//!
//! Trait-based abstractions over the food-existence and recipe-search
//! services, with production HTTP implementations and fakes for tests and
//! offline use. The traits are object safe so callers can hold a
//! `Box<dyn FoodCheck>` chosen at startup.

mod fake;
mod recipe_search;
mod usda;

pub use fake::{AllowAllFoodCheck, FakeFoodCheck, FakeRecipeSearch};
pub use recipe_search::{SpoonacularRecipeSearch, DEFAULT_RECIPE_BASE_URL};
pub use usda::{UsdaFoodCheck, DEFAULT_USDA_BASE_URL};

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::Recipe;

/// Answers "is this name a food?". Callers treat errors as fail-open.
#[async_trait]
pub trait FoodCheck: Send + Sync {
    async fn is_food(&self, name: &str) -> Result<bool, ServiceError>;
}

/// Finds candidate recipes for a set of ingredient names.
#[async_trait]
pub trait RecipeSearch: Send + Sync {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> Result<Vec<Recipe>, ServiceError>;
}
