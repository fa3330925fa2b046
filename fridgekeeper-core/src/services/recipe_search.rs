//! Recipe search against a Spoonacular-compatible API.

use std::env;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::Recipe;

use super::RecipeSearch;

pub const DEFAULT_RECIPE_BASE_URL: &str = "https://api.spoonacular.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Production recipe-search client using the `findByIngredients` endpoint.
/// Responses decode straight into [`Recipe`]; recipes from this endpoint
/// usually carry no instructions, which downstream rendering tolerates.
pub struct SpoonacularRecipeSearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularRecipeSearch {
    pub fn new(api_key: String) -> Result<Self, ServiceError> {
        Self::with_base_url(api_key, DEFAULT_RECIPE_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(SpoonacularRecipeSearch {
            client,
            api_key,
            base_url,
        })
    }

    /// Build from environment:
    /// - `SPOONACULAR_API_KEY` (required)
    /// - `SPOONACULAR_BASE_URL` (optional override)
    pub fn from_env() -> Result<Self, ServiceError> {
        let api_key = env::var("SPOONACULAR_API_KEY")
            .map_err(|_| ServiceError::NotConfigured("SPOONACULAR_API_KEY not set".to_string()))?;
        let base_url = env::var("SPOONACULAR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_RECIPE_BASE_URL.to_string());
        Self::with_base_url(api_key, base_url)
    }
}

#[async_trait]
impl RecipeSearch for SpoonacularRecipeSearch {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> Result<Vec<Recipe>, ServiceError> {
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let joined = ingredients.join(",");
        let number = count.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ingredients", joined.as_str()),
                ("number", number.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let recipes: Vec<Recipe> = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;
        tracing::debug!(ingredients = %joined, found = recipes.len(), "recipe search");
        Ok(recipes)
    }
}
