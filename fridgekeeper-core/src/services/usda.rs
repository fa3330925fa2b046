//! Food-existence check against USDA FoodData Central.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ServiceError;

use super::FoodCheck;

pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Production food-existence client. A name counts as food when a
/// FoodData Central search for it returns at least one hit.
pub struct UsdaFoodCheck {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<serde_json::Value>,
}

impl UsdaFoodCheck {
    pub fn new(api_key: String) -> Result<Self, ServiceError> {
        Self::with_base_url(api_key, DEFAULT_USDA_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(UsdaFoodCheck {
            client,
            api_key,
            base_url,
        })
    }

    /// Build from environment:
    /// - `USDA_API_KEY` (required)
    /// - `USDA_BASE_URL` (optional override)
    pub fn from_env() -> Result<Self, ServiceError> {
        let api_key = env::var("USDA_API_KEY")
            .map_err(|_| ServiceError::NotConfigured("USDA_API_KEY not set".to_string()))?;
        let base_url =
            env::var("USDA_BASE_URL").unwrap_or_else(|_| DEFAULT_USDA_BASE_URL.to_string());
        Self::with_base_url(api_key, base_url)
    }
}

#[async_trait]
impl FoodCheck for UsdaFoodCheck {
    async fn is_food(&self, name: &str) -> Result<bool, ServiceError> {
        let url = format!("{}/foods/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", name), ("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;
        tracing::debug!(name, hits = body.foods.len(), "food existence lookup");
        Ok(!body.foods.is_empty())
    }
}
