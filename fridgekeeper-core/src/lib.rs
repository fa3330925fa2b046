//! Fridgekeeper core pipeline.
//!
//! Turns unstructured evidence about food on hand (OCR receipt text,
//! vision-model item lists) into dated inventory records and recommends a
//! recipe that consumes the items closest to expiring, scaled to the
//! quantities actually available.
//!
//! The flow: raw text or recognized items -> [`normalize`] ->
//! catalog matching ([`foodkeeper_data::Catalog`]) -> shelf-life
//! resolution -> dated items ([`inventory`]) -> [`expiry`] ->
//! recipe search ([`services`]) -> [`scale`] -> rendered recommendation
//! ([`zero_waste`]).

pub mod error;
pub mod expiry;
pub mod inventory;
pub mod normalize;
pub mod receipt;
pub mod scale;
pub mod services;
pub mod types;
pub mod zero_waste;

pub use error::ServiceError;
pub use expiry::{expiring_soon, Expires, DEFAULT_HORIZON_DAYS};
pub use inventory::{date_item, date_items, food_expiration, DEFAULT_SHELF_LIFE_DAYS};
pub use normalize::normalize;
pub use receipt::{filter_food_items, parse_receipt, parse_receipt_text};
pub use scale::{parse_fridge_quantity, scale_recipe, scale_recipe_with};
pub use services::{
    AllowAllFoodCheck, FakeFoodCheck, FakeRecipeSearch, FoodCheck, RecipeSearch,
    SpoonacularRecipeSearch, UsdaFoodCheck,
};
pub use types::{
    FoodExpiration, FoodItem, FridgeItem, ParsedItem, ParsedReceipt, QuantityBucket, Recipe,
    RecipeIngredient, ScaledIngredient,
};
pub use zero_waste::{recommend, DEFAULT_RECIPE_COUNT, NO_EXPIRING_MESSAGE};
