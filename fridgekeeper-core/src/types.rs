use chrono::NaiveDate;
use foodkeeper_data::ShelfLifeSource;
use serde::{Deserialize, Serialize};

/// One item as read off a receipt line or a vision-model entry.
/// The quantity is free text ("16oz", "x2", "1").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedItem {
    pub name: String,
    pub quantity: String,
}

/// Structured result of parsing one receipt's OCR text.
///
/// The date is the matched substring kept verbatim; calendar validation
/// is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedReceipt {
    pub store: Option<String>,
    pub date: Option<String>,
    pub items: Vec<ParsedItem>,
}

/// Coarse on-hand quantity, as stored with inventory records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityBucket {
    Small,
    #[default]
    Medium,
    Large,
}

impl QuantityBucket {
    /// Strict parse with a default: anything that is not one of the three
    /// bucket names comes back as `Medium`.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "small" => QuantityBucket::Small,
            "large" => QuantityBucket::Large,
            _ => QuantityBucket::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityBucket::Small => "small",
            QuantityBucket::Medium => "medium",
            QuantityBucket::Large => "large",
        }
    }
}

/// A finished inventory record, as handed to persistence. The expiration
/// date is always concrete; the dating step guarantees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub quantity: QuantityBucket,
    pub expiration_date: NaiveDate,
}

impl FoodItem {
    /// Build a record from free-text quantity, coercing it into a bucket.
    pub fn new(name: impl Into<String>, quantity: &str, expiration_date: NaiveDate) -> Self {
        FoodItem {
            name: name.into(),
            quantity: QuantityBucket::parse_or_default(quantity),
            expiration_date,
        }
    }
}

/// A dated on-hand item that still carries its free-text quantity.
/// This is what the orchestrator and the recipe scaler consume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FridgeItem {
    pub name: String,
    pub quantity: String,
    pub expiration_date: NaiveDate,
}

/// One ingredient of a candidate recipe, in the recipe-search service's
/// `usedIngredients` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// A candidate recipe from the recipe-search service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub title: String,
    #[serde(rename = "usedIngredients", default)]
    pub used_ingredients: Vec<RecipeIngredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// A scaled ingredient line, rendering-only. The amount is preformatted
/// to two decimal places.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScaledIngredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// Per-name shelf-life lookup report: what the catalog said, without any
/// fallback applied.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodExpiration {
    pub raw_name: String,
    pub expiration_date: Option<NaiveDate>,
    pub product_found: bool,
    pub source: Option<ShelfLifeSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_parse_or_default() {
        assert_eq!(QuantityBucket::parse_or_default("small"), QuantityBucket::Small);
        assert_eq!(QuantityBucket::parse_or_default("LARGE"), QuantityBucket::Large);
        assert_eq!(QuantityBucket::parse_or_default(" medium "), QuantityBucket::Medium);
        assert_eq!(QuantityBucket::parse_or_default("jumbo"), QuantityBucket::Medium);
        assert_eq!(QuantityBucket::parse_or_default(""), QuantityBucket::Medium);
    }

    #[test]
    fn test_food_item_coerces_bucket() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
        let item = FoodItem::new("milk", "16oz", date);
        assert_eq!(item.quantity, QuantityBucket::Medium);

        let item = FoodItem::new("milk", "large", date);
        assert_eq!(item.quantity, QuantityBucket::Large);
    }

    #[test]
    fn test_recipe_decodes_service_payload() {
        let json = r#"{
            "id": 654959,
            "title": "Pasta with kale",
            "usedIngredients": [
                {"id": 11233, "name": "kale", "amount": 2.0, "unit": "cups"}
            ]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Pasta with kale");
        assert_eq!(recipe.used_ingredients.len(), 1);
        assert_eq!(recipe.used_ingredients[0].unit, "cups");
        assert_eq!(recipe.instructions, None);
    }
}
