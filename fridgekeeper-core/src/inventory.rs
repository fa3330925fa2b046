//! Inventory dating: parsed items to dated records.
//!
//! This is the step that guarantees the "every item has a concrete
//! expiration date" invariant. Catalog misses and rows without usable
//! shelf-life fields fall back to a fixed offset instead of propagating
//! an absent date.

use chrono::{NaiveDate, TimeDelta};
use foodkeeper_data::{shelf_life, Catalog};

use crate::normalize::normalize;
use crate::types::{FoodExpiration, FridgeItem, ParsedItem};

/// Fallback shelf life when the catalog cannot say.
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 7;

/// Date one parsed item: normalize, match, resolve, and fall back to
/// `today + DEFAULT_SHELF_LIFE_DAYS` when any step comes up empty.
pub fn date_item(item: &ParsedItem, catalog: &Catalog, today: NaiveDate) -> FridgeItem {
    let canonical = normalize(&item.name);
    let expiration_date = catalog
        .match_row(&canonical)
        .and_then(|row| shelf_life::expiration_date(row, today))
        .unwrap_or_else(|| fallback_date(today));

    FridgeItem {
        name: item.name.clone(),
        quantity: item.quantity.clone(),
        expiration_date,
    }
}

/// Date a batch of parsed items.
pub fn date_items(items: &[ParsedItem], catalog: &Catalog, today: NaiveDate) -> Vec<FridgeItem> {
    items
        .iter()
        .map(|item| date_item(item, catalog, today))
        .collect()
}

/// Shelf-life lookup report for a raw name. Unlike [`date_item`] this
/// applies no fallback; it reports exactly what the catalog knows.
pub fn food_expiration(raw_name: &str, catalog: &Catalog, today: NaiveDate) -> FoodExpiration {
    let canonical = normalize(raw_name);
    let row = catalog.match_row(&canonical);

    FoodExpiration {
        raw_name: raw_name.to_string(),
        expiration_date: row.and_then(|r| shelf_life::expiration_date(r, today)),
        product_found: row.is_some(),
        source: row.and_then(shelf_life::resolve).map(|info| info.source),
    }
}

fn fallback_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_signed(TimeDelta::days(DEFAULT_SHELF_LIFE_DAYS))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodkeeper_data::ShelfLifeSource;

    fn test_catalog() -> Catalog {
        Catalog::from_json(
            r#"{"sheets": [
                {"data": []},
                {"data": []},
                {"data": [
                    [{"Name": "banana"}, {"Refrigerate_Max": 5}, {"Refrigerate_Metric": "days"}],
                    [{"Name": "Bread"}, {"Keywords": "loaf"}]
                ]}
            ]}"#,
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_banana_scenario() {
        let catalog = test_catalog();
        let item = ParsedItem {
            name: "Fresh Organic Bananas".to_string(),
            quantity: "x3".to_string(),
        };
        let dated = date_item(&item, &catalog, today());
        assert_eq!(
            dated.expiration_date,
            NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
        );
        // The raw name is preserved; only matching uses the canonical form.
        assert_eq!(dated.name, "Fresh Organic Bananas");
    }

    #[test]
    fn test_fallback_when_unmatched() {
        let catalog = test_catalog();
        let item = ParsedItem {
            name: "mystery snack".to_string(),
            quantity: "1".to_string(),
        };
        let dated = date_item(&item, &catalog, today());
        assert_eq!(
            dated.expiration_date,
            NaiveDate::from_ymd_opt(2026, 8, 12).unwrap()
        );
    }

    #[test]
    fn test_fallback_when_row_has_no_shelf_life() {
        let catalog = test_catalog();
        let item = ParsedItem {
            name: "bread".to_string(),
            quantity: "1".to_string(),
        };
        let dated = date_item(&item, &catalog, today());
        assert_eq!(
            dated.expiration_date,
            NaiveDate::from_ymd_opt(2026, 8, 12).unwrap()
        );
    }

    #[test]
    fn test_empty_catalog_still_dates_everything() {
        let catalog = Catalog::empty();
        let items = vec![
            ParsedItem {
                name: "milk".to_string(),
                quantity: "16oz".to_string(),
            },
            ParsedItem {
                name: "kale".to_string(),
                quantity: "1".to_string(),
            },
        ];
        let dated = date_items(&items, &catalog, today());
        assert_eq!(dated.len(), 2);
        for item in dated {
            assert_eq!(
                item.expiration_date,
                NaiveDate::from_ymd_opt(2026, 8, 12).unwrap()
            );
        }
    }

    #[test]
    fn test_food_expiration_report_for_match() {
        let catalog = test_catalog();
        let report = food_expiration("bananas", &catalog, today());
        assert!(report.product_found);
        assert_eq!(report.source, Some(ShelfLifeSource::Refrigerate));
        assert_eq!(
            report.expiration_date,
            Some(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap())
        );
    }

    #[test]
    fn test_food_expiration_report_for_miss() {
        let catalog = test_catalog();
        let report = food_expiration("unicorn tears", &catalog, today());
        assert!(!report.product_found);
        assert_eq!(report.expiration_date, None);
        assert_eq!(report.source, None);
    }
}
