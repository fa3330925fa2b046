//! Expiring-item selection.

use chrono::NaiveDate;

use crate::types::{FoodItem, FridgeItem};

/// Default lookahead for "expiring soon".
pub const DEFAULT_HORIZON_DAYS: i64 = 2;

/// Anything with a concrete expiration date.
pub trait Expires {
    fn expiration_date(&self) -> NaiveDate;
}

impl Expires for FoodItem {
    fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }
}

impl Expires for FridgeItem {
    fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }
}

/// Items expiring within the horizon, inclusive on both ends. Already
/// past-due items (negative delta) and items beyond the horizon are
/// excluded.
pub fn expiring_soon<T: Expires>(items: Vec<T>, horizon_days: i64, today: NaiveDate) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| {
            let delta = (item.expiration_date() - today).num_days();
            (0..=horizon_days).contains(&delta)
        })
        .collect()
}
