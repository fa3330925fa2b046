//! FoodKeeper shelf-life reference data.
//!
//! Wraps the USDA/FSIS FoodKeeper dataset (public domain): loading the
//! export format into typed catalog rows, matching food names against the
//! catalog, and resolving refrigerated shelf life into expiration dates.
//!
//! # Example
//!
//! ```no_run
//! use foodkeeper_data::{Catalog, shelf_life};
//!
//! let catalog = Catalog::global();
//! if let Some(row) = catalog.match_row("milk") {
//!     let today = chrono::Local::now().date_naive();
//!     let expires = shelf_life::expiration_date(row, today);
//!     println!("{expires:?}");
//! }
//! ```

pub mod catalog;
pub mod shelf_life;

pub use catalog::{Catalog, CatalogError, CatalogRow};
pub use shelf_life::{expiration_date, resolve, to_days, ShelfLifeInfo, ShelfLifeSource};
