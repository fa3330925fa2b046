//! FoodKeeper catalog loading and matching.
//!
//! The FoodKeeper export is a spreadsheet dump: a `sheets` array where the
//! product sheet holds rows, and each row is a list of single-key objects
//! (`[{"Name": "Milk"}, {"Keywords": "..."}, ...]`). Loading flattens each
//! row into one validated [`CatalogRow`] up front so nothing downstream
//! touches the loose wire shape.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Index of the product sheet in the FoodKeeper export.
const PRODUCT_SHEET_INDEX: usize = 2;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset has no product sheet at index {}", PRODUCT_SHEET_INDEX)]
    MissingProductSheet,
}

/// One food product from the FoodKeeper dataset, immutable once loaded.
///
/// Each `*_max`/`*_metric` pair describes a refrigerated shelf life under
/// one storage condition; any pair may be absent for a given product.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogRow {
    pub name: String,
    pub keywords: String,
    pub refrigerate_max: Option<f64>,
    pub refrigerate_metric: Option<String>,
    pub dop_refrigerate_max: Option<f64>,
    pub dop_refrigerate_metric: Option<String>,
    pub refrigerate_after_opening_max: Option<f64>,
    pub refrigerate_after_opening_metric: Option<String>,
}

#[derive(Deserialize)]
struct FoodKeeperFile {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Deserialize)]
struct Sheet {
    #[serde(default)]
    data: Vec<Vec<serde_json::Map<String, Value>>>,
}

fn number_field(cells: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    cells.get(key).and_then(Value::as_f64)
}

fn text_field(cells: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    cells
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

impl CatalogRow {
    /// Build a row from the flattened cell map. Rows without a usable
    /// `Name` are not products and are skipped by the loader.
    fn from_cells(cells: &serde_json::Map<String, Value>) -> Option<Self> {
        let name = text_field(cells, "Name").filter(|n| !n.trim().is_empty())?;

        Some(CatalogRow {
            name,
            keywords: text_field(cells, "Keywords").unwrap_or_default(),
            refrigerate_max: number_field(cells, "Refrigerate_Max"),
            refrigerate_metric: text_field(cells, "Refrigerate_Metric"),
            dop_refrigerate_max: number_field(cells, "DOP_Refrigerate_Max"),
            dop_refrigerate_metric: text_field(cells, "DOP_Refrigerate_Metric"),
            refrigerate_after_opening_max: number_field(cells, "Refrigerate_After_Opening_Max"),
            refrigerate_after_opening_metric: text_field(
                cells,
                "Refrigerate_After_Opening_Metric",
            ),
        })
    }
}

/// The loaded product catalog. Row order is dataset order and matching
/// depends on it: the first satisfying row wins.
#[derive(Debug, Default)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// A catalog with no rows. Every lookup misses.
    pub fn empty() -> Self {
        Catalog { rows: Vec::new() }
    }

    /// Parse a FoodKeeper export from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: FoodKeeperFile = serde_json::from_str(text)?;
        let sheet = file
            .sheets
            .into_iter()
            .nth(PRODUCT_SHEET_INDEX)
            .ok_or(CatalogError::MissingProductSheet)?;

        let rows: Vec<CatalogRow> = sheet
            .data
            .iter()
            .filter_map(|row| {
                // Flatten the list of single-key objects into one cell map.
                let mut cells = serde_json::Map::new();
                for entry in row {
                    for (key, value) in entry {
                        cells.insert(key.clone(), value.clone());
                    }
                }
                CatalogRow::from_cells(&cells)
            })
            .collect();

        Ok(Catalog { rows })
    }

    /// Load a FoodKeeper export from a file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The process-wide catalog handle.
    ///
    /// Loaded at most once: concurrent first callers are serialized by the
    /// cell and all observe the same immutable rows. The dataset path comes
    /// from `FOODKEEPER_DATA` if set, otherwise the bundled copy. A missing
    /// or unreadable dataset degrades to an empty catalog so downstream
    /// matching reports "no match" instead of failing.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            let path = env::var("FOODKEEPER_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| bundled_data_path());

            match Catalog::from_path(&path) {
                Ok(catalog) => {
                    tracing::debug!(
                        path = %path.display(),
                        products = catalog.len(),
                        "loaded FoodKeeper dataset"
                    );
                    catalog
                }
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "FoodKeeper dataset unavailable, catalog matching disabled"
                    );
                    Catalog::empty()
                }
            }
        })
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Match a canonical (already normalized) food name to a product row.
    ///
    /// Rows are scanned in dataset order. Per row: exact name equality,
    /// then exact membership in the comma-separated keyword list, then
    /// substring containment between the canonical name and the name or
    /// keyword fields. The first satisfying row wins; `None` is a normal
    /// outcome.
    pub fn match_row(&self, canonical: &str) -> Option<&CatalogRow> {
        for row in &self.rows {
            let name = row.name.to_lowercase();
            if canonical == name {
                tracing::debug!(product = %row.name, "exact name match");
                return Some(row);
            }

            let keywords = row.keywords.to_lowercase();
            if !keywords.is_empty()
                && keywords.split(',').map(str::trim).any(|k| k == canonical)
            {
                tracing::debug!(product = %row.name, "keyword match");
                return Some(row);
            }

            // Containment runs in both directions on the name so plural
            // raw names still land on singular product names.
            if name.contains(canonical)
                || keywords.contains(canonical)
                || (!name.is_empty() && canonical.contains(&name))
            {
                tracing::debug!(product = %row.name, "partial match");
                return Some(row);
            }
        }

        tracing::debug!(name = canonical, "no catalog match");
        None
    }
}

fn bundled_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/foodkeeper.json")
}
