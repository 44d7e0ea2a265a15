//! Load plan catalogs from CSV
//!
//! Expected header:
//! `id,name,provider,category,premium,coverage,features,rating,min_age,max_age,min_income,max_dependents,recommended`
//! with `features` pipe-separated.

use super::{AgeRange, Catalog, Category, InsurancePlan};
use crate::error::CatalogError;
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Raw CSV row matching the catalog columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    provider: String,
    category: String,
    premium: f64,
    coverage: f64,
    #[serde(default)]
    features: String,
    rating: f64,
    min_age: u8,
    max_age: u8,
    min_income: f64,
    max_dependents: u32,
    #[serde(default)]
    recommended: bool,
}

impl CsvRow {
    fn to_plan(self) -> Result<InsurancePlan, CatalogError> {
        let category: Category =
            self.category
                .parse()
                .map_err(|_| CatalogError::UnknownCategory {
                    id: self.id,
                    value: self.category.clone(),
                })?;

        let features = self
            .features
            .split('|')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        Ok(InsurancePlan {
            id: self.id,
            name: self.name,
            provider: self.provider,
            category,
            premium: self.premium,
            coverage: self.coverage,
            features,
            rating: self.rating,
            age_range: AgeRange::new(self.min_age, self.max_age),
            min_income: self.min_income,
            max_dependents: self.max_dependents,
            recommended: self.recommended,
        })
    }
}

/// Load a catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = load_catalog_from_reader(file)?;
    log::info!("Loaded {} plans from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load a catalog from any reader (e.g., string buffer, embedded asset).
/// Records are validated once all rows are parsed.
pub fn load_catalog_from_reader<R: std::io::Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan()?);
    }

    Catalog::new(plans)
}
