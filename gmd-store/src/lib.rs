//! Immutable in-memory store for the Gapminder dataset.
//!
//! The store is built once at startup from CSV (optionally gzip-compressed)
//! and exposes read-only queries to the projection functions and filter
//! controllers of the dashboard.
//!
//! # Usage
//!
//! ```rust
//! use gmd_store::Dataset;
//!
//! let csv = "Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code\n\
//!            Japan,Asia,1952,63.03,86459025,3216.956347,JPN\n";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.distinct_years(), &[1952]);
//! ```
//!
//! # Invariants
//!
//! - Every row's continent belongs to the closed [`Continent`] set.
//! - Every (country, year) pair is unique.
//! - The table is non-empty, so default selections always exist.
//!
//! Construction either validates the whole table or fails; a partially
//! loaded store is never observable.

pub mod error;
mod loader;
mod queries;

pub use error::{Result, StoreError};

use gmd_model::{Continent, Row};
use std::collections::{BTreeSet, HashSet};

/// The loaded dataset plus its precomputed option domains.
///
/// Share it between views behind an `Rc`; nothing in the public API can
/// mutate it once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    continents: Vec<Continent>,
    years: Vec<i32>,
}

impl Dataset {
    /// Build a dataset from already-typed rows, validating every invariant.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(StoreError::Empty);
        }

        let mut seen: HashSet<(&str, i32)> = HashSet::with_capacity(rows.len());
        let mut continents: Vec<Continent> = Vec::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();

        for (index, row) in rows.iter().enumerate() {
            let record = index + 1;
            validate_row(record, row)?;

            if !seen.insert((row.country.as_str(), row.year)) {
                return Err(StoreError::DuplicateRecord {
                    record,
                    country: row.country.clone(),
                    year: row.year,
                });
            }
            if !continents.contains(&row.continent) {
                continents.push(row.continent);
            }
            years.insert(row.year);
        }

        let years: Vec<i32> = years.into_iter().collect();
        log::info!(
            "[GMD] store: loaded {} rows ({} continents, {} years)",
            rows.len(),
            continents.len(),
            years.len()
        );

        Ok(Self {
            rows,
            continents,
            years,
        })
    }

    /// All rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn validate_row(record: usize, row: &Row) -> Result<()> {
    let invalid = |field: &'static str, value: String| StoreError::InvalidField {
        record,
        field,
        value,
    };

    if row.country.trim().is_empty() {
        return Err(invalid("country", row.country.clone()));
    }
    // Sign check also rejects -0.0, which would sort apart from 0.0.
    if !row.gdp_per_capita.is_finite() || row.gdp_per_capita.is_sign_negative() {
        return Err(invalid("GDP per capita", row.gdp_per_capita.to_string()));
    }
    if !row.life_expectancy.is_finite() || row.life_expectancy <= 0.0 {
        return Err(invalid("life expectancy", row.life_expectancy.to_string()));
    }
    if row.iso_alpha.len() != 3 || !row.iso_alpha.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(invalid("ISO alpha code", row.iso_alpha.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, continent: Continent, year: i32) -> Row {
        Row {
            country: country.to_string(),
            continent,
            year,
            population: 1_000,
            gdp_per_capita: 500.0,
            life_expectancy: 50.0,
            iso_alpha: "ABC".to_string(),
        }
    }

    #[test]
    fn from_rows_keeps_source_order() {
        let dataset = Dataset::from_rows(vec![
            row("B", Continent::Europe, 1957),
            row("A", Continent::Asia, 1952),
        ])
        .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].country, "B");
        assert_eq!(dataset.rows()[1].country, "A");
    }

    #[test]
    fn from_rows_rejects_empty_table() {
        assert!(matches!(Dataset::from_rows(Vec::new()), Err(StoreError::Empty)));
    }

    #[test]
    fn from_rows_rejects_duplicate_country_year() {
        let err = Dataset::from_rows(vec![
            row("A", Continent::Asia, 1952),
            row("B", Continent::Asia, 1952),
            row("A", Continent::Asia, 1952),
        ])
        .unwrap_err();
        match err {
            StoreError::DuplicateRecord {
                record,
                country,
                year,
            } => {
                assert_eq!(record, 3);
                assert_eq!(country, "A");
                assert_eq!(year, 1952);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_rows_rejects_non_positive_life_expectancy() {
        let mut bad = row("A", Continent::Asia, 1952);
        bad.life_expectancy = 0.0;
        let err = Dataset::from_rows(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidField {
                record: 1,
                field: "life expectancy",
                ..
            }
        ));
    }

    #[test]
    fn from_rows_rejects_nan_gdp() {
        let mut bad = row("A", Continent::Asia, 1952);
        bad.gdp_per_capita = f64::NAN;
        assert!(Dataset::from_rows(vec![bad]).is_err());
    }

    #[test]
    fn from_rows_rejects_negative_zero_gdp() {
        let mut bad = row("A", Continent::Asia, 1952);
        bad.gdp_per_capita = -0.0;
        let err = Dataset::from_rows(vec![row("B", Continent::Asia, 1952), bad]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidField {
                record: 2,
                field: "GDP per capita",
                ..
            }
        ));
    }

    #[test]
    fn from_rows_accepts_zero_gdp() {
        let mut zero = row("A", Continent::Asia, 1952);
        zero.gdp_per_capita = 0.0;
        assert!(Dataset::from_rows(vec![zero]).is_ok());
    }

    #[test]
    fn from_rows_rejects_malformed_iso_code() {
        let mut bad = row("A", Continent::Asia, 1952);
        bad.iso_alpha = "AF".to_string();
        assert!(Dataset::from_rows(vec![bad]).is_err());
    }
}
