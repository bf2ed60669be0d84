//! CSV loading for the dataset store.
//!
//! Accepts the Gapminder table with either the "pretty" column names used by
//! the dashboard or the raw short names:
//!
//! ```text
//! Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code
//! country,continent,year,lifeExp,pop,gdpPercap,iso_alpha
//! ```
//!
//! Column order does not matter and extra columns (numeric ISO code,
//! centroids) are ignored. Files ending in `.gz` are decompressed on the fly.

use crate::error::{Result, StoreError};
use crate::Dataset;
use flate2::read::GzDecoder;
use gmd_model::{Continent, Row};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One CSV record before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Country", alias = "country")]
    country: String,
    #[serde(rename = "Continent", alias = "continent")]
    continent: String,
    // "1952" or a date such as "1952-01-01"
    #[serde(rename = "Year", alias = "year")]
    year: String,
    #[serde(rename = "Population", alias = "pop")]
    population: f64,
    #[serde(rename = "GDP per Capita", alias = "gdpPercap")]
    gdp_per_capita: f64,
    #[serde(rename = "Life Expectancy", alias = "lifeExp")]
    life_expectancy: f64,
    #[serde(rename = "ISO Alpha Country Code", alias = "iso_alpha")]
    iso_alpha: String,
}

impl RawRecord {
    fn into_row(self, record: usize) -> Result<Row> {
        let continent: Continent =
            self.continent
                .parse()
                .map_err(|_| StoreError::InvalidField {
                    record,
                    field: "continent",
                    value: self.continent.clone(),
                })?;

        let year = self
            .year
            .split('-')
            .next()
            .and_then(|y| y.trim().parse::<i32>().ok())
            .ok_or_else(|| StoreError::InvalidField {
                record,
                field: "year",
                value: self.year.clone(),
            })?;

        let p = self.population;
        if !p.is_finite() || p < 0.0 || p.fract() != 0.0 {
            return Err(StoreError::InvalidField {
                record,
                field: "population",
                value: p.to_string(),
            });
        }

        Ok(Row {
            country: self.country,
            continent,
            year,
            population: p as u64,
            gdp_per_capita: self.gdp_per_capita,
            life_expectancy: self.life_expectancy,
            iso_alpha: self.iso_alpha,
        })
    }
}

impl Dataset {
    /// Load the dataset from a CSV string (with headers).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any CSV byte stream (with headers).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (index, result) in rdr.deserialize::<RawRecord>().enumerate() {
            let raw = result?;
            rows.push(raw.into_row(index + 1)?);
        }
        log::debug!("[GMD] loader: parsed {} records", rows.len());

        Self::from_rows(rows)
    }

    /// Load the dataset from a file. Paths ending in `.gz` are treated as
    /// gzip-compressed CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let gzipped = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        log::info!(
            "[GMD] loader: reading {}{}",
            path.display(),
            if gzipped { " (gzip)" } else { "" }
        );

        if gzipped {
            Self::from_reader(GzDecoder::new(reader))
        } else {
            Self::from_reader(reader)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dataset, StoreError};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use gmd_model::Continent;
    use std::io::Write;

    const PRETTY_CSV: &str = "\
Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code,ISO Numeric Country Code
Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4
Albania,Europe,1952,55.23,1282697,1601.056136,ALB,8
";

    #[test]
    fn load_pretty_headers_ignoring_extra_columns() {
        let dataset = Dataset::from_csv_str(PRETTY_CSV).unwrap();
        assert_eq!(dataset.len(), 2);
        let first = &dataset.rows()[0];
        assert_eq!(first.country, "Afghanistan");
        assert_eq!(first.continent, Continent::Asia);
        assert_eq!(first.population, 8_425_333);
        assert_eq!(first.iso_alpha, "AFG");
    }

    #[test]
    fn load_raw_headers_in_any_order() {
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
Zimbabwe,Africa,2007,43.487,12311143,469.7092981,ZWE,716
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let row = &dataset.rows()[0];
        assert_eq!(row.year, 2007);
        assert_eq!(row.continent, Continent::Africa);
        assert!((row.life_expectancy - 43.487).abs() < f64::EPSILON);
    }

    #[test]
    fn load_accepts_date_years_and_float_population() {
        let csv = "\
Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code
Japan,Asia,1952-01-01,63.03,86459025.0,3216.956347,JPN
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(dataset.rows()[0].year, 1952);
        assert_eq!(dataset.rows()[0].population, 86_459_025);
    }

    #[test]
    fn load_rejects_unknown_continent() {
        let csv = "\
Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code
Japan,Asia,1952,63.03,86459025,3216.956347,JPN
Atlantis,Atlantic,1952,90.0,1000,1.0,ATL
";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        match err {
            StoreError::InvalidField {
                record,
                field,
                value,
            } => {
                assert_eq!(record, 2);
                assert_eq!(field, "continent");
                assert_eq!(value, "Atlantic");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_rejects_negative_population() {
        let csv = "\
Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code
Japan,Asia,1952,63.03,-5,3216.956347,JPN
";
        assert!(matches!(
            Dataset::from_csv_str(csv),
            Err(StoreError::InvalidField {
                field: "population",
                ..
            })
        ));
    }

    #[test]
    fn load_rejects_missing_column() {
        let csv = "Country,Continent,Year\nJapan,Asia,1952\n";
        assert!(matches!(
            Dataset::from_csv_str(csv),
            Err(StoreError::CsvParse(_))
        ));
    }

    #[test]
    fn load_rejects_header_only_file() {
        let csv = "Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code\n";
        assert!(matches!(Dataset::from_csv_str(csv), Err(StoreError::Empty)));
    }

    #[test]
    fn load_from_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapminder.csv");
        std::fs::write(&path, PRETTY_CSV).unwrap();

        let dataset = Dataset::from_path(&path).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn load_from_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapminder.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(PRETTY_CSV.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let dataset = Dataset::from_path(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[1].country, "Albania");
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = Dataset::from_path("/nonexistent/gapminder.csv").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/gapminder.csv"));
    }
}
