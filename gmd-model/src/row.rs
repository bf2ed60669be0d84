use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of continents used by the Gapminder dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    Asia,
    Europe,
    Africa,
    Americas,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Asia,
        Continent::Europe,
        Continent::Africa,
        Continent::Americas,
        Continent::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = ParseError;

    /// Matches the dataset spelling, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::Continent(s.to_string()))
    }
}

/// A single country-year record of the Gapminder dataset.
///
/// Rows are validated when the dataset is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub country: String,
    pub continent: Continent,
    pub year: i32,
    /// Head count, never negative.
    pub population: u64,
    /// GDP per capita in inflation-adjusted dollars.
    pub gdp_per_capita: f64,
    /// Life expectancy at birth in years, strictly positive.
    pub life_expectancy: f64,
    /// ISO 3166-1 alpha-3 country code (e.g. "AFG").
    pub iso_alpha: String,
}
