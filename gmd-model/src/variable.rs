//! Numeric row fields a choropleth map can be coloured by.

use crate::error::ParseError;
use crate::row::Row;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    #[serde(rename = "Population")]
    Population,
    #[serde(rename = "GDP per Capita", alias = "GDPPerCapita", alias = "gdp_per_capita")]
    GdpPerCapita,
    #[serde(rename = "Life Expectancy", alias = "LifeExpectancy", alias = "life_expectancy")]
    LifeExpectancy,
}

impl Variable {
    /// Dropdown order of the map variable selector.
    pub const ALL: [Variable; 3] = [
        Variable::Population,
        Variable::GdpPerCapita,
        Variable::LifeExpectancy,
    ];

    /// Column label as it appears in the dataset header.
    pub fn label(&self) -> &'static str {
        match self {
            Variable::Population => "Population",
            Variable::GdpPerCapita => "GDP per Capita",
            Variable::LifeExpectancy => "Life Expectancy",
        }
    }

    /// Read this variable's value from a row.
    pub fn value_of(&self, row: &Row) -> f64 {
        match self {
            Variable::Population => row.population as f64,
            Variable::GdpPerCapita => row.gdp_per_capita,
            Variable::LifeExpectancy => row.life_expectancy,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Population" | "population" | "pop" => Ok(Variable::Population),
            "GDP per Capita" | "GDPPerCapita" | "gdp_per_capita" | "gdpPercap" => {
                Ok(Variable::GdpPerCapita)
            }
            "Life Expectancy" | "LifeExpectancy" | "life_expectancy" | "lifeExp" => {
                Ok(Variable::LifeExpectancy)
            }
            _ => Err(ParseError::Variable(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Continent;

    fn sample_row() -> Row {
        Row {
            country: "India".to_string(),
            continent: Continent::Asia,
            year: 1952,
            population: 372_000_000,
            gdp_per_capita: 546.5657493,
            life_expectancy: 37.373,
            iso_alpha: "IND".to_string(),
        }
    }

    #[test]
    fn value_of_reads_matching_field() {
        let row = sample_row();
        assert_eq!(Variable::Population.value_of(&row), 372_000_000.0);
        assert_eq!(Variable::GdpPerCapita.value_of(&row), 546.5657493);
        assert_eq!(Variable::LifeExpectancy.value_of(&row), 37.373);
    }

    #[test]
    fn parses_labels_and_identifiers() {
        assert_eq!("GDP per Capita".parse::<Variable>().unwrap(), Variable::GdpPerCapita);
        assert_eq!("GDPPerCapita".parse::<Variable>().unwrap(), Variable::GdpPerCapita);
        assert_eq!("lifeExp".parse::<Variable>().unwrap(), Variable::LifeExpectancy);
        assert!("Rainfall".parse::<Variable>().is_err());
    }

    #[test]
    fn serde_uses_column_labels() {
        let json = serde_json::to_string(&Variable::LifeExpectancy).unwrap();
        assert_eq!(json, "\"Life Expectancy\"");
        let parsed: Variable = serde_json::from_str("\"GDPPerCapita\"").unwrap();
        assert_eq!(parsed, Variable::GdpPerCapita);
    }
}
