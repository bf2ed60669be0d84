//! Per-view selection value objects.
//!
//! A `Selection` is only ever replaced by the filter controller that owns it,
//! and always holds values drawn from the loaded dataset's domain.

use crate::row::Continent;
use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Continent + year filter used by the population, economic and longevity views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionSelection {
    pub continent: Continent,
    pub year: i32,
}

/// Variable + year filter used by the choropleth map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapSelection {
    pub variable: Variable,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Region(RegionSelection),
    Map(MapSelection),
}

impl Selection {
    pub fn year(&self) -> i32 {
        match self {
            Selection::Region(s) => s.year,
            Selection::Map(s) => s.year,
        }
    }

    pub fn continent(&self) -> Option<Continent> {
        match self {
            Selection::Region(s) => Some(s.continent),
            Selection::Map(_) => None,
        }
    }

    pub fn variable(&self) -> Option<Variable> {
        match self {
            Selection::Region(_) => None,
            Selection::Map(s) => Some(s.variable),
        }
    }
}

/// A filter dimension a view may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Continent,
    Year,
    Variable,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Continent => "continent",
            Dimension::Year => "year",
            Dimension::Variable => "variable",
        })
    }
}

/// A typed value for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionValue {
    Continent(Continent),
    Year(i32),
    Variable(Variable),
}

impl DimensionValue {
    pub fn dimension(&self) -> Dimension {
        match self {
            DimensionValue::Continent(_) => Dimension::Continent,
            DimensionValue::Year(_) => Dimension::Year,
            DimensionValue::Variable(_) => Dimension::Variable,
        }
    }
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionValue::Continent(c) => write!(f, "{c}"),
            DimensionValue::Year(y) => write!(f, "{y}"),
            DimensionValue::Variable(v) => write!(f, "{v}"),
        }
    }
}
