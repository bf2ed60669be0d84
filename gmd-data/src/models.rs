//! Projection result structs.
//!
//! All structs derive `Serialize` so the rendering layer can consume them as
//! JSON. A projection is a snapshot: it is replaced wholesale on every
//! recompute and never patched in place.

use gmd_model::{Continent, MapSelection, RegionSelection, Row};
use serde::Serialize;

/// An aggregate that may be undefined.
///
/// Averages and maxima over an empty row set are `NoData`, which is distinct
/// from zero and never represented as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Aggregate {
    NoData,
    Value(f64),
}

impl Aggregate {
    pub fn value(&self) -> Option<f64> {
        match self {
            Aggregate::NoData => None,
            Aggregate::Value(v) => Some(*v),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Aggregate::NoData)
    }
}

impl From<Option<f64>> for Aggregate {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Aggregate::NoData, Aggregate::Value)
    }
}

/// One slice of the population pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationSlice {
    #[serde(flatten)]
    pub row: Row,
    /// Fraction of the projection total, `None` when the total is zero.
    pub share: Option<f64>,
    /// Set on the three most populous countries, which the chart pulls out.
    pub highlighted: bool,
}

/// Countries of one continent and year, most populous first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationProjection {
    pub title: String,
    pub selection: RegionSelection,
    pub rows: Vec<PopulationSlice>,
    /// Sum of population over `rows`; zero for an empty projection.
    pub total: u64,
}

/// Countries of one continent and year, richest (GDP per capita) first.
///
/// Rows carry population and life expectancy so the chart can encode them as
/// bubble size and colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicProjection {
    pub title: String,
    pub selection: RegionSelection,
    pub rows: Vec<Row>,
}

/// Countries of one continent and year, shortest life expectancy first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongevityProjection {
    pub title: String,
    pub selection: RegionSelection,
    pub rows: Vec<Row>,
    /// Mean life expectancy over `rows`.
    pub average: Aggregate,
    /// Highest life expectancy over `rows`; the chart axis extends 10% past it.
    pub max: Aggregate,
}

/// A single country on the choropleth map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    /// ISO alpha-3 code the map is keyed on.
    pub iso_alpha: String,
    pub country: String,
    pub continent: Continent,
    /// Value of the selected variable.
    pub value: f64,
}

/// Every country in one year, valued by the selected variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeographicProjection {
    pub title: String,
    pub selection: MapSelection,
    pub rows: Vec<MapPoint>,
}

/// The raw table shown on the dataset tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

/// The projection of one chart view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Projection {
    Population(PopulationProjection),
    Economic(EconomicProjection),
    Longevity(LongevityProjection),
    Geographic(GeographicProjection),
}

impl Projection {
    pub fn title(&self) -> &str {
        match self {
            Projection::Population(p) => &p.title,
            Projection::Economic(p) => &p.title,
            Projection::Longevity(p) => &p.title,
            Projection::Geographic(p) => &p.title,
        }
    }

    /// Number of rows, whichever view produced the projection.
    pub fn row_count(&self) -> usize {
        match self {
            Projection::Population(p) => p.rows.len(),
            Projection::Economic(p) => p.rows.len(),
            Projection::Longevity(p) => p.rows.len(),
            Projection::Geographic(p) => p.rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_from_option() {
        assert_eq!(Aggregate::from(None), Aggregate::NoData);
        assert_eq!(Aggregate::from(Some(0.0)), Aggregate::Value(0.0));
        assert!(!Aggregate::Value(0.0).is_no_data());
    }

    #[test]
    fn aggregate_serializes_no_data_distinct_from_zero() {
        let none = serde_json::to_value(Aggregate::NoData).unwrap();
        let zero = serde_json::to_value(Aggregate::Value(0.0)).unwrap();
        assert_eq!(none, serde_json::json!({ "kind": "no_data" }));
        assert_eq!(zero, serde_json::json!({ "kind": "value", "value": 0.0 }));
    }
}
