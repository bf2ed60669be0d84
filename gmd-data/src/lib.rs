//! Projection functions for the Gapminder dashboard.
//!
//! Each chart view turns the shared [`Dataset`](gmd_store::Dataset) and its
//! current selection into a chart-ready table. Projections are pure: the same
//! dataset and selection always produce the same rows in the same order.
//!
//! | view | filter | order | aggregates |
//! |---|---|---|---|
//! | population | continent + year | population desc | total |
//! | economic | continent + year | GDP per capita desc | none |
//! | longevity | continent + year | life expectancy asc | average, max |
//! | geographic | year | dataset order | none |
//!
//! All sorts are stable, so rows with equal keys keep their dataset order.

pub mod models;
mod projection;

pub use models::{
    Aggregate, DatasetTable, EconomicProjection, GeographicProjection, LongevityProjection,
    MapPoint, PopulationProjection, PopulationSlice, Projection,
};
pub use projection::{
    project, project_economic, project_geographic, project_longevity, project_population,
    project_table, TABLE_COLUMNS,
};

use gmd_model::ViewId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The selection shape does not belong to the requested view
    #[error("{view} view cannot be projected from a {found} selection")]
    SelectionMismatch { view: ViewId, found: &'static str },
}
