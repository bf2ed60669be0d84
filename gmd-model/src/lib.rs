//! Core types for the Gapminder dashboard.
//!
//! This crate provides:
//! - `row`: the immutable dataset record and its continent
//! - `variable`: the numeric fields a choropleth map can colour by
//! - `view`: dashboard views and the tabs that show them
//! - `selection`: per-view filter state value objects
//! - `error`: identifier parse failures

pub mod error;
pub mod row;
pub mod selection;
pub mod variable;
pub mod view;

pub use error::ParseError;
pub use row::{Continent, Row};
pub use selection::{Dimension, DimensionValue, MapSelection, RegionSelection, Selection};
pub use variable::Variable;
pub use view::{TabId, ViewId};
