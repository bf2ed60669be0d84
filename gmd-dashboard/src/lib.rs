//! Interactive state for the Gapminder dashboard.
//!
//! This crate provides:
//! - `filter`: one selection controller per chart view, validated against the dataset
//! - `tabs`: the single-active-tab state machine
//! - `dispatcher`: the `Dashboard`, routing input events to the narrowest recompute
//!
//! # Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use gmd_dashboard::{Dashboard, Outcome};
//! use gmd_model::{TabId, ViewId};
//! use gmd_store::Dataset;
//!
//! let csv = "Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code\n\
//!            Japan,Asia,1952,63.03,86459025,3216.956347,JPN\n";
//! let dataset = Rc::new(Dataset::from_csv_str(csv).unwrap());
//! let mut dashboard = Dashboard::new(dataset).unwrap();
//!
//! assert_eq!(dashboard.active_tab(), TabId::Dataset);
//! dashboard.select_tab(TabId::Gdp);
//! assert_eq!(dashboard.active_tab(), TabId::Gdp);
//!
//! let outcome = dashboard.select_year(ViewId::Population, 1899);
//! assert!(matches!(outcome, Outcome::Rejected { .. }));
//! ```

pub mod dispatcher;
pub mod error;
pub mod filter;
pub mod tabs;

pub use dispatcher::{Dashboard, Event, Outcome, Snapshot, ViewSnapshot};
pub use error::{Result, SelectionError};
pub use filter::{Change, FilterController, SelectionDefaults, SelectionOptions};
pub use tabs::{PaneVisibility, TabState, Transition};
