//! Dashboard views and the tabs that display them.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A content pane of the dashboard. The `Dataset` tab shows the raw table;
/// every other tab shows exactly one chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Dataset,
    Population,
    Gdp,
    LifeExpectancy,
    ChoroplethMap,
}

impl TabId {
    /// Tabs in sidebar order.
    pub const ALL: [TabId; 5] = [
        TabId::Dataset,
        TabId::Population,
        TabId::Gdp,
        TabId::LifeExpectancy,
        TabId::ChoroplethMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Dataset => "dataset",
            TabId::Population => "population",
            TabId::Gdp => "gdp",
            TabId::LifeExpectancy => "life_expectancy",
            TabId::ChoroplethMap => "choropleth_map",
        }
    }

    /// The chart view shown by this tab, `None` for the dataset table.
    pub fn view(&self) -> Option<ViewId> {
        match self {
            TabId::Dataset => None,
            TabId::Population => Some(ViewId::Population),
            TabId::Gdp => Some(ViewId::Economic),
            TabId::LifeExpectancy => Some(ViewId::Longevity),
            TabId::ChoroplethMap => Some(ViewId::Geographic),
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = ParseError;

    /// Accepts the bare identifier or the sidebar button id (`"gdp-tab"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let id = trimmed.strip_suffix("-tab").unwrap_or(trimmed);
        TabId::ALL
            .into_iter()
            .find(|tab| tab.as_str() == id)
            .ok_or_else(|| ParseError::Tab(s.to_string()))
    }
}

/// A chart view with its own filter controls and projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Population,
    #[serde(alias = "gdp")]
    Economic,
    #[serde(alias = "life_expectancy")]
    Longevity,
    #[serde(alias = "choropleth_map")]
    Geographic,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [
        ViewId::Population,
        ViewId::Economic,
        ViewId::Longevity,
        ViewId::Geographic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Population => "population",
            ViewId::Economic => "economic",
            ViewId::Longevity => "longevity",
            ViewId::Geographic => "geographic",
        }
    }

    pub fn tab(&self) -> TabId {
        match self {
            ViewId::Population => TabId::Population,
            ViewId::Economic => TabId::Gdp,
            ViewId::Longevity => TabId::LifeExpectancy,
            ViewId::Geographic => TabId::ChoroplethMap,
        }
    }

    /// Whether the view filters by continent (all but the map do).
    pub fn has_continent(&self) -> bool {
        !matches!(self, ViewId::Geographic)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ParseError;

    /// Accepts view names as well as the id of the tab showing the view.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(view) = ViewId::ALL.into_iter().find(|v| v.as_str() == trimmed) {
            return Ok(view);
        }
        trimmed
            .parse::<TabId>()
            .ok()
            .and_then(|tab| tab.view())
            .ok_or_else(|| ParseError::View(s.to_string()))
    }
}
