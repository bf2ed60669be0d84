//! Event dispatch for the dashboard.
//!
//! Each input event maps to exactly one handler:
//!
//! | event | handler | recomputes |
//! |---|---|---|
//! | `SelectContinent { view, .. }` | `view`'s filter controller | `view`'s projection |
//! | `SelectYear { view, .. }` | `view`'s filter controller | `view`'s projection |
//! | `SelectVariable { .. }` | geographic filter controller | geographic projection |
//! | `SelectTab { .. }` | tab state machine | nothing |
//!
//! A rejected selection leaves the view's selection and last projection in
//! place and is reported as [`Outcome::Rejected`]; later events are handled
//! normally. Events are processed one at a time, in the order given.

use crate::error::{Result, SelectionError};
use crate::filter::{Change, FilterController, SelectionDefaults, SelectionOptions};
use crate::tabs::{PaneVisibility, TabState};
use gmd_data::{project, project_table, DatasetTable, Projection};
use gmd_model::{DimensionValue, Selection, TabId, ViewId};
use gmd_store::Dataset;
use serde::{Deserialize, Serialize, Serializer};
use std::rc::Rc;

/// An input event from the UI boundary.
///
/// Serialized with an `event` tag, e.g.
/// `{"event":"select_year","view":"population","year":1977}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SelectContinent { view: ViewId, continent: String },
    SelectYear { view: ViewId, year: i32 },
    /// Map variable and year, as picked from the map's two dropdowns.
    SelectVariable { year: i32, variable: String },
    SelectTab { tab: TabId },
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The view accepted the selection and its projection was replaced.
    /// `changed` is false when the selection equals the previous one.
    Recomputed {
        view: ViewId,
        selection: Selection,
        changed: bool,
    },
    TabSelected { from: TabId, to: TabId },
    /// Nothing changed.
    Rejected {
        view: ViewId,
        #[serde(serialize_with = "serialize_display")]
        error: SelectionError,
    },
}

fn serialize_display<S>(error: &SelectionError, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(error)
}

#[derive(Debug, Clone)]
struct ViewPane {
    controller: FilterController,
    projection: Projection,
    recomputes: u64,
}

impl ViewPane {
    fn new(view: ViewId, dataset: &Rc<Dataset>, defaults: &SelectionDefaults) -> Result<Self> {
        let controller = FilterController::with_defaults(view, Rc::clone(dataset), defaults)?;
        let projection = project(dataset, view, &controller.current_selection())?;
        Ok(Self {
            controller,
            projection,
            recomputes: 0,
        })
    }
}

/// Serializable view of the whole dashboard for the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub active_tab: TabId,
    pub panes: [PaneVisibility; 5],
    pub views: Vec<ViewSnapshot<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot<'a> {
    pub view: ViewId,
    pub selection: Selection,
    pub projection: &'a Projection,
}

/// The dashboard: one shared dataset, four chart views and the tab state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Rc<Dataset>,
    tabs: TabState,
    table: DatasetTable,
    population: ViewPane,
    economic: ViewPane,
    longevity: ViewPane,
    geographic: ViewPane,
}

impl Dashboard {
    pub fn new(dataset: Rc<Dataset>) -> Result<Self> {
        Self::with_defaults(dataset, &SelectionDefaults::default())
    }

    /// Build every view with its initial selection and projection.
    pub fn with_defaults(dataset: Rc<Dataset>, defaults: &SelectionDefaults) -> Result<Self> {
        let dashboard = Self {
            tabs: TabState::new(),
            table: project_table(&dataset),
            population: ViewPane::new(ViewId::Population, &dataset, defaults)?,
            economic: ViewPane::new(ViewId::Economic, &dataset, defaults)?,
            longevity: ViewPane::new(ViewId::Longevity, &dataset, defaults)?,
            geographic: ViewPane::new(ViewId::Geographic, &dataset, defaults)?,
            dataset,
        };
        log::info!(
            "[GMD] dashboard: ready with {} rows, active tab {}",
            dashboard.dataset.len(),
            dashboard.tabs.active()
        );
        Ok(dashboard)
    }

    /// Handle one event to completion.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        match event {
            Event::SelectContinent { view, continent } => {
                self.update_view(view, |c| Ok(vec![c.parse_continent(&continent)?]))
            }
            Event::SelectYear { view, year } => {
                self.update_view(view, |_| Ok(vec![DimensionValue::Year(year)]))
            }
            Event::SelectVariable { year, variable } => {
                self.update_view(ViewId::Geographic, |c| {
                    Ok(vec![c.parse_variable(&variable)?, DimensionValue::Year(year)])
                })
            }
            Event::SelectTab { tab } => {
                let transition = self.tabs.select(tab);
                log::info!(
                    "[GMD] dashboard: tab {} -> {}",
                    transition.from,
                    transition.to
                );
                Outcome::TabSelected {
                    from: transition.from,
                    to: transition.to,
                }
            }
        }
    }

    /// Handle events in order, returning one outcome per event.
    pub fn dispatch_all<I>(&mut self, events: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Event>,
    {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }

    pub fn select_continent(&mut self, view: ViewId, continent: &str) -> Outcome {
        self.dispatch(Event::SelectContinent {
            view,
            continent: continent.to_string(),
        })
    }

    pub fn select_year(&mut self, view: ViewId, year: i32) -> Outcome {
        self.dispatch(Event::SelectYear { view, year })
    }

    pub fn select_variable(&mut self, year: i32, variable: &str) -> Outcome {
        self.dispatch(Event::SelectVariable {
            year,
            variable: variable.to_string(),
        })
    }

    pub fn select_tab(&mut self, tab: TabId) -> Outcome {
        self.dispatch(Event::SelectTab { tab })
    }

    fn update_view<F>(&mut self, view: ViewId, values: F) -> Outcome
    where
        F: FnOnce(&FilterController) -> Result<Vec<DimensionValue>>,
    {
        match self.try_update_view(view, values) {
            Ok(Change { selection, changed }) => {
                log::debug!(
                    "[GMD] dashboard: recomputed {view} for {selection:?} (changed: {changed})"
                );
                Outcome::Recomputed {
                    view,
                    selection,
                    changed,
                }
            }
            Err(error) => {
                log::warn!("[GMD] dashboard: rejected update to {view}: {error}");
                Outcome::Rejected { view, error }
            }
        }
    }

    /// Compute the new projection before committing anything, so a failure
    /// at any step leaves the pane as it was.
    fn try_update_view<F>(&mut self, view: ViewId, values: F) -> Result<Change>
    where
        F: FnOnce(&FilterController) -> Result<Vec<DimensionValue>>,
    {
        let dataset = Rc::clone(&self.dataset);
        let pane = self.pane_mut(view);

        let values = values(&pane.controller)?;
        let candidate = pane.controller.candidate(&values)?;
        let projection = project(&dataset, view, &candidate)?;

        let change = pane.controller.commit(candidate);
        pane.projection = projection;
        pane.recomputes += 1;
        Ok(change)
    }

    fn pane(&self, view: ViewId) -> &ViewPane {
        match view {
            ViewId::Population => &self.population,
            ViewId::Economic => &self.economic,
            ViewId::Longevity => &self.longevity,
            ViewId::Geographic => &self.geographic,
        }
    }

    fn pane_mut(&mut self, view: ViewId) -> &mut ViewPane {
        match view {
            ViewId::Population => &mut self.population,
            ViewId::Economic => &mut self.economic,
            ViewId::Longevity => &mut self.longevity,
            ViewId::Geographic => &mut self.geographic,
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.tabs.active()
    }

    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    pub fn selection(&self, view: ViewId) -> Selection {
        self.pane(view).controller.current_selection()
    }

    pub fn projection(&self, view: ViewId) -> &Projection {
        &self.pane(view).projection
    }

    /// How many times the view's projection was recomputed after startup.
    pub fn recompute_count(&self, view: ViewId) -> u64 {
        self.pane(view).recomputes
    }

    /// The raw table for the dataset tab, computed once at startup.
    pub fn table(&self) -> &DatasetTable {
        &self.table
    }

    pub fn options(&self) -> SelectionOptions {
        SelectionOptions::from_dataset(&self.dataset)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            active_tab: self.tabs.active(),
            panes: self.tabs.visibility(),
            views: ViewId::ALL
                .into_iter()
                .map(|view| ViewSnapshot {
                    view,
                    selection: self.selection(view),
                    projection: self.projection(view),
                })
                .collect(),
        }
    }
}
