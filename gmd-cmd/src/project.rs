//! One-shot projection of a single view.

use gmd_dashboard::{Dashboard, Event, Outcome};
use gmd_data::Projection;
use gmd_model::ViewId;

/// Selection overrides for a one-shot projection. Unset fields keep the
/// view's initial selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRequest {
    pub view: ViewId,
    pub continent: Option<String>,
    pub year: Option<i32>,
    pub variable: Option<String>,
}

impl ProjectRequest {
    /// The events that turn the initial selection into the requested one.
    pub fn events(&self, current_year: i32) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(continent) = &self.continent {
            events.push(Event::SelectContinent {
                view: self.view,
                continent: continent.clone(),
            });
        }
        match (&self.variable, self.year) {
            (Some(variable), year) => events.push(Event::SelectVariable {
                year: year.unwrap_or(current_year),
                variable: variable.clone(),
            }),
            (None, Some(year)) => events.push(Event::SelectYear {
                view: self.view,
                year,
            }),
            (None, None) => {}
        }
        events
    }
}

/// Apply the request and return the resulting projection.
///
/// Unlike the interactive dispatcher, a rejected selection is an error here:
/// printing the default projection would silently answer a different question.
pub fn run_project<'a>(
    dashboard: &'a mut Dashboard,
    request: &ProjectRequest,
) -> anyhow::Result<&'a Projection> {
    if request.variable.is_some() && request.view != ViewId::Geographic {
        anyhow::bail!("--variable only applies to the geographic view");
    }

    let current_year = dashboard.selection(request.view).year();
    for event in request.events(current_year) {
        if let Outcome::Rejected { error, .. } = dashboard.dispatch(event) {
            anyhow::bail!(error);
        }
    }
    Ok(dashboard.projection(request.view))
}
