//! Per-view filter controllers.
//!
//! A `FilterController` owns the selection of one view. It validates every
//! requested value against the dataset's observed domain before accepting it,
//! so the selection it exposes is always satisfiable.

use crate::error::{Result, SelectionError};
use gmd_model::{
    Continent, Dimension, DimensionValue, MapSelection, RegionSelection, Selection, Variable,
    ViewId,
};
use gmd_store::Dataset;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Preferred initial values for new controllers.
///
/// A preference is only honoured when the dataset contains it; otherwise the
/// controller falls back to the first continent and earliest year of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDefaults {
    pub continent: Option<Continent>,
    pub year: Option<i32>,
    pub variable: Variable,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            continent: None,
            year: None,
            variable: Variable::LifeExpectancy,
        }
    }
}

/// Option lists a UI can offer without ever producing an invalid selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOptions {
    pub continents: Vec<Continent>,
    pub years: Vec<i32>,
    pub variables: Vec<Variable>,
}

impl SelectionOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            continents: dataset.distinct_continents().to_vec(),
            years: dataset.distinct_years().to_vec(),
            variables: Variable::ALL.to_vec(),
        }
    }
}

/// An accepted selection and whether it differs from the one it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Change {
    pub selection: Selection,
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct FilterController {
    view: ViewId,
    dataset: Rc<Dataset>,
    selection: Selection,
}

impl FilterController {
    /// Create a controller with defaults derived from the dataset.
    pub fn new(view: ViewId, dataset: Rc<Dataset>) -> Result<Self> {
        Self::with_defaults(view, dataset, &SelectionDefaults::default())
    }

    pub fn with_defaults(
        view: ViewId,
        dataset: Rc<Dataset>,
        defaults: &SelectionDefaults,
    ) -> Result<Self> {
        let year = resolve(
            defaults.year.filter(|y| dataset.has_year(*y)),
            dataset.distinct_years().first().copied(),
            Dimension::Year,
        )?;
        if let Some(preferred) = defaults.year.filter(|y| !dataset.has_year(*y)) {
            log::warn!("[GMD] filter: preferred year {preferred} not in dataset, using {year}");
        }

        let selection = if view.has_continent() {
            let continent = resolve(
                defaults.continent.filter(|c| dataset.has_continent(*c)),
                dataset.distinct_continents().first().copied(),
                Dimension::Continent,
            )?;
            if let Some(preferred) = defaults.continent.filter(|c| !dataset.has_continent(*c)) {
                log::warn!(
                    "[GMD] filter: preferred continent {preferred} not in dataset, using {continent}"
                );
            }
            Selection::Region(RegionSelection { continent, year })
        } else {
            Selection::Map(MapSelection {
                variable: defaults.variable,
                year,
            })
        };

        log::debug!("[GMD] filter: {view} starts at {selection:?}");
        Ok(Self {
            view,
            dataset,
            selection,
        })
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn current_selection(&self) -> Selection {
        self.selection
    }

    /// Dimensions this view can be filtered by.
    pub fn dimensions(&self) -> &'static [Dimension] {
        if self.view.has_continent() {
            &[Dimension::Continent, Dimension::Year]
        } else {
            &[Dimension::Variable, Dimension::Year]
        }
    }

    pub fn options(&self) -> SelectionOptions {
        let mut options = SelectionOptions::from_dataset(&self.dataset);
        if self.view.has_continent() {
            options.variables.clear();
        } else {
            options.continents.clear();
        }
        options
    }

    /// Validate and apply a single dimension value.
    ///
    /// On error the current selection is left untouched. Re-applying the
    /// current value is accepted and reported as unchanged.
    pub fn set_dimension(&mut self, value: DimensionValue) -> Result<Change> {
        self.set_dimensions(&[value])
    }

    /// Validate several values and apply them together, or none of them.
    pub fn set_dimensions(&mut self, values: &[DimensionValue]) -> Result<Change> {
        let candidate = self.candidate(values)?;
        Ok(self.commit(candidate))
    }

    /// Parse a continent name and apply it.
    pub fn select_continent(&mut self, continent: &str) -> Result<Change> {
        let value = self.parse_continent(continent)?;
        self.set_dimension(value)
    }

    pub fn select_year(&mut self, year: i32) -> Result<Change> {
        self.set_dimension(DimensionValue::Year(year))
    }

    /// Parse a variable label and apply it.
    pub fn select_variable(&mut self, variable: &str) -> Result<Change> {
        let value = self.parse_variable(variable)?;
        self.set_dimension(value)
    }

    /// Events must name a continent exactly as the dataset spells it.
    pub(crate) fn parse_continent(&self, raw: &str) -> Result<DimensionValue> {
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str() == raw)
            .map(DimensionValue::Continent)
            .ok_or_else(|| self.invalid(Dimension::Continent, raw.to_string()))
    }

    pub(crate) fn parse_variable(&self, raw: &str) -> Result<DimensionValue> {
        raw.parse::<Variable>()
            .map(DimensionValue::Variable)
            .map_err(|_| self.invalid(Dimension::Variable, raw.to_string()))
    }

    /// The selection that `values` would produce, without applying it.
    pub(crate) fn candidate(&self, values: &[DimensionValue]) -> Result<Selection> {
        let mut next = self.selection;
        for value in values {
            next = match (next, *value) {
                (Selection::Region(s), DimensionValue::Continent(continent)) => {
                    Selection::Region(RegionSelection { continent, ..s })
                }
                (Selection::Region(s), DimensionValue::Year(year)) => {
                    Selection::Region(RegionSelection { year, ..s })
                }
                (Selection::Map(s), DimensionValue::Variable(variable)) => {
                    Selection::Map(MapSelection { variable, ..s })
                }
                (Selection::Map(s), DimensionValue::Year(year)) => {
                    Selection::Map(MapSelection { year, ..s })
                }
                (_, other) => {
                    return Err(SelectionError::UnsupportedDimension {
                        view: self.view,
                        dimension: other.dimension(),
                    })
                }
            };
            self.validate(value)?;
        }
        Ok(next)
    }

    /// Replace the selection with one produced by [`candidate`](Self::candidate).
    pub(crate) fn commit(&mut self, selection: Selection) -> Change {
        let changed = selection != self.selection;
        self.selection = selection;
        Change { selection, changed }
    }

    fn validate(&self, value: &DimensionValue) -> Result<()> {
        let valid = match value {
            DimensionValue::Continent(c) => self.dataset.has_continent(*c),
            DimensionValue::Year(y) => self.dataset.has_year(*y),
            DimensionValue::Variable(_) => true,
        };
        if valid {
            Ok(())
        } else {
            Err(self.invalid(value.dimension(), value.to_string()))
        }
    }

    fn invalid(&self, dimension: Dimension, value: String) -> SelectionError {
        SelectionError::InvalidSelection {
            view: self.view,
            dimension,
            value,
        }
    }
}

fn resolve<T>(preferred: Option<T>, derived: Option<T>, dimension: Dimension) -> Result<T> {
    preferred
        .or(derived)
        .ok_or(SelectionError::EmptyDomain(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Country,Continent,Year,Life Expectancy,Population,GDP per Capita,ISO Alpha Country Code
Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG
Afghanistan,Asia,2007,43.828,31889923,974.5803384,AFG
Albania,Europe,1952,55.23,1282697,1601.056136,ALB
Albania,Europe,2007,76.423,3600523,5937.029526,ALB
";

    fn dataset() -> Rc<Dataset> {
        Rc::new(Dataset::from_csv_str(CSV).unwrap())
    }

    #[test]
    fn defaults_derive_from_dataset() {
        let controller = FilterController::new(ViewId::Population, dataset()).unwrap();
        assert_eq!(
            controller.current_selection(),
            Selection::Region(RegionSelection {
                continent: Continent::Asia,
                year: 1952,
            })
        );
    }

    #[test]
    fn map_defaults_to_life_expectancy() {
        let controller = FilterController::new(ViewId::Geographic, dataset()).unwrap();
        assert_eq!(
            controller.current_selection(),
            Selection::Map(MapSelection {
                variable: Variable::LifeExpectancy,
                year: 1952,
            })
        );
    }

    #[test]
    fn preferred_defaults_used_only_when_present() {
        let defaults = SelectionDefaults {
            continent: Some(Continent::Europe),
            year: Some(1899),
            variable: Variable::Population,
        };
        let controller =
            FilterController::with_defaults(ViewId::Economic, dataset(), &defaults).unwrap();
        assert_eq!(controller.current_selection().continent(), Some(Continent::Europe));
        assert_eq!(controller.current_selection().year(), 1952);
    }

    #[test]
    fn select_year_accepts_known_year() {
        let mut controller = FilterController::new(ViewId::Longevity, dataset()).unwrap();
        let change = controller.select_year(2007).unwrap();
        assert_eq!(change.selection.year(), 2007);
        assert!(change.changed);
        assert_eq!(controller.current_selection().year(), 2007);
    }

    #[test]
    fn select_year_rejects_unknown_year_and_keeps_state() {
        let mut controller = FilterController::new(ViewId::Population, dataset()).unwrap();
        controller.select_year(2007).unwrap();
        let before = controller.current_selection();

        let err = controller.select_year(1899).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidSelection {
                view: ViewId::Population,
                dimension: Dimension::Year,
                value: "1899".to_string(),
            }
        );
        assert_eq!(controller.current_selection(), before);
    }

    #[test]
    fn select_continent_rejects_absent_and_unknown_names() {
        let mut controller = FilterController::new(ViewId::Economic, dataset()).unwrap();
        let before = controller.current_selection();

        // Oceania is a real continent but not in this dataset.
        assert!(controller.select_continent("Oceania").is_err());
        assert!(controller.select_continent("Atlantis").is_err());
        assert_eq!(controller.current_selection(), before);

        // Close spellings are not substituted.
        for raw in ["EUROPE", "europe", " Europe"] {
            assert_eq!(
                controller.select_continent(raw).unwrap_err(),
                SelectionError::InvalidSelection {
                    view: ViewId::Economic,
                    dimension: Dimension::Continent,
                    value: raw.to_string(),
                }
            );
        }
        assert_eq!(controller.current_selection(), before);

        controller.select_continent("Europe").unwrap();
        assert_eq!(controller.current_selection().continent(), Some(Continent::Europe));
    }

    #[test]
    fn continent_is_not_a_map_dimension() {
        let mut controller = FilterController::new(ViewId::Geographic, dataset()).unwrap();
        let err = controller
            .set_dimension(DimensionValue::Continent(Continent::Asia))
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnsupportedDimension {
                view: ViewId::Geographic,
                dimension: Dimension::Continent,
            }
        );
    }

    #[test]
    fn reapplying_current_value_reports_unchanged() {
        let mut controller = FilterController::new(ViewId::Population, dataset()).unwrap();
        let before = controller.current_selection();

        let change = controller.select_continent("Asia").unwrap();
        assert_eq!(
            change,
            Change {
                selection: before,
                changed: false,
            }
        );

        let change = controller.select_continent("Europe").unwrap();
        assert!(change.changed);
        assert_eq!(change.selection.continent(), Some(Continent::Europe));
    }

    #[test]
    fn set_dimensions_is_all_or_nothing() {
        let mut controller = FilterController::new(ViewId::Geographic, dataset()).unwrap();
        let before = controller.current_selection();

        let result = controller.set_dimensions(&[
            DimensionValue::Variable(Variable::Population),
            DimensionValue::Year(1899),
        ]);
        assert!(result.is_err());
        assert_eq!(controller.current_selection(), before);

        controller.select_variable("GDP per Capita").unwrap();
        assert_eq!(
            controller.current_selection().variable(),
            Some(Variable::GdpPerCapita)
        );
    }

    #[test]
    fn options_come_from_dataset() {
        let region = FilterController::new(ViewId::Population, dataset()).unwrap();
        let options = region.options();
        assert_eq!(options.continents, vec![Continent::Asia, Continent::Europe]);
        assert_eq!(options.years, vec![1952, 2007]);
        assert!(options.variables.is_empty());
        assert_eq!(region.dimensions(), &[Dimension::Continent, Dimension::Year]);

        let map = FilterController::new(ViewId::Geographic, dataset()).unwrap();
        assert!(map.options().continents.is_empty());
        assert_eq!(map.options().variables.len(), 3);
    }
}
