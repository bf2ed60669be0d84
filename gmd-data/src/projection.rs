use crate::models::{
    Aggregate, DatasetTable, EconomicProjection, GeographicProjection, LongevityProjection,
    MapPoint, PopulationProjection, PopulationSlice, Projection,
};
use crate::ProjectionError;
use gmd_model::{MapSelection, RegionSelection, Row, Selection, ViewId};
use gmd_store::Dataset;

/// Column headers of the dataset table, in display order.
pub const TABLE_COLUMNS: [&str; 7] = [
    "Country",
    "Continent",
    "Year",
    "Life Expectancy",
    "Population",
    "GDP per Capita",
    "ISO Alpha Country Code",
];

/// How many leading population slices the pie chart pulls out.
const HIGHLIGHTED_SLICES: usize = 3;

/// Rows of one continent and year, in dataset order.
fn region_rows<'a>(dataset: &'a Dataset, selection: &RegionSelection) -> Vec<&'a Row> {
    dataset.rows_where(|r| r.continent == selection.continent && r.year == selection.year)
}

/// Project any chart view from a selection of the matching shape.
pub fn project(
    dataset: &Dataset,
    view: ViewId,
    selection: &Selection,
) -> Result<Projection, ProjectionError> {
    let projection = match (view, selection) {
        (ViewId::Population, Selection::Region(s)) => {
            Projection::Population(project_population(dataset, s))
        }
        (ViewId::Economic, Selection::Region(s)) => {
            Projection::Economic(project_economic(dataset, s))
        }
        (ViewId::Longevity, Selection::Region(s)) => {
            Projection::Longevity(project_longevity(dataset, s))
        }
        (ViewId::Geographic, Selection::Map(s)) => {
            Projection::Geographic(project_geographic(dataset, s))
        }
        (view, Selection::Region(_)) => {
            return Err(ProjectionError::SelectionMismatch {
                view,
                found: "region",
            })
        }
        (view, Selection::Map(_)) => {
            return Err(ProjectionError::SelectionMismatch { view, found: "map" })
        }
    };
    log::debug!(
        "[GMD] projection: {} produced {} rows",
        view,
        projection.row_count()
    );
    Ok(projection)
}

/// Population distribution of one continent in one year.
///
/// Rows are sorted by population, largest first, and `total` is their sum.
/// An empty selection yields no rows and a total of zero.
pub fn project_population(dataset: &Dataset, selection: &RegionSelection) -> PopulationProjection {
    let mut rows = region_rows(dataset, selection);
    rows.sort_by(|a, b| b.population.cmp(&a.population));

    let total: u64 = rows.iter().map(|r| r.population).sum();
    let slices = rows
        .into_iter()
        .enumerate()
        .map(|(rank, row)| PopulationSlice {
            share: (total > 0).then(|| row.population as f64 / total as f64),
            highlighted: rank < HIGHLIGHTED_SLICES,
            row: row.clone(),
        })
        .collect();

    PopulationProjection {
        title: format!(
            "Population Distribution - {} {}",
            selection.continent, selection.year
        ),
        selection: *selection,
        rows: slices,
        total,
    }
}

/// GDP per capita of one continent in one year, richest first.
pub fn project_economic(dataset: &Dataset, selection: &RegionSelection) -> EconomicProjection {
    let mut rows = region_rows(dataset, selection);
    rows.sort_by(|a, b| b.gdp_per_capita.total_cmp(&a.gdp_per_capita));

    EconomicProjection {
        title: format!(
            "GDP per Capita & Life Expectancy - {} {}",
            selection.continent, selection.year
        ),
        selection: *selection,
        rows: rows.into_iter().cloned().collect(),
    }
}

/// Life expectancy ranking of one continent in one year, lowest first.
///
/// The average and maximum are `NoData` when nothing matches.
pub fn project_longevity(dataset: &Dataset, selection: &RegionSelection) -> LongevityProjection {
    let mut rows = region_rows(dataset, selection);
    rows.sort_by(|a, b| a.life_expectancy.total_cmp(&b.life_expectancy));

    let average = if rows.is_empty() {
        Aggregate::NoData
    } else {
        let sum: f64 = rows.iter().map(|r| r.life_expectancy).sum();
        Aggregate::Value(sum / rows.len() as f64)
    };
    // Ascending order puts the maximum last.
    let max = Aggregate::from(rows.last().map(|r| r.life_expectancy));

    LongevityProjection {
        title: format!(
            "Life Expectancy Ranking - {} {}",
            selection.continent, selection.year
        ),
        selection: *selection,
        rows: rows.into_iter().cloned().collect(),
        average,
        max,
    }
}

/// Every country in the selected year, valued by the selected variable.
///
/// Continent is not a filter here; rows keep dataset order.
pub fn project_geographic(dataset: &Dataset, selection: &MapSelection) -> GeographicProjection {
    let rows = dataset
        .rows_where(|r| r.year == selection.year)
        .into_iter()
        .map(|r| MapPoint {
            iso_alpha: r.iso_alpha.clone(),
            country: r.country.clone(),
            continent: r.continent,
            value: selection.variable.value_of(r),
        })
        .collect();

    GeographicProjection {
        title: format!("{} World Map - {}", selection.variable, selection.year),
        selection: *selection,
        rows,
    }
}

/// The full table for the dataset tab.
pub fn project_table(dataset: &Dataset) -> DatasetTable {
    DatasetTable {
        columns: TABLE_COLUMNS.to_vec(),
        rows: dataset.rows().to_vec(),
    }
}
