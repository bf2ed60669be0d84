//! Read-only query surface of the dataset store.
//!
//! Every query returns borrowed data in a deterministic order, so repeated
//! calls over the same store always agree.

use crate::Dataset;
use gmd_model::{Continent, Row};

impl Dataset {
    /// Rows satisfying `predicate`, in dataset order.
    pub fn rows_where<P>(&self, mut predicate: P) -> Vec<&Row>
    where
        P: FnMut(&Row) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).collect()
    }

    /// Continents present in the data, in order of first appearance.
    ///
    /// For the canonical Gapminder table this starts with Asia.
    pub fn distinct_continents(&self) -> &[Continent] {
        &self.continents
    }

    /// Years present in the data, ascending.
    pub fn distinct_years(&self) -> &[i32] {
        &self.years
    }

    pub fn has_continent(&self, continent: Continent) -> bool {
        self.continents.contains(&continent)
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}
