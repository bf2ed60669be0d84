/// Error types for dashboard selection handling
use gmd_data::ProjectionError;
use gmd_model::{Dimension, ViewId};
use thiserror::Error;

/// A selection request the dashboard refused. Every variant is recoverable:
/// the owning view keeps its previous selection and projection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The value is outside the dataset's domain for that dimension
    #[error("'{value}' is not a valid {dimension} for the {view} view")]
    InvalidSelection {
        view: ViewId,
        dimension: Dimension,
        value: String,
    },

    /// The view has no such filter dimension
    #[error("the {view} view has no {dimension} filter")]
    UnsupportedDimension { view: ViewId, dimension: Dimension },

    /// The dataset offers no values for a dimension, so no default exists
    #[error("dataset has no {0} values to select from")]
    EmptyDomain(Dimension),

    /// The projection could not be computed from the selection
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Type alias for Results using SelectionError
pub type Result<T> = std::result::Result<T, SelectionError>;
