/// Error types for identifier parsing
use thiserror::Error;

/// Raised when a UI identifier does not name a known continent, view, tab or variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown continent '{0}'")]
    Continent(String),

    #[error("unknown view '{0}'")]
    View(String),

    #[error("unknown tab '{0}'")]
    Tab(String),

    #[error("unknown map variable '{0}'")]
    Variable(String),
}
