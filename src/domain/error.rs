use thiserror::Error;

/// Transport-level failure while retrieving the settlement page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Endpoint returned HTTP {0}")]
    Status(u16),
}

/// The settlement markup did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Settlement table #{0} not found")]
    TableNotFound(String),

    #[error("Settlement table #{0} has no body")]
    MissingBody(String),

    #[error("Row {row}: expected at least 6 cells, found {found}")]
    ShortRow { row: usize, found: usize },

    #[error("Row {row}: no commodity name to carry forward")]
    MissingName { row: usize },

    #[error("Row {row}: empty due date")]
    EmptyDueDate { row: usize },

    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// A well-formed code that matched nothing in the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("No contract for acronym {acronym} and due date {due_date}")]
    Contract { acronym: String, due_date: String },

    /// Spot instruments never appear in the futures table.
    #[error("{code} is a spot market instrument")]
    SpotMarket { code: String },
}

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error(transparent)]
    NotFound(#[from] NotFound),
}

impl DomainError {
    /// Not-found and malformed codes are ordinary answers, not failures.
    pub fn is_expected(&self) -> bool {
        matches!(self, DomainError::InvalidCode(_) | DomainError::NotFound(_))
    }
}
