//! Error types for scenario and allocation operations.

use thiserror::Error;

/// Errors from allocation engine operations.
///
/// These are caller errors: every operation validates its preconditions and
/// rejects before producing any state.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("percentage {0} is outside [0, 100]")]
    PercentageOutOfRange(f64),

    #[error("total budget must be positive")]
    InvalidBudget,

    #[error("scenario has no categories")]
    EmptyCategories,

    #[error("duplicate category id: '{0}'")]
    DuplicateCategory(String),
}

/// Errors at the scenario registry boundary.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario not found: '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// Errors resolving the provider credential.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("{0} is not set; export it before starting budgie")]
    Missing(String),
}
