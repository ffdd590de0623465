//! Error types for routing and facility lookup.

use thiserror::Error;

/// Recoverable conditions reported to the caller.
///
/// None of these are fatal: the caller decides whether to ask for a new
/// selection, skip the step or abort the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouterError {
    /// No location belongs to the requested category.
    #[error("No data available for the selected city area: {category}.")]
    EmptyCategory { category: String },

    /// No facility has the requested type.
    #[error("No facility of type {facility_type} is available.")]
    NoFacilityOfType { facility_type: String },

    /// The reference location name does not match any location.
    #[error("Location {name} could not be found.")]
    UnresolvedReferenceName { name: String },

    /// A coordinate could not be parsed from text.
    #[error("Invalid coordinate value: {value:?}")]
    InvalidCoordinate { value: String },

    /// A 1-based menu selection is out of range.
    #[error("Invalid choice {choice}, expected a number between 1 and {available}.")]
    InvalidSelection { choice: usize, available: usize },

    /// A fixed start location is not part of the category being routed.
    #[error("Start location {name} is not part of city area {category}.")]
    UnknownStart { name: String, category: String },
}
