//! Error types for rule form input conversion.

use thiserror::Error;

/// Raised when a control reports a value outside its fixed option set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleInputError {
    /// Manager select emitted a value that is not one of the known managers.
    #[error("unknown manager {value}")]
    UnknownManager {
        /// Raw value reported by the control.
        value: String,
    },
}
