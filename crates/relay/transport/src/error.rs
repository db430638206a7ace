use thiserror::Error;

/// Errors from Transport read operations.
///
/// Absence is never an error here: missing paths, services, versions,
/// and filter misses all resolve to defaults or empty containers. The
/// only failure is a caller-side contract violation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// A property lookup was given a non-string default. The contract
    /// requires failing immediately rather than coercing.
    #[error("default value must be a string")]
    NonStringPropertyDefault,
}
