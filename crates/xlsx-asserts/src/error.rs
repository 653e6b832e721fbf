//! Error types for the assertion toolkit

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A failed check: the message names the coordinate and what did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Human-readable description, e.g. "B1 cell font color does not equal expected value"
    pub message: String,
    /// Rendered expected value, when the check compared two values
    pub expected: Option<String>,
    /// Rendered actual value, when the check compared two values
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// A failure with a message only
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Attach the compared values
    pub fn with_values<E: ToString, A: ToString>(mut self, expected: E, actual: A) -> Self {
        self.expected = Some(expected.to_string());
        self.actual = Some(actual.to_string());
        self
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let (Some(expected), Some(actual)) = (&self.expected, &self.actual) {
            write!(f, "\n  expected: {:?}\n    actual: {:?}", expected, actual)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {}

/// Errors returned by the assertions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The check ran and did not hold, or its coordinate could not be resolved
    #[error("{0}")]
    Failed(AssertionFailure),

    /// The spreadsheet model reported something other than a bad coordinate
    #[error("Sheet error: {0}")]
    Sheet(#[source] xlsx_asserts_core::Error),
}

impl Error {
    /// Create an assertion failure with a message
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Error::Failed(AssertionFailure::new(message))
    }

    /// The assertion failure, if this is one
    pub fn as_failure(&self) -> Option<&AssertionFailure> {
        match self {
            Error::Failed(failure) => Some(failure),
            Error::Sheet(_) => None,
        }
    }

    /// Whether this is an assertion failure rather than a model error
    pub fn is_failure(&self) -> bool {
        matches!(self, Error::Failed(_))
    }
}

impl From<AssertionFailure> for Error {
    fn from(failure: AssertionFailure) -> Self {
        Error::Failed(failure)
    }
}

/// Coordinate errors become assertion failures carrying the model's message;
/// everything else stays a model error.
impl From<xlsx_asserts_core::Error> for Error {
    fn from(err: xlsx_asserts_core::Error) -> Self {
        if err.is_coordinate_error() {
            Error::failed(err.to_string())
        } else {
            Error::Sheet(err)
        }
    }
}

/// Fail with `message` unless `expected == actual`.
pub(crate) fn ensure_eq<T, F>(expected: T, actual: T, message: F) -> Result<()>
where
    T: PartialEq + fmt::Display,
    F: FnOnce() -> String,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::new(message())
            .with_values(expected, actual)
            .into())
    }
}

/// Fail with `message` unless `condition` holds.
pub(crate) fn ensure<F>(condition: bool, message: F) -> Result<()>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(Error::failed(message()))
    }
}
