use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for record store operations.
///
/// Each kind describes a category of failure. The store degrades most
/// failures to documented in-band values at its facade (`false`, `-1`), so
/// the set of kinds that can actually surface is deliberately small.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// The shared persistence context could not be reached (closed or never
    /// supplied). This is the only failure the original contract cares about.
    ContextUnavailable,
    /// Error mapping an entity to or from its record representation.
    ObjectMappingError,
    /// Error during filter construction or evaluation.
    FilterError,
    /// Internal error (usually indicates a bug).
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ContextUnavailable => write!(f, "Persistence context unavailable"),
            ErrorKind::ObjectMappingError => write!(f, "Object mapping error"),
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom error type for the record store.
///
/// `StoreError` carries the error message, its kind, and an optional cause,
/// with a backtrace captured at construction for debugging. Use the
/// [`StoreResult`] alias for fallible operations.
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::errors::{ErrorKind, StoreError, StoreResult};
///
/// fn example() -> StoreResult<()> {
///     Err(StoreError::new(
///         "Persistence context has been closed",
///         ErrorKind::ContextUnavailable,
///     ))
/// }
/// ```
#[derive(Clone)]
pub struct StoreError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<StoreError>>,
    backtrace: Backtrace,
}

impl StoreError {
    /// Creates a new `StoreError` with the specified message and kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        StoreError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `StoreError` with a cause error attached.
    ///
    /// The cause is preserved as an error chain reachable through
    /// `std::error::Error::source`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: StoreError) -> Self {
        StoreError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&StoreError> {
        self.cause.as_deref()
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message followed by cause chain, or the backtrace at
        // the end of the chain
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for record store operations.
///
/// `StoreResult<T>` is shorthand for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
