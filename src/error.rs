//! Error types for input validation.
//!
//! Every traversal primitive validates its input shape before operating and
//! fails fast with one of the kinds below. Errors are raised synchronously
//! at the point of validation, never from the middle of a traversal, and
//! errors raised by caller-supplied callables propagate verbatim.

/// The error kinds raised by input validation.
///
/// # Examples
///
/// ```rust
/// use hanuman::error::Error;
///
/// assert_eq!(format!("{}", Error::NotSequence), "Input must be an array");
/// assert_eq!(format!("{}", Error::NotMapping), "Input must be an object");
/// assert_eq!(
///     format!("{}", Error::NotCollection),
///     "Input must be an array or an object"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input was required to be an ordered sequence.
    NotSequence,
    /// The input was required to be a keyed mapping.
    NotMapping,
    /// The input was required to be a sequence or a mapping.
    NotCollection,
    /// The input was required to be an integer-coercible number.
    NotNumber,
    /// The input was required to be a callable value.
    NotCallable,
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::NotSequence => "Input must be an array",
            Self::NotMapping => "Input must be an object",
            Self::NotCollection => "Input must be an array or an object",
            Self::NotNumber => "Input must be a number",
            Self::NotCallable => "Input must be a function",
        };
        write!(formatter, "{message}")
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_kinds_display() {
        assert_eq!(format!("{}", Error::NotSequence), "Input must be an array");
        assert_eq!(format!("{}", Error::NotMapping), "Input must be an object");
        assert_eq!(
            format!("{}", Error::NotCollection),
            "Input must be an array or an object"
        );
    }

    #[test]
    fn test_boundary_kinds_display() {
        assert_eq!(format!("{}", Error::NotNumber), "Input must be a number");
        assert_eq!(format!("{}", Error::NotCallable), "Input must be a function");
    }
}
