use std::fmt::{self, Display};

/// Why a numeric conversion could not be performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value does not fit in the target type.
    OutOfRange,
    /// A double with a non-zero fractional part (or a non-finite one) was
    /// asked for as an integer.
    Fractional,
    /// A negative value was asked for as an unsigned integer.
    Negative,
    /// The JSON value is not a number at all.
    NotANumber,
}

/// Error type when a conversion fails.
///
/// Conversions that would silently truncate, round or wrap are refused
/// instead. The error remembers the requested target type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    target: &'static str,
}

/// Result type returned by fallible conversions.
#[cfg(not(feature = "error"))]
pub type Result<T> = std::result::Result<T, Error>;

/// Result type returned by fallible conversions.
#[cfg(feature = "error")]
pub type Result<T> = anyhow::Result<T>;

impl Error {
    pub(crate) fn new(kind: ErrorKind, target: &'static str) -> Self {
        Error { kind, target }
    }

    pub(crate) fn out_of_range(target: &'static str) -> Self {
        Error::new(ErrorKind::OutOfRange, target)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the type the conversion was aiming for, e.g. `"u8"`.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self.kind {
            ErrorKind::OutOfRange => "number out of range for",
            ErrorKind::Fractional => "non-integral number cannot be represented as",
            ErrorKind::Negative => "negative number cannot be represented as",
            ErrorKind::NotANumber => "value is not a number, expected",
        };
        write!(formatter, "{} {}", reason, self.target)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::out_of_range("u8").to_string(),
            "number out of range for u8"
        );
        assert_eq!(
            Error::new(ErrorKind::Negative, "u64").to_string(),
            "negative number cannot be represented as u64"
        );
    }
}
