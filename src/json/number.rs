use std::convert::TryFrom;
use std::fmt::{self, Display};

use crate::error::{Error, ErrorKind};

/// A JSON number represented by some Rust primitive.
///
/// The variant records the form the number was produced in. Comparison
/// ignores that form: two numbers are equal when they denote the same
/// numeric value, so `Number::I64(1) == Number::F64(1.0)`.
///
/// A double only ever equals an integer it converts to *exactly*; there is
/// no rounding through `f64`. This keeps equality symmetric even for large
/// integers that have no exact double representation.
///
/// ```rust
/// use unijson::json::Number;
///
/// assert_eq!(Number::U64(7), Number::I64(7));
/// assert_eq!(Number::F64(-3.0), Number::I64(-3));
/// assert_ne!(Number::F64(9007199254740992.0), Number::U64(9007199254740993));
/// ```
#[derive(Copy, Clone, Debug)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

// Exact bounds as doubles. `i64::MAX as f64` rounds up to 2^63, which is
// already out of range, so the upper bounds are exclusive.
const I64_MIN: f64 = -9_223_372_036_854_775_808.0;
const I64_END: f64 = 9_223_372_036_854_775_808.0;
const U64_END: f64 = 18_446_744_073_709_551_616.0;

impl Number {
    /// Wraps a double, refusing NaN and the infinities.
    ///
    /// ```rust
    /// use unijson::json::Number;
    ///
    /// assert!(Number::from_f64(0.5).is_some());
    /// assert!(Number::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(n: f64) -> Option<Number> {
        if n.is_finite() {
            Some(Number::F64(n))
        } else {
            None
        }
    }

    /// The closest double to this number. Always succeeds, integers beyond
    /// 2^53 may lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// The number as an `i64`, if that is lossless.
    ///
    /// Unsigned values above `i64::MAX`, doubles with a fractional part and
    /// doubles outside the `i64` range give `None`.
    pub fn as_i64(&self) -> Option<i64> {
        self.to_i64("i64").ok()
    }

    /// The number as a `u64`, if that is lossless.
    ///
    /// Negative values, doubles with a fractional part and doubles outside
    /// the `u64` range give `None`.
    pub fn as_u64(&self) -> Option<u64> {
        self.to_u64("u64").ok()
    }

    pub fn is_i64(&self) -> bool {
        matches!(self, Number::I64(_))
    }

    pub fn is_u64(&self) -> bool {
        matches!(self, Number::U64(_))
    }

    pub fn is_f64(&self) -> bool {
        matches!(self, Number::F64(_))
    }

    /// True when the number converts losslessly to `i64` or `u64`,
    /// i.e. it can be written without a decimal point.
    pub fn is_integral(&self) -> bool {
        self.as_i64().is_some() || self.as_u64().is_some()
    }

    fn to_i64(&self, target: &'static str) -> Result<i64, Error> {
        match *self {
            Number::I64(n) => Ok(n),
            Number::U64(n) => i64::try_from(n).map_err(|_| Error::out_of_range(target)),
            Number::F64(n) => {
                // NaN and the infinities have a NaN remainder.
                if n % 1.0 != 0.0 {
                    Err(Error::new(ErrorKind::Fractional, target))
                } else if n >= I64_MIN && n < I64_END {
                    Ok(n as i64)
                } else {
                    Err(Error::out_of_range(target))
                }
            }
        }
    }

    fn to_u64(&self, target: &'static str) -> Result<u64, Error> {
        match *self {
            Number::I64(n) => u64::try_from(n).map_err(|_| Error::new(ErrorKind::Negative, target)),
            Number::U64(n) => Ok(n),
            Number::F64(n) => {
                if n % 1.0 != 0.0 {
                    Err(Error::new(ErrorKind::Fractional, target))
                } else if n < 0.0 {
                    Err(Error::new(ErrorKind::Negative, target))
                } else if n < U64_END {
                    Ok(n as u64)
                } else {
                    Err(Error::out_of_range(target))
                }
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::F64(left), Number::F64(right)) => left == right,
            (Number::I64(left), _) => other.as_i64() == Some(left),
            (_, Number::I64(right)) => self.as_i64() == Some(right),
            (Number::U64(left), _) => other.as_u64() == Some(left),
            (_, Number::U64(right)) => self.as_u64() == Some(right),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::I64(*other)
    }
}

impl PartialEq<u64> for Number {
    fn eq(&self, other: &u64) -> bool {
        *self == Number::U64(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::F64(*other)
    }
}

impl Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::I64(n) => formatter.write_str(itoa::Buffer::new().format(n)),
            Number::U64(n) => formatter.write_str(itoa::Buffer::new().format(n)),
            Number::F64(n) => formatter.write_str(ryu::Buffer::new().format(n)),
        }
    }
}

impl From<f64> for Number {
    /// Wraps any double unchecked, NaN included. Use [`Number::from_f64`]
    /// to refuse non-finite input.
    ///
    /// ```rust
    /// use unijson::json::Number;
    ///
    /// let nan = Number::from(f64::NAN);
    /// assert_ne!(nan, nan);
    /// assert!(Number::from_f64(f64::NAN).is_none());
    /// ```
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(f64::from(n))
    }
}

impl From<&Number> for f64 {
    fn from(n: &Number) -> Self {
        n.as_f64()
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> Self {
        n.as_f64()
    }
}

macro_rules! signed {
    ($ty:ident) => {
        impl From<$ty> for Number {
            fn from(n: $ty) -> Self {
                Number::I64(n as i64)
            }
        }

        impl TryFrom<&Number> for $ty {
            type Error = Error;

            fn try_from(n: &Number) -> Result<Self, Error> {
                let n = n.to_i64(stringify!($ty))?;
                $ty::try_from(n).map_err(|_| Error::out_of_range(stringify!($ty)))
            }
        }

        impl TryFrom<Number> for $ty {
            type Error = Error;

            fn try_from(n: Number) -> Result<Self, Error> {
                $ty::try_from(&n)
            }
        }
    };
}
signed!(i8);
signed!(i16);
signed!(i32);
signed!(i64);
signed!(isize);

macro_rules! unsigned {
    ($ty:ident) => {
        impl From<$ty> for Number {
            fn from(n: $ty) -> Self {
                Number::U64(n as u64)
            }
        }

        impl TryFrom<&Number> for $ty {
            type Error = Error;

            fn try_from(n: &Number) -> Result<Self, Error> {
                let n = n.to_u64(stringify!($ty))?;
                $ty::try_from(n).map_err(|_| Error::out_of_range(stringify!($ty)))
            }
        }

        impl TryFrom<Number> for $ty {
            type Error = Error;

            fn try_from(n: Number) -> Result<Self, Error> {
                $ty::try_from(&n)
            }
        }
    };
}
unsigned!(u8);
unsigned!(u16);
unsigned!(u32);
unsigned!(u64);
unsigned!(usize);
