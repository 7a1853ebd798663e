//! In-memory JSON values whose numbers keep the form they were produced in
//! (signed, unsigned or double) but compare by numeric value.
//!
//! Reading and writing JSON text is left to other crates; they produce and
//! consume the [`json::Value`] tree defined here.
//!
//! # Example
//!
//! ```rust
//! use unijson::json::{Number, Value};
//!
//! let parsed: Value = vec![
//!     ("id", Value::from(42u64)),
//!     ("ratio", Value::from(0.5f64)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let built: Value = vec![
//!     ("ratio", Value::Number(Number::F64(0.5))),
//!     ("id", Value::Number(Number::F64(42.0))),
//! ]
//! .into_iter()
//! .collect();
//!
//! // Key order and number representation do not matter.
//! assert_eq!(parsed, built);
//! ```
//!
//! # Numbers
//!
//! ```rust
//! use unijson::json::Number;
//!
//! let n = Number::F64(3.0);
//! assert_eq!(n.as_i64(), Some(3));
//! assert_eq!(n.as_u64(), Some(3));
//! assert_eq!(Number::F64(3.5).as_i64(), None);
//! assert_eq!(Number::I64(-1).as_u64(), None);
//! assert_eq!(Number::U64(u64::MAX).as_f64(), 18446744073709551615.0);
//! ```

#![doc(html_root_url = "https://docs.rs/unijson/0.1.0")]

mod error;
pub mod json;

#[cfg(feature = "serde")]
mod serde_integration;

pub use crate::error::{Error, ErrorKind, Result};
