//! JSON data model.
//!
//! [See the crate level doc](../index.html#example) for an example of
//! building and comparing values.

mod value;
pub use self::value::{Kind, Value};

mod number;
pub use self::number::Number;

mod array;
pub use self::array::Array;

mod object;
pub use self::object::Object;

mod drop;
mod eq;
