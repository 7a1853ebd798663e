use std::iter::FromIterator;
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::json::{drop, eq, Value};

/// A `Vec<Value>` with a non-recursive drop impl.
///
/// Order is significant: two arrays are equal when they have the same length
/// and equal elements at every position.
#[derive(Clone, Debug, Default)]
pub struct Array {
    inner: Vec<Value>,
}

impl Drop for Array {
    fn drop(&mut self) {
        self.inner.drain(..).for_each(drop::safely);
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        eq::arrays(self, other)
    }
}

impl Array {
    pub fn new() -> Self {
        Array { inner: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Array {
            inner: Vec::with_capacity(capacity),
        }
    }
}

impl Deref for Array {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Array {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<Vec<Value>> for Array {
    fn from(inner: Vec<Value>) -> Self {
        Array { inner }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = <Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.inner).into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = <&'a Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = <&'a mut Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Into<Value>> FromIterator<T> for Array {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Array {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}
