//! Ordered list wrapper tolerant of both summary encodings.

use serde::{Deserialize, Serialize};

/// An ordered list that arrives either as a bare JSON array or wrapped as
/// `{ "members": [...] }` (the in-process property-list encoding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Members<T> {
    /// Bare array.
    List(Vec<T>),
    /// Property-list wrapper.
    Wrapped {
        /// The wrapped entries.
        members: Vec<T>,
    },
}

impl<T> Default for Members<T> {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl<T> Members<T> {
    /// Returns the entries in their original order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::List(items) | Self::Wrapped { members: items } => items,
        }
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<Vec<T>> for Members<T> {
    fn from(items: Vec<T>) -> Self {
        Self::List(items)
    }
}

impl<'a, T> IntoIterator for &'a Members<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
