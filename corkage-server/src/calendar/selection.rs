//! Single-choice selection state.

use serde::{Deserialize, Serialize};

/// At most one selected value.
///
/// Used for the reservation date and the time slot. Selecting a value
/// always clears the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<T>(Option<T>);

impl<T> Selection<T> {
    /// Nothing selected.
    pub fn none() -> Self {
        Self(None)
    }

    /// The selection after choosing `candidate`.
    pub fn select(self, candidate: T) -> Self {
        Self(Some(candidate))
    }

    /// The selection after clearing it.
    pub fn clear(self) -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }

    pub fn is_selected(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.as_ref() == Some(value)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::none()
    }
}
