// SPDX-License-Identifier: MPL-2.0
//! Result set module for holding the current search results.
//!
//! This module provides a [`ResultSet`] that serves as the single source of
//! truth for the ordered list of results, plus positional and identity
//! lookups used by the modal session for non-wrapping navigation.

use crate::domain::results::{ResultId, ResultItem};
use crate::error::NavigationError;
use std::collections::HashMap;

/// Direction of navigation within the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the list.
    Next,
    /// Towards the start of the list.
    Previous,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }
}

/// Navigation state information for UI rendering.
///
/// A snapshot of where an item sits in the current result set, so the
/// viewer can render navigation controls without access to the list.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether there is a next result to navigate to.
    pub has_next: bool,
    /// Whether there is a previous result to navigate to.
    pub has_previous: bool,
    /// Whether the item is the first in the list.
    pub at_first: bool,
    /// Whether the item is the last in the list.
    pub at_last: bool,
    /// Position in the list (0-indexed), if the item is present.
    pub current_index: Option<usize>,
    /// Total number of results.
    pub total_count: usize,
}

/// Ordered collection of search results, indexed by identifier.
///
/// The set is replaced wholesale on each search. Insertion order is display
/// order and navigation order; identifiers are unique within one snapshot.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    items: Vec<ResultItem>,
    index: HashMap<ResultId, usize>,
    generation: u64,
}

impl ResultSet {
    /// Creates a new empty `ResultSet`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result set holding `items`.
    #[must_use]
    pub fn from_items(items: Vec<ResultItem>) -> Self {
        let mut set = Self::new();
        set.replace(items);
        set
    }

    /// Swaps in a new collection.
    ///
    /// Items whose identifier already appeared earlier in the batch are
    /// dropped so identifiers stay unique.
    pub fn replace(&mut self, items: Vec<ResultItem>) {
        let mut kept = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for item in items {
            if index.contains_key(item.id()) {
                tracing::warn!(id = %item.id(), "dropping duplicate result id");
                continue;
            }
            index.insert(item.id().clone(), kept.len());
            kept.push(item);
        }

        self.items = kept;
        self.index = index;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            count = self.items.len(),
            "result set replaced"
        );
    }

    /// Empties the set (e.g., when the viewer context is cleared).
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Number of replacements so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Position of the item with this identifier.
    #[must_use]
    pub fn index_of(&self, id: &ResultId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Bounds-checked positional access.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::IndexOutOfRange`] past the end of the set.
    pub fn at(&self, index: usize) -> Result<&ResultItem, NavigationError> {
        self.items
            .get(index)
            .ok_or(NavigationError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    /// Item with this identifier, if present.
    #[must_use]
    pub fn get(&self, id: &ResultId) -> Option<&ResultItem> {
        self.index_of(id).and_then(|idx| self.items.get(idx))
    }

    #[must_use]
    pub fn contains(&self, id: &ResultId) -> bool {
        self.index.contains_key(id)
    }

    /// Neighbor of `id` in the given direction. Navigation never wraps.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownId`] if `id` is not in the set, and
    /// [`NavigationError::NoNeighbor`] at either end of the list.
    pub fn neighbor(
        &self,
        id: &ResultId,
        direction: Direction,
    ) -> Result<&ResultItem, NavigationError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| NavigationError::UnknownId(id.to_string()))?;

        let target = match direction {
            Direction::Next => idx + 1,
            Direction::Previous => idx
                .checked_sub(1)
                .ok_or(NavigationError::NoNeighbor(direction.label()))?,
        };

        self.at(target)
            .map_err(|_| NavigationError::NoNeighbor(direction.label()))
    }

    /// Navigation snapshot for the item with this identifier.
    #[must_use]
    pub fn navigation_info(&self, id: &ResultId) -> NavigationInfo {
        let total_count = self.items.len();
        match self.index_of(id) {
            Some(idx) => NavigationInfo {
                has_next: idx + 1 < total_count,
                has_previous: idx > 0,
                at_first: idx == 0,
                at_last: idx + 1 == total_count,
                current_index: Some(idx),
                total_count,
            },
            None => NavigationInfo {
                total_count,
                ..NavigationInfo::default()
            },
        }
    }

    /// Returns the first result, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ResultItem> {
        self.items.first()
    }

    /// Returns the total number of results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the result set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultItem> {
        self.items.iter()
    }
}
