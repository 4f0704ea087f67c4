//! Atomic string edits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An atomic edit: replace a half-open byte range with new text.
///
/// The range is `[position, position + delete_count)`. An edit with an
/// empty range is a pure insertion, an edit with empty text is a pure
/// deletion, and one with both is a replacement. Offsets are byte
/// offsets into a UTF-8 buffer and must fall on character boundaries
/// at application time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edit {
    position: usize,
    delete_count: usize,
    text: String,
}

impl Edit {
    /// Creates an edit replacing `delete_count` bytes at `position` with `text`.
    pub fn new(position: usize, delete_count: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            delete_count,
            text: text.into(),
        }
    }

    /// Creates an edit that inserts `text` at `position`.
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::new(position, 0, text)
    }

    /// Creates an edit that deletes `count` bytes at `position`.
    pub fn delete(position: usize, count: usize) -> Self {
        Self::new(position, count, String::new())
    }

    /// Creates an edit replacing `count` bytes at `position` with `text`.
    pub fn replace(position: usize, count: usize, text: impl Into<String>) -> Self {
        Self::new(position, count, text)
    }

    /// Start byte offset of the replaced range.
    #[inline]
    pub const fn start(&self) -> usize {
        self.position
    }

    /// End byte offset of the replaced range (exclusive).
    #[inline]
    pub const fn end(&self) -> usize {
        self.position + self.delete_count
    }

    /// Number of bytes removed.
    #[inline]
    pub const fn delete_count(&self) -> usize {
        self.delete_count
    }

    /// The replacement text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if this edit removes nothing (zero-width range).
    #[inline]
    pub const fn is_insertion(&self) -> bool {
        self.delete_count == 0
    }

    /// Returns true if this edit and `other` cannot both be applied.
    ///
    /// Two insertions at the same position conflict even though their
    /// zero-width ranges share no bytes: the result depends on which
    /// one goes first. In every other case the ranges conflict exactly
    /// when their interiors intersect, so ranges that merely touch at a
    /// boundary (including an insertion sitting on a range boundary) do
    /// not conflict. Symmetric.
    pub fn overlaps(&self, other: &Edit) -> bool {
        if self.is_insertion() && other.is_insertion() {
            return self.position == other.position;
        }
        self.start() < other.end() && other.start() < self.end()
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_insertion() {
            write!(f, "insert {:?} at {}", self.text, self.position)
        } else if self.text.is_empty() {
            write!(f, "delete [{}..{})", self.start(), self.end())
        } else {
            write!(
                f,
                "replace [{}..{}) with {:?}",
                self.start(),
                self.end(),
                self.text
            )
        }
    }
}
