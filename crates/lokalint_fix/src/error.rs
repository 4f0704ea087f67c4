//! Fix engine error types.

use thiserror::Error;

use crate::edit::Edit;

/// Errors raised while validating or applying edits.
///
/// All of these indicate a malformed edit set coming out of the rule
/// layer and abort the whole call; a bundle losing out to another
/// bundle at patch time is not an error (see
/// [`apply_bundles`](crate::apply_bundles)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// Two edits in the same batch touch overlapping ranges.
    #[error("conflicting edits: {first} overlaps {second}")]
    Conflict {
        /// The earlier edit of the conflicting pair.
        first: Edit,
        /// The later edit of the conflicting pair.
        second: Edit,
    },

    /// An edit's range extends past the end of the buffer.
    #[error("edit range [{start}..{end}) exceeds buffer length {len}")]
    OutOfRange {
        /// Start of the offending range.
        start: usize,
        /// End of the offending range.
        end: usize,
        /// Length of the buffer being edited.
        len: usize,
    },

    /// An edit offset falls inside a multi-byte character.
    #[error("edit offset {offset} is not a character boundary")]
    NotCharBoundary {
        /// The offending byte offset.
        offset: usize,
    },
}
