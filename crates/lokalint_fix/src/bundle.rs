//! Groups of edits proposed as a single correction.

use serde::{Deserialize, Serialize};

use crate::edit::Edit;
use crate::error::FixError;

/// A self-consistent group of non-overlapping edits.
///
/// One bundle is one proposed correction from one rule: the patcher
/// applies it in full or skips it in full. Construction rejects
/// internally overlapping edits, so any bundle that exists can be
/// applied unambiguously. The `applied` flag is written by the patcher
/// and reports whether the bundle survived conflict resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Edit>", into = "Vec<Edit>")]
pub struct EditBundle {
    edits: Vec<Edit>,
    applied: bool,
}

impl EditBundle {
    /// Creates a bundle, rejecting internally overlapping edits.
    pub fn new(edits: Vec<Edit>) -> Result<Self, FixError> {
        if let Some((first, second)) = find_overlap(&edits) {
            return Err(FixError::Conflict {
                first: first.clone(),
                second: second.clone(),
            });
        }
        Ok(Self {
            edits,
            applied: false,
        })
    }

    /// Creates a bundle from one edit. A single edit cannot conflict
    /// with itself, so this never fails.
    pub fn single(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            applied: false,
        }
    }

    /// The edits making up this correction, in construction order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Whether the patcher applied this bundle in its last run.
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub(crate) fn set_applied(&mut self, applied: bool) {
        self.applied = applied;
    }

    /// Returns true if any edit in this bundle overlaps any edit in
    /// `other`. Symmetric.
    pub fn overlaps(&self, other: &EditBundle) -> bool {
        self.edits
            .iter()
            .any(|a| other.edits.iter().any(|b| a.overlaps(b)))
    }
}

impl TryFrom<Vec<Edit>> for EditBundle {
    type Error = FixError;

    fn try_from(edits: Vec<Edit>) -> Result<Self, Self::Error> {
        Self::new(edits)
    }
}

impl From<EditBundle> for Vec<Edit> {
    fn from(bundle: EditBundle) -> Self {
        bundle.edits
    }
}

/// Finds the first overlapping pair in `edits`, if any.
pub(crate) fn find_overlap(edits: &[Edit]) -> Option<(&Edit, &Edit)> {
    for (i, a) in edits.iter().enumerate() {
        for b in &edits[i + 1..] {
            if a.overlaps(b) {
                return Some((a, b));
            }
        }
    }
    None
}
