//! Conflict resolution across bundles and batch application of edits.

use tracing::debug;

use crate::bundle::{EditBundle, find_overlap};
use crate::edit::Edit;
use crate::error::FixError;

/// Outcome of patching a buffer with a batch of candidate bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResult {
    /// The patched content.
    pub content: String,
    /// Number of bundles applied.
    pub applied: usize,
    /// Number of bundles skipped because they conflicted with an
    /// earlier accepted bundle.
    pub skipped: usize,
}

impl PatchResult {
    /// Whether any bundle was applied.
    pub fn modified(&self) -> bool {
        self.applied > 0
    }
}

/// Applies a batch of candidate bundles to `content`.
///
/// Bundles are visited in the order given: a bundle that overlaps any
/// earlier accepted bundle is skipped whole, including edits that would
/// not have conflicted on their own. Callers put higher-priority
/// corrections first; the selection is deliberately greedy and
/// order-dependent rather than a maximal conflict-free subset, so the
/// submission order fully determines which bundles win.
///
/// Every bundle's `applied` flag is set, which is why the slice is
/// taken by mutable reference. Losing a conflict is reported through
/// that flag, not as an error; the `Err` cases here mean a rule
/// produced a structurally invalid edit (see [`FixError`]).
pub fn apply_bundles(content: &str, bundles: &mut [EditBundle]) -> Result<PatchResult, FixError> {
    let mut accepted: Vec<usize> = Vec::with_capacity(bundles.len());

    for index in 0..bundles.len() {
        let conflicts = accepted
            .iter()
            .any(|&prior| bundles[prior].overlaps(&bundles[index]));

        if conflicts {
            debug!("skipping bundle {index}: conflicts with an earlier accepted bundle");
            bundles[index].set_applied(false);
        } else {
            bundles[index].set_applied(true);
            accepted.push(index);
        }
    }

    // Accepted bundles are pairwise non-overlapping and each is
    // internally non-overlapping, so the flattened edit set is
    // unambiguous.
    let edits: Vec<Edit> = accepted
        .iter()
        .flat_map(|&index| bundles[index].edits().iter().cloned())
        .collect();

    let content = apply_edits(content, &edits)?;

    Ok(PatchResult {
        content,
        applied: accepted.len(),
        skipped: bundles.len() - accepted.len(),
    })
}

/// Applies a set of non-overlapping edits to `content` in one pass.
///
/// Positions refer to the original buffer; a running offset translates
/// them as earlier edits grow or shrink the text. Fails with
/// [`FixError::OutOfRange`] or [`FixError::NotCharBoundary`] if any
/// edit does not fit the buffer, and with [`FixError::Conflict`] if any
/// two edits overlap. Nothing is applied on failure.
pub fn apply_edits(content: &str, edits: &[Edit]) -> Result<String, FixError> {
    for edit in edits {
        if edit.end() > content.len() {
            return Err(FixError::OutOfRange {
                start: edit.start(),
                end: edit.end(),
                len: content.len(),
            });
        }
        for offset in [edit.start(), edit.end()] {
            if !content.is_char_boundary(offset) {
                return Err(FixError::NotCharBoundary { offset });
            }
        }
    }

    if let Some((first, second)) = find_overlap(edits) {
        return Err(FixError::Conflict {
            first: first.clone(),
            second: second.clone(),
        });
    }

    let mut sorted: Vec<&Edit> = edits.iter().collect();
    // The end tie-break puts an insertion ahead of a range starting at
    // the same offset; applying the range first would pull the
    // insertion's adjusted position below zero.
    sorted.sort_by_key(|edit| (edit.start(), edit.end()));

    let mut result = content.to_string();
    let mut inserted = 0usize;
    let mut removed = 0usize;

    for edit in sorted {
        // Bytes removed so far all lie left of this edit's start, so
        // the subtraction cannot underflow.
        let start = edit.start() + inserted - removed;
        let end = start + edit.delete_count();

        debug!("applying {edit} at adjusted offset {start}");

        result.replace_range(start..end, edit.text());
        inserted += edit.text().len();
        removed += edit.delete_count();
    }

    Ok(result)
}
