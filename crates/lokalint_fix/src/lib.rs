//! # lokalint_fix
//!
//! Text fix engine for LokaLint.
//!
//! Lint rules propose corrections as [`EditBundle`]s: groups of atomic
//! [`Edit`]s that must be applied together or not at all. The patcher
//! walks the candidate bundles in submission order, drops any bundle
//! that conflicts with an earlier accepted one, and applies the
//! surviving edits to the buffer in a single pass.
//!
//! ## Example
//!
//! ```rust
//! use lokalint_fix::{Edit, EditBundle, apply_bundles};
//!
//! let mut bundles = vec![
//!     EditBundle::single(Edit::replace(0, 5, "Hi")),
//!     EditBundle::single(Edit::insert(11, "!")),
//! ];
//!
//! let result = apply_bundles("Hello World", &mut bundles)?;
//!
//! assert_eq!(result.content, "Hi World!");
//! assert!(bundles.iter().all(|b| b.is_applied()));
//! # Ok::<(), lokalint_fix::FixError>(())
//! ```

mod bundle;
mod edit;
mod error;
mod patcher;

pub use bundle::EditBundle;
pub use edit::Edit;
pub use error::FixError;
pub use patcher::{PatchResult, apply_bundles, apply_edits};
