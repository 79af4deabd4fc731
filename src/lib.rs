//! Line- and character-level comparison of two text documents, rendered as a
//! two-pane table with optional merge controls.
//!
//! ```
//! let path = diffmerge::generate_diff_path(Some("a\nb"), Some("a\nc"));
//! assert_eq!(path, "=a=\n<b>c=\n");
//! ```

pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod merge;
pub mod render;
pub mod stats;
pub mod translate;
pub mod utils;

pub use diff::{DiffOptions, DiffPath, generate_diff_path};
pub use error::DiffMergeError;
pub use merge::{MergeAction, MergeActionKind, apply_merge_action};
pub use render::{render_diff, render_rows};
pub use stats::DiffStats;
