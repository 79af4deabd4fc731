//! Applying a merge control to the modified document.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::diff::text::normalize_document;
use crate::error::DiffMergeError;
use crate::translate::{INSERT_AFTER_CAPTION, INSERT_BEFORE_CAPTION, REPLACE_CAPTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeActionKind {
    /// Insert the left line above the right line.
    InsertBefore,
    /// Overwrite the right line with the left line.
    Replace,
    /// Insert the left line below the right line.
    InsertAfter,
    /// Put a left-only line into the empty slot opposite it.
    Fill,
}

impl MergeActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeActionKind::InsertBefore => "insert-before",
            MergeActionKind::Replace => "replace",
            MergeActionKind::InsertAfter => "insert-after",
            MergeActionKind::Fill => "fill",
        }
    }

    /// The untranslated button caption.
    pub fn caption(&self) -> &'static str {
        match self {
            MergeActionKind::InsertBefore => INSERT_BEFORE_CAPTION,
            MergeActionKind::Replace | MergeActionKind::Fill => REPLACE_CAPTION,
            MergeActionKind::InsertAfter => INSERT_AFTER_CAPTION,
        }
    }
}

impl fmt::Display for MergeActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeActionKind {
    type Err = DiffMergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insert-before" => Ok(MergeActionKind::InsertBefore),
            "replace" => Ok(MergeActionKind::Replace),
            "insert-after" => Ok(MergeActionKind::InsertAfter),
            "fill" => Ok(MergeActionKind::Fill),
            other => Err(DiffMergeError::InvalidMergeAction(format!(
                "unknown action '{}', expected insert-before, replace, insert-after or fill",
                other
            ))),
        }
    }
}

/// A merge control as carried by a rendered row.
///
/// `left_line` is 1-based in the original. `right_line` is 1-based in the modified
/// document, except for `Fill`, where it is the number of modified lines above the
/// empty slot (0 = top of the document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeAction {
    pub kind: MergeActionKind,
    pub left_line: usize,
    pub right_line: usize,
}

/// Applies `action` and returns the new modified document.
///
/// Both documents are normalized the same way they are for rendering, so the line
/// numbers of a rendered row address the same lines here.
pub fn apply_merge_action(
    original: &str,
    modified: &str,
    action: &MergeAction,
) -> Result<String, DiffMergeError> {
    let original = normalize_document(original);
    let modified = normalize_document(modified);

    let left_lines: Vec<&str> = original.split('\n').collect();
    let mut right_lines: Vec<&str> = if modified.is_empty() {
        Vec::new()
    } else {
        modified.split('\n').collect()
    };

    let left_line = action
        .left_line
        .checked_sub(1)
        .and_then(|idx| left_lines.get(idx))
        .copied()
        .ok_or_else(|| {
            DiffMergeError::InvalidMergeAction(format!(
                "left line {} is outside the original ({} lines)",
                action.left_line,
                left_lines.len()
            ))
        })?;

    let right_len = right_lines.len();
    let out_of_range = || {
        DiffMergeError::InvalidMergeAction(format!(
            "right line {} is outside the modified document ({} lines) for {}",
            action.right_line, right_len, action.kind
        ))
    };

    match action.kind {
        MergeActionKind::InsertBefore | MergeActionKind::Replace | MergeActionKind::InsertAfter
            if action.right_line == 0 || action.right_line > right_len =>
        {
            return Err(out_of_range());
        }
        MergeActionKind::Fill if action.right_line > right_len => {
            return Err(out_of_range());
        }
        MergeActionKind::InsertBefore => right_lines.insert(action.right_line - 1, left_line),
        MergeActionKind::Replace => right_lines[action.right_line - 1] = left_line,
        MergeActionKind::InsertAfter | MergeActionKind::Fill => {
            right_lines.insert(action.right_line, left_line)
        }
    }

    Ok(right_lines.join("\n"))
}
