use serde::Serialize;
use std::fmt;

use crate::diff::{CharEdit, DiffPath, LineKind};

/// Line and character counts of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub equal_lines: usize,
    pub inserted_lines: usize,
    pub deleted_lines: usize,
    pub replaced_lines: usize,
    /// Original characters missing from the modified side, including deleted lines.
    pub chars_removed: usize,
    /// Modified characters missing from the original side, including inserted lines.
    pub chars_added: usize,
}

impl DiffStats {
    pub fn from_path(path: &DiffPath) -> DiffStats {
        let mut stats = DiffStats::default();
        for line in &path.lines {
            match line.kind() {
                LineKind::Equal => stats.equal_lines += 1,
                LineKind::Insert => stats.inserted_lines += 1,
                LineKind::Delete => stats.deleted_lines += 1,
                LineKind::Replace => stats.replaced_lines += 1,
            }
            for edit in &line.edits {
                match edit {
                    CharEdit::LeftOnly(_) => stats.chars_removed += 1,
                    CharEdit::RightOnly(_) => stats.chars_added += 1,
                    CharEdit::Equal(_) => {}
                }
            }
        }
        stats
    }

    pub fn changed_lines(&self) -> usize {
        self.inserted_lines + self.deleted_lines + self.replaced_lines
    }

    pub fn is_identical(&self) -> bool {
        self.changed_lines() == 0
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} equal, {} inserted, {} deleted, {} replaced (+{} / -{} chars)",
            self.equal_lines,
            self.inserted_lines,
            self.deleted_lines,
            self.replaced_lines,
            self.chars_added,
            self.chars_removed
        )
    }
}
