//! The tagged-character diff path: the interchange format between alignment and
//! rendering.
//!
//! Every character of a line pair is written as a tag followed by the character:
//! `=` for characters on both sides, `<` for left-only and `>` for right-only ones.
//! Each line record is closed by a tag and `\n`, where the tag says which sides own
//! the line (`=` both, `<` original only, `>` modified only). Line contents never
//! contain `\n`, so a tagged `\n` is always a record boundary.

use serde::Serialize;

use crate::diff::char_diff::{CharEdit, diff_chars};
use crate::diff::line_aligner::DiffPart;
use crate::error::DiffMergeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    LeftOnly,
    Equal,
    RightOnly,
}

impl Tag {
    pub fn as_char(self) -> char {
        match self {
            Tag::LeftOnly => '<',
            Tag::Equal => '=',
            Tag::RightOnly => '>',
        }
    }

    pub fn from_char(c: char) -> Option<Tag> {
        match c {
            '<' => Some(Tag::LeftOnly),
            '=' => Some(Tag::Equal),
            '>' => Some(Tag::RightOnly),
            _ => None,
        }
    }

    fn edit(self, ch: char) -> CharEdit {
        match self {
            Tag::LeftOnly => CharEdit::LeftOnly(ch),
            Tag::Equal => CharEdit::Equal(ch),
            Tag::RightOnly => CharEdit::RightOnly(ch),
        }
    }

    fn of(edit: &CharEdit) -> Tag {
        match edit {
            CharEdit::LeftOnly(_) => Tag::LeftOnly,
            CharEdit::Equal(_) => Tag::Equal,
            CharEdit::RightOnly(_) => Tag::RightOnly,
        }
    }
}

/// Classification of one line record. Terminal once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// One line record of a diff path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLine {
    /// Which sides own this line.
    pub presence: Tag,
    pub edits: Vec<CharEdit>,
}

impl PathLine {
    /// Builds the record for a single-line part, running the character differ when
    /// both sides are present and differ.
    pub fn from_part(part: &DiffPart<'_>) -> Option<PathLine> {
        let (presence, edits) = match (part.left, part.right) {
            (Some(left), Some(right)) if left == right => {
                (Tag::Equal, left.chars().map(CharEdit::Equal).collect())
            }
            (Some(left), Some(right)) => (Tag::Equal, diff_chars(left, right)),
            (Some(left), None) => (Tag::LeftOnly, left.chars().map(CharEdit::LeftOnly).collect()),
            (None, Some(right)) => (
                Tag::RightOnly,
                right.chars().map(CharEdit::RightOnly).collect(),
            ),
            (None, None) => return None,
        };
        Some(PathLine { presence, edits })
    }

    pub fn kind(&self) -> LineKind {
        match self.presence {
            Tag::LeftOnly => LineKind::Delete,
            Tag::RightOnly => LineKind::Insert,
            Tag::Equal => {
                if self.edits.iter().all(|e| matches!(e, CharEdit::Equal(_))) {
                    LineKind::Equal
                } else {
                    LineKind::Replace
                }
            }
        }
    }

    pub fn has_left(&self) -> bool {
        self.presence != Tag::RightOnly
    }

    pub fn has_right(&self) -> bool {
        self.presence != Tag::LeftOnly
    }

    pub fn left_text(&self) -> Option<String> {
        self.has_left()
            .then(|| self.edits.iter().filter(|e| e.on_left()).map(|e| e.ch()).collect())
    }

    pub fn right_text(&self) -> Option<String> {
        self.has_right()
            .then(|| self.edits.iter().filter(|e| e.on_right()).map(|e| e.ch()).collect())
    }

    fn write_to(&self, out: &mut String) {
        for edit in &self.edits {
            out.push(Tag::of(edit).as_char());
            out.push(edit.ch());
        }
        out.push(self.presence.as_char());
        out.push('\n');
    }
}

/// A decoded diff path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPath {
    pub lines: Vec<PathLine>,
}

impl DiffPath {
    pub fn from_parts(parts: &[DiffPart<'_>]) -> DiffPath {
        DiffPath {
            lines: parts.iter().filter_map(PathLine::from_part).collect(),
        }
    }

    /// Parses an encoded path with a two-state scanner: expect a tag, then expect the
    /// character it tags.
    pub fn parse(encoded: &str) -> Result<DiffPath, DiffMergeError> {
        let mut lines = Vec::new();
        let mut edits: Vec<CharEdit> = Vec::new();
        let mut chars = encoded.char_indices();

        while let Some((offset, tag_char)) = chars.next() {
            let tag = Tag::from_char(tag_char).ok_or_else(|| DiffMergeError::MalformedPath {
                offset,
                reason: format!("expected one of '<', '=', '>' but found {:?}", tag_char),
            })?;
            let Some((_, ch)) = chars.next() else {
                return Err(DiffMergeError::MalformedPath {
                    offset,
                    reason: "tag at end of input has no character".to_string(),
                });
            };

            if ch != '\n' {
                edits.push(tag.edit(ch));
                continue;
            }

            let foreign = match tag {
                Tag::LeftOnly => edits.iter().any(|e| e.on_right()),
                Tag::RightOnly => edits.iter().any(|e| e.on_left()),
                Tag::Equal => false,
            };
            if foreign {
                return Err(DiffMergeError::MalformedPath {
                    offset,
                    reason: "one-sided line carries characters of the other side".to_string(),
                });
            }
            lines.push(PathLine {
                presence: tag,
                edits: std::mem::take(&mut edits),
            });
        }

        if !edits.is_empty() {
            return Err(DiffMergeError::MalformedPath {
                offset: encoded.len(),
                reason: "last line has no terminator".to_string(),
            });
        }

        Ok(DiffPath { lines })
    }

    pub fn encode(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.edits.len() * 2 + 2).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            line.write_to(&mut out);
        }
        out
    }

    /// The owned `(left, right)` text of every line, in order.
    pub fn sides(&self) -> Vec<(Option<String>, Option<String>)> {
        self.lines
            .iter()
            .map(|line| (line.left_text(), line.right_text()))
            .collect()
    }

    /// Reassembles the original document.
    pub fn original_text(&self) -> String {
        join_side(self.lines.iter().filter_map(PathLine::left_text))
    }

    /// Reassembles the modified document.
    pub fn modified_text(&self) -> String {
        join_side(self.lines.iter().filter_map(PathLine::right_text))
    }
}

fn join_side(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

/// Borrows decoded sides as parts, e.g. `to_parts(&path.sides())`.
pub fn to_parts(sides: &[(Option<String>, Option<String>)]) -> Vec<DiffPart<'_>> {
    sides
        .iter()
        .map(|(left, right)| DiffPart::new(left.as_deref(), right.as_deref()))
        .collect()
}

/// Encodes refined single-line parts as a diff path.
pub fn encode_parts(parts: &[DiffPart<'_>]) -> String {
    DiffPath::from_parts(parts).encode()
}
