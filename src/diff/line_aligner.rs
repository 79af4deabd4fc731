//! Unique-line anchoring between two documents.

use std::collections::HashMap;

use crate::diff::lis::longest_increasing_subsequence;
use crate::diff::text::{block, line_ranges};

/// A pair of line blocks, one per side. `None` means the side contributed nothing.
///
/// Blocks borrow from the documents being compared and may span several lines until
/// the gap refiner has split them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffPart<'a> {
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

impl<'a> DiffPart<'a> {
    pub fn new(left: Option<&'a str>, right: Option<&'a str>) -> Self {
        DiffPart { left, right }
    }

    /// The single shared blank line produced when both documents are empty.
    pub fn blank() -> Self {
        DiffPart {
            left: Some(""),
            right: Some(""),
        }
    }

    /// True when either side still spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.left.is_some_and(|l| l.contains('\n')) || self.right.is_some_and(|r| r.contains('\n'))
    }
}

/// Per-document occurrence counts of trimmed lines, with the last position seen.
fn trimmed_occurrences<'a>(
    text: &'a str,
    lines: &[std::ops::Range<usize>],
) -> HashMap<&'a str, (usize, usize)> {
    let mut occurrences: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, range) in lines.iter().enumerate() {
        let entry = occurrences
            .entry(text[range.clone()].trim())
            .or_insert((0, pos));
        entry.0 += 1;
        entry.1 = pos;
    }
    occurrences
}

/// Matched `(original, modified)` line positions whose trimmed text occurs exactly
/// once in each document, ordered by original position.
pub fn unique_line_index(
    left: &str,
    left_lines: &[std::ops::Range<usize>],
    right: &str,
    right_lines: &[std::ops::Range<usize>],
) -> Vec<(usize, usize)> {
    let left_counts = trimmed_occurrences(left, left_lines);
    let right_counts = trimmed_occurrences(right, right_lines);

    left_lines
        .iter()
        .enumerate()
        .filter_map(|(left_pos, range)| {
            let key = left[range.clone()].trim();
            match (left_counts.get(key), right_counts.get(key)) {
                (Some((1, _)), Some((1, right_pos))) => Some((left_pos, *right_pos)),
                _ => None,
            }
        })
        .collect()
}

/// Aligns two blocks of lines on their unique shared lines.
///
/// Returns, in document order, a multi-line gap part for the skipped lines before each
/// anchor (omitted when both sides are empty), a single-line part per anchor, and a
/// trailing gap. When one side is absent every line of the other becomes its own
/// one-sided part. Two absent sides produce nothing.
///
/// Matching compares trimmed text; the returned blocks are always untrimmed.
pub fn align_lines<'a>(left: Option<&'a str>, right: Option<&'a str>) -> Vec<DiffPart<'a>> {
    let (left, right) = match (left, right) {
        (None, None) => return Vec::new(),
        (Some(left), None) => {
            return left
                .split('\n')
                .map(|line| DiffPart::new(Some(line), None))
                .collect();
        }
        (None, Some(right)) => {
            return right
                .split('\n')
                .map(|line| DiffPart::new(None, Some(line)))
                .collect();
        }
        (Some(left), Some(right)) => (left, right),
    };

    let left_lines = line_ranges(left);
    let right_lines = line_ranges(right);

    let index = unique_line_index(left, &left_lines, right, &right_lines);
    let right_positions: Vec<usize> = index.iter().map(|&(_, right_pos)| right_pos).collect();
    let anchors = longest_increasing_subsequence(&right_positions);

    let mut parts = Vec::with_capacity(anchors.len() * 2 + 1);
    let (mut prev_left, mut prev_right) = (0, 0);
    for anchor in anchors {
        let (left_pos, right_pos) = index[anchor];
        let gap = DiffPart::new(
            block(left, &left_lines, prev_left..left_pos),
            block(right, &right_lines, prev_right..right_pos),
        );
        if gap.left.is_some() || gap.right.is_some() {
            parts.push(gap);
        }
        parts.push(DiffPart::new(
            Some(&left[left_lines[left_pos].clone()]),
            Some(&right[right_lines[right_pos].clone()]),
        ));
        prev_left = left_pos + 1;
        prev_right = right_pos + 1;
    }

    let tail = DiffPart::new(
        block(left, &left_lines, prev_left..left_lines.len()),
        block(right, &right_lines, prev_right..right_lines.len()),
    );
    if tail.left.is_some() || tail.right.is_some() {
        parts.push(tail);
    }

    parts
}
