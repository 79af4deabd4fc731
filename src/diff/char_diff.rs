//! Character-level alignment of a single line pair.

use serde::Serialize;
use std::cmp::max;

/// One character of a line pair, tagged by the side(s) it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "ch", rename_all = "snake_case")]
pub enum CharEdit {
    Equal(char),
    LeftOnly(char),
    RightOnly(char),
}

impl CharEdit {
    pub fn ch(&self) -> char {
        match self {
            CharEdit::Equal(c) | CharEdit::LeftOnly(c) | CharEdit::RightOnly(c) => *c,
        }
    }

    pub fn on_left(&self) -> bool {
        !matches!(self, CharEdit::RightOnly(_))
    }

    pub fn on_right(&self) -> bool {
        !matches!(self, CharEdit::LeftOnly(_))
    }
}

/// Builds the LCS length table. `table[i][j]` is the LCS length of `left[..i]` and
/// `right[..j]`; row 0 and column 0 are the zero sentinel.
fn lcs_table(left: &[char], right: &[char]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0usize; right.len() + 1]; left.len() + 1];
    for (i, l) in left.iter().enumerate() {
        for (j, r) in right.iter().enumerate() {
            table[i + 1][j + 1] = if l == r {
                table[i][j] + 1
            } else {
                max(table[i + 1][j], table[i][j + 1])
            };
        }
    }
    table
}

/// Backtraces one longest common subsequence. Matching characters always take the
/// diagonal; otherwise the walk moves up on ties.
fn longest_common_subsequence(left: &[char], right: &[char]) -> Vec<char> {
    let table = lcs_table(left, right);
    let (mut i, mut j) = (left.len(), right.len());
    let mut lcs = Vec::with_capacity(table[i][j]);
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            lcs.push(left[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    lcs.reverse();
    lcs
}

/// Aligns two lines character by character.
///
/// Both lines are walked left to right against their LCS. At each step an equal
/// character is consumed if both sides are on it, otherwise left-only characters are
/// emitted before right-only ones. Whatever remains after the LCS is exhausted is
/// emitted as a straight deletion, then insertion.
pub fn diff_chars(left: &str, right: &str) -> Vec<CharEdit> {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    let lcs = longest_common_subsequence(&left, &right);

    let mut edits = Vec::with_capacity(left.len() + right.len() - lcs.len());
    let (mut l, mut r) = (0, 0);
    for &common in &lcs {
        while l < left.len() && left[l] != common {
            edits.push(CharEdit::LeftOnly(left[l]));
            l += 1;
        }
        while r < right.len() && right[r] != common {
            edits.push(CharEdit::RightOnly(right[r]));
            r += 1;
        }
        if l == left.len() || r == right.len() {
            panic!("LCS character {:?} is not a subsequence of both lines", common);
        }
        edits.push(CharEdit::Equal(common));
        l += 1;
        r += 1;
    }
    edits.extend(left[l..].iter().map(|&c| CharEdit::LeftOnly(c)));
    edits.extend(right[r..].iter().map(|&c| CharEdit::RightOnly(c)));
    edits
}
