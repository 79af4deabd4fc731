//! Document normalization and line splitting shared by the aligner and the refiner.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());
static BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new("[\t\u{00A0}]").unwrap());

/// Normalizes a document before diffing: `\r\n` and lone `\r` become `\n`, tabs and
/// non-breaking spaces become a single space.
pub fn normalize_document(text: &str) -> Cow<'_, str> {
    let text = LINE_BREAKS.replace_all(text, "\n");
    if !BLANKS.is_match(&text) {
        return text;
    }
    Cow::Owned(BLANKS.replace_all(&text, " ").into_owned())
}

/// Byte ranges of every line in `text`, newline excluded.
///
/// A text ending in `\n` has a trailing empty line, so the result always holds
/// `newline count + 1` ranges.
pub fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (idx, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            ranges.push(start..idx);
            start = idx + 1;
        }
    }
    ranges.push(start..text.len());
    ranges
}

/// The contiguous block of `text` covering `lines[range]`, or `None` for an empty range.
pub fn block<'a>(text: &'a str, lines: &[Range<usize>], range: Range<usize>) -> Option<&'a str> {
    if range.is_empty() {
        return None;
    }
    let start = lines[range.start].start;
    let end = lines[range.end - 1].end;
    Some(&text[start..end])
}

/// Splits a block into its first line and the remainder after the first `\n`.
pub fn split_first_line(block: &str) -> (&str, Option<&str>) {
    match block.split_once('\n') {
        Some((head, tail)) => (head, Some(tail)),
        None => (block, None),
    }
}
