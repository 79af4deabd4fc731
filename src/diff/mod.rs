pub mod char_diff;
pub mod gap_refiner;
pub mod line_aligner;
pub mod lis;
pub mod path;
pub mod text;

pub use char_diff::{CharEdit, diff_chars};
pub use gap_refiner::{DiffOptions, refine_parts};
pub use line_aligner::{DiffPart, align_lines};
pub use path::{DiffPath, LineKind, PathLine, Tag, encode_parts, to_parts};

use crate::diff::text::normalize_document;

/// Aligns two normalized documents into single-line parts.
///
/// An absent document and an empty one are the same when the other side has content:
/// every line of the present side becomes a one-sided part. Two empty or absent
/// documents produce a single shared blank line.
pub fn diff_documents<'a>(
    original: Option<&'a str>,
    modified: Option<&'a str>,
    options: &DiffOptions,
) -> Vec<DiffPart<'a>> {
    let original = original.filter(|s| !s.is_empty());
    let modified = modified.filter(|s| !s.is_empty());
    if original.is_none() && modified.is_none() {
        return vec![DiffPart::blank()];
    }
    refine_parts(align_lines(original, modified), options)
}

/// Computes the encoded diff path between two documents.
///
/// Tabs and non-breaking spaces are normalized to spaces and line endings to `\n`
/// before diffing.
pub fn generate_diff_path(original: Option<&str>, modified: Option<&str>) -> String {
    generate_diff_path_with(original, modified, &DiffOptions::default())
}

pub fn generate_diff_path_with(
    original: Option<&str>,
    modified: Option<&str>,
    options: &DiffOptions,
) -> String {
    diff_path_with(original, modified, options).encode()
}

/// Normalizes and diffs two documents, keeping the decoded form of the path.
pub fn diff_path_with(
    original: Option<&str>,
    modified: Option<&str>,
    options: &DiffOptions,
) -> DiffPath {
    let original = original.map(normalize_document);
    let modified = modified.map(normalize_document);
    let parts = diff_documents(original.as_deref(), modified.as_deref(), options);
    DiffPath::from_parts(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_is_one_blank_line() {
        assert_eq!(
            diff_documents(Some(""), Some(""), &DiffOptions::default()),
            vec![DiffPart::blank()]
        );
        assert_eq!(
            diff_documents(None, None, &DiffOptions::default()),
            vec![DiffPart::blank()]
        );
    }

    #[test]
    fn test_empty_side_is_absent() {
        let parts = diff_documents(Some(""), Some("a\nb"), &DiffOptions::default());
        assert_eq!(
            parts,
            vec![DiffPart::new(None, Some("a")), DiffPart::new(None, Some("b"))]
        );
    }

    #[test]
    fn test_generate_diff_path_changed_line() {
        insta::assert_snapshot!(
            generate_diff_path(Some("a\nb\nc"), Some("a\nx\nc")).replace('\n', "⏎"),
            @"=a=⏎<b>x=⏎=c=⏎"
        );
    }

    #[test]
    fn test_generate_diff_path_keeps_trailing_newline() {
        let path = generate_diff_path(Some("a\n"), Some("a\n"));
        assert_eq!(path, "=a=\n=\n");
        assert!(path.ends_with("=\n"));

        let path = generate_diff_path(Some("a\n"), Some("a"));
        assert_eq!(path, "=a=\n<\n");
        let decoded = DiffPath::parse(&path).unwrap();
        assert_eq!(decoded.original_text(), "a\n");
        assert_eq!(decoded.modified_text(), "a");
    }

    #[test]
    fn test_generate_diff_path_normalizes_input() {
        let path = generate_diff_path(Some("a\tb\r\n"), Some("a\u{00A0}b\n"));
        assert_eq!(path, "=a= =b=\n=\n");
    }

    #[test]
    fn test_absent_original_is_all_insertions() {
        assert_eq!(generate_diff_path(None, Some("x\ny")), ">x>\n>y>\n");
    }
}
