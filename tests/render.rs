//! End-to-end tests for rendering and diff paths through the public API.

use diffmerge::diff::text::normalize_document;
use diffmerge::diff::{DiffOptions, DiffPath, LineKind, generate_diff_path};
use diffmerge::render::{DiffRenderer, RenderedRow, render_diff_with, render_rows};
use diffmerge::translate::{IdentityTranslator, REPLACE_CAPTION, TranslationTable};
use diffmerge::{DiffStats, render_diff};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rows(original: &str, modified: &str, read_only: bool) -> Vec<RenderedRow> {
    DiffRenderer::new(&IdentityTranslator).rows(Some(original), Some(modified), read_only, "en")
}

fn kinds(rows: &[RenderedRow]) -> Vec<LineKind> {
    rows.iter().map(|r| r.kind).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_identical_documents_are_all_equal_rows() {
    let rows = rows("a\nb\nc", "a\nb\nc", false);
    assert_eq!(kinds(&rows), vec![LineKind::Equal; 3]);
    assert!(rows.iter().all(|r| r.merge_controls.is_empty()));

    let (left, right) = render_diff(Some("a\nb\nc"), Some("a\nb\nc"), false, "en");
    assert!(!left.contains("diff-emph"));
    assert!(!right.contains("diff-merge"));
    assert_eq!(left.matches("<tr ").count(), 3);
}

#[test]
fn test_changed_middle_line_is_replace_with_emphasis() {
    let rows = rows("a\nb\nc", "a\nx\nc", false);
    assert_eq!(
        kinds(&rows),
        vec![LineKind::Equal, LineKind::Replace, LineKind::Equal]
    );
    assert_eq!(rows[1].left_html, "<span class=\"diff-emph\">b</span>");
    assert_eq!(rows[1].right_html, "<span class=\"diff-emph\">x</span>");
    assert_eq!(rows[1].merge_controls.len(), 3);
}

#[test]
fn test_appended_line_is_insert_with_left_placeholder() {
    let rows = rows("a\nb", "a\nb\nc", false);
    assert_eq!(
        kinds(&rows),
        vec![LineKind::Equal, LineKind::Equal, LineKind::Insert]
    );
    assert_eq!(rows[2].left_line, None);
    assert_eq!(rows[2].right_line, Some(3));

    let (left, _) = render_diff(Some("a\nb"), Some("a\nb\nc"), true, "en");
    assert!(left.contains(
        "<tr class=\"diff-insert diff-empty\" data-leftline=\"2\" data-rightline=\"3\">"
    ));
}

#[test]
fn test_removed_line_is_delete_with_right_placeholder() {
    let rows = rows("a\nb\nc", "a\nc", false);
    assert_eq!(
        kinds(&rows),
        vec![LineKind::Equal, LineKind::Delete, LineKind::Equal]
    );
    assert_eq!(rows[1].left_html, "b");
    assert_eq!(rows[1].right_line, None);
    assert_eq!(rows[1].merge_controls.len(), 1);

    let (_, right) = render_diff(Some("a\nb\nc"), Some("a\nc"), true, "en");
    assert!(right.contains(
        "<tr class=\"diff-delete diff-empty\" data-leftline=\"2\" data-rightline=\"1\">"
    ));
}

#[test]
fn test_two_empty_documents_are_one_blank_row() {
    let rows = rows("", "", false);
    assert_eq!(kinds(&rows), vec![LineKind::Equal]);
    assert_eq!(rows[0].left_html, "");
    assert_eq!(rows[0].right_html, "");
    assert_eq!(generate_diff_path(Some(""), Some("")), "=\n");
    assert_eq!(generate_diff_path(None, None), "=\n");
}

#[test]
fn test_appended_sentence_is_emphasized_on_the_right_only() {
    let original = "Once upon a time, I was reading this story over and over again";
    let modified = format!("{} and saw it was all good...", original);
    let rows = rows(original, &modified, false);

    assert_eq!(kinds(&rows), vec![LineKind::Replace]);
    assert_eq!(rows[0].left_html, original);
    assert!(!rows[0].left_html.contains("diff-emph"));
    assert_eq!(
        rows[0].right_html,
        format!(
            "{}<span class=\"diff-emph\"> and saw it was all good...</span>",
            original
        )
    );
    assert_eq!(rows[0].merge_controls.len(), 3);
}

// ============================================================================
// Rendering details
// ============================================================================

#[test]
fn test_content_is_escaped() {
    let (left, right) = render_diff(
        Some("<b>\"x\" & 'y'</b>"),
        Some("<b>\"x\" & 'y'</b>"),
        true,
        "en",
    );
    assert!(left.contains("&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;&#x2F;b&gt;"));
    assert_eq!(left, right);
    assert!(!left.contains("<script"));
}

#[test]
fn test_absent_documents() {
    let rows = DiffRenderer::new(&IdentityTranslator).rows(None, Some("x\ny"), false, "en");
    assert_eq!(kinds(&rows), vec![LineKind::Insert, LineKind::Insert]);

    let rows = DiffRenderer::new(&IdentityTranslator).rows(Some("x\ny"), None, false, "en");
    assert_eq!(kinds(&rows), vec![LineKind::Delete, LineKind::Delete]);
    assert_eq!(rows[1].merge_controls[0].action.right_line, 0);
}

#[test]
fn test_captions_are_translated() {
    let table = TranslationTable::from_json(&format!(
        r#"{{"fr": {{"{}": "Remplacer la ligne de droite"}}}}"#,
        REPLACE_CAPTION
    ))
    .unwrap();
    let rendered = render_diff_with(
        Some("a\nb"),
        Some("a"),
        false,
        "fr-CA",
        &table,
        DiffOptions::default(),
    );
    assert!(rendered.right_html.contains("title=\"Remplacer la ligne de droite\""));
}

#[test]
fn test_rows_serialize_to_json() {
    let rows = rows("a", "b", false);
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["kind"], "replace");
    assert_eq!(json[0]["left_line"], 1);
    assert_eq!(json[0]["merge_controls"][1]["action"]["kind"], "replace");
}

#[test]
fn test_render_rows_from_decoded_path() {
    let path = DiffPath::parse("=a=\n<b<\n>c>\n").unwrap();
    let rows = render_rows(&path, true, "en", &IdentityTranslator);
    assert_eq!(
        kinds(&rows),
        vec![LineKind::Equal, LineKind::Delete, LineKind::Insert]
    );
    assert_eq!(rows[2].right_line, Some(2));
    assert!(rows.iter().all(|r| r.merge_controls.is_empty()));
}

#[test]
fn test_tabs_and_crlf_are_normalized() {
    let rows = rows("a\tb\r\nc", "a b\nc", false);
    assert_eq!(kinds(&rows), vec![LineKind::Equal, LineKind::Equal]);
}

#[test]
fn test_moved_line_stays_in_document_order() {
    let rows = rows("one\ntwo\nthree\nfour", "two\nthree\nfour\none", false);
    let left: Vec<_> = rows.iter().filter_map(|r| r.left_line).collect();
    let right: Vec<_> = rows.iter().filter_map(|r| r.right_line).collect();
    assert_eq!(left, vec![1, 2, 3, 4]);
    assert_eq!(right, vec![1, 2, 3, 4]);
    assert_eq!(
        rows.iter().filter(|r| r.kind == LineKind::Equal).count(),
        3
    );
}

// ============================================================================
// Properties over generated documents
// ============================================================================

const LINE_POOL: &[&str] = &[
    "a", "b", "c", "  a", "", "fn main() {", "}", "x\ty", "é ✓", "<tag>", "a b c",
];

fn random_document(rng: &mut StdRng) -> String {
    let count = rng.gen_range(0..12);
    (0..count)
        .map(|_| LINE_POOL[rng.gen_range(0..LINE_POOL.len())])
        .collect::<Vec<_>>()
        .join("\n")
}

/// Produces a modified copy of a document of unique lines without moving any line.
///
/// Every change is followed by a kept line, so each gap holds a single deletion,
/// insertion or edited line. Edited lines keep the original text as a prefix or suffix.
fn edit_document(rng: &mut StdRng, lines: &[String]) -> Vec<String> {
    let mut fresh = 0;
    let mut out = Vec::new();
    let mut keep_next = false;
    for line in lines {
        let op = if keep_next { 4 } else { rng.gen_range(0..5) };
        keep_next = op < 4;
        match op {
            0 => {}
            1 => out.push(format!("{} v2", line)),
            2 => out.push(format!("new {}", line)),
            3 => {
                out.push(line.clone());
                out.push(format!("m{}", fresh));
                fresh += 1;
            }
            _ => {
                keep_next = false;
                out.push(line.clone());
            }
        }
    }
    out
}

fn mirrored(kind: LineKind) -> LineKind {
    match kind {
        LineKind::Insert => LineKind::Delete,
        LineKind::Delete => LineKind::Insert,
        other => other,
    }
}

#[test]
fn test_paths_cover_both_documents() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let original = random_document(&mut rng);
        let modified = random_document(&mut rng);
        let encoded = generate_diff_path(Some(original.as_str()), Some(modified.as_str()));
        let path = DiffPath::parse(&encoded).unwrap();

        assert_eq!(path.original_text(), normalize_document(&original));
        assert_eq!(path.modified_text(), normalize_document(&modified));
    }
}

#[test]
fn test_identical_documents_render_equal() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let doc = random_document(&mut rng);
        let rows = rows(&doc, &doc, false);
        assert!(
            rows.iter().all(|r| r.kind == LineKind::Equal),
            "non-equal row for {:?}",
            doc
        );
    }
}

#[test]
fn test_line_numbers_are_monotonic() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let original = random_document(&mut rng);
        let modified = random_document(&mut rng);
        let rows = rows(&original, &modified, false);

        let left: Vec<_> = rows.iter().filter_map(|r| r.left_line).collect();
        let right: Vec<_> = rows.iter().filter_map(|r| r.right_line).collect();
        let expected_left = if original.is_empty() && !modified.is_empty() {
            0
        } else {
            original.split('\n').count()
        };
        let expected_right = if modified.is_empty() && !original.is_empty() {
            0
        } else {
            modified.split('\n').count()
        };
        assert_eq!(left, (1..=expected_left).collect::<Vec<_>>());
        assert_eq!(right, (1..=expected_right).collect::<Vec<_>>());
    }
}

#[test]
fn test_swapping_documents_mirrors_the_diff() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let count = rng.gen_range(1..15);
        let original: Vec<String> = (0..count).map(|i| format!("l{}", i)).collect();
        let modified = edit_document(&mut rng, &original);
        let (original, modified) = (original.join("\n"), modified.join("\n"));

        let forward = rows(&original, &modified, true);
        let backward = rows(&modified, &original, true);
        assert_eq!(forward.len(), backward.len(), "{:?} vs {:?}", original, modified);

        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!(b.kind, mirrored(f.kind), "{:?} vs {:?}", original, modified);
            assert_eq!(b.left_html, f.right_html);
            assert_eq!(b.right_html, f.left_html);
            assert_eq!(b.left_line, f.right_line);
            assert_eq!(b.right_line, f.left_line);
        }

        let forward = generate_diff_path(Some(original.as_str()), Some(modified.as_str()));
        let backward = generate_diff_path(Some(modified.as_str()), Some(original.as_str()));
        let forward = DiffStats::from_path(&DiffPath::parse(&forward).unwrap());
        let backward = DiffStats::from_path(&DiffPath::parse(&backward).unwrap());
        assert_eq!(forward.chars_added, backward.chars_removed);
        assert_eq!(forward.chars_removed, backward.chars_added);
    }
}

#[test]
fn test_swapped_edit_moves_emphasis_to_the_other_pane() {
    let forward = rows("keep\nold line\nend", "keep\nold line v2\nend", true);
    let backward = rows("keep\nold line v2\nend", "keep\nold line\nend", true);

    assert_eq!(forward[1].left_html, "old line");
    assert_eq!(
        forward[1].right_html,
        "old line<span class=\"diff-emph\"> v2</span>"
    );
    assert_eq!(backward[1].left_html, forward[1].right_html);
    assert_eq!(backward[1].right_html, forward[1].left_html);
}

#[test]
fn test_reencoding_a_path_is_byte_identical() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..200 {
        let original = random_document(&mut rng);
        let modified = random_document(&mut rng);
        let encoded = generate_diff_path(Some(original.as_str()), Some(modified.as_str()));
        assert_eq!(DiffPath::parse(&encoded).unwrap().encode(), encoded);
    }
}

#[test]
fn test_refine_budget_keeps_coverage() {
    let mut rng = StdRng::seed_from_u64(23);
    let options = DiffOptions {
        max_refinements: Some(1),
    };
    for _ in 0..100 {
        let original = random_document(&mut rng);
        let modified = random_document(&mut rng);
        let rows = DiffRenderer::new(&IdentityTranslator)
            .with_options(options)
            .rows(Some(original.as_str()), Some(modified.as_str()), true, "en");
        let path = DiffRenderer::new(&IdentityTranslator)
            .with_options(options)
            .diff_path(Some(original.as_str()), Some(modified.as_str()));
        assert_eq!(rows.len(), path.lines.len());
        assert_eq!(path.original_text(), normalize_document(&original));
    }
}
