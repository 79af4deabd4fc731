//! Two-pane table rendering of a decoded diff path.

use serde::Serialize;
use std::borrow::Cow;
use std::time::Instant;

use crate::diff::{CharEdit, DiffOptions, DiffPath, LineKind, PathLine, diff_path_with};
use crate::merge::{MergeAction, MergeActionKind};
use crate::translate::{Translator, default_translator};
use crate::utils::{debug_performance_log, debug_performance_log_structured};

const EMPHASIS_OPEN: &str = "<span class=\"diff-emph\">";
const EMPHASIS_CLOSE: &str = "</span>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeControl {
    pub action: MergeAction,
    pub caption: String,
}

/// One rendered line pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub left_line: Option<usize>,
    pub right_line: Option<usize>,
    /// Original lines above this row; the anchor of a left placeholder.
    pub left_position: usize,
    /// Modified lines above this row; the anchor of a right placeholder.
    pub right_position: usize,
    pub kind: LineKind,
    pub left_html: String,
    pub right_html: String,
    pub merge_controls: Vec<MergeControl>,
}

impl RenderedRow {
    fn data_left(&self) -> usize {
        self.left_line.unwrap_or(self.left_position)
    }

    fn data_right(&self) -> usize {
        self.right_line.unwrap_or(self.right_position)
    }
}

/// The two HTML fragments of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDiff {
    pub left_html: String,
    pub right_html: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Renders one side of a line, wrapping runs of characters unique to that side in an
/// emphasis span.
fn render_side(edits: &[CharEdit], side: Side) -> String {
    let mut html = String::new();
    let mut run = String::new();
    let mut run_emphasized = false;

    for edit in edits {
        let emphasized = match (side, edit) {
            (_, CharEdit::Equal(_)) => false,
            (Side::Left, CharEdit::LeftOnly(_)) | (Side::Right, CharEdit::RightOnly(_)) => true,
            _ => continue,
        };
        if emphasized != run_emphasized && !run.is_empty() {
            flush_run(&mut html, &run, run_emphasized);
            run.clear();
        }
        run_emphasized = emphasized;
        run.push(edit.ch());
    }
    flush_run(&mut html, &run, run_emphasized);
    html
}

fn flush_run(html: &mut String, run: &str, emphasized: bool) {
    if run.is_empty() {
        return;
    }
    if emphasized {
        html.push_str(EMPHASIS_OPEN);
        html.push_str(&escape(run));
        html.push_str(EMPHASIS_CLOSE);
    } else {
        html.push_str(&escape(run));
    }
}

fn plain_side(line: &PathLine, side: Side) -> String {
    let text = match side {
        Side::Left => line.left_text(),
        Side::Right => line.right_text(),
    };
    text.map(|t| escape(&t).into_owned()).unwrap_or_default()
}

fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Equal => "diff-equal",
        LineKind::Insert => "diff-insert",
        LineKind::Delete => "diff-delete",
        LineKind::Replace => "diff-replace",
    }
}

fn action_glyph(kind: MergeActionKind) -> &'static str {
    match kind {
        MergeActionKind::InsertBefore => "&#8613;",
        MergeActionKind::Replace | MergeActionKind::Fill => "&#8658;",
        MergeActionKind::InsertAfter => "&#8615;",
    }
}

/// Renders diffs with a translation collaborator for control captions.
pub struct DiffRenderer<'t> {
    translator: &'t dyn Translator,
    options: DiffOptions,
}

impl<'t> DiffRenderer<'t> {
    pub fn new(translator: &'t dyn Translator) -> Self {
        DiffRenderer {
            translator,
            options: DiffOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// Diffs two documents and decodes the result into path lines.
    pub fn diff_path(&self, original: Option<&str>, modified: Option<&str>) -> DiffPath {
        diff_path_with(original, modified, &self.options)
    }

    pub fn rows(
        &self,
        original: Option<&str>,
        modified: Option<&str>,
        read_only: bool,
        locale: &str,
    ) -> Vec<RenderedRow> {
        let start = Instant::now();
        let path = self.diff_path(original, modified);
        let diff_duration = start.elapsed();

        let rows = self.rows_for_path(&path, read_only, locale);
        debug_performance_log(&format!(
            "diff of {} lines took {:?}, rows took {:?}",
            path.lines.len(),
            diff_duration,
            start.elapsed() - diff_duration
        ));
        debug_performance_log_structured(serde_json::json!({
            "event": "render_rows",
            "lines": path.lines.len(),
            "diff_us": diff_duration.as_micros() as u64,
            "total_us": start.elapsed().as_micros() as u64,
        }));
        rows
    }

    /// Classifies every line of `path` and builds its row.
    pub fn rows_for_path(
        &self,
        path: &DiffPath,
        read_only: bool,
        locale: &str,
    ) -> Vec<RenderedRow> {
        let mut rows = Vec::with_capacity(path.lines.len());
        let (mut left_seen, mut right_seen) = (0usize, 0usize);

        for line in &path.lines {
            let kind = line.kind();
            let left_line = line.has_left().then_some(left_seen + 1);
            let right_line = line.has_right().then_some(right_seen + 1);

            let (left_html, right_html) = match kind {
                LineKind::Replace => (
                    render_side(&line.edits, Side::Left),
                    render_side(&line.edits, Side::Right),
                ),
                _ => (plain_side(line, Side::Left), plain_side(line, Side::Right)),
            };

            let merge_controls = if read_only {
                Vec::new()
            } else {
                self.controls_for(kind, left_seen + 1, right_seen, locale)
            };

            rows.push(RenderedRow {
                left_line,
                right_line,
                left_position: left_seen,
                right_position: right_seen,
                kind,
                left_html,
                right_html,
                merge_controls,
            });

            left_seen += usize::from(line.has_left());
            right_seen += usize::from(line.has_right());
        }

        rows
    }

    /// `right_seen` is the number of modified lines above the row.
    fn controls_for(
        &self,
        kind: LineKind,
        left_line: usize,
        right_seen: usize,
        locale: &str,
    ) -> Vec<MergeControl> {
        let actions: &[(MergeActionKind, usize)] = match kind {
            LineKind::Equal | LineKind::Insert => &[],
            LineKind::Delete => &[(MergeActionKind::Fill, right_seen)],
            LineKind::Replace => &[
                (MergeActionKind::InsertBefore, right_seen + 1),
                (MergeActionKind::Replace, right_seen + 1),
                (MergeActionKind::InsertAfter, right_seen + 1),
            ],
        };

        actions
            .iter()
            .map(|&(kind, right_line)| MergeControl {
                action: MergeAction {
                    kind,
                    left_line,
                    right_line,
                },
                caption: self.translator.translate(kind.caption(), locale).into_owned(),
            })
            .collect()
    }

    pub fn render(
        &self,
        original: Option<&str>,
        modified: Option<&str>,
        read_only: bool,
        locale: &str,
    ) -> RenderedDiff {
        let rows = self.rows(original, modified, read_only, locale);
        render_fragments(&rows, read_only)
    }
}

/// Writes the left and right table fragments for `rows`.
pub fn render_fragments(rows: &[RenderedRow], read_only: bool) -> RenderedDiff {
    let mut left_html = String::new();
    let mut right_html = String::new();

    for row in rows {
        let class = kind_class(row.kind);
        let data = format!(
            "data-leftline=\"{}\" data-rightline=\"{}\"",
            row.data_left(),
            row.data_right()
        );

        write_cells(&mut left_html, class, &data, row.left_line, &row.left_html);
        if !read_only {
            // the actions cell is closed below, after the buttons
            write_cells_open(&mut right_html, class, &data, row.right_line, &row.right_html);
            right_html.push_str("<td class=\"diff-actions\">");
            for control in &row.merge_controls {
                right_html.push_str(&format!(
                    "<button type=\"button\" class=\"diff-merge\" data-action=\"{}\" \
                     data-leftline=\"{}\" data-rightline=\"{}\" title=\"{}\">{}</button>",
                    control.action.kind,
                    control.action.left_line,
                    control.action.right_line,
                    escape(&control.caption),
                    action_glyph(control.action.kind)
                ));
            }
            right_html.push_str("</td></tr>\n");
        } else {
            write_cells(&mut right_html, class, &data, row.right_line, &row.right_html);
        }
    }

    RenderedDiff {
        left_html,
        right_html,
    }
}

fn write_cells_open(out: &mut String, class: &str, data: &str, line: Option<usize>, html: &str) {
    let (class_suffix, number) = match line {
        Some(n) => ("", n.to_string()),
        None => (" diff-empty", String::new()),
    };
    out.push_str(&format!(
        "<tr class=\"{}{}\" {}><td class=\"diff-lineno\">{}</td><td class=\"diff-text\">{}</td>",
        class, class_suffix, data, number, html
    ));
}

fn write_cells(out: &mut String, class: &str, data: &str, line: Option<usize>, html: &str) {
    write_cells_open(out, class, data, line, html);
    out.push_str("</tr>\n");
}

/// Renders the two-pane comparison of `original` and `modified`.
///
/// Returns the left (original) and right (modified) row fragments. Captions are
/// translated through the configured translation table.
pub fn render_diff(
    original: Option<&str>,
    modified: Option<&str>,
    read_only: bool,
    locale: &str,
) -> (String, String) {
    let rendered =
        DiffRenderer::new(default_translator()).render(original, modified, read_only, locale);
    (rendered.left_html, rendered.right_html)
}
