pub mod html;

pub use html::{
    DiffRenderer, MergeControl, RenderedDiff, RenderedRow, render_diff, render_fragments,
};

use crate::diff::{DiffOptions, DiffPath};
use crate::translate::Translator;

/// Builds the rows of an already decoded path.
pub fn render_rows(
    path: &DiffPath,
    read_only: bool,
    locale: &str,
    translator: &dyn Translator,
) -> Vec<RenderedRow> {
    DiffRenderer::new(translator).rows_for_path(path, read_only, locale)
}

/// Like [`render_diff`], with an explicit translator and alignment options.
pub fn render_diff_with(
    original: Option<&str>,
    modified: Option<&str>,
    read_only: bool,
    locale: &str,
    translator: &dyn Translator,
    options: DiffOptions,
) -> RenderedDiff {
    DiffRenderer::new(translator)
        .with_options(options)
        .render(original, modified, read_only, locale)
}
