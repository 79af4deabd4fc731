use clap::Args;

use crate::commands::DocumentArgs;
use crate::config::Config;
use crate::error::DiffMergeError;
use crate::render::DiffRenderer;
use crate::translate::default_translator;

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,
    /// Leave out the merge controls
    #[arg(long)]
    pub read_only: bool,
    /// Locale for control captions (defaults to the configured locale)
    #[arg(long)]
    pub locale: Option<String>,
    /// Print the rows as JSON instead of HTML fragments
    #[arg(long)]
    pub json: bool,
}

pub fn handle_render(args: &RenderArgs) -> Result<(), DiffMergeError> {
    let config = Config::get();
    let (original, modified) = args.documents.read()?;
    let (original, modified) = (Some(original.as_str()), Some(modified.as_str()));
    let read_only = args.read_only || config.read_only();
    let locale = args
        .locale
        .as_deref()
        .unwrap_or_else(|| config.default_locale());

    let renderer = DiffRenderer::new(default_translator()).with_options(config.diff_options());

    if args.json {
        let rows = renderer.rows(original, modified, read_only, locale);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let rendered = renderer.render(original, modified, read_only, locale);
        print!("{}\n{}", rendered.left_html, rendered.right_html);
    }
    Ok(())
}
