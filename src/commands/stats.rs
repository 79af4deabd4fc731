use clap::Args;

use crate::commands::DocumentArgs;
use crate::config::Config;
use crate::diff::diff_path_with;
use crate::error::DiffMergeError;
use crate::stats::DiffStats;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,
    /// Print the counts as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_stats(args: &StatsArgs) -> Result<(), DiffMergeError> {
    let (original, modified) = args.documents.read()?;
    let path = diff_path_with(
        Some(original.as_str()),
        Some(modified.as_str()),
        &Config::get().diff_options(),
    );
    let stats = DiffStats::from_path(&path);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}
