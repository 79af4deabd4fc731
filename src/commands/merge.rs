use clap::Args;
use std::fs;

use crate::commands::DocumentArgs;
use crate::error::DiffMergeError;
use crate::merge::{MergeAction, MergeActionKind, apply_merge_action};
use crate::utils::debug_log;

#[derive(Debug, Args)]
pub struct MergeArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,
    /// insert-before, replace, insert-after or fill
    #[arg(long)]
    pub action: String,
    /// 1-based line in the original
    #[arg(long)]
    pub left_line: usize,
    /// 1-based line in the modified document (lines above the slot for `fill`)
    #[arg(long)]
    pub right_line: usize,
    /// Write the merged document here instead of stdout
    #[arg(long, short)]
    pub output: Option<String>,
}

pub fn handle_merge(args: &MergeArgs) -> Result<(), DiffMergeError> {
    let kind: MergeActionKind = args.action.parse()?;
    let (original, modified) = args.documents.read()?;
    let action = MergeAction {
        kind,
        left_line: args.left_line,
        right_line: args.right_line,
    };

    let merged = apply_merge_action(&original, &modified, &action)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &merged)?;
            debug_log(&format!("wrote merged document to {}", path));
        }
        None => print!("{}", merged),
    }
    Ok(())
}
