use crate::commands::DocumentArgs;
use crate::config::Config;
use crate::diff::generate_diff_path_with;
use crate::error::DiffMergeError;

pub fn handle_path(args: &DocumentArgs) -> Result<(), DiffMergeError> {
    let (original, modified) = args.read()?;
    let path = generate_diff_path_with(
        Some(original.as_str()),
        Some(modified.as_str()),
        &Config::get().diff_options(),
    );
    print!("{}", path);
    Ok(())
}
