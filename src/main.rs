use clap::{Parser, Subcommand};

use diffmerge::commands::{self, DocumentArgs};
use diffmerge::error::DiffMergeError;

#[derive(Parser)]
#[command(name = "diffmerge")]
#[command(version, long_about = None)]
#[command(about = "Compare two documents and render a two-pane merge view")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the two HTML row fragments
    Render(commands::render::RenderArgs),
    /// Print the encoded diff path
    Path(DocumentArgs),
    /// Count equal, inserted, deleted and replaced lines
    Stats(commands::stats::StatsArgs),
    /// Apply one merge control and print the new modified document
    Merge(commands::merge::MergeArgs),
    /// Show or edit the configuration
    Config(commands::config::ConfigArgs),
}

fn run(cli: Cli) -> Result<(), DiffMergeError> {
    match &cli.command {
        Command::Render(args) => commands::render::handle_render(args),
        Command::Path(args) => commands::path::handle_path(args),
        Command::Stats(args) => commands::stats::handle_stats(args),
        Command::Merge(args) => commands::merge::handle_merge(args),
        Command::Config(args) => commands::config::handle_config(args),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
