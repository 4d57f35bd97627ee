mod cli;
mod config;
mod error;
mod github;
mod models;
mod output;
mod renderer;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::models::RepoSlug;

#[derive(Parser)]
#[command(name = "gh-changelog", version)]
#[command(about = "Add a GitHub release to an RPM changelog", long_about = None)]
struct Cli {
    /// GitHub repository (owner/name)
    repo: RepoSlug,

    /// A specific Git tag to get; if none, latest will be used
    #[arg(short, long)]
    tag: Option<String>,

    /// The author of the RPM changelog entry
    #[arg(short, long)]
    author: Option<String>,

    /// Prepend the new changelog entry to file instead of printing in stdout
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "gh_changelog=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    if std::env::args_os().len() <= 1 {
        eprint!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    let result = cli::release::run(cli.repo, cli.tag, cli.author, cli.file, cli.config);

    if let Err(e) = result {
        eprintln!("{}", cli::release::error_report(&e));
        std::process::exit(1);
    }
}
