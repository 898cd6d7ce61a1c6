mod chart;
mod cli;
mod config;
mod engine;
mod error;
mod filter;
mod metrics;
mod record;
mod report;
mod report_helpers;
mod sample;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use report::Section;

/// Log to stderr so JSON on stdout stays clean. `--verbose` forces debug;
/// otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Report { common, details } => report::run(common, details),
        Commands::Metrics { common } => report::run_section(common, Section::Metrics),
        Commands::Chart { common } => report::run_section(common, Section::Chart),
        Commands::Options { common } => report::run_section(common, Section::Options),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
