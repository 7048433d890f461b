//! colorswap — convert CSS color notations in text files from the command line.
//!
//! The file plays the editor buffer, `--offset` plays the caret, and stdout
//! plays the clipboard.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "colorswap",
    version,
    about = "Convert CSS color notations (hex, names, rgb, hsl, hwb, lab, color) in place"
)]
struct Args {
    /// Output as JSON (for convert, at, point, all, config)
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let globals = cli::Globals {
        json: args.json,
        config: args.config,
    };
    if let Err(e) = cli::run(args.command, &globals) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
