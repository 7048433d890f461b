//! CLI subcommands — literal conversion, in-file edits, clipboard copy, settings.

mod config_cmd;
mod convert;
mod edit;

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

pub(super) use colorswap_lib::buffer::StringBuffer;
pub(super) use colorswap_lib::commands::{self, Clipboard, Conversion, Report};
pub(super) use colorswap_lib::config::{FormatConfig, SettingsFile};
pub(super) use colorswap_lib::error::{ColorswapError, Result};
pub(super) use colorswap_lib::format::Notation;

const PADDING: usize = 2;

/// Options shared by every subcommand.
pub struct Globals {
    pub json: bool,
    pub config: Option<PathBuf>,
}

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

/// Settings path in effect: `--config` or the platform default.
pub(super) fn settings_path(custom: Option<&Path>) -> Option<PathBuf> {
    custom.map(Path::to_path_buf).or_else(SettingsFile::path)
}

/// Load the format settings, logging any warnings.
pub(super) fn load_format(custom: Option<&Path>) -> FormatConfig {
    let settings = match settings_path(custom) {
        Some(path) => {
            let (settings, warnings) = SettingsFile::load_from(&path);
            for w in &warnings {
                log::warn!("{w}");
            }
            settings
        }
        None => SettingsFile::default(),
    };
    FormatConfig::load(&settings)
}

pub(super) fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    println!("{text}");
    Ok(())
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ConvertOutput {
    pub input: String,
    pub notation: Notation,
    pub output: String,
}

#[derive(Serialize)]
pub(super) struct FailureJson {
    pub offset: usize,
    pub error: String,
}

#[derive(Serialize)]
pub(super) struct EditOutput {
    pub file: String,
    pub written: bool,
    pub conversions: Vec<Conversion>,
    pub failures: Vec<FailureJson>,
    /// Edited text, when not written back.
    pub text: Option<String>,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub settings_file: Option<String>,
    pub settings_file_exists: bool,
    pub settings: FormatConfig,
    pub warnings: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a color literal and print it
    Convert {
        /// Target notation (hex, HEX6, hexa, name, rgb, rgba, hsl, hsla, hwb, lab, color)
        notation: Notation,
        /// Color text, e.g. "#336699" or "hsl(120 50% 50%)"
        color: String,
    },

    /// Convert the color at each caret offset in a file
    At {
        /// Text file to edit
        file: PathBuf,
        /// Caret position in characters (repeatable)
        #[arg(long = "offset", required = true)]
        offsets: Vec<usize>,
        /// Target notation
        #[arg(long)]
        to: Notation,
        /// Rewrite the file instead of printing the result
        #[arg(long)]
        write: bool,
    },

    /// Convert the color at a single point; fails when nothing converts
    Point {
        /// Text file to edit
        file: PathBuf,
        /// Point position in characters
        #[arg(long)]
        offset: usize,
        /// Target notation
        #[arg(long)]
        to: Notation,
        /// Rewrite the file instead of printing the result
        #[arg(long)]
        write: bool,
    },

    /// Convert every hex, function and named color in a file or range
    All {
        /// Text file to edit
        file: PathBuf,
        /// Target notation
        #[arg(long)]
        to: Notation,
        /// Start of the selection in characters
        #[arg(long, requires = "end")]
        start: Option<usize>,
        /// End of the selection in characters
        #[arg(long, requires = "start")]
        end: Option<usize>,
        /// Rewrite the file instead of printing the result
        #[arg(long)]
        write: bool,
    },

    /// Print the converted color at a point, as if copied to the clipboard
    Copy {
        /// Text file to read
        file: PathBuf,
        /// Point position in characters
        #[arg(long)]
        offset: usize,
        /// Target notation (default: HEX6)
        #[arg(long)]
        to: Option<Notation>,
    },

    /// Show the effective format settings and settings file path
    Config {
        /// Write a settings file with the default values
        #[arg(long)]
        init: bool,
    },
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, globals: &Globals) -> Result<()> {
    let custom = globals.config.as_deref();
    match cmd {
        Command::Convert { notation, color } => {
            convert::cmd_convert(&color, notation, load_format(custom), globals.json)
        }
        Command::At {
            file,
            offsets,
            to,
            write,
        } => {
            let config = load_format(custom);
            edit::cmd_edit(&file, write, globals.json, |buffer| {
                let selections: Vec<_> = offsets.iter().map(|&o| o..o).collect();
                commands::convert_at_each_selection(buffer, &selections, to, &config)
            })
        }
        Command::Point {
            file,
            offset,
            to,
            write,
        } => edit::cmd_point(&file, offset, to, &load_format(custom), write, globals.json),
        Command::All {
            file,
            to,
            start,
            end,
            write,
        } => {
            let config = load_format(custom);
            let within = start.zip(end).map(|(s, e)| s..e);
            edit::cmd_edit(&file, write, globals.json, |buffer| {
                commands::convert_all(buffer, within, to, &config)
            })
        }
        Command::Copy { file, offset, to } => {
            if globals.json {
                warn_json_unsupported("copy");
            }
            edit::cmd_copy(&file, offset, to, &load_format(custom))
        }
        Command::Config { init } => config_cmd::cmd_config(globals.json, custom, init),
    }
}
