//! `at`, `point`, `all` and `copy` subcommands — edit a file as a text buffer.

use std::io::Write;
use std::path::Path;

use super::{
    Clipboard, ColorswapError, Conversion, EditOutput, FailureJson, FormatConfig, Notation,
    Report, Result, StringBuffer, commands, print_json,
};

/// Prints the copied text on stdout.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")?;
        Ok(())
    }
}

fn read_buffer(path: &Path) -> Result<StringBuffer> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ColorswapError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    Ok(StringBuffer::new(text))
}

/// Write the buffer back, or print it.
fn finish(
    path: &Path,
    buffer: StringBuffer,
    conversions: Vec<Conversion>,
    failures: Vec<FailureJson>,
    write: bool,
    json: bool,
) -> Result<()> {
    if write && !conversions.is_empty() {
        std::fs::write(path, buffer.as_str())?;
        log::debug!("wrote {} conversions to {}", conversions.len(), path.display());
    }

    if json {
        return print_json(&EditOutput {
            file: path.display().to_string(),
            written: write && !conversions.is_empty(),
            conversions,
            failures,
            text: (!write).then(|| buffer.into_string()),
        });
    }

    if !write {
        print!("{buffer}");
    }
    Ok(())
}

/// Run a batch command over the file; failures become notices.
pub(super) fn cmd_edit(
    path: &Path,
    write: bool,
    json: bool,
    run: impl FnOnce(&mut StringBuffer) -> Report,
) -> Result<()> {
    let mut buffer = read_buffer(path)?;
    let report = run(&mut buffer);

    let failures: Vec<FailureJson> = report
        .failures()
        .map(|(offset, error)| {
            if !json {
                eprintln!("{error} (offset {offset})");
            }
            FailureJson {
                offset,
                error: error.to_string(),
            }
        })
        .collect();
    let conversions: Vec<Conversion> = report.conversions().cloned().collect();
    finish(path, buffer, conversions, failures, write, json)
}

pub(super) fn cmd_point(
    path: &Path,
    offset: usize,
    notation: Notation,
    config: &FormatConfig,
    write: bool,
    json: bool,
) -> Result<()> {
    let mut buffer = read_buffer(path)?;
    let conversion = commands::convert_at_point(&mut buffer, offset, notation, config)?;
    finish(path, buffer, vec![conversion], vec![], write, json)
}

pub(super) fn cmd_copy(
    path: &Path,
    offset: usize,
    notation: Option<Notation>,
    config: &FormatConfig,
) -> Result<()> {
    let buffer = read_buffer(path)?;
    let copied = commands::copy_converted(&buffer, offset, notation, config, &mut StdoutClipboard)?;
    log::debug!("copied {copied}");
    Ok(())
}
