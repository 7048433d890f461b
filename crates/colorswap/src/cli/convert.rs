//! `convert` subcommand — convert a color literal and print it.

use super::{ConvertOutput, FormatConfig, Notation, Result, commands, print_json};

pub(super) fn cmd_convert(
    color: &str,
    notation: Notation,
    config: FormatConfig,
    json: bool,
) -> Result<()> {
    let output = commands::convert_text(color, notation, &config)?;
    if json {
        return print_json(&ConvertOutput {
            input: color.to_string(),
            notation,
            output,
        });
    }
    println!("{output}");
    Ok(())
}
