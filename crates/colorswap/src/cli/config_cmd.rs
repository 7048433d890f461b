//! `config` subcommand — show the effective format settings and file path.

use std::path::Path;

use super::{
    ColorswapError, ConfigOutput, FormatConfig, Result, SettingsFile, kv, kv_indent, kv_width,
    print_json, settings_path,
};

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>, init: bool) -> Result<()> {
    let path = settings_path(custom_path);

    if init {
        let Some(path) = &path else {
            return Err(ColorswapError::Config("no settings directory".into()));
        };
        if path.exists() {
            return Err(ColorswapError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }
        SettingsFile::from(&FormatConfig::default()).save_to(path)?;
        log::info!("wrote default settings to {}", path.display());
    }

    let (settings, mut warnings) = match &path {
        Some(p) => SettingsFile::load_from(p),
        None => (SettingsFile::default(), vec![]),
    };
    let (config, format_warnings) = FormatConfig::from_settings(&settings);
    warnings.extend(format_warnings);
    let exists = path.as_ref().is_some_and(|p| p.exists());

    if json {
        return print_json(&ConfigOutput {
            settings_file: path.as_ref().map(|p| p.display().to_string()),
            settings_file_exists: exists,
            settings: config,
            warnings,
        });
    }

    let labels = FormatConfig::KEYS.map(|k| format!("{k}:"));
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let w = kv_width(&["Settings file:"], &label_refs);
    match &path {
        Some(p) if exists => kv("Settings file:", format_args!("{} (loaded)", p.display()), w),
        Some(p) => kv(
            "Settings file:",
            format_args!("{} (not found, using defaults)", p.display()),
            w,
        ),
        None => kv("Settings file:", "(no settings directory)", w),
    }
    println!();

    println!("Settings:");
    let effective = SettingsFile::from(&config);
    for (key, label) in FormatConfig::KEYS.iter().zip(&label_refs) {
        if let Some(value) = effective.table().get(*key) {
            kv_indent(label, value, w);
        }
    }

    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    Ok(())
}
