//! Format settings: the read-only settings collaborator, the per-request
//! [`FormatConfig`] snapshot, and a TOML settings file on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Header comment prepended to saved settings files.
const SETTINGS_HEADER: &str =
    "# colorswap settings. Unknown keys are ignored; bad values fall back to defaults.\n\n";

/// Read-only key-value settings store supplied by the host.
pub trait Settings {
    fn get(&self, key: &str) -> Option<toml::Value>;
}

impl Settings for toml::Table {
    fn get(&self, key: &str) -> Option<toml::Value> {
        toml::Table::get(self, key).cloned()
    }
}

// ── FormatConfig ──

/// Formatting preferences, read once per conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Legacy `rgb(1, 2, 3)` separators instead of `rgb(1 2 3)`.
    pub use_comma_separators: bool,
    /// `%` on hsl/hwb fractions, Lab lightness and `color()` channels.
    pub use_percent: bool,
    /// `rgb()` channels as percentages instead of 0–255.
    pub use_percent_for_rgb: bool,
    pub hex_uppercase: bool,
    /// `#aabbcc` → `#abc` when every pair is a doubled digit.
    pub hex_compress: bool,
    /// Whole-number channels and 3-digit alpha.
    pub round_output: bool,
    /// Keep the `#` when copying hex to the clipboard.
    pub emit_leading_hash: bool,
    /// Render the `color` notation as `color(srgb …)`; otherwise as `rgb()`.
    pub emit_generic_color_function: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            use_comma_separators: false,
            use_percent: false,
            use_percent_for_rgb: false,
            hex_uppercase: false,
            hex_compress: false,
            round_output: true,
            emit_leading_hash: false,
            emit_generic_color_function: true,
        }
    }
}

impl FormatConfig {
    /// Every boolean key, in file order.
    pub const KEYS: [&'static str; 8] = [
        "use_comma_separators",
        "use_percent",
        "use_percent_for_rgb",
        "hex_uppercase",
        "hex_compress",
        "round_output",
        "emit_leading_hash",
        "emit_generic_color_function",
    ];

    fn flag_mut(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            "use_comma_separators" => Some(&mut self.use_comma_separators),
            "use_percent" => Some(&mut self.use_percent),
            "use_percent_for_rgb" => Some(&mut self.use_percent_for_rgb),
            "hex_uppercase" => Some(&mut self.hex_uppercase),
            "hex_compress" => Some(&mut self.hex_compress),
            "round_output" => Some(&mut self.round_output),
            "emit_leading_hash" => Some(&mut self.emit_leading_hash),
            "emit_generic_color_function" => Some(&mut self.emit_generic_color_function),
            _ => None,
        }
    }

    /// Snapshot the settings store.
    ///
    /// Each key is read on its own. Missing keys take their default; keys with
    /// a value of the wrong type also take their default and add a warning.
    /// The legacy `hex_case = "upper" | "lower"` key applies when
    /// `hex_uppercase` is absent.
    pub fn from_settings<S: Settings + ?Sized>(settings: &S) -> (Self, Vec<String>) {
        let mut config = FormatConfig::default();
        let mut warnings = Vec::new();

        for key in Self::KEYS {
            let Some(value) = settings.get(key) else {
                continue;
            };
            let Some(slot) = config.flag_mut(key) else {
                continue;
            };
            match value {
                toml::Value::Boolean(b) => *slot = b,
                other => warnings.push(format!(
                    "setting '{key}' should be true or false, got {} ({other}); using default {}",
                    other.type_str(),
                    *slot
                )),
            }
        }

        if settings.get("hex_uppercase").is_none()
            && let Some(value) = settings.get("hex_case")
        {
            match value.as_str() {
                Some(case) if case.eq_ignore_ascii_case("upper") => config.hex_uppercase = true,
                Some(case) if case.eq_ignore_ascii_case("lower") => config.hex_uppercase = false,
                _ => warnings.push(format!(
                    "setting 'hex_case' should be \"upper\" or \"lower\", got {value}; using default"
                )),
            }
        }

        (config, warnings)
    }

    /// Like [`FormatConfig::from_settings`], logging the warnings.
    pub fn load<S: Settings + ?Sized>(settings: &S) -> Self {
        let (config, warnings) = Self::from_settings(settings);
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }
}

// ── Settings file ──

/// A TOML table on disk acting as the settings store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsFile {
    table: toml::Table,
}

impl Settings for SettingsFile {
    fn get(&self, key: &str) -> Option<toml::Value> {
        self.table.get(key).cloned()
    }
}

impl From<&FormatConfig> for SettingsFile {
    fn from(config: &FormatConfig) -> Self {
        let mut config = *config;
        let table = FormatConfig::KEYS
            .into_iter()
            .filter_map(|key| {
                let value = *config.flag_mut(key)?;
                Some((key.to_string(), toml::Value::Boolean(value)))
            })
            .collect();
        SettingsFile { table }
    }
}

impl SettingsFile {
    /// Platform-specific settings directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colorswap"))
    }

    /// Full path to the settings file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("settings.toml"))
    }

    pub fn table(&self) -> &toml::Table {
        &self.table
    }

    /// Load settings from an arbitrary path, returning them and any parse warnings.
    ///
    /// Returns `(empty, [])` if the file doesn't exist.
    /// Returns `(empty, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match contents.parse::<toml::Table>() {
                Ok(table) => (SettingsFile { table }, vec![]),
                Err(e) => {
                    let warning = format!(
                        "settings parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Save atomically (write to temp file, then rename).
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(&self.table).map_err(std::io::Error::other)?;
        let contents = format!("{SETTINGS_HEADER}{serialized}");
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &contents)?;
        match std::fs::rename(&tmp, path) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Rename can fail across filesystems; fall back to direct write + cleanup
                let result = std::fs::write(path, &contents);
                let _ = std::fs::remove_file(&tmp);
                result
            }
        }
    }
}
