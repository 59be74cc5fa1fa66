//! Settings loader module
//!
//! Parses the `settings.txt` file that holds per-bone scale factors and
//! feature flags. Each line has the form `name：value` with a full-width
//! colon separator; values that parse as floating point numbers are stored
//! numerically, everything else is kept as literal text.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::MotionConverterError;

/// Default settings file name, resolved against the working directory.
pub const SETTINGS_FILE: &str = "settings.txt";

/// Separator between a setting name and its value.
///
/// This is the full-width colon U+FF1A, not the ASCII colon, because the
/// settings file is edited alongside Japanese bone names.
pub const KEY_SEPARATOR: char = '：';

/// A single settings value: numeric when the raw text parses as a float,
/// literal text otherwise.
///
/// Scale factors come through as `Number`; feature flags like `ON`/`OFF`
/// stay `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// A value that parsed as a floating point number.
    Number(f64),
    /// Any other value, kept verbatim.
    Text(String),
}

impl SettingValue {
    /// Returns the numeric value, or `None` for text values.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SettingValue::Number(n) => Some(*n),
            SettingValue::Text(_) => None,
        }
    }

    /// Returns the text value, or `None` for numeric values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Number(_) => None,
            SettingValue::Text(s) => Some(s),
        }
    }
}

/// The settings map, immutable after load.
#[derive(Debug, Default)]
pub struct Settings {
    values: HashMap<String, SettingValue>,
}

impl Settings {
    /// Loads settings from a file.
    ///
    /// A missing or unreadable file is reported on stderr and yields an
    /// empty map rather than an error; the gap surfaces later as a
    /// [`MotionConverterError::MissingSetting`] when the transformer needs
    /// a key. No error escapes this function.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                eprintln!(
                    "Warning: could not read settings file {:?}: {}",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Parses settings from text.
    ///
    /// Each line is trimmed and split on the first [`KEY_SEPARATOR`].
    /// Lines without the separator contribute nothing. Later lines with
    /// the same key overwrite earlier ones.
    pub fn parse(contents: &str) -> Self {
        let mut values = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            let Some((key, value_str)) = line.split_once(KEY_SEPARATOR) else {
                continue;
            };

            let value = match value_str.trim().parse::<f64>() {
                Ok(n) => SettingValue::Number(n),
                Err(_) => SettingValue::Text(value_str.to_string()),
            };
            values.insert(key.to_string(), value);
        }

        Settings { values }
    }

    /// Returns the raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Returns the numeric value for a required key.
    ///
    /// Absent or non-numeric values are a fatal configuration error; every
    /// bone scale factor and the arm Z offset go through this accessor.
    pub fn scale(&self, key: &str) -> Result<f64, MotionConverterError> {
        self.values
            .get(key)
            .and_then(SettingValue::as_number)
            .ok_or_else(|| MotionConverterError::MissingSetting(key.to_string()))
    }

    /// Returns `true` iff the key holds exactly the given literal text.
    ///
    /// An absent key, a numeric value, or any other text all return
    /// `false`.
    pub fn flag_is(&self, key: &str, literal: &str) -> bool {
        matches!(self.values.get(key), Some(SettingValue::Text(s)) if s == literal)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
