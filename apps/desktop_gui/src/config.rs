use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::ViewId;
use study_core::{app_state::DEFAULT_BOOKING_HORIZON_DAYS, AppOptions};

pub const SETTINGS_FILE: &str = "chavruta.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_filter: String,
    pub initial_view: ViewId,
    /// Overrides the local date for booking windows and the calendar.
    pub today: Option<NaiveDate>,
    pub booking_horizon_days: u32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            initial_view: ViewId::Pricing,
            today: None,
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl Settings {
    pub fn app_options(&self, local_today: NaiveDate) -> AppOptions {
        AppOptions {
            initial_view: self.initial_view,
            today: self.today.unwrap_or(local_today),
            booking_horizon_days: self.booking_horizon_days,
        }
    }

    fn apply(&mut self, key: &str, value: &str) {
        let value = value.trim();
        match key {
            "log_filter" if !value.is_empty() => self.log_filter = value.to_string(),
            "initial_view" => match value.parse::<ViewId>() {
                Ok(view) if view.is_public() => self.initial_view = view,
                Ok(view) => {
                    // Logging is not initialised yet while settings load.
                    eprintln!("initial_view '{view}' requires login; starting at pricing");
                    self.initial_view = ViewId::Pricing;
                }
                Err(err) => eprintln!("ignoring initial_view: {err}"),
            },
            "today" => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(date) => self.today = Some(date),
                Err(err) => eprintln!("ignoring today '{value}': {err}"),
            },
            "booking_horizon_days" => match value.parse::<u32>() {
                Ok(days) if days > 0 => self.booking_horizon_days = days,
                _ => eprintln!("ignoring booking_horizon_days '{value}'"),
            },
            "window_width" => {
                if let Some(width) = parse_extent(value) {
                    self.window_width = width;
                }
            }
            "window_height" => {
                if let Some(height) = parse_extent(value) {
                    self.window_height = height;
                }
            }
            _ => {}
        }
    }
}

fn parse_extent(value: &str) -> Option<f32> {
    match value.parse::<f32>() {
        Ok(extent) if extent.is_finite() && extent >= 320.0 => Some(extent),
        _ => {
            eprintln!("ignoring window extent '{value}'");
            None
        }
    }
}

/// Loads settings from `chavruta.toml` in the working directory, then the
/// environment. Missing or malformed sources never abort startup.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    match read_file_layer(Path::new(SETTINGS_FILE)) {
        Ok(Some(file_cfg)) => {
            for (key, value) in &file_cfg {
                settings.apply(key, value);
            }
        }
        Ok(None) => {}
        Err(err) => eprintln!("{err:#}"),
    }

    apply_env_layer(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn read_file_layer(path: &Path) -> anyhow::Result<Option<HashMap<String, String>>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };
    parse_file_layer(&raw)
        .with_context(|| format!("ignoring malformed '{}'", path.display()))
        .map(Some)
}

/// Values may be TOML strings, integers or floats.
fn parse_file_layer(raw: &str) -> anyhow::Result<HashMap<String, String>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let table = toml::from_str::<HashMap<String, RawValue>>(raw)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                RawValue::Text(text) => text,
                RawValue::Integer(n) => n.to_string(),
                RawValue::Float(n) => n.to_string(),
            };
            (key, value)
        })
        .collect())
}

const ENV_KEYS: [&str; 6] = [
    "log_filter",
    "initial_view",
    "today",
    "booking_horizon_days",
    "window_width",
    "window_height",
];

/// `CHAVRUTA_<KEY>` first, then the `APP__<KEY>` alias, which wins.
fn apply_env_layer(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ENV_KEYS {
        let upper = key.to_ascii_uppercase();
        for name in [format!("CHAVRUTA_{upper}"), format!("APP__{upper}")] {
            if let Some(value) = lookup(&name) {
                settings.apply(key, &value);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
