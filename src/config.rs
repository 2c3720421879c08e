// src/config.rs

use std::path::{Path, PathBuf};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::*;
use crate::error::ConvertError;

pub const DEFAULT_ZONE: &str = "Analog-PHL";
pub const DEFAULT_BANDWIDTH: &str = "25K";

/// Settings (run-wide policy applied to every output row)
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct Settings {
    pub zone: String,
    pub bandwidth: String,
    pub high_power_threshold: Decimal,
    pub channel_name_width_max: usize,
    pub bandplan: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            zone: DEFAULT_ZONE.to_string(),
            bandwidth: DEFAULT_BANDWIDTH.to_string(),
            high_power_threshold: dec!(5),
            channel_name_width_max: 16,
            bandplan: None,
        }
    }
}

pub fn parse_settings(toml_str: &str) -> Result<Settings, ConvertError> {
    Ok(toml::from_str(toml_str)?)
}

// defaults < config file < command line
pub fn load_settings(opt: &Opt) -> Result<Settings, ConvertError> {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());
    let mut settings = match &opt.config {
        Some(path) => read_settings(path, opt)?,
        None => Settings::default(),
    };
    if let Some(zone) = &opt.zone {
        settings.zone = zone.clone();
    }
    uprintln!(opt, Stderr, None, 3, "{:?}", settings);
    Ok(settings)
}

fn read_settings(path: &Path, opt: &Opt) -> Result<Settings, ConvertError> {
    uprintln!(opt, Stderr, None, 1, "Loading config: {}", path.display());
    let toml_str = std::fs::read_to_string(path)?;
    parse_settings(&toml_str)
}
