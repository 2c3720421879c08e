// src/bandplan.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::*;
use crate::error::ConvertError;

/// Band, ranges and offsets in MHz
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Band {
    pub name: String,
    pub ranges: Vec<(Decimal, Decimal)>,
    pub nominal_offsets: Option<Vec<Decimal>>,
    pub is_amateur: bool,
}

/// Bandplan
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Bandplan {
    pub name: String,
    pub source: Option<String>,
    pub bands: Vec<Band>,
}

fn band(name: &str, ranges: Vec<(Decimal, Decimal)>, nominal_offsets: Option<Vec<Decimal>>, is_amateur: bool) -> Band {
    Band {
        name: name.to_string(),
        ranges,
        nominal_offsets,
        is_amateur,
    }
}

// US VHF/UHF bands CHIRP exports usually cover
pub fn default_bandplan() -> Bandplan {
    Bandplan {
        name: String::from("Default Bandplan"),
        source: None,
        bands: vec![
            band("Amateur 10m", vec![(dec!(28), dec!(29.7))], Some(vec![dec!(0.1)]), true),
            band("Amateur 6m", vec![(dec!(50), dec!(54))], Some(vec![dec!(0.5), dec!(1)]), true),
            band("Amateur 2m", vec![(dec!(144), dec!(148))], Some(vec![dec!(0.6)]), true),
            band("MURS", vec![(dec!(151.82), dec!(151.94)), (dec!(154.57), dec!(154.6))], None, false),
            band("Amateur 1.25m", vec![(dec!(219), dec!(225))], Some(vec![dec!(1.6)]), true),
            band("Amateur 70cm", vec![(dec!(420), dec!(450))], Some(vec![dec!(5)]), true),
            band("FRS/GMRS", vec![(dec!(462.55), dec!(462.725)), (dec!(467.55), dec!(467.725))], Some(vec![dec!(5)]), false),
            band("Amateur 33cm", vec![(dec!(902), dec!(928))], Some(vec![dec!(12), dec!(25)]), true),
            band("Amateur 23cm", vec![(dec!(1240), dec!(1300))], Some(vec![dec!(12), dec!(20)]), true),
        ],
    }
}

// load the bandplan named in settings, or the built-in one
pub fn load_bandplan(path: Option<&Path>, opt: &Opt) -> Result<Bandplan, ConvertError> {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());
    match path {
        Some(path) => {
            uprintln!(opt, Stderr, None, 1, "Loading bandplan: {}", path.display());
            let toml_str = std::fs::read_to_string(path)?;
            let mut bandplan: Bandplan = toml::from_str(&toml_str)?;
            bandplan.source = Some(path.display().to_string());
            Ok(bandplan)
        }
        None => Ok(default_bandplan()),
    }
}

pub fn get_band(bandplan: &Bandplan, frequency: Decimal) -> Option<&Band> {
    for band in &bandplan.bands {
        for range in &band.ranges {
            if frequency >= range.0 && frequency <= range.1 {
                return Some(band);
            }
        }
    }
    None
}
