// src/structures.rs

use std::fmt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::frequency::format_mhz;
use crate::power::PowerLevel;

/// Columns the converter reads from a CHIRP export, others are ignored
pub const CHIRP_COLUMNS: [&str; 8] = [
    "Name",
    "Frequency",
    "Duplex",
    "Offset",
    "Power",
    "Tone",
    "rToneFreq",
    "cToneFreq",
];

/// Zone/Channel output header, in column order
pub const ZONE_CHANNEL_HEADER: [&str; 9] = [
    "Zone",
    "Channel Name",
    "Bandwidth",
    "Power",
    "RX Freq",
    "TX Freq",
    "CTCSS Decode",
    "CTCSS Encode",
    "TX Prohibit",
];

/// One row of a CHIRP CSV export, as text
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ChirpRecord {
    pub name: String,
    pub frequency: String,
    pub duplex: String,
    pub offset: String,
    pub power: String,
    pub tone: String,
    pub r_tone_freq: String,
    pub c_tone_freq: String,
}

/// CHIRP duplex
// (blank): simplex, TX/RX are the same
// +,-: TX frequency is offset from RX frequency by Offset
// off: RX only
// anything else (e.g. split) transmits on RX
#[derive(Debug, PartialEq, Clone)]
pub enum Duplex {
    Simplex,
    Plus,
    Minus,
    Off,
    Unknown(String),
}

impl Duplex {
    pub fn parse(s: &str) -> Duplex {
        match s.trim().to_lowercase().as_str() {
            "" => Duplex::Simplex,
            "+" => Duplex::Plus,
            "-" => Duplex::Minus,
            "off" => Duplex::Off,
            _ => Duplex::Unknown(s.trim().to_string()),
        }
    }
}

/// CHIRP tone mode, only Tone and TSQL carry over
// - (none): carrier squelch both ways
// - Tone: CTCSS transmitted, receive squelch is carrier
// - TSQL: CTCSS transmitted, receive squelch is tone-coded
// - DTCS, Cross: DCS and mixed modes, not supported by the target
#[derive(Debug, PartialEq, Clone)]
pub enum ToneMode {
    None,
    Tone,
    Tsql,
    Unsupported(String),
}

impl ToneMode {
    pub fn parse(s: &str) -> ToneMode {
        match s.trim().to_uppercase().as_str() {
            "" => ToneMode::None,
            "TONE" => ToneMode::Tone,
            "TSQL" => ToneMode::Tsql,
            _ => ToneMode::Unsupported(s.trim().to_string()),
        }
    }
}

/// CTCSS setting as written to the target, the tone text is kept as exported
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub enum Ctcss {
    Off,
    Tone(String),
}

impl Ctcss {
    // blank is Off
    pub fn from_field(s: &str) -> Ctcss {
        match s.trim() {
            "" => Ctcss::Off,
            tone => Ctcss::Tone(tone.to_string()),
        }
    }

    pub fn is_off(&self) -> bool {
        *self == Ctcss::Off
    }
}

impl fmt::Display for Ctcss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ctcss::Off => write!(f, "Off"),
            Ctcss::Tone(tone) => write!(f, "{}", tone),
        }
    }
}

/// Zone/Channel row
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ZoneChannel {
    pub index: usize,
    pub zone: String,
    pub name: String,
    pub bandwidth: String,
    pub power: PowerLevel,
    pub frequency_rx: Decimal,
    pub frequency_tx: Decimal,
    pub ctcss_decode: Ctcss,
    pub ctcss_encode: Ctcss,
    pub tx_prohibit: bool,
}

impl ZoneChannel {
    /// Fields in ZONE_CHANNEL_HEADER order
    pub fn to_record(&self) -> [String; 9] {
        [
            self.zone.clone(),
            self.name.clone(),
            self.bandwidth.clone(),
            self.power.to_string(),
            format_mhz(&self.frequency_rx),
            format_mhz(&self.frequency_tx),
            self.ctcss_decode.to_string(),
            self.ctcss_encode.to_string(),
            if self.tx_prohibit { "On" } else { "Off" }.to_string(),
        ]
    }
}
