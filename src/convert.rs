// src/convert.rs
// CHIRP row -> Zone/Channel row

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::error::ConvertError;
use crate::frequency::{parse_mhz, parse_offset};
use crate::power::power_level;
use crate::structures::*;
use crate::validate::{Complaint, Severity};

/// A converted row plus whatever it had to say about itself
#[derive(Debug, PartialEq, Clone)]
pub struct Converted {
    pub channel: ZoneChannel,
    pub complaints: Vec<Complaint>,
}

pub fn tx_frequency(rx: Decimal, duplex: &Duplex, offset: Decimal) -> Decimal {
    match duplex {
        Duplex::Plus => rx + offset,
        Duplex::Minus => rx - offset,
        Duplex::Simplex | Duplex::Off | Duplex::Unknown(_) => rx,
    }
}

// returns a tuple with decode and encode, in that order
pub fn split_tones(mode: &ToneMode, r_tone_freq: &str, c_tone_freq: &str) -> (Ctcss, Ctcss) {
    match mode {
        ToneMode::Tsql => (Ctcss::from_field(r_tone_freq), Ctcss::from_field(c_tone_freq)),
        ToneMode::Tone => {
            // encode falls back to rToneFreq when cToneFreq is blank
            let encode = match Ctcss::from_field(c_tone_freq) {
                Ctcss::Off => Ctcss::from_field(r_tone_freq),
                tone => tone,
            };
            (Ctcss::Off, encode)
        }
        ToneMode::None | ToneMode::Unsupported(_) => (Ctcss::Off, Ctcss::Off),
    }
}

fn parse_number(index: usize, field: &'static str, value: &str, parse: fn(&str) -> Option<Decimal>) -> Result<Decimal, ConvertError> {
    parse(value).ok_or_else(|| ConvertError::InvalidNumber {
        row: index,
        field,
        value: value.to_string(),
    })
}

fn complaint(severity: Severity, index: usize, name: &str, message: String) -> Complaint {
    Complaint {
        severity,
        message,
        source_index: Some(index),
        source_name: Some(name.to_string()),
    }
}

/// Convert one CHIRP record, `index` is the 1-based data row number
pub fn convert_record(index: usize, record: &ChirpRecord, settings: &Settings) -> Result<Converted, ConvertError> {
    let name = record.name.trim().to_string();
    let mut complaints = Vec::new();

    let frequency_rx = parse_number(index, "Frequency", &record.frequency, parse_mhz)?;
    let offset = parse_number(index, "Offset", &record.offset, parse_offset)?;
    let duplex = Duplex::parse(&record.duplex);
    if let Duplex::Unknown(d) = &duplex {
        complaints.push(complaint(Severity::Info, index, &name,
            format!("Unsupported duplex \"{}\", treating as simplex", d)));
    }
    let frequency_tx = tx_frequency(frequency_rx, &duplex, offset);

    let tone_mode = ToneMode::parse(&record.tone);
    if let ToneMode::Unsupported(mode) = &tone_mode {
        complaints.push(complaint(Severity::Info, index, &name,
            format!("Tone mode \"{}\" not supported, CTCSS set to Off", mode)));
    }
    let (ctcss_decode, ctcss_encode) = split_tones(&tone_mode, &record.r_tone_freq, &record.c_tone_freq);
    if ctcss_encode != ctcss_decode && !ctcss_decode.is_off() {
        complaints.push(complaint(Severity::Warning, index, &name,
            format!("has possibly confused tones encode={} decode={}", ctcss_encode, ctcss_decode)));
    }

    let channel = ZoneChannel {
        index,
        zone: settings.zone.clone(),
        name,
        bandwidth: settings.bandwidth.clone(),
        power: power_level(&record.power, settings.high_power_threshold),
        frequency_rx,
        frequency_tx,
        ctcss_decode,
        ctcss_encode,
        tx_prohibit: duplex == Duplex::Off,
    };
    Ok(Converted { channel, complaints })
}
