// src/validate.rs

use rust_decimal::prelude::*;
use serde::Serialize;
use crate::*;
use crate::bandplan::Bandplan;
use crate::config::Settings;
use crate::structures::ZoneChannel;

/// Severity
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Severity {
    Error,
    Warning,
    #[default]
    Info,
}

/// Complaint
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct Complaint {
    pub severity: Severity,
    pub message: String,
    pub source_index: Option<usize>,
    pub source_name: Option<String>,
}

impl Complaint {
    fn about(severity: Severity, channel: &ZoneChannel, message: String) -> Complaint {
        Complaint {
            severity,
            message,
            source_index: Some(channel.index),
            source_name: Some(channel.name.clone()),
        }
    }

    /// One line, without the severity tag
    pub fn line(&self) -> String {
        match (&self.source_index, &self.source_name) {
            (Some(index), Some(name)) => format!("{:4} {:24} {}", index, name, self.message),
            _ => self.message.clone(),
        }
    }
}

// checks every converted channel against the bandplan, advisory only
pub fn validate_bandplan(channels: &[ZoneChannel], bandplan: &Bandplan, opt: &Opt) -> Vec<Complaint> {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());
    uprintln!(opt, Stderr, None, 1, "Validating channels against bandplan: {} (source: {})",
        bandplan.name, bandplan.source.as_deref().unwrap_or("built-in"));
    let mut complaints: Vec<Complaint> = Vec::new();
    if channels.is_empty() {
        complaints.push(Complaint {
            severity: Severity::Error,
            message: "Input has no channels".to_string(),
            source_index: None,
            source_name: None,
        });
    }
    for channel in channels {
        let rx_band = bandplan::get_band(bandplan, channel.frequency_rx);
        let tx_band = bandplan::get_band(bandplan, channel.frequency_tx);
        // warn less strongly if we don't know the RX band
        if rx_band.is_none() {
            complaints.push(Complaint::about(Severity::Info, channel,
                format!("Unrecognized RX band: {}", freq2str(&channel.frequency_rx))));
        }
        // warn if we don't know the TX band, but only if the channel can transmit
        if tx_band.is_none() && !channel.tx_prohibit {
            complaints.push(Complaint::about(Severity::Warning, channel,
                format!("Unrecognized TX band: {}", freq2str(&channel.frequency_tx))));
        }
        let (Some(rx_band), Some(tx_band)) = (rx_band, tx_band) else {
            continue;
        };
        if rx_band != tx_band {
            complaints.push(Complaint::about(Severity::Warning, channel,
                format!("Crossband: tx: {} rx: {}", freq2str(&channel.frequency_tx), freq2str(&channel.frequency_rx))));
        } else if let Some(offsets) = &tx_band.nominal_offsets {
            let diff = (channel.frequency_tx - channel.frequency_rx).abs();
            if !diff.is_zero() && !offsets.contains(&diff) {
                complaints.push(Complaint::about(Severity::Warning, channel,
                    format!("Unusual offset: {} (tx: {} rx: {})", freq2str(&diff), freq2str(&channel.frequency_tx), freq2str(&channel.frequency_rx))));
            }
        }
        // if TX enabled, check if we're transmitting outside the amateur bands
        if !channel.tx_prohibit && !tx_band.is_amateur {
            let severity = match tx_band.name.as_str() {
                "MURS" | "FRS/GMRS" => Severity::Info,
                _ => Severity::Error,
            };
            complaints.push(Complaint::about(severity, channel,
                format!("TX on {}: {}", tx_band.name, freq2str(&channel.frequency_tx))));
        }
    }
    complaints
}

// checks against what the target programming software accepts
pub fn validate_names(channels: &[ZoneChannel], settings: &Settings, opt: &Opt) -> Vec<Complaint> {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());
    let mut complaints: Vec<Complaint> = Vec::new();
    for channel in channels {
        let width = channel.name.chars().count();
        if width == 0 {
            complaints.push(Complaint::about(Severity::Error, channel, "Name is empty".to_string()));
        } else if width > settings.channel_name_width_max {
            complaints.push(Complaint::about(Severity::Warning, channel,
                format!("Name is too long (len: {}, max: {})", width, settings.channel_name_width_max)));
        }
    }
    complaints
}

pub fn count(complaints: &[Complaint], severity: Severity) -> usize {
    complaints.iter().filter(|c| c.severity == severity).count()
}

pub fn print_complaint(complaint: &Complaint, opt: &Opt) {
    match complaint.severity {
        Severity::Error => {
            uprintln!(opt, Stderr, Color::Red, None, "[Error  ] {}", complaint.line());
        },
        Severity::Warning => {
            uprintln!(opt, Stderr, Color::Yellow, None, "[Warning] {}", complaint.line());
        },
        Severity::Info => {
            uprintln!(opt, Stderr, Color::Cyan, 1, "[Info   ] {}", complaint.line());
        },
    }
}

pub fn print_complaints(complaints: &[Complaint], opt: &Opt) {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());
    uprintln!(opt, Stderr, Color::Magenta, None, "{:-^1$}", " Validation Output ", 79);

    for complaint in complaints {
        print_complaint(complaint, opt);
    }
    // total everything up
    let error_count = count(complaints, Severity::Error);
    let warning_count = count(complaints, Severity::Warning);
    let info_count = count(complaints, Severity::Info);
    uprintln!(opt, Stderr, Color::Magenta, None, "{}", "- ".repeat(40));
    let color = if error_count > 0 {
        Color::Red
    } else if warning_count > 0 {
        Color::Yellow
    } else {
        Color::Cyan
    };
    uprintln!(opt, Stderr, color, None, "Validation: {} errors, {} warnings, {} infos", error_count, warning_count, info_count);
    uprintln!(opt, Stderr, Color::Magenta, None, "{}", "-".repeat(79));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use crate::bandplan::default_bandplan;
    use crate::power::PowerLevel;
    use crate::structures::Ctcss;

    fn channel(name: &str, rx: Decimal, tx: Decimal, tx_prohibit: bool) -> ZoneChannel {
        ZoneChannel {
            index: 1,
            zone: "TestZone".to_string(),
            name: name.to_string(),
            bandwidth: "25K".to_string(),
            power: PowerLevel::High,
            frequency_rx: rx,
            frequency_tx: tx,
            ctcss_decode: Ctcss::Off,
            ctcss_encode: Ctcss::Off,
            tx_prohibit,
        }
    }

    fn check(channels: &[ZoneChannel]) -> Vec<Complaint> {
        validate_bandplan(channels, &default_bandplan(), &Opt::default())
    }

    #[test]
    fn test_clean_repeater() {
        assert!(check(&[channel("W3QV", dec!(146.94), dec!(146.34), false)]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let complaints = check(&[]);
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].severity, Severity::Error);
    }

    #[test]
    fn test_rx_only_outside_bandplan() {
        let complaints = check(&[channel("NOAA 1", dec!(162.55), dec!(162.55), true)]);
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].severity, Severity::Info);
    }

    #[test]
    fn test_tx_outside_bandplan() {
        let complaints = check(&[channel("Marine 16", dec!(156.8), dec!(156.8), false)]);
        assert_eq!(count(&complaints, Severity::Info), 1);
        assert_eq!(count(&complaints, Severity::Warning), 1);
    }

    #[test]
    fn test_crossband() {
        let complaints = check(&[channel("X", dec!(146.52), dec!(446), false)]);
        assert_eq!(complaints.len(), 1);
        assert!(complaints[0].message.starts_with("Crossband"));
    }

    #[test]
    fn test_unusual_offset() {
        let complaints = check(&[channel("Odd", dec!(146.94), dec!(146.44), false)]);
        assert_eq!(complaints.len(), 1);
        assert!(complaints[0].message.starts_with("Unusual offset"));
    }

    #[test]
    fn test_non_amateur_tx() {
        let complaints = check(&[channel("MURS 1", dec!(151.82), dec!(151.82), false)]);
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].severity, Severity::Info);
        // RX only GMRS listening is fine
        assert!(check(&[channel("GMRS 1", dec!(462.5625), dec!(462.5625), true)]).is_empty());
    }

    #[test]
    fn test_names() {
        let settings = Settings::default();
        let channels = [
            channel("", dec!(146.52), dec!(146.52), false),
            channel("A Very Long Channel Name", dec!(146.52), dec!(146.52), false),
            channel("Fine", dec!(146.52), dec!(146.52), false),
        ];
        let complaints = validate_names(&channels, &settings, &Opt::default());
        assert_eq!(complaints.len(), 2);
        assert_eq!(complaints[0].severity, Severity::Error);
        assert_eq!(complaints[1].severity, Severity::Warning);
    }

    #[test]
    fn test_line() {
        let complaint = Complaint::about(Severity::Warning, &channel("W3QV", dec!(146.94), dec!(146.34), false), "hello".to_string());
        assert_eq!(complaint.line(), format!("{:4} {:24} hello", 1, "W3QV"));
        let bare = Complaint { message: "bare".to_string(), ..Complaint::default() };
        assert_eq!(bare.line(), "bare");
    }
}
