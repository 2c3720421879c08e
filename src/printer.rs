// src/printer.rs

use crate::*;
use crate::frequency::format_mhz;
use crate::structures::*;

fn pretty_channel(channel: &ZoneChannel) -> String {
    let mut line = String::new();
    line.push_str("    ");
    line.push_str(&format!("{:4} ", channel.index));
    line.push_str(&format!("{:16} ", channel.name));
    line.push_str(&format!("{:5} ", channel.bandwidth));
    line.push_str(&format!("{:4} ", channel.power));
    line.push_str(&format!("{:>10} ", format_mhz(&channel.frequency_rx)));
    line.push_str(&format!("{:>10} ", format_mhz(&channel.frequency_tx)));
    line.push_str(&format!("{:>5} ", channel.ctcss_decode.to_string()));
    line.push_str(&format!("{:>5} ", channel.ctcss_encode.to_string()));
    line.push_str(if channel.tx_prohibit { "RXO" } else { "   " });
    line
}

pub fn pretty(opt: &Opt, channels: &[ZoneChannel]) -> String {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());

    let mut output = String::new();
    let zone = channels.first().map(|c| c.zone.as_str()).unwrap_or("");
    output.push_str(&format!("Zone: {} ({} channels)\n", zone, channels.len()));
    output.push_str(&format!("    {:4} {:16} {:5} {:4} {:>10} {:>10} {:>5} {:>5} {}\n",
        "no", "name", "bw", "pwr", "rxf", "txf", "dec", "enc", "rxo"));
    for channel in channels {
        output.push_str(pretty_channel(channel).trim_end());
        output.push('\n');
    }
    output
}
