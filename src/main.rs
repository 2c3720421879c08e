// src/main.rs

use std::error::Error;
use std::path::PathBuf;
use clap::Parser;
use termcolor::Color;
use helpers::*;

mod bandplan;
mod config;
mod convert;
mod error;
mod frequency;
mod helpers;
mod pipeline;
mod power;
mod printer;
mod structures;
mod validate;

// chirp2zone - CHIRP CSV to Zone/Channel CSV conversion tool
// Usage: chirp2zone --in <chirp.csv> --out <zone.csv> [--zone <name>] [options]
#[derive(Parser, Debug, Default)]
#[command(name = "chirp2zone", about = "Convert a CHIRP CSV export to a Zone/Channel CSV")]
pub struct Opt {
    /// CHIRP CSV input path
    #[arg(short = 'i', long = "in", value_name = "CHIRP_CSV")]
    pub input: PathBuf,

    /// Zone/Channel CSV output path (created or truncated)
    #[arg(short = 'o', long = "out", value_name = "ZONE_CSV")]
    pub output: PathBuf,

    /// Zone name stamped on every row [default: Analog-PHL]
    #[arg(short = 'z', long)]
    pub zone: Option<String>,

    /// TOML settings file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Check the converted channels against a bandplan
    #[arg(long)]
    pub validate: bool,

    /// Print the converted channels as a table
    #[arg(long)]
    pub pretty: bool,

    /// Dump the converted channels as JSON to stdout
    #[arg(long)]
    pub dump: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();

    // all output except the JSON dump goes to stderr
    uprintln!(opt, Stderr, None, 1, "Welcome to the chirp2zone, we got fun and games!");
    uprintln!(opt, Stderr, None, 3, "{:?}", opt);

    let settings = config::load_settings(&opt)?;
    let summary = pipeline::convert_file(&opt.input, &opt.output, &settings, &opt)?;
    let mut complaints = summary.complaints.clone();

    if opt.validate {
        let bandplan = bandplan::load_bandplan(settings.bandplan.as_deref(), &opt)?;
        let mut found = validate::validate_bandplan(&summary.channels, &bandplan, &opt);
        found.extend(validate::validate_names(&summary.channels, &settings, &opt));
        validate::print_complaints(&found, &opt);
        complaints.extend(found);
    }
    if opt.pretty {
        uprintln!(opt, Stderr, None, None, "{}", printer::pretty(&opt, &summary.channels).trim_end());
    }
    if opt.dump {
        let json = serde_json::to_string_pretty(&summary.channels)?;
        uprintln!(opt, Stdout, None, None, "{}", json);
    }

    uprintln!(opt, Stderr, None, None, "Converted {} channels into zone \"{}\" with {} errors, {} warnings. Have a nice day!",
        summary.channels.len(), settings.zone,
        validate::count(&complaints, validate::Severity::Error),
        validate::count(&complaints, validate::Severity::Warning));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let opt = Opt::try_parse_from(["chirp2zone", "--in", "a.csv", "--out", "b.csv"]).unwrap();
        assert_eq!(opt.input, PathBuf::from("a.csv"));
        assert_eq!(opt.output, PathBuf::from("b.csv"));
        assert_eq!(opt.zone, None);
        assert_eq!(opt.verbose, 0);
        assert!(!opt.validate);
    }

    #[test]
    fn test_args_all() {
        let opt = Opt::try_parse_from([
            "chirp2zone", "-i", "a.csv", "-o", "b.csv", "-z", "TestZone", "-c", "c.toml",
            "--validate", "--pretty", "--dump", "-vvv",
        ]).unwrap();
        assert_eq!(opt.zone.as_deref(), Some("TestZone"));
        assert_eq!(opt.config, Some(PathBuf::from("c.toml")));
        assert!(opt.validate && opt.pretty && opt.dump);
        assert_eq!(opt.verbose, 3);
    }

    #[test]
    fn test_paths_required() {
        assert!(Opt::try_parse_from(["chirp2zone", "--in", "a.csv"]).is_err());
        assert!(Opt::try_parse_from(["chirp2zone", "--out", "b.csv"]).is_err());
    }
}
