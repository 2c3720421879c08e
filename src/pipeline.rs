// src/pipeline.rs
// reference https://burntsushi.net/csv/ for CSV parsing technique

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::*;
use crate::config::Settings;
use crate::convert::convert_record;
use crate::error::ConvertError;
use crate::structures::*;
use crate::validate::{print_complaint, Complaint};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// What a run produced, in input order
#[derive(Debug, Default)]
pub struct Summary {
    pub channels: Vec<ZoneChannel>,
    pub complaints: Vec<Complaint>,
}

/// Positions of the CHIRP columns we read, resolved from the header row
#[derive(Debug, PartialEq)]
pub struct ChirpColumns {
    positions: [usize; CHIRP_COLUMNS.len()],
}

impl ChirpColumns {
    pub fn from_headers(headers: &csv::StringRecord) -> Result<ChirpColumns, ConvertError> {
        let mut positions = [0; CHIRP_COLUMNS.len()];
        for (ii, &column) in CHIRP_COLUMNS.iter().enumerate() {
            positions[ii] = headers.iter().position(|h| h == column)
                .ok_or(ConvertError::MissingColumn(column))?;
        }
        Ok(ChirpColumns { positions })
    }

    // short rows read as blank fields
    pub fn record(&self, row: &csv::StringRecord) -> ChirpRecord {
        let field = |ii: usize| row.get(self.positions[ii]).unwrap_or("").to_string();
        ChirpRecord {
            name: field(0),
            frequency: field(1),
            duplex: field(2),
            offset: field(3),
            power: field(4),
            tone: field(5),
            r_tone_freq: field(6),
            c_tone_freq: field(7),
        }
    }
}

// CHIRP on Windows likes to write a BOM
pub fn skip_bom<R: BufRead>(reader: &mut R) -> std::io::Result<bool> {
    let found = reader.fill_buf()?.starts_with(UTF8_BOM);
    if found {
        reader.consume(UTF8_BOM.len());
    }
    Ok(found)
}

fn open_input(input_path: &Path, opt: &Opt) -> Result<BufReader<File>, ConvertError> {
    // check that the input path is a file
    if !input_path.is_file() {
        uprintln!(opt, Stderr, Color::Red, None, "You lied to me when you told me this was a file: {}", input_path.display());
        return Err(ConvertError::InputNotFound(input_path.to_path_buf()));
    }
    uprintln!(opt, Stderr, None, 1, "Reading {}", input_path.display());
    let mut input = BufReader::new(File::open(input_path)?);
    if skip_bom(&mut input)? {
        uprintln!(opt, Stderr, None, 3, "Skipped UTF-8 byte order mark");
    }
    Ok(input)
}

/// Convert a CHIRP CSV file to a Zone/Channel CSV file, row for row
pub fn convert_file(input_path: &Path, output_path: &Path, settings: &Settings, opt: &Opt) -> Result<Summary, ConvertError> {
    uprintln!(opt, Stderr, None, 2, "{}:{}()", file!(), function!());
    let input = open_input(input_path, opt)?;

    // the writer flushes on drop, so an early return still leaves what was written
    uprintln!(opt, Stderr, None, 1, "Writing {}", output_path.display());
    let mut writer = csv::WriterBuilder::new()
        .from_path(output_path)?;
    writer.write_record(ZONE_CHANNEL_HEADER)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);
    let columns = ChirpColumns::from_headers(reader.headers()?)?;
    uprintln!(opt, Stderr, None, 4, "columns = {:?}", columns);

    let mut summary = Summary::default();
    for (ii, result) in reader.records().enumerate() {
        let row = result?;
        let record = columns.record(&row);
        uprintln!(opt, Stderr, None, 4, "    {:?}", record);
        let converted = convert_record(ii + 1, &record, settings)?;
        uprintln!(opt, Stderr, None, 3, "Writing channel {:4}: {}", converted.channel.index, converted.channel.name);
        writer.write_record(converted.channel.to_record())?;
        for complaint in &converted.complaints {
            print_complaint(complaint, opt);
        }
        summary.channels.push(converted.channel);
        summary.complaints.extend(converted.complaints);
    }

    writer.flush()?;
    Ok(summary)
}
