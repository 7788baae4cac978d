use crate::error::ScrapeError;
use crate::results::OfferRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "offers.csv";

const CSV_HEADERS: [&str; 3] = ["link", "price", "vendor"];

/// Output encodings for collected offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated with a `link,price,vendor` header
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

/// Write the records to `path`, replacing any existing file
pub fn export(
    records: &[OfferRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => write_csv(records, writer)?,
        OutputFormat::Json => write_json(records, writer)?,
    }

    ::log::info!("Exported {} offers to {}", records.len(), path.display());
    Ok(())
}

/// One row per record, header included, missing fields left empty
pub fn write_csv<W: Write>(records: &[OfferRecord], writer: W) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record([
            record.link.as_str(),
            record.price.as_deref().unwrap_or_default(),
            record.vendor.as_deref().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(records: &[OfferRecord], mut writer: W) -> Result<(), ScrapeError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
