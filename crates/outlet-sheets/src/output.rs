//! Writing records as JSON or CSV

use std::io::Write;

use outlet_sheets_extract::{OutletRecord, CANONICAL_FIELDS};

use crate::error::Result;

/// Output format for extracted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of objects (default)
    #[default]
    Json,
    /// CSV with the canonical header row
    Csv,
}

/// Write records in the given format
pub fn write_records<W: Write>(records: &[OutletRecord], writer: W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(records, writer),
        OutputFormat::Csv => write_csv(records, writer),
    }
}

/// Write records as a pretty JSON array, missing metrics as `null`
pub fn write_json<W: Write>(records: &[OutletRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}

/// Write records as CSV, missing metrics as empty fields
pub fn write_csv<W: Write>(records: &[OutletRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CANONICAL_FIELDS)?;
    for record in records {
        csv_writer.write_record(record.fields().iter().map(ToString::to_string))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlet_sheets_extract::Metric;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<OutletRecord> {
        vec![OutletRecord::new("MG Road", "Ravi", "June")
            .with_metric(Metric::TotalRevenue, 1000.0)
            .with_metric(Metric::Pbt, 42.5)]
    }

    #[test]
    fn test_csv_has_canonical_header_and_blank_missing() {
        let mut buf = Vec::new();
        write_csv(&records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next().unwrap(), CANONICAL_FIELDS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "MG Road,Ravi,June,,1000,,,,,,,,,42.5,"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_round_trips() {
        let mut buf = Vec::new();
        write_json(&records(), &mut buf).unwrap();
        let back: Vec<OutletRecord> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, records());
    }
}
