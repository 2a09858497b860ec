use crate::constants::EXPORT_CSV_HEADER;
use crate::models::ExportRow;
use crate::Error;
use csv::WriterBuilder;
use std::io::Write;

/// Writes export rows, preceded by the export header, as CSV.
///
/// Values containing quotes, commas, or line breaks are quoted.
pub fn write_export_csv<W: Write>(rows: &[ExportRow], writer: W) -> Result<(), Error> {
    // The header is written explicitly so that it is present even when there are no rows
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(EXPORT_CSV_HEADER)?;

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;

    Ok(())
}
