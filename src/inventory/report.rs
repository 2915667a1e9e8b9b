use std::io::Write;

use super::record::ToolRecord;

/// Header row of every report, in column order
pub const REPORT_HEADER: [&str; 6] = [
    "Name",
    "Quantity",
    "Location",
    "Last Maintenance",
    "Serial Number",
    "Category",
];

/// Write `records` as CSV to `writer`, header first.
///
/// Rows use CRLF terminators and only quote fields that need it (commas,
/// quotes, line breaks). Returns the number of data rows written.
pub fn write_csv<'a, W, I>(writer: W, records: I) -> csv::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ToolRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;

    let mut rows = 0;
    for record in records {
        let quantity = record.quantity.to_string();
        csv_writer.write_record([
            record.name.as_str(),
            quantity.as_str(),
            record.location.as_str(),
            record.last_maintenance.as_str(),
            record.serial_number(),
            record.category.as_str(),
        ])?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}
