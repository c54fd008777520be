use syzygy_core::FluxSample;

use crate::error::ExportError;
use crate::format::CsvLayout;

/// Serialize samples as CSV text with a header row and `precision` decimals
/// per field. Records end with `\n`.
pub fn write_csv(
    samples: &[FluxSample],
    layout: CsvLayout,
    precision: usize,
) -> Result<String, ExportError> {
    let columns = layout.columns();
    let row_width = columns.len() * (precision + 4);
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity((samples.len() + 1) * row_width));

    writer.write_record(columns)?;
    for s in samples {
        let fields = [s.time, s.flux, s.umbra_fraction, s.penumbra_fraction];
        writer.write_record(
            fields[..columns.len()]
                .iter()
                .map(|v| format!("{v:.precision$}")),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}
