use syzygy_core::FluxSample;

use crate::error::ExportError;
use crate::format::CsvLayout;

/// Parsed light curve and the layout it was written in.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvCurve {
    pub layout: CsvLayout,
    pub samples: Vec<FluxSample>,
}

/// Parse CSV text produced by `write_csv`. Blank lines are skipped. Shadow
/// fractions absent from the layout read as 0.
pub fn read_csv(text: &str) -> Result<CsvCurve, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if header.iter().all(str::is_empty) {
        return Err(ExportError::MissingHeader);
    }
    let layout = CsvLayout::from_columns(header.iter())
        .ok_or_else(|| ExportError::UnknownHeader(header.iter().collect::<Vec<_>>().join(",")))?;
    let columns = layout.columns();

    let mut samples: Vec<FluxSample> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != columns.len() {
            return Err(ExportError::ColumnCount {
                line,
                expected: columns.len(),
                actual: record.len(),
            });
        }

        let mut values = [0.0f64; 4];
        for (slot, (field, column)) in values
            .iter_mut()
            .zip(record.iter().zip(columns.iter().copied()))
        {
            *slot = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ExportError::ParseFloat {
                    line,
                    column,
                    value: field.to_string(),
                })?;
        }

        let sample = FluxSample {
            time: values[0],
            flux: values[1],
            umbra_fraction: values[2],
            penumbra_fraction: values[3],
        };
        if let Some(prev) = samples.last() {
            if sample.time <= prev.time {
                return Err(ExportError::NonMonotonicTime {
                    line,
                    time: sample.time,
                });
            }
        }
        samples.push(sample);
    }

    log::debug!("read {} samples ({:?})", samples.len(), layout);
    Ok(CsvCurve { layout, samples })
}
