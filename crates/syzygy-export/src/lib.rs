//! Light-curve CSV export and import.

pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::ExportError;
pub use format::{default_file_name, CsvLayout};
pub use load::{read_csv, CsvCurve};
pub use save::write_csv;

use syzygy_core::constants::CSV_PRECISION;
use syzygy_core::{FluxSample, Mode};

/// Serialize a mode's light curve in its layout at the default precision.
pub fn export_curve(samples: &[FluxSample], mode: Mode) -> Result<String, ExportError> {
    write_csv(samples, CsvLayout::for_mode(mode), CSV_PRECISION)
}
