/// Errors that can occur while writing or reading a light-curve CSV.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("missing header row")]
    MissingHeader,

    #[error("unrecognised header '{0}'")]
    UnknownHeader(String),

    #[error("line {line}: expected {expected} columns, got {actual}")]
    ColumnCount {
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}, column '{column}': cannot parse '{value}' as a number")]
    ParseFloat {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: time {time} does not follow the previous row")]
    NonMonotonicTime { line: u64, time: f64 },

    #[error("csv: {0}")]
    Csv(String),
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e.to_string())
    }
}
