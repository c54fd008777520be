use syzygy_core::EclipseError;
use syzygy_export::ExportError;
use syzygy_scenes::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("scene configuration: {0}")]
    Config(#[from] EclipseError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("scene '{0}' produced no samples")]
    EmptyCurve(String),

    #[error("csv export: {0}")]
    Export(#[from] ExportError),

    #[error("baseline {path}: {source}")]
    Baseline {
        path: String,
        source: serde_json::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
