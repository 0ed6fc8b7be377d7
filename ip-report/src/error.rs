use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot access '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported output format '{0}', expected 'csv' or 'json'")]
    UnsupportedFormat(String),

    #[error("failed to render CSV report")]
    Csv(#[from] csv::Error),

    #[error("failed to render JSON report")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
