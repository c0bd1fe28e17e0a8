use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read `{path}`: {source}")]
    ReadDocument {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl InfraError {
    pub fn read_document(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDocument {
            path: path.into(),
            source,
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
