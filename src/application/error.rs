use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError, presentation::toc::TocRenderError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to render table of contents: {0}")]
    Render(#[from] TocRenderError),
    #[error("heading `{id}` is not part of the table of contents")]
    HeadingNotFound { id: String },
}

impl AppError {
    pub fn heading_not_found(id: impl Into<String>) -> Self {
        Self::HeadingNotFound { id: id.into() }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Infra(_) | AppError::Render(_) | AppError::HeadingNotFound { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_exit_with_usage_code() {
        let err = AppError::from(LoadError::Invalid {
            key: "logging.level",
            reason: "nope".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn missing_heading_names_the_id() {
        let err = AppError::heading_not_found("setup");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "heading `setup` is not part of the table of contents"
        );
    }
}
