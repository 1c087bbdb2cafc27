//! Error types for the FlowiusManage console

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let detail = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                parts.push(format!("{}: {}", field, detail));
            }
        }
        parts.sort();
        AppError::Validation(parts.join("; "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Description is required"))]
        description: String,
    }

    #[test]
    fn test_validator_errors_fold_into_validation() {
        let err = Probe {
            description: String::new(),
        }
        .validate()
        .unwrap_err();
        let app: AppError = err.into();
        match app {
            AppError::Validation(msg) => assert!(msg.contains("Description is required")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
