use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Upstream API error ({status}): {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Upstream { status: u16, detail: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
