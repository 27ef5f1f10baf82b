#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("the 'top' parameter must be greater than 0 and less than or equal to 500, got {0}")]
    InvalidCount(i64),

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
