use axum::http::StatusCode;
use thiserror::Error;

/// Failures reaching or decoding the shared sheet. Any of these blocks the
/// whole report pass; row-level problems are handled where rows are read
/// and never surface here.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("sheet request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet request returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not read sheet file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode sheet rows: {0}")]
    Decode(#[from] csv::Error),
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no data source configured; set SHEET_CSV_URL or SHEET_CSV_PATH")]
    MissingSource,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        Self::bad_gateway(format!("sheet unavailable: {err}"))
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
