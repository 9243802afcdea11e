use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProseGateError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git Error: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type PgResult<T> = Result<T, ProseGateError>;
