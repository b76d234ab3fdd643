use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Search aborted: {states} live states in layer {layer} exceed the limit of {limit}")]
    StateLimit {
        layer: usize,
        states: usize,
        limit: usize,
    },
}

pub type PfResult<T> = Result<T, PassForgeError>;
