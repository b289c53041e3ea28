use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("{what} not found: {reference}")]
    NotFound { what: &'static str, reference: String },

    #[error("invalid {field}: {value:?} (expected one of: {allowed})")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: &'static str,
    },

    #[error("invalid {field}: {value:?} is not a valid non-negative number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
