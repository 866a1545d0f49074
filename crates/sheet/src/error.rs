use thiserror::Error;

/// Errors that can occur while converting a workbook
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid column spec: {0:?}")]
    InvalidColumnSpec(String),

    #[error("Invalid cell address: {0:?}")]
    InvalidCellAddress(String),

    #[error("Sheet not found: {name}")]
    UnknownSheet { name: String },

    #[error("Header cell {address} is empty in sheet {sheet}")]
    MissingHeaderCell { sheet: String, address: String },

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
