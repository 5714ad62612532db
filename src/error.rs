use crate::voucher::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the voucher pipeline. None of them are fatal to the form.
#[derive(Debug, Error)]
pub enum VoucherError {
    /// Airport dataset could not be fetched or parsed; autocomplete stays empty
    #[error("airport dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("export failed: {0}")]
    Export(String),

    #[error("history log {path} could not be accessed: {source}")]
    History {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("voucher history could not be encoded: {source}")]
    HistoryEncode {
        #[source]
        source: serde_json::Error,
    },

    #[error("history log {path} is not valid JSON: {source}")]
    HistoryCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, VoucherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_failure_is_not_reported_as_corrupt_file() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let message = VoucherError::HistoryEncode { source }.to_string();
        assert!(message.starts_with("voucher history could not be encoded"));
        assert!(!message.contains("not valid JSON"));
    }
}
