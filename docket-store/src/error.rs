//! Store boundary error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load record store library: {0}")]
    Library(#[from] libloading::Error),

    #[error("record store library is missing symbol `{name}`: {source}")]
    Symbol {
        name: &'static str,
        source: libloading::Error,
    },

    #[error("field contains an interior NUL byte: {0}")]
    InvalidField(#[from] std::ffi::NulError),

    #[error("malformed result row: {0:?}")]
    MalformedRow(String),
}
