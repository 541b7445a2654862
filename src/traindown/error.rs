//! Fatal parse errors
//!
//! Only problems that stop a parse outright live here. Everything recoverable is reported
//! through `Session::errors` instead.

use crate::traindown::lexing::{ScanError, ScannerConfigError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to build scanner: {0}")]
    Scanner(#[from] ScannerConfigError),

    #[error("failed to parse: {0}")]
    Scan(#[from] ScanError),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}
