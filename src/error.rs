//! API Error Type
//!
//! Failures of the IPC bridge itself. Failures the backend reports inside a
//! response (`error` fields) are not represented here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The invoke promise rejected
    #[error("invoke error: {0}")]
    Invoke(String),
    #[error("failed to encode args: {0}")]
    Encode(String),
    #[error("decode error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
