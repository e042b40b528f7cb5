#![forbid(unsafe_code)]

use thiserror::Error;

/// Gateway resolution errors.
///
/// Raised only for construction-time faults (malformed input). Network
/// failures during probing are absorbed by the resolver and never surface
/// through this type.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid cid: {0:?}")]
    InvalidCid(String),

    #[error("invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
