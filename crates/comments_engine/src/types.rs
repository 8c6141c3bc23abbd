use crate::decode::DecodeError;

/// Raw HTTP outcome of a transport call. A non-2xx status is not an error
/// at this layer; the status and reason stay visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub reason: String,
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures raised by the transport before a usable response exists.
///
/// `Display` yields the underlying message as-is, which is what ends up in
/// `NetworkResult::Error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Network(String),
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("{0}")]
    Decode(String),
}

impl From<DecodeError> for TransportError {
    fn from(err: DecodeError) -> Self {
        TransportError::Decode(err.to_string())
    }
}
