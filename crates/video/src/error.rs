use std::{fmt, io};

#[derive(Debug)]
pub enum VideoError {
    DeviceUnavailable(String),
    UnsupportedFormat(String),
    DeviceBusy(String),
    ReadFailure(String),
    Timeout,
}

impl VideoError {
    /// Timeouts are part of normal operation and are retried by the worker.
    pub fn is_transient(&self) -> bool {
        matches!(self, VideoError::Timeout)
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            VideoError::UnsupportedFormat(msg) => write!(f, "unsupported format: {msg}"),
            VideoError::DeviceBusy(msg) => write!(f, "device busy: {msg}"),
            VideoError::ReadFailure(msg) => write!(f, "read failure: {msg}"),
            VideoError::Timeout => write!(f, "timed out waiting for frame"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<io::Error> for VideoError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut => VideoError::Timeout,
            _ => VideoError::ReadFailure(err.to_string()),
        }
    }
}
