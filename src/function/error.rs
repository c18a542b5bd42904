// error.rs
use thiserror::Error;
use std::io;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read wordlist file: {0}")]
    IOError(String),

    #[error("The wordlist file is empty: {}", .0.display())]
    EmptyWordlist(PathBuf),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP client error: {0}")]
    ClientError(String),
}

impl ScanError {
    /// Process exit status for fatal errors raised before the scan starts.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::InvalidConfig(_) => 2,
            ScanError::InvalidUrl(_) => 3,
            ScanError::IOError(_) => 4,
            ScanError::EmptyWordlist(_) => 5,
            ScanError::NetworkError(_) | ScanError::ClientError(_) => 1,
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::IOError(err.to_string())
    }
}

impl From<url::ParseError> for ScanError {
    fn from(err: url::ParseError) -> Self {
        ScanError::InvalidUrl(err.to_string())
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScanError::NetworkError(format!("request timed out: {}", err))
        } else if err.is_connect() {
            ScanError::NetworkError(format!("connection error: {}", err))
        } else if err.is_builder() {
            ScanError::ClientError(err.to_string())
        } else {
            ScanError::NetworkError(format!("request failed: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_have_distinct_exit_codes() {
        let codes = [
            ScanError::InvalidConfig("x".into()).exit_code(),
            ScanError::InvalidUrl("x".into()).exit_code(),
            ScanError::IOError("x".into()).exit_code(),
            ScanError::EmptyWordlist(PathBuf::from("w.txt")).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn io_error_converts() {
        let err: ScanError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, ScanError::IOError(_)));
        assert_eq!(err.exit_code(), 4);
    }
}
