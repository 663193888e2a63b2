//! Harness failures

use thiserror::Error;

/// Problems of the harness itself; a failed comparison is not one of these
#[derive(Debug, Error)]
pub enum TestError {
    #[error("cannot write '{path}': {message}")]
    ImageWrite { path: String, message: String },

    #[error("harness I/O: {0}")]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
