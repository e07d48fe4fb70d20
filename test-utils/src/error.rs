use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary public directory or write an asset into it.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Asset path escapes the public directory.
    #[error("Public file path '{0}' must be relative and stay inside the public directory")]
    InvalidAssetPath(String),
}
