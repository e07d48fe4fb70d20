use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` is set but does not parse as a TCP port.
    ///
    /// An unset or empty `PORT` falls back to the default port instead of raising
    /// this error.
    #[error("Invalid value for PORT: '{0}' is not a valid port number")]
    InvalidPort(String),
}
