use thiserror::Error;

/// Errors returned while writing a greeting.
#[derive(Debug, Error)]
pub enum GreetError {
    /// The output stream rejected the write or flush.
    #[error("failed to write greeting: {0}")]
    Output(#[from] std::io::Error),
}
