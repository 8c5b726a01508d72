use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyglotError {
    /// A phrase template was not a string.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Token syntax or plural rules that cannot produce a usable transformer.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
