use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("No nameservers available")]
    EmptyPool,
}
