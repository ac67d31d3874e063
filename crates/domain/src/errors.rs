use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty domain name")]
    EmptyDomain,

    #[error("invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("query failed: {0}")]
    Query(#[from] QueryError),
}

/// Failure of an in-flight analysis: the call context ended before every
/// record type was collected, or a resolution task died.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("resolution task failed: {0}")]
    TaskFailed(String),
}

/// Failure of a single exchange against one nameserver.
///
/// The record resolver swallows these and moves on to the next server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("invalid nameserver address '{server}': {reason}")]
    InvalidServer { server: String, reason: String },

    #[error("failed to encode query for {domain}: {reason}")]
    Encode { domain: String, reason: String },

    #[error("timeout waiting for {server}")]
    Timeout { server: String },

    #[error("I/O error talking to {server}: {message}")]
    Io { server: String, message: String },

    #[error("malformed response from {server}: {reason}")]
    MalformedResponse { server: String, reason: String },

    #[error("response id {received} does not match query id {expected}")]
    IdMismatch { expected: u16, received: u16 },

    #[error("exchange aborted: {0}")]
    Aborted(#[from] QueryError),
}

impl ExchangeError {
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ExchangeError::Timeout { .. } | ExchangeError::Aborted(QueryError::DeadlineExceeded)
        )
    }
}
