//! Error types for delegation-rs

use thiserror::Error;

/// Result type alias for delegation-rs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while structuring, hashing or encoding delegations
#[derive(Debug, Error)]
pub enum Error {
    /// A function or event signature could not be reduced to `name(type,...)`
    #[error("Unable to normalize signature.")]
    Normalize,

    /// A hex value is wider than the requested padding size
    #[error("cannot pad {value} to {size} bytes")]
    PadSize { value: String, size: usize },

    /// A value that should be hex is not
    #[error("invalid hex value: {0}")]
    InvalidHex(String),

    /// A delegation salt could not be parsed as a big-endian integer
    #[error("invalid salt {salt}: {reason}")]
    InvalidSalt { salt: String, reason: String },

    /// An execution list that must contain at least one entry was empty
    #[error("executions is empty")]
    EmptyExecutions,

    /// A list of execution lists was empty
    #[error("executionsBatch is empty")]
    EmptyExecutionsBatch,

    /// The static registry has no deployment for the requested key
    #[error("no contracts found for version {version} chain {chain_id}")]
    ContractsNotFound { version: String, chain_id: u64 },

    /// An unknown delegation framework version string
    #[error("unsupported delegation framework version: {0}")]
    UnsupportedVersion(String),

    /// A caveat builder invariant was violated
    #[error(transparent)]
    Caveat(#[from] CaveatError),
}

/// Violations reported by [`CaveatBuilder::build`](crate::caveats::CaveatBuilder::build)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaveatError {
    #[error(
        "No caveats found. If you definitely want to create an empty caveat collection, set `allow_empty_caveats`."
    )]
    Empty,

    #[error("caveat kind `{0}` was added more than once")]
    DuplicateKind(&'static str),

    #[error("id {0} is used by more than one caveat")]
    DuplicateId(String),

    #[error("invalid `{kind}` caveat: {reason}")]
    InvalidArguments { kind: &'static str, reason: String },
}

impl CaveatError {
    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            kind,
            reason: reason.into(),
        }
    }
}

