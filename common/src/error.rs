use thiserror::Error;

/// Failure while listing or filtering the host's interfaces.
///
/// Selection never produces one of these itself; it only forwards what the
/// lister returned.
#[derive(Debug, Error)]
pub enum EnumerationError {
    #[error("invalid interface pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("no route to {destination}: {source}")]
    Unreachable {
        destination: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid IP version `{0}`, expected 4 or 6")]
    InvalidIpVersion(String),
    #[error("unknown autodetection method `{0}`")]
    UnknownMethod(String),
    #[error("autodetection method `{0}` needs at least one value")]
    EmptyPatternList(String),
}
