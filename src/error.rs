use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;
use crate::parser::ParserKind;

/// Errors raised when captured git output does not have the shape a parser expects
///
/// "No match" is never an error: parsers report it as `Ok(None)`. Outcomes such as
/// "nothing to commit" are reported inside the returned record, not here.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed commit log: {0}")]
    MalformedLog(#[from] serde_json::Error),

    #[error("Malformed upstream line: {0}")]
    MalformedUpstream(String),

    #[error("Malformed status output: {0}")]
    MalformedStatus(String),

    #[error("File change outside of any status section: {0}")]
    NoActiveSection(String),

    #[error("Malformed commit output: {0}")]
    MalformedCommit(String),

    #[error("Malformed remote line: {0}")]
    MalformedRemote(String),

    #[error("Parser '{0}' requires auxiliary input")]
    MissingAuxiliary(ParserKind),

    #[error("Unknown parser kind: {0}")]
    UnknownKind(String),
}

/// Top-level error for callers that load config and read captured output themselves
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for parsing routines
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
