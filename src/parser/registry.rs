use std::collections::BTreeMap;

use super::{
    ParsedOutput, ParserKind, parse_branch_list, parse_checkout, parse_commit, parse_log,
    parse_remotes, parse_status, parse_sync_error_with, parse_sync_success, parse_upstream,
};
use crate::config::{Config, ConfigError};
use crate::error::{ParseError, ParseResult};

/// Captured text handed to a parser
///
/// `auxiliary` carries the untracked-files listing for `status` and the standard
/// output for `checkout` (whose `primary` is the error stream).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captured<'a> {
    pub primary: &'a str,
    pub auxiliary: Option<&'a str>,
}

impl<'a> Captured<'a> {
    pub fn new(primary: &'a str) -> Self {
        Self { primary, auxiliary: None }
    }

    pub fn with_auxiliary(primary: &'a str, auxiliary: &'a str) -> Self {
        Self { primary, auxiliary: Some(auxiliary) }
    }

    fn require_auxiliary(&self, kind: ParserKind) -> ParseResult<&'a str> {
        self.auxiliary.ok_or(ParseError::MissingAuxiliary(kind))
    }
}

pub type Handler = fn(&Config, Captured<'_>) -> ParseResult<ParsedOutput>;

const HANDLERS: [(ParserKind, Handler); 9] = [
    (ParserKind::Log, handle_log),
    (ParserKind::Upstream, handle_upstream),
    (ParserKind::Status, handle_status),
    (ParserKind::Commit, handle_commit),
    (ParserKind::Checkout, handle_checkout),
    (ParserKind::Branch, handle_branch),
    (ParserKind::Remotes, handle_remotes),
    (ParserKind::SyncErr, handle_sync_err),
    (ParserKind::SyncSuccess, handle_sync_success),
];

fn handle_log(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    parse_log(input.primary).map(ParsedOutput::Log)
}

fn handle_upstream(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    parse_upstream(input.primary).map(ParsedOutput::Upstream)
}

fn handle_status(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    let untracked = input.require_auxiliary(ParserKind::Status)?;
    parse_status(input.primary, untracked).map(ParsedOutput::Status)
}

fn handle_commit(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    parse_commit(input.primary).map(ParsedOutput::Commit)
}

fn handle_checkout(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    let output = input.require_auxiliary(ParserKind::Checkout)?;
    parse_checkout(input.primary, output).map(ParsedOutput::Checkout)
}

fn handle_branch(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    parse_branch_list(input.primary).map(ParsedOutput::Branch)
}

fn handle_remotes(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    parse_remotes(input.primary).map(ParsedOutput::Remotes)
}

fn handle_sync_err(config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    Ok(ParsedOutput::SyncErr(parse_sync_error_with(
        input.primary,
        &config.sync.line_separator,
    )))
}

fn handle_sync_success(_config: &Config, input: Captured<'_>) -> ParseResult<ParsedOutput> {
    Ok(ParsedOutput::SyncSuccess(parse_sync_success(input.primary)))
}

/// Immutable kind-to-parser table
///
/// Build once and share by reference; it is `Send + Sync` and never mutated.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    config: Config,
    handlers: BTreeMap<ParserKind, Handler>,
}

impl ParserRegistry {
    /// Create a registry using a validated configuration
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            handlers: HANDLERS.into_iter().collect(),
        })
    }

    /// Look up the parser for a kind
    pub fn handler(&self, kind: ParserKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    /// Dispatch captured text to the parser for `kind`
    pub fn parse(&self, kind: ParserKind, input: Captured<'_>) -> ParseResult<ParsedOutput> {
        let handler = self
            .handler(kind)
            .ok_or_else(|| ParseError::UnknownKind(kind.to_string()))?;

        tracing::debug!("dispatching {} ({} bytes)", kind, input.primary.len());
        handler(&self.config, input)
    }

    /// Dispatch by kind identifier, e.g. `"syncErr"`
    pub fn parse_named(&self, kind: &str, input: Captured<'_>) -> ParseResult<ParsedOutput> {
        self.parse(kind.parse()?, input)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn kinds(&self) -> impl Iterator<Item = ParserKind> + '_ {
        self.handlers.keys().copied()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self {
            config: Config::default_config(),
            handlers: HANDLERS.into_iter().collect(),
        }
    }
}
