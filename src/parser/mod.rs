//! Parsers turning captured git output into typed records
//!
//! Every parser is a pure function of its input text. [`ParserRegistry`] maps
//! [`ParserKind`] identifiers to them for callers that dispatch by name.

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod log;
pub mod registry;
pub mod remotes;
pub mod status;
pub mod sync;
pub mod upstream;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

pub use branch::{BranchTree, parse_branch_list};
pub use checkout::{CheckoutResult, parse_checkout};
pub use commit::{CommitResult, parse_commit};
pub use log::{CommitLogEntry, LOG_FORMAT, parse_log};
pub use registry::{Captured, Handler, ParserRegistry};
pub use remotes::{RemoteMap, parse_remotes};
pub use status::{BranchInfo, FileChange, StatusReport, parse_status};
pub use sync::{parse_sync_error, parse_sync_error_with, parse_sync_success};
pub use upstream::{UpstreamKind, UpstreamState, parse_upstream};

/// Identifies which kind of git output a text holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParserKind {
    Log,
    Upstream,
    Status,
    Commit,
    Checkout,
    Branch,
    Remotes,
    SyncErr,
    SyncSuccess,
}

impl ParserKind {
    pub const ALL: [ParserKind; 9] = [
        ParserKind::Log,
        ParserKind::Upstream,
        ParserKind::Status,
        ParserKind::Commit,
        ParserKind::Checkout,
        ParserKind::Branch,
        ParserKind::Remotes,
        ParserKind::SyncErr,
        ParserKind::SyncSuccess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Log => "log",
            ParserKind::Upstream => "upstream",
            ParserKind::Status => "status",
            ParserKind::Commit => "commit",
            ParserKind::Checkout => "checkout",
            ParserKind::Branch => "branch",
            ParserKind::Remotes => "remotes",
            ParserKind::SyncErr => "syncErr",
            ParserKind::SyncSuccess => "syncSuccess",
        }
    }

    /// Whether the parser needs a second captured text
    pub fn needs_auxiliary(&self) -> bool {
        matches!(self, ParserKind::Status | ParserKind::Checkout)
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParserKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::UnknownKind(s.to_string()))
    }
}

/// Record produced by a registry dispatch, one variant per [`ParserKind`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedOutput {
    Log(Vec<CommitLogEntry>),
    Upstream(Option<UpstreamState>),
    Status(StatusReport),
    Commit(CommitResult),
    Checkout(CheckoutResult),
    Branch(BranchTree),
    Remotes(RemoteMap),
    SyncErr(Vec<String>),
    SyncSuccess(String),
}

impl ParsedOutput {
    pub fn kind(&self) -> ParserKind {
        match self {
            ParsedOutput::Log(_) => ParserKind::Log,
            ParsedOutput::Upstream(_) => ParserKind::Upstream,
            ParsedOutput::Status(_) => ParserKind::Status,
            ParsedOutput::Commit(_) => ParserKind::Commit,
            ParsedOutput::Checkout(_) => ParserKind::Checkout,
            ParsedOutput::Branch(_) => ParserKind::Branch,
            ParsedOutput::Remotes(_) => ParserKind::Remotes,
            ParsedOutput::SyncErr(_) => ParserKind::SyncErr,
            ParsedOutput::SyncSuccess(_) => ParserKind::SyncSuccess,
        }
    }
}
