//! Tracking-branch state lines such as `Your branch is ahead of 'origin/main' by 2 commits.`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

static REMOTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("Failed to compile remote name regex"));

static DIRECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"branch is (\w+)").expect("Failed to compile direction regex"));

static COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\scommit").expect("Failed to compile commit count regex"));

/// Relationship between the local branch and its tracking branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamState {
    #[serde(rename = "type")]
    pub kind: UpstreamKind,
    /// Only set for directional states
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<u32>,
    pub remote: String,
}

/// The `type` tag of an [`UpstreamState`]
///
/// Directional states carry the word git used (`ahead`, `behind`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum UpstreamKind {
    Diverged,
    UpToDate,
    Tracking(String),
}

impl UpstreamKind {
    pub fn as_str(&self) -> &str {
        match self {
            UpstreamKind::Diverged => "diverged",
            UpstreamKind::UpToDate => "upToDate",
            UpstreamKind::Tracking(direction) => direction,
        }
    }
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UpstreamKind> for String {
    fn from(kind: UpstreamKind) -> Self {
        kind.as_str().to_string()
    }
}

impl From<String> for UpstreamKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "diverged" => UpstreamKind::Diverged,
            "upToDate" => UpstreamKind::UpToDate,
            _ => UpstreamKind::Tracking(tag),
        }
    }
}

type Classify = fn(&str) -> ParseResult<(UpstreamKind, Option<u32>)>;

/// Checked in order; the first matching predicate decides the kind
const RULES: [(fn(&str) -> bool, Classify); 3] = [
    (is_diverged, classify_diverged),
    (is_up_to_date, classify_up_to_date),
    (is_directional, classify_directional),
];

fn is_diverged(line: &str) -> bool {
    line.contains("diverged")
}

// Older git prints "up-to-date", newer releases "up to date"
fn is_up_to_date(line: &str) -> bool {
    line.contains("up-to-date") || line.contains("up to date")
}

fn is_directional(line: &str) -> bool {
    line.contains("our branch is ")
}

fn classify_diverged(_line: &str) -> ParseResult<(UpstreamKind, Option<u32>)> {
    Ok((UpstreamKind::Diverged, None))
}

fn classify_up_to_date(_line: &str) -> ParseResult<(UpstreamKind, Option<u32>)> {
    Ok((UpstreamKind::UpToDate, None))
}

fn classify_directional(line: &str) -> ParseResult<(UpstreamKind, Option<u32>)> {
    let direction = DIRECTION_PATTERN
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ParseError::MalformedUpstream(format!("no direction in: {}", line)))?;

    let commits = match COUNT_PATTERN.captures(line) {
        Some(caps) => caps[1]
            .parse::<u32>()
            .map_err(|_| {
                ParseError::MalformedUpstream(format!("invalid commit count in: {}", line))
            })?,
        None => 0,
    };

    Ok((UpstreamKind::Tracking(direction), Some(commits)))
}

/// Parse a single tracking-branch line
///
/// Returns `Ok(None)` when the line is not an upstream line at all, and an error
/// when it looks like one but names no quoted remote.
pub fn parse_upstream(line: &str) -> ParseResult<Option<UpstreamState>> {
    let Some((_, classify)) = RULES.iter().find(|(matches, _)| matches(line)) else {
        tracing::trace!("not an upstream line: {:?}", line);
        return Ok(None);
    };

    let (kind, commits) = classify(line)?;

    let remote = REMOTE_PATTERN
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| {
            tracing::warn!("upstream line without remote name: {:?}", line);
            ParseError::MalformedUpstream(format!("no quoted remote in: {}", line))
        })?;

    tracing::debug!("upstream state {} for {}", kind, remote);

    Ok(Some(UpstreamState { kind, commits, remote }))
}
