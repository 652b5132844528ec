//! `git log` output rendered as one JSON object per commit

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseResult;

/// Pretty-format template producing the input [`parse_log`] expects
///
/// Pass as `git log --pretty=format:<LOG_FORMAT>`.
///
/// Git substitutes `%an` and `%s` verbatim, so an author name or subject holding `"` or `\`
/// (e.g. `Revert "foo"`) yields invalid JSON and the whole log fails with
/// [`ParseError::MalformedLog`](crate::error::ParseError::MalformedLog). Callers needing
/// those commits should use their own template with a different encoding.
pub const LOG_FORMAT: &str = r#"{"commit": "%H", "author": "%an <%ae>", "date": "%ad", "message": "%s"},"#;

/// Terminator written after every entry
pub const ENTRY_SEPARATOR: char = ',';

/// Git's default `%ad` layout, e.g. `Tue Oct 13 14:03:12 2026 +0200`
const GIT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// One commit; holds whatever fields the format template encoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitLogEntry {
    pub fields: BTreeMap<String, Value>,
}

impl CommitLogEntry {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn commit(&self) -> Option<&str> {
        self.get("commit")
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn message(&self) -> Option<&str> {
        self.get("message")
    }

    /// Parse the `date` field as git default, RFC 2822 or RFC 3339
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        // git pads single-digit days with a space
        let date = self.date()?.split_whitespace().collect::<Vec<_>>().join(" ");

        DateTime::parse_from_str(&date, GIT_DATE_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc2822(&date))
            .or_else(|_| DateTime::parse_from_rfc3339(&date))
            .ok()
    }
}

/// Parse separator-terminated commit objects, newest first
///
/// All or nothing: any malformed entry fails the whole log.
pub fn parse_log(output: &str) -> ParseResult<Vec<CommitLogEntry>> {
    let body = output.trim_end();
    let body = body.strip_suffix(ENTRY_SEPARATOR).unwrap_or(body);

    let document = format!("[{}]", body);
    let commits: Vec<CommitLogEntry> = serde_json::from_str(&document)
        .inspect_err(|e| tracing::warn!("malformed log document: {}", e))?;

    tracing::debug!("parsed {} log entries", commits.len());

    Ok(commits)
}
