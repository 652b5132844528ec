//! `git commit` output

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

static BRACKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("Failed to compile commit bracket regex"));

const NOTHING_TO_COMMIT: [&str; 2] = ["nothing to commit", "no changes added to commit"];

const COMMENT_MARKER: char = '#';

/// Outcome of a `git commit` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommitResult {
    Committed {
        branch: String,
        /// Abbreviated hash
        commit: String,
        /// Number of changed files, as printed
        changed: String,
        operations: Vec<String>,
    },
    /// Git refused to commit; `error` is the first uncommented line, if any
    Failed { error: Option<String> },
}

impl CommitResult {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitResult::Committed { .. })
    }
}

fn failure_reason(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| !line.contains(COMMENT_MARKER))
        .map(str::to_string)
}

/// Split `master (root-commit) 1a2b3c4` into branch and hash
fn parse_bracket(line: &str) -> ParseResult<(String, String)> {
    let caps = BRACKET_PATTERN.captures(line).ok_or_else(|| {
        ParseError::MalformedCommit(format!("no [branch hash] token in: {}", line))
    })?;

    let mut tokens: Vec<&str> = caps[1].split_whitespace().collect();
    let hash = match tokens.pop() {
        Some(hash) if !tokens.is_empty() => hash.to_string(),
        _ => {
            return Err(ParseError::MalformedCommit(format!(
                "expected branch and hash in: {}",
                &caps[0]
            )));
        }
    };

    let branch = tokens
        .into_iter()
        .filter(|token| !(token.starts_with('(') && token.ends_with(')')))
        .collect::<Vec<_>>()
        .join(" ");

    if branch.is_empty() {
        return Err(ParseError::MalformedCommit(format!("no branch name in: {}", &caps[0])));
    }

    Ok((branch, hash))
}

/// Parse the output of `git commit`
pub fn parse_commit(output: &str) -> ParseResult<CommitResult> {
    if NOTHING_TO_COMMIT.iter().any(|phrase| output.contains(phrase)) {
        let error = failure_reason(output);
        tracing::debug!("commit refused: {:?}", error);
        return Ok(CommitResult::Failed { error });
    }

    let mut lines = output.lines();
    let first = lines.next().unwrap_or_default();
    let (branch, commit) = parse_bracket(first).inspect_err(|e| tracing::warn!("{}", e))?;

    let changed = lines
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or("0")
        .to_string();

    let operations = lines
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!("committed {} on {}", commit, branch);

    Ok(CommitResult::Committed {
        branch,
        commit,
        changed,
        operations,
    })
}
