//! Long-format `git status` output combined with an untracked-files listing

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::upstream::{UpstreamState, parse_upstream};
use crate::error::{ParseError, ParseResult};

static BRANCH_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^on branch\s+(.+)$").expect("Failed to compile branch name regex")
});

/// `<label>:<path>`, e.g. `new file:   src/lib.rs`
static CHANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z ]*):\s*(.+)$").expect("Failed to compile file change regex")
});

/// Keywords marking a file change line
const CHANGE_KEYWORDS: [&str; 3] = ["modified", "new file", "deleted"];

/// Markers git prints at the start of a line, matched case-insensitively in this order
const LINE_MARKERS: [(&str, LineKind); 5] = [
    ("on branch", LineKind::BranchName),
    ("your branch", LineKind::Tracking),
    ("changes to be committed", LineKind::Header(Section::Staged)),
    ("changes not staged for commit", LineKind::Header(Section::NotStaged)),
    ("untracked files", LineKind::Header(Section::Untracked)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Staged,
    NotStaged,
    Untracked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    BranchName,
    Tracking,
    Header(Section),
}

/// A single changed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub file: String,
    /// Label git printed, e.g. `modified`, `new file`, `deleted`
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    pub name: String,
    pub status: Vec<UpstreamState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub branch: BranchInfo,
    pub staged: Vec<FileChange>,
    pub not_staged: Vec<FileChange>,
    pub untracked: Vec<String>,
}

/// Drop the `#` older git prefixes every line with, plus surrounding whitespace
fn line_body(line: &str) -> &str {
    line.strip_prefix('#').unwrap_or(line).trim()
}

/// Markers only count at the start of a line so paths containing them stay file changes
fn classify(lowered_body: &str) -> Option<LineKind> {
    LINE_MARKERS
        .iter()
        .find(|(marker, _)| lowered_body.starts_with(marker))
        .map(|(_, kind)| *kind)
}

// Hints such as `(use "git add <file>..." ...)` or
// `(commit or discard the untracked or modified content in submodules)`
fn is_hint(body: &str) -> bool {
    body.starts_with('(')
}

fn has_change_keyword(lowered_body: &str) -> bool {
    CHANGE_KEYWORDS.iter().any(|keyword| lowered_body.contains(keyword))
}

/// Parse `modified:   src/lib.rs` into a [`FileChange`]
fn parse_file_change(body: &str) -> ParseResult<FileChange> {
    let caps = CHANGE_PATTERN.captures(body).ok_or_else(|| {
        ParseError::MalformedStatus(format!("file change without a label: {}", body))
    })?;

    Ok(FileChange {
        file: caps[2].trim().to_string(),
        status: caps[1].trim().to_string(),
    })
}

/// Parse `git status` output plus the `git ls-files --others --exclude-standard` listing
///
/// File changes land in whichever section header preceded them. Untracked paths come
/// only from `untracked`.
pub fn parse_status(status: &str, untracked: &str) -> ParseResult<StatusReport> {
    let mut report = StatusReport {
        untracked: untracked
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        ..Default::default()
    };

    let mut section: Option<Section> = None;

    for line in status.lines() {
        let body = line_body(line);
        let lowered = body.to_lowercase();

        match classify(&lowered) {
            Some(LineKind::BranchName) => {
                let caps = BRANCH_NAME_PATTERN.captures(body).ok_or_else(|| {
                    ParseError::MalformedStatus(format!("no branch name in: {}", line))
                })?;
                report.branch.name = caps[1].trim().to_string();
                continue;
            }
            Some(LineKind::Tracking) => {
                if let Some(state) = parse_upstream(line)? {
                    report.branch.status.push(state);
                }
                continue;
            }
            Some(LineKind::Header(next)) => {
                tracing::trace!("entering status section {:?}", next);
                section = Some(next);
                continue;
            }
            None => {}
        }

        if is_hint(body) || !has_change_keyword(&lowered) {
            continue;
        }

        match section {
            Some(Section::Staged) => report.staged.push(parse_file_change(body)?),
            Some(Section::NotStaged) => report.not_staged.push(parse_file_change(body)?),
            Some(Section::Untracked) => {
                tracing::trace!("ignoring keyword line in untracked section: {:?}", line);
            }
            None => {
                tracing::warn!("file change before any status section: {:?}", line);
                return Err(ParseError::NoActiveSection(line.to_string()));
            }
        }
    }

    tracing::debug!(
        "status for '{}': {} staged, {} not staged, {} untracked",
        report.branch.name,
        report.staged.len(),
        report.not_staged.len(),
        report.untracked.len()
    );

    Ok(report)
}
