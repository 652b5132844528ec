use serde::{Deserialize, Serialize};

use crate::error::ParseResult;

const CURRENT_MARKER: char = '*';

/// Prefix for branches checked out in another worktree
const WORKTREE_MARKER: char = '+';

const REMOTE_PREFIX: &str = "  remotes/";

/// Branches listed by `git branch -a`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTree {
    pub current: Option<String>,
    pub others: Vec<String>,
    pub remotes: Vec<String>,
}

impl BranchTree {
    fn contains(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
            || self.others.iter().any(|other| other == name)
            || self.remotes.iter().any(|remote| remote == name)
    }
}

/// Parse `git branch -a` output
pub fn parse_branch_list(output: &str) -> ParseResult<BranchTree> {
    let mut tree = BranchTree::default();

    for line in output.lines() {
        if line.contains(CURRENT_MARKER) {
            let name = line.replacen(CURRENT_MARKER, "", 1).trim().to_string();
            tree.others.retain(|other| *other != name);
            tree.remotes.retain(|remote| *remote != name);
            tree.current = Some(name);
            continue;
        }

        let line = line.strip_prefix(WORKTREE_MARKER).unwrap_or(line);
        let (name, is_remote) = match line.strip_prefix(REMOTE_PREFIX) {
            Some(rest) => (rest.trim(), true),
            None => (line.trim(), false),
        };

        if name.is_empty() || tree.contains(name) {
            continue;
        }

        if is_remote {
            tree.remotes.push(name.to_string());
        } else {
            tree.others.push(name.to_string());
        }
    }

    tracing::debug!(
        "branches: current {:?}, {} local, {} remote",
        tree.current,
        tree.others.len(),
        tree.remotes.len()
    );

    Ok(tree)
}
