use serde::{Deserialize, Serialize};

use super::upstream::{UpstreamState, parse_upstream};
use crate::error::ParseResult;

/// Prefix git writes to stderr after a successful branch switch
pub const SWITCH_SUCCESS_MARKER: &str = "Switched to branch";

/// Outcome of a `git checkout <branch>` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckoutResult {
    /// Git's error text, verbatim
    Failed { err: String },
    Switched { upstream: Option<UpstreamState> },
}

/// Parse checkout results from captured stderr (`error`) and stdout (`output`)
pub fn parse_checkout(error: &str, output: &str) -> ParseResult<CheckoutResult> {
    if !error.starts_with(SWITCH_SUCCESS_MARKER) {
        tracing::debug!("checkout failed: {}", error.trim_end());
        return Ok(CheckoutResult::Failed { err: error.to_string() });
    }

    for line in output.lines() {
        if let Some(state) = parse_upstream(line)? {
            return Ok(CheckoutResult::Switched { upstream: Some(state) });
        }
    }

    Ok(CheckoutResult::Switched { upstream: None })
}
