//! `git push` / `git pull` outcomes

/// Line separator git uses in push/pull progress output
pub const DEFAULT_LINE_SEPARATOR: &str = "\r\n";

/// Split push/pull error output into its non-empty messages, in order
pub fn parse_sync_error(output: &str) -> Vec<String> {
    parse_sync_error_with(output, DEFAULT_LINE_SEPARATOR)
}

/// Like [`parse_sync_error`] with an explicit separator
pub fn parse_sync_error_with(output: &str, separator: &str) -> Vec<String> {
    output
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Push/pull success output is passed through unchanged
pub fn parse_sync_success(output: &str) -> String {
    output.to_string()
}
