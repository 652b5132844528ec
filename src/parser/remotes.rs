use std::collections::BTreeMap;

use crate::error::{ParseError, ParseResult};

/// Remote name to URL
pub type RemoteMap = BTreeMap<String, String>;

/// Parse `git remote -v` output
///
/// Each line is `<name>\t<url> (fetch|push)`. A repeated name keeps the URL from its
/// last line.
pub fn parse_remotes(output: &str) -> ParseResult<RemoteMap> {
    let mut remotes = RemoteMap::new();

    for line in output.lines() {
        let mut fields = line.split('\t');
        let name = fields.next().unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let url = fields
            .next()
            .and_then(|field| field.split_whitespace().next())
            .ok_or_else(|| {
                tracing::warn!("remote without url: {:?}", line);
                ParseError::MalformedRemote(line.to_string())
            })?;

        remotes.insert(name.to_string(), url.to_string());
    }

    Ok(remotes)
}
