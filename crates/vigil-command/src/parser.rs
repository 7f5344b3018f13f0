//! Splitting raw message text into command invocations.

/// One parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased command name.
    pub name: String,
    /// Remaining whitespace-separated words, original casing kept.
    pub args: Vec<String>,
}

/// Parse message content against the configured prefix.
///
/// Returns `None` when the content does not start with the prefix or
/// carries nothing after it.
pub fn parse(content: &str, prefix: &str) -> Option<ParsedCommand> {
    let stripped = content.strip_prefix(prefix)?;
    let mut words = stripped.split_whitespace();
    let name = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
