use std::path::PathBuf;

/// Expand a user-entered path: strip surrounding quotes, then expand
/// `~` and environment variables.
///
/// Paths pasted from a file manager often arrive quoted. Expansion
/// failures fall back to the literal string.
pub fn expand_user_path(input: &str) -> PathBuf {
    let unquoted = strip_quotes(input.trim());
    let expanded = shellexpand::full(unquoted)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| unquoted.to_string());
    PathBuf::from(expanded)
}

fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
