//! Filename sanitization for remote-supplied note titles.

/// Characters rejected by at least one mainstream filesystem.
const UNSAFE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest filename kept — headroom for the `.md` extension under the
/// usual 255-byte filesystem limit.
const MAX_LEN: usize = 200;

/// Make a remote-supplied title safe to use as a single path component.
///
/// Replaces `/ \ : * ? " < > |` with `_`, trims surrounding whitespace
/// and dots, truncates to 200 characters, and falls back to `untitled`
/// when nothing is left. Windows reserved device names (`CON`, `NUL`,
/// ...) pass through unchanged.
pub fn sanitize_filename(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');
    let truncated: String = trimmed.chars().take(MAX_LEN).collect();
    // Truncation can expose a trailing dot or space again
    let safe = truncated.trim_end_matches(|c: char| c.is_whitespace() || c == '.');

    if safe.is_empty() {
        "untitled".to_string()
    } else {
        safe.to_string()
    }
}
