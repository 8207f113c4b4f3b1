//! Log sanitization utilities
//!
//! Keeps macaroons, access keys and long node responses out of debug/error logs.

/// Byte budget for a node response body quoted in a log line.
const RESPONSE_EXCERPT_BYTES: usize = 256;

/// Bytes of a secret that may appear in logs.
const SECRET_PREFIX_BYTES: usize = 4;

/// Longest prefix of `s` that fits in `max_bytes` without splitting a character.
fn char_prefix(s: &str, max_bytes: usize) -> &str {
    let end = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);
    &s[..end]
}

/// Shorten a response body for logging, noting how much was dropped.
pub fn truncate_for_log(s: &str) -> String {
    let kept = char_prefix(s, RESPONSE_EXCERPT_BYTES);
    if kept.len() == s.len() {
        return s.to_string();
    }
    format!("{kept}... (+{} of {} bytes)", s.len() - kept.len(), s.len())
}

/// Mask a credential for logging, keeping only a short prefix.
///
/// Secrets too short for the prefix to be safe are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    match secret.len() {
        0 => String::new(),
        len if len <= SECRET_PREFIX_BYTES * 2 => "***".to_string(),
        len => format!("{}*** ({len} bytes)", char_prefix(secret, SECRET_PREFIX_BYTES)),
    }
}
