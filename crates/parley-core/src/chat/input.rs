//! Client input sanitization and session id resolution.

use std::sync::LazyLock;

use regex::Regex;

/// Messages are truncated to this many characters after stripping.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Sanitized messages shorter than this are rejected.
pub const MIN_MESSAGE_CHARS: usize = 2;

/// Normalized session ids are capped at this many characters.
pub const MAX_SESSION_ID_CHARS: usize = 64;

/// Used when a session id normalizes to the empty string.
pub const FALLBACK_SESSION_ID: &str = "default_session";

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>"'\\]"#).expect("disallowed-chars pattern is valid"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// Strip `< > " ' \` and truncate to [`MAX_MESSAGE_CHARS`] characters.
pub fn sanitize_message(raw: &str) -> String {
    DISALLOWED_CHARS
        .replace_all(raw, "")
        .chars()
        .take(MAX_MESSAGE_CHARS)
        .collect()
}

/// Remove every non-word character and cap the length.
///
/// Returns [`FALLBACK_SESSION_ID`] when nothing is left.
pub fn normalize_session_id(raw: &str) -> String {
    let id: String = NON_WORD
        .replace_all(raw, "")
        .chars()
        .take(MAX_SESSION_ID_CHARS)
        .collect();
    if id.is_empty() {
        FALLBACK_SESSION_ID.to_string()
    } else {
        id
    }
}

/// Resolve the session id for a request.
///
/// An explicit hint wins, even when it normalizes to nothing. Otherwise the
/// id is derived from the client identity so repeated anonymous requests
/// from one client land in the same session.
pub fn resolve_session_id(hint: Option<&str>, client_identity: &str) -> String {
    match hint {
        Some(hint) => normalize_session_id(hint),
        None => normalize_session_id(&format!("default_{client_identity}")),
    }
}

/// Collapse embedded newlines to spaces and trim surrounding whitespace.
pub fn normalize_reply(raw: &str) -> String {
    raw.replace("\r\n", " ").replace('\n', " ").trim().to_string()
}
