use std::sync::OnceLock;

use regex::Regex;

fn leading_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w+:\s*").expect("leading label pattern is valid"))
}

fn label_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+):").expect("label token pattern is valid"))
}

/// Removes a leading speaker-attribution token (`"DR:"`, `"JOHN: "`) so that
/// candidate spans are scored on utterance text alone.
pub(crate) fn strip_leading_label(text: &str) -> &str {
    match leading_label_re().find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Collapses runs of whitespace (including line breaks) to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Start offset of the line containing byte offset `pos`: one past the
/// nearest preceding newline, or 0.
pub(crate) fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// The speaker-label token opening the line that starts at `line_start`, if
/// the line carries one.
pub(crate) fn label_at(text: &str, line_start: usize) -> Option<&str> {
    label_token_re()
        .captures(&text[line_start..])
        .map(|c| c.get(1).expect("label capture group").as_str())
}
