//! Reduce an HTML fragment of the specification cell to plain text lines.
//!
//! The fetch layer may hand over either the already-extracted text or the raw
//! markup of the cell. Line breaks carry meaning (one audio track per line),
//! so `<br>` and block-level closing tags become newlines before the remaining
//! tags are dropped. Plain text passes through unchanged apart from entity
//! decoding.
//!
//! Long track lists are rendered twice, a collapsed `shortaudio`/`shortsubs`
//! div and a full `longaudio`/`longsubs` div. The short one is dropped when
//! its long counterpart is present.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static RE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</(?:div|p|li|tr)\s*>").unwrap());
static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(script|style)\b.*?</(script|style)\s*>").unwrap());
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static RE_SHORT_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div\b[^>]*\bid\s*=\s*["']short(audio|subs)["'][^>]*>.*?</div\s*>"#).unwrap()
});

/// Convert markup to text, one logical line per output line.
pub fn to_text(input: &str) -> String {
    let text = if input.contains('<') {
        let without_scripts = RE_SCRIPT.replace_all(input, "");
        let without_short = RE_SHORT_LIST.replace_all(&without_scripts, |caps: &Captures| {
            if has_long_list(input, &caps[1].to_ascii_lowercase()) {
                String::new()
            } else {
                caps[0].to_string()
            }
        });
        let with_breaks = RE_BREAK.replace_all(&without_short, "\n");
        RE_TAG.replace_all(&with_breaks, "").into_owned()
    } else {
        input.to_string()
    };

    decode_entities(&text)
}

fn has_long_list(input: &str, kind: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.contains(&format!("id=\"long{kind}\"")) || lower.contains(&format!("id='long{kind}'"))
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
