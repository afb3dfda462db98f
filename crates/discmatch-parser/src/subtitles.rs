use std::sync::LazyLock;

use regex::Regex;

static RE_TOGGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\((?:less|more)\)[ \t]*").unwrap());
static RE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",|\n").unwrap());

/// Split the Subtitles section into language names.
pub fn parse_subtitles(section: &str) -> Vec<String> {
    let cleaned = RE_TOGGLE.replace_all(section.trim(), "");
    RE_SEPARATOR
        .split(&cleaned)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_subtitles("English SDH, French, Spanish"),
            vec!["English SDH", "French", "Spanish"]
        );
    }

    #[test]
    fn test_toggles_and_newlines() {
        assert_eq!(
            parse_subtitles("English, Dutch (more)\nGerman, Italian (less)"),
            vec!["English", "Dutch", "German", "Italian"]
        );
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_subtitles("  \n ").is_empty());
    }
}
