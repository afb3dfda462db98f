use std::sync::LazyLock;

use regex::Regex;

use crate::model::VideoSpec;

static RE_CODEC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Codec: ([^<\n]+)").unwrap());
static RE_RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Resolution: ([^<\n]+)").unwrap());

/// Extract codec and resolution from the Video section.
pub fn parse_video(section: &str) -> VideoSpec {
    VideoSpec {
        codec: first_capture(&RE_CODEC, section),
        resolution: first_capture(&RE_RESOLUTION, section),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
