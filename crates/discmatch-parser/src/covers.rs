//! Cover image discovery on a release detail page.
//!
//! The page injects its cover images from inline scripts
//! (`$('#frontimage').append('<img id="frontimage_overlay" src="...">')`).
//! Older layouts carry them in `simple_overlay` divs instead, which are only
//! consulted when no script fragment produced an image.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>(.*?)</script\s*>").unwrap());
// The regex crate has no backreferences, so each quote style gets its own pattern.
static RE_APPEND_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)append\(\s*'(<img\b[^']*?>)'\s*\)").unwrap());
static RE_APPEND_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)append\(\s*"(<img\b[^"]*?>)"\s*\)"#).unwrap());
static RE_OVERLAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div\b[^>]*class\s*=\s*["'][^"']*\bsimple_overlay\b[^"']*["'][^>]*>(.*?)</div\s*>"#)
        .unwrap()
});
static RE_IMG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());
static RE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bid\s*=\s*\\?["']([^"'\\]*)\\?["']"#).unwrap());
static RE_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bsrc\s*=\s*\\?["']([^"'\\]*)\\?["']"#).unwrap());

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".png", ".gif", ".jpeg", ".webp"];

/// Find cover image URLs on a detail page, keyed by kind.
///
/// Keys are `front`, `back` and `slip` for the recognised ids, otherwise the
/// raw image id. Never fails; a page without images yields an empty map.
pub fn extract_cover_images(page: &str) -> BTreeMap<String, String> {
    let mut covers = BTreeMap::new();

    let scripts: Vec<&str> = RE_SCRIPT
        .captures_iter(page)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let sources = if scripts.is_empty() { vec![page] } else { scripts };

    for source in sources {
        if !source.contains("append") || !source.contains("<img") {
            continue;
        }

        let fragments = RE_APPEND_SINGLE
            .captures_iter(source)
            .chain(RE_APPEND_DOUBLE.captures_iter(source));
        for caps in fragments {
            let Some((id, src)) = img_attributes(&caps[1]) else {
                continue;
            };
            let url = clean_image_url(&src);
            if url.is_empty() {
                continue;
            }
            covers.insert(cover_kind(&id, "slipimage"), url.to_string());
        }
    }

    if covers.is_empty() {
        for caps in RE_OVERLAY.captures_iter(page) {
            let Some(img) = RE_IMG.find(&caps[1]) else {
                continue;
            };
            let Some((id, src)) = img_attributes(img.as_str()) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            covers.insert(cover_kind(&id, "slip"), src);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = covers.len(), "Extracted cover images");

    covers
}

/// Cut a URL right after the first known image extension, dropping any
/// resize or cache-busting suffix. Extensions are tried in a fixed order.
pub fn clean_image_url(url: &str) -> &str {
    let lower = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find_map(|ext| match lower.find(ext) {
            Some(pos) if pos > 0 => Some(&url[..pos + ext.len()]),
            _ => None,
        })
        .unwrap_or(url)
}

fn img_attributes(tag: &str) -> Option<(String, String)> {
    let src = RE_SRC.captures(tag)?[1].trim().to_string();
    if src.is_empty() {
        return None;
    }
    let id = RE_ID
        .captures(tag)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    Some((id, src))
}

fn cover_kind(id: &str, slip_marker: &str) -> String {
    let lower = id.to_lowercase();
    if lower.contains("front") {
        "front".to_string()
    } else if lower.contains("back") {
        "back".to_string()
    } else if lower.contains(slip_marker) {
        "slip".to_string()
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_fragments() {
        let page = r#"<html><head><script>
            $('#frontimage').append('<img id="frontimage_overlay" src="https://images.example/movies/covers/301234_front.jpg?t=1700000000" />');
            $('#backimage').append("<img id='backimage_overlay' src='https://images.example/movies/covers/301234_back.jpg'>");
            $('#slipimage').append('<img id="slipimage_overlay" src="https://images.example/movies/covers/301234_slip.png?v=2">');
        </script></head><body></body></html>"#;

        let covers = extract_cover_images(page);
        assert_eq!(covers.len(), 3);
        assert_eq!(
            covers["front"],
            "https://images.example/movies/covers/301234_front.jpg"
        );
        assert_eq!(
            covers["back"],
            "https://images.example/movies/covers/301234_back.jpg"
        );
        assert_eq!(
            covers["slip"],
            "https://images.example/movies/covers/301234_slip.png"
        );
    }

    #[test]
    fn test_unknown_id_kept_raw() {
        let page = r#"<script>x.append('<img id="insertimage" src="https://img.example/a.webp">')</script>"#;
        let covers = extract_cover_images(page);
        assert_eq!(covers["insertimage"], "https://img.example/a.webp");
    }

    #[test]
    fn test_overlay_fallback() {
        let page = r#"<div class="simple_overlay" id="o1"><img id="slipcover_large" src="https://img.example/s.jpg"></div>
            <div class="simple_overlay"><img id="frontcover" src="https://img.example/f.jpg"></div>"#;
        let covers = extract_cover_images(page);
        assert_eq!(covers["slip"], "https://img.example/s.jpg");
        assert_eq!(covers["front"], "https://img.example/f.jpg");
    }

    #[test]
    fn test_no_images() {
        assert!(extract_cover_images("<html><script>var a = 1;</script></html>").is_empty());
    }

    #[test]
    fn test_clean_image_url() {
        assert_eq!(
            clean_image_url("https://img.example/a.jpg?resize=500"),
            "https://img.example/a.jpg"
        );
        assert_eq!(
            clean_image_url("https://img.example/a.JPEG_large"),
            "https://img.example/a.JPEG"
        );
        assert_eq!(clean_image_url("https://img.example/a"), "https://img.example/a");
    }
}
