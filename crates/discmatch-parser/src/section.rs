//! Split the specification text into its headed sections.

use phf::phf_map;

/// Sections of the specification block the parser extracts data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Video,
    Audio,
    Subtitles,
    Discs,
    Playback,
    /// A known heading whose content is not used (e.g. "Packaging").
    Other,
}

/// Heading lines recognised as section starts.
static HEADINGS: phf::Map<&'static str, Section> = phf_map! {
    "Video" => Section::Video,
    "Audio" => Section::Audio,
    "Subtitles" => Section::Subtitles,
    "Discs" => Section::Discs,
    "Playback" => Section::Playback,
    "Packaging" => Section::Other,
    "Digital" => Section::Other,
    "Extras" => Section::Other,
    "Runtime" => Section::Other,
};

/// Text of every section, in document order.
#[derive(Debug, Default)]
pub struct Sections<'a> {
    parts: Vec<(Section, Vec<&'a str>)>,
}

impl<'a> Sections<'a> {
    /// Split plain text at heading lines. Text before the first heading is
    /// discarded.
    pub fn split(text: &'a str) -> Self {
        let mut parts: Vec<(Section, Vec<&'a str>)> = Vec::new();

        for line in text.lines() {
            if let Some(&section) = HEADINGS.get(line.trim()) {
                parts.push((section, Vec::new()));
            } else if let Some((_, lines)) = parts.last_mut() {
                lines.push(line);
            }
        }

        Self { parts }
    }

    /// Whether any extractable section heading was found.
    pub fn has_known(&self) -> bool {
        self.parts.iter().any(|(s, _)| *s != Section::Other)
    }

    /// Lines of the first occurrence of `section`.
    pub fn lines(&self, section: Section) -> Option<&[&'a str]> {
        self.parts
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Content of the first occurrence of `section`, joined with newlines.
    pub fn text(&self, section: Section) -> Option<String> {
        self.lines(section).map(|lines| lines.join("\n"))
    }
}
