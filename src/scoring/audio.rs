//! Audio track reconciliation.
//!
//! Local tracks are processed in disc order. Each one scores every catalog
//! line still in the pool and claims the best, so a catalog line can satisfy
//! at most one local track. This is a greedy approximation of a bipartite
//! assignment and the penalty weights are tuned against it; it must not be
//! replaced by an optimal matcher.

use std::sync::LazyLock;

use discmatch_common::{LocalAudioTrack, LocalDiscSpec};
use discmatch_parser::ParsedReleaseSpec;
use regex::Regex;

use super::equivalence::{audio_format_matches, channels_match};
use super::rules::{RuleOutcome, CANNOT_COMPARE_PENALTY};

static RE_KBPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\s*kbps)").unwrap());
static RE_BIT_DEPTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)-bit").unwrap());

const CHANNEL_LAYOUTS: [&str; 4] = ["7.1", "5.1", "2.0", "1.0"];

/// Secondary tracks at or below this bitrate are treated as commentary.
pub const LOW_BITRATE_KBPS: f64 = 258.0;

pub const SINGLE_PARTIAL_PENALTY: f64 = 5.0;
pub const SINGLE_MISSING_PENALTY: f64 = 10.0;
pub const PARTIAL_PENALTY: f64 = 2.5;
pub const MISSING_PENALTY: f64 = 5.0;
pub const LOW_BITRATE_MISSING_PENALTY: f64 = 2.5;
pub const EXTRA_TRACK_PENALTY: f64 = 5.0;

/// A local track with its fields lower-cased and repaired for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTrack {
    pub language: String,
    pub codec: String,
    pub channels: String,
    pub sample_rate: String,
    pub bit_depth: String,
    pub bitrate: String,
    /// Position in the local track list; 0 is the primary track.
    pub position: usize,
}

impl NormalizedTrack {
    /// Whether a missing match for this track is charged the reduced penalty.
    pub fn is_low_priority(&self) -> bool {
        if self.position == 0 || !self.bitrate.contains("kbps") {
            return false;
        }
        self.bitrate
            .replace("kbps", "")
            .trim()
            .parse::<f64>()
            .map(|kbps| kbps <= LOW_BITRATE_KBPS)
            .unwrap_or(false)
    }

    fn describe(&self) -> String {
        format!("{} {} {}", self.language, self.codec, self.channels)
    }
}

/// Lower-case a probed track and undo the column shifts the probe produces
/// for Atmos streams. `position` is the track's place in the local list.
pub fn normalize_track(track: &LocalAudioTrack, position: usize) -> NormalizedTrack {
    let mut norm = NormalizedTrack {
        language: track.language.to_lowercase(),
        codec: track.codec.to_lowercase().replace("audio", ""),
        channels: track.channels.to_lowercase().replace("audio", ""),
        sample_rate: track.sample_rate.to_lowercase(),
        bit_depth: track.bit_depth.to_lowercase(),
        bitrate: track.bitrate.to_lowercase(),
        position,
    };

    if track.atmos || norm.channels.contains("atmos") {
        if norm.codec.contains("truehd") {
            norm.codec = "dolby truehd atmos".to_string();
        } else if norm.codec.contains("dolby") {
            norm.codec = "dolby atmos".to_string();
        }

        if matches!(norm.channels.trim(), "atmos" | "") {
            norm.channels = if CHANNEL_LAYOUTS.contains(&norm.sample_rate.as_str()) {
                norm.sample_rate.clone()
            } else {
                "7.1".to_string()
            };
        }

        if norm.bitrate.contains("khz") && !norm.sample_rate.contains("khz") {
            norm.sample_rate = std::mem::take(&mut norm.bitrate);
        }

        if norm.bit_depth.contains("kbps") {
            if let Some(kbps) = RE_KBPS.captures(&norm.bit_depth).map(|c| c[1].to_string()) {
                norm.bitrate = kbps;
                norm.bit_depth = RE_BIT_DEPTH
                    .captures(&norm.bit_depth)
                    .map(|c| format!("{}-bit", &c[1]))
                    .unwrap_or_default();
            }
        }
    }

    // Dialog normalisation value, not a bit depth.
    if norm.bit_depth.contains("dn -") {
        norm.bit_depth.clear();
    }

    norm
}

/// How well one catalog line matches one local track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineScore {
    total: u32,
    core: u32,
    qualifies: bool,
}

fn score_line(track: &NormalizedTrack, line: &str) -> Option<LineScore> {
    let line = line.to_lowercase();
    if track.language.is_empty() || !line.contains(&track.language) {
        return None;
    }

    let mut score = LineScore {
        total: 1,
        core: 1,
        qualifies: false,
    };

    let format_match = audio_format_matches(&track.codec, &line);
    let channel_match = channels_match(&track.channels, &line);
    for matched in [format_match, channel_match] {
        if matched {
            score.total += 1;
            score.core += 1;
        }
    }
    score.qualifies = format_match || channel_match;

    let compact = line.replace(' ', "");
    if !track.sample_rate.is_empty() && compact.contains(&track.sample_rate.replace(' ', "")) {
        score.total += 1;
    }
    if !track.bit_depth.is_empty()
        && (line.contains(&track.bit_depth) || compact.contains(&track.bit_depth.replace('-', "")))
    {
        score.total += 1;
    }
    if !track.bitrate.is_empty() && line.contains(&track.bitrate) {
        score.total += 1;
    }

    Some(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackMatch {
    Full,
    Partial,
    Missing { low_priority: bool },
}

/// Reconcile local audio tracks against the candidate's audio lines.
pub fn reconcile(local: &LocalDiscSpec, spec: &ParsedReleaseSpec) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    if local.audio_tracks.is_empty() {
        out.penalize(CANNOT_COMPARE_PENALTY);
        out.log("? Cannot compare audio tracks");
        return out;
    }

    let mut pool: Vec<&str> = spec.audio.iter().map(String::as_str).collect();
    let mut results = Vec::with_capacity(local.audio_tracks.len());

    let tracks = local
        .audio_tracks
        .iter()
        .enumerate()
        .map(|(position, track)| normalize_track(track, position));

    for track in tracks {
        let mut best: Option<(usize, LineScore)> = None;
        let mut found = false;

        for (idx, line) in pool.iter().enumerate() {
            let Some(score) = score_line(&track, line) else {
                continue;
            };
            if score.total > best.map(|(_, b)| b.total).unwrap_or(0) {
                best = Some((idx, score));
            }
            found |= score.qualifies;
        }

        let result = match best.filter(|_| found) {
            Some((idx, score)) => {
                let line = pool.remove(idx);
                if score.core >= 3 {
                    out.log(format!(
                        "✓ Found good match for {} track: '{}' (match quality: 100%)",
                        track.describe(),
                        line
                    ));
                    TrackMatch::Full
                } else {
                    out.log(format!(
                        "⚠ Found partial match for {} track: '{}' (match quality: {}%)",
                        track.describe(),
                        line,
                        score.core * 100 / 3
                    ));
                    TrackMatch::Partial
                }
            }
            None => {
                let low_priority = track.is_low_priority();
                if low_priority {
                    out.log(format!(
                        "✗ No match found for {} track (Low bitrate, half penalty)",
                        track.describe()
                    ));
                } else {
                    out.log(format!(
                        "✗ No match found for {} {} track",
                        track.describe(),
                        track.bitrate
                    ));
                }
                TrackMatch::Missing { low_priority }
            }
        };
        results.push(result);
    }

    let total = results.len();
    let full = results.iter().filter(|r| **r == TrackMatch::Full).count();
    let partial = results.iter().filter(|r| **r == TrackMatch::Partial).count();
    let low_priority_missing = results
        .iter()
        .filter(|r| **r == TrackMatch::Missing { low_priority: true })
        .count();
    let missing = total - full - partial;

    let penalty = if full == total {
        0.0
    } else if total == 1 {
        if partial == 1 {
            SINGLE_PARTIAL_PENALTY
        } else {
            SINGLE_MISSING_PENALTY
        }
    } else {
        partial as f64 * PARTIAL_PENALTY
            + (missing - low_priority_missing) as f64 * MISSING_PENALTY
            + low_priority_missing as f64 * LOW_BITRATE_MISSING_PENALTY
    };
    out.penalize(penalty);
    out.log(format!("Audio penalty: {:.1}", penalty));

    if full > 0 {
        out.log(format!(
            "✓ Audio tracks with good matches: {}/{} ({:.1}% of tracks)",
            full,
            total,
            full as f64 / total as f64 * 100.0
        ));
        if partial > 0 {
            out.log(format!(
                "⚠ Audio tracks with partial matches: {}/{} ({:.1}% of tracks)",
                partial,
                total,
                partial as f64 / total as f64 * 100.0
            ));
        }
    } else if partial > 0 {
        out.log(format!(
            "⚠ There were only partial audio track matches: {}/{}",
            partial, total
        ));
    } else {
        out.log("✗ No audio tracks match!");
    }

    if !pool.is_empty() {
        for line in &pool {
            out.log(format!(
                "⚠ Release has extra audio track not in local spec: {}",
                line
            ));
        }
        let extra = pool.len() as f64 * EXTRA_TRACK_PENALTY;
        out.penalize(extra);
        out.log(format!(
            "- Found {} additional audio tracks in release not in local spec",
            pool.len()
        ));
        out.log(format!("Extra audio tracks penalty: {:.1} points", extra));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(language: &str, codec: &str, channels: &str) -> LocalAudioTrack {
        LocalAudioTrack {
            language: language.to_string(),
            codec: codec.to_string(),
            channels: channels.to_string(),
            ..Default::default()
        }
    }

    fn local(tracks: Vec<LocalAudioTrack>) -> LocalDiscSpec {
        LocalDiscSpec {
            audio_tracks: tracks,
            ..Default::default()
        }
    }

    fn spec(lines: &[&str]) -> ParsedReleaseSpec {
        ParsedReleaseSpec {
            audio: lines.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    // ------------------------------------------------------------------------
    // Normalisation
    // ------------------------------------------------------------------------

    #[test]
    fn test_normalize_strips_audio_word() {
        let norm = normalize_track(&track("English", "DTS-HD Master Audio", "5.1"), 0);
        assert_eq!(norm.language, "english");
        assert_eq!(norm.codec, "dts-hd master ");
        assert_eq!(norm.channels, "5.1");
    }

    #[test]
    fn test_normalize_atmos_truehd() {
        let mut t = track("English", "Dolby TrueHD Audio", "Atmos Audio");
        t.sample_rate = "7.1".to_string();
        t.bitrate = "48 kHz".to_string();
        t.bit_depth = "4608 kbps / 24-bit".to_string();
        let norm = normalize_track(&t, 0);
        assert_eq!(norm.codec, "dolby truehd atmos");
        assert_eq!(norm.channels, "7.1");
        assert_eq!(norm.sample_rate, "48 khz");
        assert_eq!(norm.bitrate, "4608 kbps");
        assert_eq!(norm.bit_depth, "24-bit");
    }

    #[test]
    fn test_normalize_atmos_flag_defaults_channels() {
        let mut t = track("English", "Dolby Digital Plus", "");
        t.atmos = true;
        let norm = normalize_track(&t, 0);
        assert_eq!(norm.codec, "dolby atmos");
        assert_eq!(norm.channels, "7.1");
    }

    #[test]
    fn test_normalize_drops_dialog_normalisation() {
        let mut t = track("English", "Dolby Digital", "5.1");
        t.bit_depth = "DN -27dB".to_string();
        assert_eq!(normalize_track(&t, 0).bit_depth, "");
    }

    #[test]
    fn test_low_priority() {
        let mut norm = normalize_track(&track("English", "Dolby Digital", "2.0"), 0);
        norm.bitrate = "192 kbps".to_string();
        assert!(!norm.is_low_priority());
        norm.position = 2;
        assert!(norm.is_low_priority());
        norm.bitrate = "258 kbps".to_string();
        assert!(norm.is_low_priority());
        norm.bitrate = "448 kbps".to_string();
        assert!(!norm.is_low_priority());
        norm.bitrate = "".to_string();
        assert!(!norm.is_low_priority());
    }

    // ------------------------------------------------------------------------
    // Reconciliation
    // ------------------------------------------------------------------------

    #[test]
    fn test_single_full_match() {
        let out = reconcile(
            &local(vec![track("English", "Dolby TrueHD", "7.1")]),
            &spec(&["English: Dolby TrueHD 7.1"]),
        );
        assert_eq!(out.delta, 0.0);
    }

    #[test]
    fn test_single_partial_match() {
        let out = reconcile(
            &local(vec![track("English", "Dolby TrueHD", "5.1")]),
            &spec(&["English: Dolby TrueHD 7.1"]),
        );
        assert_eq!(out.delta, -5.0);
        assert!(out.log[0].contains("match quality: 66%"));
    }

    #[test]
    fn test_single_missing() {
        let out = reconcile(
            &local(vec![track("English", "DTS-HD Master Audio", "5.1")]),
            &spec(&["French: DTS-HD Master Audio 5.1"]),
        );
        // -10 missing, -5 for the unclaimed French line
        assert_eq!(out.delta, -15.0);
    }

    #[test]
    fn test_language_only_is_missing() {
        let out = reconcile(
            &local(vec![track("English", "LPCM", "2.0")]),
            &spec(&["English: Dolby Digital 5.1"]),
        );
        assert_eq!(out.delta, -15.0);
    }

    #[test]
    fn test_multi_track_penalties() {
        let mut commentary = track("English", "Dolby Digital", "2.0");
        commentary.bitrate = "192 kbps".to_string();
        let mut german = track("German", "DTS", "5.1");
        german.bitrate = "768 kbps".to_string();

        let out = reconcile(
            &local(vec![
                track("English", "Dolby TrueHD", "7.1"),
                track("French", "Dolby Digital", "7.1"),
                commentary,
                german,
            ]),
            &spec(&["English: Dolby TrueHD 7.1", "French: Dolby Digital 5.1"]),
        );
        // partial French -2.5, low-bitrate commentary -2.5, German -5
        assert_eq!(out.delta, -10.0);
    }

    #[test]
    fn test_low_bitrate_uses_list_position() {
        let mut commentary = track("English", "Dolby Digital", "2.0");
        commentary.bitrate = "192 kbps".to_string();

        // every probe index left at 0
        let out = reconcile(
            &local(vec![track("English", "Dolby TrueHD", "7.1"), commentary.clone()]),
            &spec(&["English: Dolby TrueHD 7.1"]),
        );
        assert_eq!(out.delta, -2.5);
        assert!(out.log.contains(&"Audio penalty: 2.5".to_string()));

        // 1-based probe indices do not make the primary track low priority
        let mut primary = commentary.clone();
        primary.track_index = 1;
        let mut main = track("French", "Dolby TrueHD", "7.1");
        main.track_index = 2;
        let out = reconcile(
            &local(vec![primary, main]),
            &spec(&["French: Dolby TrueHD 7.1"]),
        );
        assert_eq!(out.delta, -5.0);
        assert!(!out.log.iter().any(|l| l.contains("half penalty")));
    }

    #[test]
    fn test_extra_lines_penalized() {
        let out = reconcile(
            &local(vec![track("English", "Dolby TrueHD", "7.1")]),
            &spec(&[
                "English: Dolby TrueHD 7.1",
                "English: Dolby Digital 2.0",
                "Spanish: Dolby Digital 5.1",
            ]),
        );
        assert_eq!(out.delta, -10.0);
    }

    #[test]
    fn test_best_line_claimed_first_on_ties() {
        let out = reconcile(
            &local(vec![
                track("English", "Dolby Digital", "5.1"),
                track("English", "Dolby Digital", "5.1"),
            ]),
            &spec(&["English: Dolby Digital 5.1 (first)", "English: Dolby Digital 5.1 (second)"]),
        );
        assert_eq!(out.delta, 0.0);
        assert!(out.log[0].contains("(first)"));
        assert!(out.log[1].contains("(second)"));
    }

    #[test]
    fn test_bonus_fields_pick_better_line() {
        let mut t = track("English", "DTS-HD Master Audio", "5.1");
        t.bit_depth = "24-bit".to_string();
        let out = reconcile(
            &local(vec![t]),
            &spec(&[
                "English: DTS-HD Master Audio 5.1 (48kHz, 16-bit)",
                "English: DTS-HD Master Audio 5.1 (48kHz, 24-bit)",
            ]),
        );
        assert!(out.log[0].contains("24-bit"));
        assert_eq!(out.delta, -5.0);
    }

    #[test]
    fn test_no_local_audio() {
        let out = reconcile(&LocalDiscSpec::default(), &spec(&["English: DTS 5.1"]));
        assert_eq!(out.delta, -5.0);
        assert_eq!(out.log, vec!["? Cannot compare audio tracks"]);
    }

    #[test]
    fn test_empty_candidate_audio() {
        let out = reconcile(
            &local(vec![
                track("English", "Dolby TrueHD", "7.1"),
                track("French", "Dolby Digital", "5.1"),
            ]),
            &spec(&[]),
        );
        assert_eq!(out.delta, -10.0);
    }
}
