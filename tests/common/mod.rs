//! Shared builders for integration tests.
//!
//! [`perfect_local`] and [`PERFECT_DETAIL`] describe the same UHD disc, so a
//! candidate built from them scores exactly 100.

#![allow(dead_code)]

use discmatch::matcher::CandidateInput;
use discmatch::scoring::ScoredCandidate;
use discmatch::selection::{Choice, Prompter};
use discmatch_common::{
    CandidateRelease, Error, LocalAudioTrack, LocalDisc, LocalDiscSpec, LocalVideo, Result,
};
use std::collections::VecDeque;

/// Detail text matching [`perfect_local`] on every rule.
pub const PERFECT_DETAIL: &str = "\
Video
Codec: HEVC / H.265
Resolution: Native 4K (2160p)
Audio
English: Dolby TrueHD 7.1
Subtitles
English
Discs
4K Ultra HD
Single disc (1 BD-100)
Playback
2K Blu-ray: Region A
";

/// A UHD disc: HEVC 2160p, one English TrueHD 7.1 track, English subtitles,
/// 80 GB on disc.
pub fn perfect_local() -> LocalDiscSpec {
    LocalDiscSpec {
        title: "Dune Part Two".to_string(),
        video: Some(LocalVideo {
            codec: "MPEG-H HEVC Video".to_string(),
            resolution: "2160p".to_string(),
        }),
        disc: LocalDisc {
            size_gb: Some(80.0),
            is_dvd: false,
        },
        audio_tracks: vec![LocalAudioTrack {
            language: "English".to_string(),
            codec: "Dolby TrueHD Audio".to_string(),
            channels: "7.1".to_string(),
            sample_rate: "48 kHz".to_string(),
            bit_depth: "24-bit".to_string(),
            bitrate: "4000 kbps".to_string(),
            track_index: 0,
            atmos: false,
        }],
        subtitle_languages: vec!["English".to_string()],
    }
}

pub fn candidate(id: &str, country: &str, publisher: &str) -> CandidateRelease {
    CandidateRelease {
        title: format!("Dune Part Two 4K ({})", id),
        country: country.to_string(),
        publisher: publisher.to_string(),
        price: "$29.99".to_string(),
        release_id: id.to_string(),
        detail_url: format!("https://catalog.example/movies/dune-part-two/{}/", id),
        cover_images: None,
    }
}

pub fn input(id: &str, country: &str, detail: Option<&str>) -> CandidateInput {
    CandidateInput {
        candidate: candidate(id, country, "Warner Bros."),
        detail_text: detail.map(str::to_string),
        page_html: None,
    }
}

/// Scored candidates with fixed scores, sorted as given.
pub fn scored(scores: &[f64]) -> Vec<ScoredCandidate> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| ScoredCandidate {
            candidate: candidate(&i.to_string(), "United Kingdom", "Arrow"),
            spec: None,
            score,
            decision_log: vec![format!("Final score: {:.1}/100", score)],
            generic_format: false,
            specs_missing: false,
        })
        .collect()
}

/// Answer given by a [`ScriptedPrompter`].
#[derive(Debug, Clone, Copy)]
pub enum Answer {
    YesNo(bool),
    Choose(Choice),
}

/// Prompter that replays a fixed list of answers and records what it showed.
///
/// Running out of answers behaves like closed input.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub shown: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn show(&mut self, message: &str) -> Result<()> {
        self.shown.push(message.to_string());
        Ok(())
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        match self.answers.pop_front() {
            Some(Answer::YesNo(answer)) => Ok(answer),
            Some(other) => panic!("expected a yes/no answer, script has {:?}", other),
            None => Err(Error::Cancelled),
        }
    }

    fn ask_choice(&mut self, prompt: &str, _options: &[String]) -> Result<Choice> {
        self.questions.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Choose(choice)) => Ok(choice),
            Some(other) => panic!("expected a choice, script has {:?}", other),
            None => Err(Error::Cancelled),
        }
    }
}
