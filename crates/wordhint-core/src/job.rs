//! Job request model shared between the job form and the host.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_HINT_LEVEL: u8 = 1;
pub const MAX_HINT_LEVEL: u8 = 5;
pub const DEFAULT_HINT_LEVEL: u8 = 3;

/// Output format of the converted book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Epub,
    Mobi,
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Epub, OutputFormat::Mobi, OutputFormat::Pdf];

    /// Value sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Epub => "epub",
            OutputFormat::Mobi => "mobi",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Text shown in the format selector.
    pub fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the hint annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Cn,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Cn];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Cn => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hint density requested from the annotator, always within
/// `MIN_HINT_LEVEL..=MAX_HINT_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HintLevel(u8);

impl HintLevel {
    /// Build a hint level, clamping out-of-range values.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(MIN_HINT_LEVEL, MAX_HINT_LEVEL))
    }

    /// Coerce slider text into a level. Unparsable text falls back to the default.
    pub fn from_text(text: &str) -> Self {
        match text.trim().parse::<i64>() {
            Ok(value) => {
                let clamped = value.clamp(MIN_HINT_LEVEL as i64, MAX_HINT_LEVEL as i64);
                Self(clamped as u8)
            }
            Err(_) => Self::default(),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HintLevel {
    fn default() -> Self {
        Self(DEFAULT_HINT_LEVEL)
    }
}

impl TryFrom<u8> for HintLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_HINT_LEVEL..=MAX_HINT_LEVEL).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "hint_level must be between {MIN_HINT_LEVEL} and {MAX_HINT_LEVEL}, got {value}"
            ))
        }
    }
}

impl From<HintLevel> for u8 {
    fn from(value: HintLevel) -> Self {
        value.0
    }
}

/// Payload of a conversion job, serialized with the host's field names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobRequest {
    pub book: String,
    pub format: OutputFormat,
    pub language: Language,
    pub hint_level: HintLevel,
    pub allow_long: bool,
    pub show_phoneme: bool,
}

/// Opaque status text returned by the host for a finished job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobResult(pub String);

impl JobResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editable form state behind the job screen.
///
/// The hint level is kept as text because that is what the slider edits; it is
/// only coerced into a [`HintLevel`] when a request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub book: String,
    pub format: OutputFormat,
    pub language: Language,
    pub hint_level: String,
    pub allow_long: bool,
    pub show_phoneme: bool,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            book: String::new(),
            format: OutputFormat::default(),
            language: Language::default(),
            hint_level: DEFAULT_HINT_LEVEL.to_string(),
            allow_long: false,
            show_phoneme: false,
        }
    }
}

impl JobDraft {
    pub fn toggle_allow_long(&mut self) {
        self.allow_long = !self.allow_long;
    }

    pub fn toggle_show_phoneme(&mut self) {
        self.show_phoneme = !self.show_phoneme;
    }

    /// Current hint level as the slider sees it.
    pub fn hint_level(&self) -> HintLevel {
        HintLevel::from_text(&self.hint_level)
    }

    pub fn set_hint_level(&mut self, level: HintLevel) {
        self.hint_level = level.get().to_string();
    }

    /// Coerce the draft into the payload sent to the host.
    pub fn to_request(&self) -> JobRequest {
        JobRequest {
            book: self.book.clone(),
            format: self.format,
            language: self.language,
            hint_level: self.hint_level(),
            allow_long: self.allow_long,
            show_phoneme: self.show_phoneme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_matches_form_defaults() {
        let request = JobDraft::default().to_request();
        assert_eq!(request.book, "");
        assert_eq!(request.format, OutputFormat::Epub);
        assert_eq!(request.language, Language::En);
        assert_eq!(request.hint_level.get(), 3);
        assert!(!request.allow_long);
        assert!(!request.show_phoneme);
    }

    #[test]
    fn slider_values_pass_through_unchanged() {
        let mut draft = JobDraft::default();
        for level in MIN_HINT_LEVEL..=MAX_HINT_LEVEL {
            draft.hint_level = level.to_string();
            assert_eq!(draft.to_request().hint_level.get(), level);
        }
    }

    #[test]
    fn hint_text_is_clamped_or_defaulted() {
        assert_eq!(HintLevel::from_text("0").get(), 1);
        assert_eq!(HintLevel::from_text("-4").get(), 1);
        assert_eq!(HintLevel::from_text("9").get(), 5);
        assert_eq!(HintLevel::from_text(" 4 ").get(), 4);
        assert_eq!(HintLevel::from_text("abc").get(), DEFAULT_HINT_LEVEL);
        assert_eq!(HintLevel::from_text("").get(), DEFAULT_HINT_LEVEL);
    }

    #[test]
    fn toggles_flip_only_their_own_field() {
        for allow_long in [false, true] {
            for show_phoneme in [false, true] {
                let mut draft = JobDraft {
                    book: "book.epub".to_string(),
                    allow_long,
                    show_phoneme,
                    ..JobDraft::default()
                };
                let before = draft.clone();

                draft.toggle_allow_long();
                assert_eq!(draft.allow_long, !before.allow_long);
                assert_eq!(draft.show_phoneme, before.show_phoneme);
                assert_eq!(draft.book, before.book);
                assert_eq!(draft.hint_level, before.hint_level);

                let before = draft.clone();
                draft.toggle_show_phoneme();
                assert_eq!(draft.show_phoneme, !before.show_phoneme);
                assert_eq!(draft.allow_long, before.allow_long);
                assert_eq!(draft.format, before.format);
                assert_eq!(draft.language, before.language);
            }
        }
    }

    #[test]
    fn request_uses_host_field_names() {
        let draft = JobDraft {
            book: "novel.epub".to_string(),
            format: OutputFormat::Mobi,
            language: Language::Cn,
            hint_level: "5".to_string(),
            allow_long: true,
            show_phoneme: false,
        };

        let value = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "book": "novel.epub",
                "format": "mobi",
                "language": "cn",
                "hint_level": 5,
                "allow_long": true,
                "show_phoneme": false,
            })
        );
    }

    #[test]
    fn out_of_range_hint_level_is_rejected_on_decode() {
        let raw = r#"{"book":"","format":"pdf","language":"en","hint_level":7,"allow_long":false,"show_phoneme":false}"#;
        assert!(serde_json::from_str::<JobRequest>(raw).is_err());
    }

    #[test]
    fn job_result_is_plain_string_on_the_wire() {
        let result: JobResult = serde_json::from_str("\"Done\"").unwrap();
        assert_eq!(result.as_str(), "Done");
    }
}
