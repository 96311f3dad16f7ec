use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// One of the three learning-style labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

impl LearningStyle {
    /// Canonical order, also used to break ties
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl FromStr for LearningStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

/// A single questionnaire answer
///
/// `answer` is kept as the raw string the caller sent; labels outside the
/// three known styles are carried through and ignored at scoring time.
/// Only the object form `{"question_id", "answer"}` deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Answer {
    pub question_id: i64,
    pub answer: String,
}

#[derive(Deserialize)]
struct AnswerFields {
    #[serde(default)]
    question_id: i64,
    #[serde(default)]
    answer: String,
}

impl TryFrom<Map<String, Value>> for Answer {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: AnswerFields = serde_json::from_value(Value::Object(map))?;
        Ok(Answer::new(fields.question_id, fields.answer))
    }
}

impl Answer {
    pub fn new(question_id: i64, answer: impl Into<String>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }

    /// The parsed label, if it is one of the known styles
    pub fn style(&self) -> Option<LearningStyle> {
        self.answer.parse().ok()
    }
}

/// Per-style answer counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub visual: u32,
    pub auditory: u32,
    pub kinesthetic: u32,
}

impl ScoreTally {
    pub fn get(&self, style: LearningStyle) -> u32 {
        match style {
            LearningStyle::Visual => self.visual,
            LearningStyle::Auditory => self.auditory,
            LearningStyle::Kinesthetic => self.kinesthetic,
        }
    }

    pub fn increment(&mut self, style: LearningStyle) {
        match style {
            LearningStyle::Visual => self.visual += 1,
            LearningStyle::Auditory => self.auditory += 1,
            LearningStyle::Kinesthetic => self.kinesthetic += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.visual + self.auditory + self.kinesthetic
    }
}

/// Outcome of scoring one questionnaire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub dominant: LearningStyle,
    pub tally: ScoreTally,
    pub message: String,
}

/// Public profile of a demo account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub email: String,
    pub username: String,
    pub learning_style: Option<LearningStyle>,
    pub assessment_completed: bool,
}

/// One questionnaire item with an answer text per style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: u32,
    pub question_text: String,
    pub visual_answer: String,
    pub auditory_answer: String,
    pub kinesthetic_answer: String,
}

/// Learning content entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub difficulty_level: String,
    pub duration_minutes: u32,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub text_content: Option<String>,
    pub interactive_url: Option<String>,
    pub learning_objectives: Vec<String>,
}

/// How often each content format was used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatUsage {
    pub video: u32,
    pub text: u32,
    pub audio: u32,
    pub interactive: u32,
}

/// Dashboard statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_time_minutes: u32,
    pub content_completed: u32,
    pub content_in_progress: u32,
    pub assessment_completed: bool,
    pub format_usage: FormatUsage,
}
