use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AnswerLabel {
    #[serde(rename = "①")]
    One,
    #[serde(rename = "②")]
    Two,
    #[serde(rename = "③")]
    Three,
    #[serde(rename = "④")]
    Four,
    #[serde(rename = "⑤")]
    Five,
}

impl AnswerLabel {
    pub const ALL: [AnswerLabel; 5] = [
        AnswerLabel::One,
        AnswerLabel::Two,
        AnswerLabel::Three,
        AnswerLabel::Four,
        AnswerLabel::Five,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLabel::One => "①",
            AnswerLabel::Two => "②",
            AnswerLabel::Three => "③",
            AnswerLabel::Four => "④",
            AnswerLabel::Five => "⑤",
        }
    }

    pub fn from_symbol(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == value)
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionRecord {
    pub number: usize,
    pub problem: String,
    pub answer: AnswerLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceItem {
    pub num: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPayload {
    pub text: String,
}
