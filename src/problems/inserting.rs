use crate::error::GenerateError;
use crate::models::{AnswerLabel, QuestionRecord};
use crate::segment::split_into_sentences;

pub const INSERTION_HEADER: &str = "글의 흐름으로 보아, 주어진 문장이 들어가기에 가장 적절한 곳은?";
pub const MIN_INSERTION_SENTENCES: usize = 5;

const GAP_COUNT: usize = 5;

/// Gap positions index the passage after removal; the same indices, read
/// against the original passage, are the sentences nominated for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionWindow {
    base: usize,
}

impl InsertionWindow {
    pub fn for_sentence_count(sentence_count: usize) -> Option<Self> {
        match sentence_count {
            n if n < MIN_INSERTION_SENTENCES => None,
            MIN_INSERTION_SENTENCES => Some(Self { base: 0 }),
            n => Some(Self { base: n - 6 }),
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn gaps(&self) -> impl Iterator<Item = (usize, AnswerLabel)> {
        let base = self.base;
        AnswerLabel::ALL
            .into_iter()
            .enumerate()
            .map(move |(offset, label)| (base + offset, label))
    }

    pub fn label_at(&self, position: usize) -> Option<AnswerLabel> {
        position
            .checked_sub(self.base)
            .filter(|offset| *offset < GAP_COUNT)
            .map(|offset| AnswerLabel::ALL[offset])
    }
}

pub fn generate_insertion_problems(text: &str) -> Result<Vec<QuestionRecord>, GenerateError> {
    let sentences = split_into_sentences(text);
    insertion_problems_from_sentences(&sentences)
}

pub fn insertion_problems_from_sentences(
    sentences: &[String],
) -> Result<Vec<QuestionRecord>, GenerateError> {
    let window = InsertionWindow::for_sentence_count(sentences.len())
        .ok_or_else(|| GenerateError::for_count(sentences.len(), MIN_INSERTION_SENTENCES))?;

    let records: Vec<QuestionRecord> = window
        .gaps()
        .enumerate()
        .map(|(idx, (removed, answer))| QuestionRecord {
            number: idx + 1,
            problem: render_insertion_problem(sentences, &window, removed),
            answer,
        })
        .collect();

    tracing::debug!(
        "generated {} insertion problems from {} sentences (window base {})",
        records.len(),
        sentences.len(),
        window.base()
    );
    Ok(records)
}

fn render_insertion_problem(sentences: &[String], window: &InsertionWindow, removed: usize) -> String {
    let given = &sentences[removed];
    let rest: Vec<&str> = sentences
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != removed)
        .map(|(_, sentence)| sentence.as_str())
        .collect();

    let mut paragraph: Vec<&str> = Vec::with_capacity(rest.len() + GAP_COUNT);
    for position in 0..=rest.len() {
        if let Some(label) = window.label_at(position) {
            paragraph.push(label.as_str());
        }
        if let Some(sentence) = rest.get(position) {
            paragraph.push(*sentence);
        }
    }

    format!("{INSERTION_HEADER}\n\n{given}\n\n{}", paragraph.join(" "))
}
