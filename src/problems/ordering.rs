use rand::Rng;

use crate::error::GenerateError;
use crate::models::{AnswerLabel, QuestionRecord};
use crate::problems::partition::{chunk_sentences, valid_chunk_partitions, Chunk, CHUNK_COUNT};
use crate::segment::split_into_sentences;

pub const ORDERING_HEADER: &str = "주어진 글 다음에 이어질 글의 흐름으로 가장 적절한 것은?";
pub const MIN_ORDERING_SENTENCES: usize = CHUNK_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
    C,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::A, Slot::B, Slot::C];

    pub fn marker(self) -> &'static str {
        match self {
            Slot::A => "(A)",
            Slot::B => "(B)",
            Slot::C => "(C)",
        }
    }

    pub fn from_marker(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.marker() == value)
    }

    fn index(self) -> usize {
        self as usize
    }
}

// Slot given to each trailing chunk, in true reading order.
pub type SlotAssignment = [Slot; 3];

// (A)-(B)-(C) is never offered.
pub const ORDERING_CHOICES: [(AnswerLabel, SlotAssignment); 5] = [
    (AnswerLabel::One, [Slot::A, Slot::C, Slot::B]),
    (AnswerLabel::Two, [Slot::B, Slot::A, Slot::C]),
    (AnswerLabel::Three, [Slot::B, Slot::C, Slot::A]),
    (AnswerLabel::Four, [Slot::C, Slot::A, Slot::B]),
    (AnswerLabel::Five, [Slot::C, Slot::B, Slot::A]),
];

pub fn pick_assignment<R: Rng + ?Sized>(rng: &mut R) -> (AnswerLabel, SlotAssignment) {
    ORDERING_CHOICES[rng.gen_range(0..ORDERING_CHOICES.len())]
}

pub fn generate_ordering_problems<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> Result<Vec<QuestionRecord>, GenerateError> {
    let sentences = split_into_sentences(text);
    ordering_problems_from_sentences(&sentences, rng)
}

pub fn ordering_problems_from_sentences<R: Rng + ?Sized>(
    sentences: &[String],
    rng: &mut R,
) -> Result<Vec<QuestionRecord>, GenerateError> {
    if sentences.len() < MIN_ORDERING_SENTENCES {
        return Err(GenerateError::for_count(
            sentences.len(),
            MIN_ORDERING_SENTENCES,
        ));
    }

    let partitions = valid_chunk_partitions(sentences.len());
    let mut records = Vec::with_capacity(partitions.len());
    for (idx, sizes) in partitions.iter().enumerate() {
        let chunks = chunk_sentences(sentences, sizes);
        let (answer, assignment) = pick_assignment(rng);
        records.push(QuestionRecord {
            number: idx + 1,
            problem: render_ordering_problem(&chunks, assignment),
            answer,
        });
    }

    if records.is_empty() {
        tracing::warn!(
            "no chunk partition fits {} sentences; returning no ordering problems",
            sentences.len()
        );
    } else {
        tracing::debug!(
            "generated {} ordering problems from {} sentences",
            records.len(),
            sentences.len()
        );
    }
    Ok(records)
}

pub fn render_ordering_problem(
    chunks: &[Chunk; CHUNK_COUNT],
    assignment: SlotAssignment,
) -> String {
    let [lead, first, second, third] = chunks;

    let mut slotted = [""; 3];
    for (chunk, slot) in [first, second, third].into_iter().zip(assignment) {
        slotted[slot.index()] = chunk.text.as_str();
    }

    let mut lines = Vec::with_capacity(12);
    lines.push(format!("{ORDERING_HEADER}\n"));
    lines.push(format!("{}\n", lead.text));
    for (slot, text) in Slot::ALL.into_iter().zip(slotted) {
        lines.push(format!("{} {}", slot.marker(), text));
    }
    if let Some(last) = lines.last_mut() {
        last.push('\n');
    }
    for (label, choice) in ORDERING_CHOICES {
        lines.push(format!("{} {}", label, choice_text(choice)));
    }

    lines.join("\n")
}

fn choice_text(assignment: SlotAssignment) -> String {
    assignment
        .iter()
        .map(|slot| slot.marker())
        .collect::<Vec<_>>()
        .join(" - ")
}
