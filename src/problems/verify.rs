use crate::models::AnswerLabel;
use crate::problems::ordering::Slot;

/// Places the given sentence at the `answer` marker and drops the other
/// markers, returning the passage with whitespace collapsed.
pub fn reinsert(problem: &str, answer: AnswerLabel) -> Option<String> {
    let mut sections = problem.splitn(3, "\n\n");
    let _header = sections.next()?;
    let given = sections.next()?;
    let paragraph = sections.next()?;

    let mut tokens: Vec<&str> = Vec::new();
    let mut placed = false;
    for token in paragraph.split_whitespace() {
        match AnswerLabel::from_symbol(token) {
            Some(label) if label == answer => {
                tokens.extend(given.split_whitespace());
                placed = true;
            }
            Some(_) => {}
            None => tokens.push(token),
        }
    }

    placed.then(|| tokens.join(" "))
}

pub fn decode_ordering(problem: &str, answer: AnswerLabel) -> Option<[String; 3]> {
    let mut slotted: [Option<&str>; 3] = [None; 3];
    let mut chosen: Option<&str> = None;

    for line in problem.lines() {
        for (idx, slot) in Slot::ALL.into_iter().enumerate() {
            if let Some(text) = strip_label(line, slot.marker()) {
                slotted[idx] = Some(text);
            }
        }
        if let Some(order) = strip_label(line, answer.as_str()) {
            chosen = Some(order);
        }
    }

    let slots = chosen?
        .split(" - ")
        .map(|marker| Slot::from_marker(marker.trim()))
        .collect::<Option<Vec<_>>>()?;
    let [first, second, third] = <[Slot; 3]>::try_from(slots).ok()?;

    let text_for = |slot: Slot| -> Option<String> {
        let idx = Slot::ALL.iter().position(|candidate| *candidate == slot)?;
        slotted[idx].map(str::to_string)
    };
    Some([text_for(first)?, text_for(second)?, text_for(third)?])
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)?.strip_prefix(' ')
}
