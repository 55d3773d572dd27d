pub const CHUNK_COUNT: usize = 4;

// From this many sentences a chunk may hold three.
const LONG_PASSAGE_SENTENCES: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

pub fn max_chunk_size(sentence_count: usize) -> usize {
    if sentence_count >= LONG_PASSAGE_SENTENCES {
        3
    } else {
        2
    }
}

/// Sizes are tried smallest first at each position, depth first, so the
/// result order is lexicographic over the size lists. Question numbers are
/// assigned in this order.
pub fn valid_chunk_partitions(sentence_count: usize) -> Vec<[usize; CHUNK_COUNT]> {
    let max_size = max_chunk_size(sentence_count);
    let mut partitions = Vec::new();
    let mut current = Vec::with_capacity(CHUNK_COUNT);
    extend_partition(&mut current, 0, sentence_count, max_size, &mut partitions);
    partitions
}

fn extend_partition(
    current: &mut Vec<usize>,
    total: usize,
    target: usize,
    max_size: usize,
    out: &mut Vec<[usize; CHUNK_COUNT]>,
) {
    if current.len() == CHUNK_COUNT && total == target {
        if let Ok(sizes) = <[usize; CHUNK_COUNT]>::try_from(current.as_slice()) {
            out.push(sizes);
        }
        return;
    }
    if current.len() >= CHUNK_COUNT || total >= target {
        return;
    }

    for size in 1..=max_size {
        current.push(size);
        extend_partition(current, total + size, target, max_size, out);
        current.pop();
    }
}

pub fn chunk_sentences(
    sentences: &[String],
    sizes: &[usize; CHUNK_COUNT],
) -> [Chunk; CHUNK_COUNT] {
    let mut start = 0;
    sizes.map(|size| {
        let end = (start + size).min(sentences.len());
        let chunk = Chunk {
            start,
            end,
            text: sentences[start..end].join(" "),
        };
        start = end;
        chunk
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sentences_have_a_single_partition() {
        assert_eq!(valid_chunk_partitions(4), vec![[1, 1, 1, 1]]);
    }

    #[test]
    fn fewer_than_four_sentences_have_none() {
        for n in 0..4 {
            assert!(valid_chunk_partitions(n).is_empty(), "n = {n}");
        }
    }

    #[test]
    fn five_sentences_follow_depth_first_order() {
        assert_eq!(
            valid_chunk_partitions(5),
            vec![[1, 1, 1, 2], [1, 1, 2, 1], [1, 2, 1, 1], [2, 1, 1, 1]]
        );
    }

    #[test]
    fn six_sentences_follow_depth_first_order() {
        assert_eq!(
            valid_chunk_partitions(6),
            vec![
                [1, 1, 2, 2],
                [1, 2, 1, 2],
                [1, 2, 2, 1],
                [2, 1, 1, 2],
                [2, 1, 2, 1],
                [2, 2, 1, 1],
            ]
        );
    }

    #[test]
    fn short_passages_cap_chunks_at_two() {
        assert_eq!(valid_chunk_partitions(8), vec![[2, 2, 2, 2]]);
        assert!(valid_chunk_partitions(8).iter().all(|p| p.iter().all(|&s| s <= 2)));
    }

    #[test]
    fn long_passages_allow_three_sentence_chunks() {
        let partitions = valid_chunk_partitions(10);
        assert!(!partitions.is_empty());
        assert!(partitions.iter().any(|p| p.contains(&3)));
        for sizes in &partitions {
            assert!(sizes.iter().all(|&s| (1..=3).contains(&s)));
            assert_eq!(sizes.iter().sum::<usize>(), 10);
        }
        assert_eq!(valid_chunk_partitions(12), vec![[3, 3, 3, 3]]);
    }

    #[test]
    fn nothing_fits_past_twelve_sentences() {
        assert!(valid_chunk_partitions(13).is_empty());
    }

    #[test]
    fn every_partition_is_a_sorted_unique_composition() {
        for n in 4..=12 {
            let partitions = valid_chunk_partitions(n);
            let mut sorted = partitions.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(partitions, sorted, "n = {n}");
            for sizes in partitions {
                assert_eq!(sizes.iter().sum::<usize>(), n);
                assert!(sizes.iter().all(|&s| s >= 1 && s <= max_chunk_size(n)));
            }
        }
    }

    #[test]
    fn chunks_cover_the_sentences_in_order() {
        let sentences: Vec<String> = ["A.", "B.", "C.", "D.", "E."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let chunks = chunk_sentences(&sentences, &[1, 2, 1, 1]);

        assert_eq!(chunks[0].text, "A.");
        assert_eq!(chunks[1].text, "B. C.");
        assert_eq!((chunks[1].start, chunks[1].end), (1, 3));
        assert_eq!((chunks[3].start, chunks[3].end), (4, 5));
        assert_eq!(chunks[3].text, "E.");
        assert!(chunks.iter().all(|c| c.end > c.start));
    }
}
