use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use workbook::models::QuestionRecord;
use workbook::problems::partition::{chunk_sentences, valid_chunk_partitions};
use workbook::problems::verify::{decode_ordering, reinsert};
use workbook::segment::split_into_sentences;
use workbook::ProblemGenerator;

#[derive(Parser, Debug)]
#[command(name = "eval")]
#[command(about = "Check every generated answer against its rendered question")]
struct Cli {
    #[arg(long, default_value = "eval/passages.jsonl")]
    file: String,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Deserialize)]
struct EvalPassage {
    id: String,
    text: String,
    #[serde(default)]
    expect_insertion_error: Option<bool>,
    #[serde(default)]
    expect_ordering_error: Option<bool>,
}

#[derive(Default)]
struct Tally {
    questions: usize,
    verified: usize,
    expectation_misses: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let generator = ProblemGenerator::new(cli.seed);

    let passages = load_passages(&cli.file)?;
    if passages.is_empty() {
        anyhow::bail!("no passages found in {}", cli.file);
    }

    let mut insertion = Tally::default();
    let mut ordering = Tally::default();

    for passage in &passages {
        let sentences = split_into_sentences(&passage.text);

        match generator.inserting(&passage.text) {
            Ok(records) => {
                if passage.expect_insertion_error.unwrap_or(false) {
                    insertion.expectation_misses += 1;
                }
                let original = sentences.join(" ");
                for record in &records {
                    insertion.questions += 1;
                    let ok = reinsert(&record.problem, record.answer).as_deref()
                        == Some(original.as_str());
                    if ok {
                        insertion.verified += 1;
                    }
                    report(cli.verbose, &passage.id, "inserting", record, ok);
                }
            }
            Err(err) => {
                if !passage.expect_insertion_error.unwrap_or(false) {
                    insertion.expectation_misses += 1;
                }
                if cli.verbose {
                    println!("[{}] inserting rejected: {}", passage.id, err);
                }
            }
        }

        match generator.ordering(&passage.text) {
            Ok(records) => {
                if passage.expect_ordering_error.unwrap_or(false) {
                    ordering.expectation_misses += 1;
                }
                let partitions = valid_chunk_partitions(sentences.len());
                for (record, sizes) in records.iter().zip(partitions) {
                    ordering.questions += 1;
                    let chunks = chunk_sentences(&sentences, &sizes);
                    let expected = [
                        chunks[1].text.clone(),
                        chunks[2].text.clone(),
                        chunks[3].text.clone(),
                    ];
                    let ok = decode_ordering(&record.problem, record.answer) == Some(expected);
                    if ok {
                        ordering.verified += 1;
                    }
                    report(cli.verbose, &passage.id, "ordering", record, ok);
                }
            }
            Err(err) => {
                if !passage.expect_ordering_error.unwrap_or(false) {
                    ordering.expectation_misses += 1;
                }
                if cli.verbose {
                    println!("[{}] ordering rejected: {}", passage.id, err);
                }
            }
        }
    }

    println!("Eval passages: {}", passages.len());
    print_tally("Insertion", &insertion);
    print_tally("Ordering", &ordering);

    let failures = (insertion.questions - insertion.verified)
        + (ordering.questions - ordering.verified)
        + insertion.expectation_misses
        + ordering.expectation_misses;
    if failures > 0 {
        anyhow::bail!("{} checks failed", failures);
    }

    Ok(())
}

fn report(verbose: bool, id: &str, kind: &str, record: &QuestionRecord, ok: bool) {
    if !ok {
        tracing::error!("{} question {} for passage {} does not verify", kind, record.number, id);
    }
    if verbose {
        println!("--- {} {} #{} ---", id, kind, record.number);
        println!("{}", record.problem);
        println!("Answer: {} ({})", record.answer, if ok { "ok" } else { "MISMATCH" });
        println!();
    }
}

fn print_tally(name: &str, tally: &Tally) {
    println!(
        "{} questions: {} verified: {:.1}% expectation misses: {}",
        name,
        tally.questions,
        ratio(tally.verified, tally.questions) * 100.0,
        tally.expectation_misses
    );
}

fn load_passages(path: &str) -> Result<Vec<EvalPassage>> {
    let file = File::open(path).with_context(|| format!("failed opening {}", path))?;
    let reader = BufReader::new(file);
    let mut passages = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed: EvalPassage = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid JSON at {} line {}", path, idx + 1))?;
        passages.push(parsed);
    }

    Ok(passages)
}

fn ratio(n: usize, d: usize) -> f32 {
    if d == 0 {
        return 0.0;
    }
    n as f32 / d as f32
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
