use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use workbook::segment::numbered_sentences;
use workbook::{GenerateError, ProblemGenerator};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Inserting,
    Ordering,
    Sentences,
}

#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate insertion or ordering questions from a passage")]
struct Cli {
    #[arg(long, value_enum)]
    kind: Kind,
    /// Passage file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = read_passage(cli.input.as_deref())?;
    let generator = ProblemGenerator::new(cli.seed);

    let output = match cli.kind {
        Kind::Inserting => serde_json::to_value(generator.inserting(&text)?)?,
        Kind::Ordering => serde_json::to_value(generator.ordering(&text)?)?,
        Kind::Sentences => {
            let items = numbered_sentences(&text);
            if items.is_empty() {
                return Err(GenerateError::NoSentencesFound.into());
            }
            serde_json::to_value(items)?
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

fn read_passage(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed reading passage: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed reading passage from stdin")?;
            Ok(text)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
