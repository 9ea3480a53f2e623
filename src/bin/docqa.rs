use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use docqa_core::document::{PlainTextSource, TextSource};
use docqa_core::entities::PatternRecognizer;
use docqa_core::text::{RuleTokenizer, StopwordSet};
use docqa_core::types::{AnalysisReport, QuestionAnswer};
use docqa_core::weighting::SmoothIdfWeighter;
use docqa_core::{AnalysisConfig, Pipeline};
use tracing_subscriber::EnvFilter;

const DEFAULT_QUESTIONS: &[&str] = &[
    "Welche Organisationen werden in dem Dokument erwähnt?",
    "Wer sind die Autoren in diesem Dokument?",
    "Was sind die wichtigsten Ergebnisse?",
];

const ENTITIES_SHOWN: usize = 10;

const DEFAULT_LOG_FILTER: &str = "docqa_core=info";

#[derive(Parser, Debug)]
#[command(
    name = "docqa",
    version,
    about = "Extract keywords and entities from a document, then answer questions about it."
)]
struct Cli {
    /// Extracted text of the document (pages separated by form feeds). Prompted if omitted.
    path: Option<PathBuf>,

    /// Question to answer; repeatable. Defaults to three sample questions.
    #[arg(short, long = "question")]
    questions: Vec<String>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// JSON file overriding analysis settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stopword list, one word per line, replacing the built-in German list
    #[arg(long)]
    stopwords: Option<PathBuf>,
}

fn prompt_path() -> Result<PathBuf> {
    print!("Path to the document: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        bail!("no document path given");
    }
    Ok(PathBuf::from(path))
}

/// `RUST_LOG` directives when set and valid, otherwise `DEFAULT_LOG_FILTER`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Collaborators load before any document is touched; failure here is fatal.
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::v0(),
    };
    let stopwords = match &cli.stopwords {
        Some(path) => StopwordSet::from_file(path)
            .with_context(|| format!("loading stopwords {}", path.display()))?,
        None => StopwordSet::german(),
    };
    let pipeline = Pipeline::new(
        RuleTokenizer,
        stopwords.clone(),
        SmoothIdfWeighter,
        PatternRecognizer::new(stopwords),
        config,
    );

    let path = match cli.path {
        Some(path) => path,
        None => prompt_path()?,
    };

    let source = PlainTextSource;
    let (document, analysis) = match source.load(&path) {
        Ok(document) => {
            let analysis = pipeline.analyze_or_empty(&document.text);
            (Some(document), analysis)
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read document");
            (None, Default::default())
        }
    };

    let document = match document {
        Some(document) if !analysis.is_empty() => document,
        _ => {
            println!("Nothing to process in {}", path.display());
            return Ok(());
        }
    };

    let questions: Vec<String> = if cli.questions.is_empty() {
        DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
    } else {
        cli.questions
    };

    let answers: Vec<QuestionAnswer> = questions
        .into_iter()
        .map(|question| {
            let answer = pipeline.answer(&question, &analysis);
            QuestionAnswer { question, answer }
        })
        .collect();

    if cli.json {
        let report = AnalysisReport {
            source: document.source,
            version: document.version,
            generated_at: chrono::Utc::now(),
            analysis,
            answers,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\nKeywords (inverse sentence frequency):");
    for keyword in &analysis.keywords {
        println!("- {}: {:.4}", keyword.term, keyword.weight);
    }

    println!("\nEntities (ORG and PER, by frequency):");
    for freq in analysis.entity_frequencies.iter().take(ENTITIES_SHOWN) {
        println!(
            "- {} [{}]: {}",
            freq.entity.text, freq.entity.entity_type, freq.count
        );
    }

    for qa in &answers {
        println!("\nQuestion: {}", qa.question);
        println!("Answer:\n{}", qa.answer);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_default_filter() {
        let filter = log_filter(Some("docqa_core=debug".to_string()));
        assert_eq!(filter.to_string(), "docqa_core=debug");
    }

    #[test]
    fn default_filter_without_rust_log() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(
            log_filter(Some("docqa_core=loud".to_string())).to_string(),
            DEFAULT_LOG_FILTER
        );
    }
}
