//! Command-line front end for freqsum
//!
//! Reads a document from a file or stdin, prints the summary and the
//! character counts of the input and the summary.

use clap::Parser;
use freqsum::{Result, StopwordSource, SummarizeError, Summarizer, SummarizerConfig};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status for input that cannot be summarized
const EXIT_NOTHING_TO_SUMMARIZE: u8 = 2;

/// Summarize text by picking its highest-scoring sentences
#[derive(Parser, Debug)]
#[command(name = "freqsum", version, about)]
#[command(long_about = "Scores every sentence by the frequency of its words and \
prints the top-ranked sentences, highest score first.

EXAMPLES:
    freqsum article.txt                 # 3 sentences (config default)
    freqsum -n 5 article.txt            # 5 sentences
    cat article.txt | freqsum --json    # read stdin, print JSON
    freqsum --stopwords extended a.txt  # larger stopword list")]
struct Cli {
    /// Input file; reads stdin when omitted or '-'
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of sentences, clamped to [1, max_sentences]
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stopword set: classic, extended, none or file:PATH
    #[arg(long, value_name = "SOURCE")]
    stopwords: Option<StopwordSource>,

    /// Print the summary, scores and counts as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "summarization failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => SummarizerConfig::from_json_file(path)?,
        None => SummarizerConfig::default(),
    };
    if let Some(source) = &cli.stopwords {
        config.stopwords = source.clone();
    }

    // Resources load before any input is read; a failure here is fatal
    let summarizer = freqsum::init(&config)?;

    let text = read_input(cli.input.as_deref())?;
    if text.trim().is_empty() {
        eprintln!("Please enter some text to summarize.");
        return Ok(ExitCode::from(EXIT_NOTHING_TO_SUMMARIZE));
    }

    let num_sentences = config.clamp_sentences(cli.sentences.unwrap_or(config.num_sentences));
    tracing::debug!(num_sentences, chars = text.len(), "summarizing input");

    match render(summarizer, &text, num_sentences, cli.json) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_user_facing() => {
            eprintln!("warning: {err}");
            Ok(ExitCode::from(EXIT_NOTHING_TO_SUMMARIZE))
        }
        Err(err) => Err(err),
    }
}

fn render(summarizer: &Summarizer, text: &str, num_sentences: usize, json: bool) -> Result<String> {
    let summary = summarizer.summarize_detailed(text, num_sentences)?;

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    Ok(format!(
        "Summary:\n{}\n\nOriginal text length: {} characters\nSummary length: {} characters",
        summary.text, summary.original_chars, summary.summary_chars
    ))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            SummarizeError::Io(std::io::Error::new(
                e.kind(),
                format!("cannot read {}: {e}", path.display()),
            ))
        }),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
