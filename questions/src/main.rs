use anyhow::{Context, Result};
use clap::Parser;
use questions_core::{Pipeline, RankConfig, Tokenizer, TokenizerConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Answer a question from a directory of text files using TF-IDF", long_about = None)]
struct Args {
    /// Directory of plain-text documents
    corpus: PathBuf,
    /// Number of best matching files to search for sentences
    #[arg(long, default_value_t = 1)]
    files: usize,
    /// Number of sentences to print
    #[arg(long, default_value_t = 1)]
    sentences: usize,
    /// Apply English stemming to documents and query
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Question to answer; read from stdin when omitted
    #[arg(long)]
    query: Option<String>,
    /// Print the full answer with scores as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    tracing::info!(corpus = %args.corpus.display(), files = args.files, sentences = args.sentences, stem = args.stem, "starting");
    let config = RankConfig { file_matches: args.files, sentence_matches: args.sentences };
    let tokenizer = Tokenizer::new(TokenizerConfig { stem: args.stem });
    let pipeline = Pipeline::from_dir(&args.corpus, config, tokenizer)?;

    let question = match args.query {
        Some(q) => q,
        None => read_query()?,
    };

    let answer = pipeline.answer(&question).context("failed to answer query")?;
    tracing::debug!(took_s = answer.took_s, tokens = ?answer.tokens, "answer ready");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &answer)?;
        writeln!(out)?;
    } else {
        for s in &answer.sentences {
            writeln!(out, "{}", s.sentence)?;
        }
    }
    Ok(())
}

fn read_query() -> Result<String> {
    eprint!("Query: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("failed to read query from stdin")?;
    Ok(line.trim().to_string())
}
