//! Interactive question answering over a directory of text files.
//!
//! Loads the corpus once, then answers one query per line until EOF.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use answer_core::answer::{AnswerConfig, AnswerEngine};
use answer_core::corpus::load_directory;
use answer_core::text::Tokenizer;

#[derive(Debug, Parser)]
#[command(name = "ask", about = "Answer questions over a directory of text files")]
struct Args {
    /// Directory of plain-text corpus files
    corpus: PathBuf,

    /// How many ranked files feed sentence extraction
    #[arg(long, default_value_t = 1)]
    file_matches: usize,

    /// How many ranked sentences to print per query
    #[arg(long, default_value_t = 1)]
    sentence_matches: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let texts = match load_directory(&args.corpus) {
        Ok(texts) => texts,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = AnswerConfig {
        file_matches: args.file_matches,
        sentence_matches: args.sentence_matches,
        ..AnswerConfig::default()
    };
    let engine = AnswerEngine::new(Tokenizer::default(), config);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Query: ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or a dead terminal
            Ok(_) => {}
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }

        match engine.answer(&texts, question) {
            Ok(result) => {
                for answer in &result.answers {
                    println!("{answer}");
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    ExitCode::SUCCESS
}
