use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use concord::corpus::{Corpus, CorpusStats};
use concord::query::{EngineConfig, QueryEngine};
use concord::{output, shell};

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Indexed positional pattern search over annotated corpora")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus file (opens the interactive shell when no subcommand is given)
    corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive query shell
    Search {
        /// Corpus file
        corpus: PathBuf,

        /// Drop matches whose window crosses a sentence boundary
        #[arg(long)]
        sentence_bounded: bool,
    },
    /// Run a single query and print its matches
    Query {
        /// Corpus file
        corpus: PathBuf,

        /// Query text, e.g. '[lemma="house" pos!="VERB"]'
        query: String,

        /// Maximum number of matches to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Drop matches whose window crosses a sentence boundary
        #[arg(long)]
        sentence_bounded: bool,
    },
    /// Show corpus statistics
    Stats {
        /// Corpus file
        corpus: PathBuf,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search {
            corpus,
            sentence_bounded,
        }) => {
            let corpus = load(&corpus)?;
            let config = EngineConfig {
                sentence_bounded,
                ..EngineConfig::default()
            };
            shell::run(&corpus, config)?;
        }
        Some(Commands::Query {
            corpus,
            query,
            limit,
            no_color,
            sentence_bounded,
        }) => {
            let corpus = load(&corpus)?;
            let config = EngineConfig {
                sentence_bounded,
                ..EngineConfig::default()
            };
            let engine = QueryEngine::with_config(&corpus, config);
            let matches = engine.find_strict(&query)?;
            output::print_matches(&corpus, &matches, limit, !no_color)?;
        }
        Some(Commands::Stats { corpus, json }) => {
            let corpus = load(&corpus)?;
            let stats = corpus.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        None => match cli.corpus {
            Some(path) => {
                let corpus = load(&path)?;
                println!("Corpus loaded from {}", path.display());
                shell::run(&corpus, EngineConfig::default())?;
            }
            None => bail!("no corpus file given; see --help"),
        },
    }

    Ok(())
}

fn load(path: &Path) -> Result<Corpus> {
    Corpus::load(path).with_context(|| format!("could not load corpus {}", path.display()))
}

fn print_stats(stats: &CorpusStats) {
    println!("Corpus Statistics");
    println!("=================");
    println!();
    println!("Tokens:           {}", stats.tokens);
    println!("Sentences:        {}", stats.sentences);
    println!("Distinct words:   {}", stats.distinct_words);
    println!("Distinct C5 tags: {}", stats.distinct_c5);
    println!("Distinct lemmas:  {}", stats.distinct_lemmas);
    println!("Distinct POS:     {}", stats.distinct_pos);
    println!("Interned strings: {}", stats.interned_strings);
}
