//! Interactive query shell.

use crate::corpus::Corpus;
use crate::output;
use crate::query::{EngineConfig, QueryEngine};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Matches displayed per query.
const DISPLAY_LIMIT: usize = 10;

/// Read queries line by line; an empty line (or EOF) exits. Per-query
/// errors are printed and the loop continues — the corpus stays valid.
pub fn run(corpus: &Corpus, config: EngineConfig) -> Result<()> {
    let engine = QueryEngine::with_config(corpus, config);
    let stdin = io::stdin();
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    loop {
        print!("\nEnter a query (or leave empty to exit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            println!("Exiting.");
            break;
        }

        // Lenient value lookup: a typo in a value prints "no matches"
        // rather than an error.
        match engine.find(text) {
            Ok(matches) if matches.is_empty() => {
                print_red(&mut stderr, "No matches found.")?;
            }
            Ok(matches) => {
                output::print_matches(corpus, &matches, DISPLAY_LIMIT, true)?;
            }
            Err(e) => {
                print_red(&mut stderr, &format!("Error: {e}"))?;
            }
        }
    }

    Ok(())
}

fn print_red(stream: &mut StandardStream, msg: &str) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(stream, "{msg}")?;
    stream.reset()
}
