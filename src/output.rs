//! Match rendering: full sentence context with the matched window
//! highlighted.

use crate::corpus::{Corpus, Match, Pos};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print up to `limit` matches, each with its whole sentence and the
/// matched window in green.
pub fn print_matches(
    corpus: &Corpus,
    matches: &[Match],
    limit: usize,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let shown = matches.len().min(limit);
    writeln!(
        stdout,
        "Found {} matches. Showing first {}",
        matches.len(),
        shown
    )?;

    for (i, m) in matches.iter().take(limit).enumerate() {
        print_match(&mut stdout, corpus, m, i + 1)?;
    }

    Ok(())
}

fn print_match(
    stdout: &mut StandardStream,
    corpus: &Corpus,
    m: &Match,
    ordinal: usize,
) -> io::Result<()> {
    let (start, end) = corpus.sentence_span(m.sentence);

    stdout.set_color(ColorSpec::new().set_bold(true).set_underline(true))?;
    write!(stdout, "Match {}", ordinal)?;
    stdout.reset()?;
    write!(stdout, " in sentence {}: ", m.sentence + 1)?;

    for p in start..end {
        let in_window = p >= m.pos && p < m.pos + m.len as Pos;
        if in_window {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(stdout, "{}", corpus.word(p))?;
            stdout.reset()?;
            write!(stdout, " ")?;
        } else {
            write!(stdout, "{} ", corpus.word(p))?;
        }
    }
    writeln!(stdout)?;

    Ok(())
}
