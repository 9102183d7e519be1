use crate::corpus::index::AttributeIndexes;
use crate::corpus::interner::Interner;
use crate::corpus::types::{Pos, Token};
use crate::corpus::Corpus;
use crate::error::{ConcordError, Result};
use std::io::BufRead;

/// Parse a corpus from tab- or whitespace-separated rows of
/// `word c5 lemma pos`.
///
/// The first line is a column header and is skipped. Lines starting with
/// `#` are comments. Blank lines terminate sentences; the position of the
/// first token after each boundary is recorded as a sentence start. A row
/// with fewer than four fields aborts the load; fields beyond the fourth
/// are ignored.
pub(crate) fn read_corpus<R: BufRead>(reader: R) -> Result<Corpus> {
    let mut interner = Interner::new();
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentence_starts: Vec<Pos> = Vec::new();
    let mut in_sentence = false;

    let mut lines = reader.lines();
    if let Some(header) = lines.next() {
        header?;
    }

    for line in lines {
        let line = line?;
        let row = line.trim();
        if row.is_empty() {
            in_sentence = false;
            continue;
        }
        if row.starts_with('#') {
            continue;
        }

        let mut fields = row.split_whitespace();
        let (Some(word), Some(c5), Some(lemma), Some(pos)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ConcordError::CorpusIntegrity(format!(
                "expected 4 fields per row, got {row:?}"
            )));
        };

        let token = Token {
            word: interner.intern(word),
            c5: interner.intern(c5),
            lemma: interner.intern(lemma),
            pos: interner.intern(pos),
        };

        if !in_sentence {
            in_sentence = true;
            sentence_starts.push(tokens.len() as Pos);
        }
        tokens.push(token);
    }

    let indexes = AttributeIndexes::build(&tokens);
    Ok(Corpus {
        tokens,
        sentence_starts,
        interner,
        indexes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str) -> Result<Corpus> {
        read_corpus(Cursor::new(text))
    }

    #[test]
    fn test_header_is_skipped() {
        let corpus = load("word\tc5\tlemma\tpos\nthe\tAT0\tthe\tART\n").unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.lookup_value("the"), Some(0));
        // The header fields were never interned.
        assert_eq!(corpus.lookup_value("c5"), None);
    }

    #[test]
    fn test_comments_are_skipped() {
        let corpus = load("header\n# a comment\nthe\tAT0\tthe\tART\n").unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_blank_lines_split_sentences() {
        let corpus = load(
            "header\n\
             the\tAT0\tthe\tART\n\
             cat\tNN1\tcat\tSUBST\n\
             \n\
             a\tAT0\ta\tART\n\
             dog\tNN1\tdog\tSUBST\n",
        )
        .unwrap();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.sentence_count(), 2);
        assert_eq!(corpus.sentence_span(0), (0, 2));
        assert_eq!(corpus.sentence_span(1), (2, 4));
    }

    #[test]
    fn test_consecutive_blank_lines_collapse() {
        let corpus = load("header\nthe\tAT0\tthe\tART\n\n\n\ncat\tNN1\tcat\tSUBST\n").unwrap();
        assert_eq!(corpus.sentence_count(), 2);
    }

    #[test]
    fn test_short_row_is_an_integrity_error() {
        let err = load("header\nthe\tAT0\n").unwrap_err();
        assert!(matches!(err, ConcordError::CorpusIntegrity(_)));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let corpus = load("header\nthe\tAT0\tthe\tART\textra\tfields\n").unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.lookup_value("extra"), None);
    }

    #[test]
    fn test_crlf_rows_parse() {
        let corpus = load("header\r\nthe\tAT0\tthe\tART\r\n").unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = load("header\n").unwrap();
        assert_eq!(corpus.len(), 0);
        assert_eq!(corpus.sentence_count(), 0);
    }

    #[test]
    fn test_values_shared_across_attributes_intern_once() {
        // Surface form and lemma "there" map to the same id.
        let corpus = load("header\nthere\tEX0\tthere\tPRON\n").unwrap();
        let token = corpus.token(0);
        assert_eq!(token.word, token.lemma);
    }
}
