use crate::corpus::{Corpus, Match, Pos};
use crate::error::Result;
use crate::query::algebra::{self, GALLOP_FACTOR};
use crate::query::parser::parse_query;
use crate::query::planner::{self, Query};
use crate::query::set::{MatchSet, Set};
use serde::{Deserialize, Serialize};

/// Tunables for query evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Size ratio at which the set algebra switches from linear merges to
    /// galloping binary searches.
    pub gallop_factor: usize,
    /// Drop matches whose window crosses a sentence boundary. Off by
    /// default: the indexed planner itself places no sentence constraint.
    pub sentence_bounded: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gallop_factor: GALLOP_FACTOR,
            sentence_bounded: false,
        }
    }
}

/// Evaluates compiled queries against a borrowed corpus.
pub struct QueryEngine<'c> {
    corpus: &'c Corpus,
    config: EngineConfig,
}

impl<'c> QueryEngine<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self::with_config(corpus, EngineConfig::default())
    }

    pub fn with_config(corpus: &'c Corpus, config: EngineConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a compiled query down to a single match set. The result
    /// carries no unresolved complement.
    pub fn evaluate(&self, query: &Query) -> MatchSet<'c> {
        planner::query_set(self.corpus, query, self.config.gallop_factor)
    }

    /// Materialize a match set into match records for windows of `len`
    /// clauses. Positions come out ascending, so matches are sorted by
    /// `(sentence, pos)`.
    pub fn enumerate(&self, set: &MatchSet<'_>, len: usize) -> Vec<Match> {
        let resolved;
        let set = if set.complement {
            let universe =
                MatchSet::new(Set::Dense(planner::window_universe(self.corpus.len(), len)));
            resolved = algebra::intersect_match(&universe, set, self.config.gallop_factor);
            &resolved
        } else {
            set
        };

        let mut matches = Vec::with_capacity(set.set.len());
        for p in set.set.iter() {
            let sentence = self.corpus.sentence_of(p);
            if self.config.sentence_bounded && len > 1 {
                let last = p + len as Pos - 1;
                if self.corpus.sentence_of(last) != sentence {
                    continue;
                }
            }
            matches.push(Match {
                sentence,
                pos: p,
                len,
            });
        }
        matches
    }

    /// Evaluate and enumerate in one step.
    pub fn matches(&self, query: &Query) -> Vec<Match> {
        let set = self.evaluate(query);
        self.enumerate(&set, query.len())
    }

    /// Parse, compile leniently and evaluate query text. Value strings
    /// absent from the corpus yield zero matches rather than an error;
    /// malformed queries still fail.
    pub fn find(&self, text: &str) -> Result<Vec<Match>> {
        let parsed = parse_query(text)?;
        let query = planner::compile_lenient(&parsed, self.corpus)?;
        Ok(self.matches(&query))
    }

    /// Parse, compile strictly and evaluate query text. Value strings
    /// absent from the corpus are an error.
    pub fn find_strict(&self, text: &str) -> Result<Vec<Match>> {
        let parsed = parse_query(text)?;
        let query = planner::compile(&parsed, self.corpus)?;
        Ok(self.matches(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConcordError;
    use std::io::Cursor;

    const TEXT: &str = "\
word\tc5\tlemma\tpos
the\tAT0\tthe\tART
cat\tNN1\tcat\tSUBST
sat\tVVD\tsit\tVERB

the\tAT0\tthe\tART
dog\tNN1\tdog\tSUBST
ran\tVVD\trun\tVERB
";

    fn corpus() -> Corpus {
        Corpus::from_reader(Cursor::new(TEXT)).unwrap()
    }

    fn positions(matches: &[Match]) -> Vec<Pos> {
        matches.iter().map(|m| m.pos).collect()
    }

    #[test]
    fn test_single_attribute_query() {
        let corpus = corpus();
        let engine = QueryEngine::new(&corpus);
        let matches = engine.find(r#"[word="the"]"#).unwrap();
        assert_eq!(positions(&matches), vec![0, 3]);
        assert_eq!(matches[0].sentence, 0);
        assert_eq!(matches[1].sentence, 1);
        assert!(matches.iter().all(|m| m.len == 1));
    }

    #[test]
    fn test_window_never_overruns_the_corpus() {
        let corpus = corpus();
        let engine = QueryEngine::new(&corpus);
        // "ran" is the last token; a two-token window starting there
        // would overrun.
        let matches = engine.find(r#"[word="ran"] []"#).unwrap();
        assert!(matches.is_empty());
        let matches = engine.find(r#"[word="dog"] []"#).unwrap();
        assert_eq!(positions(&matches), vec![4]);
    }

    #[test]
    fn test_windows_cross_sentences_by_default() {
        let corpus = corpus();
        let engine = QueryEngine::new(&corpus);
        let matches = engine.find(r#"[word="sat"] [word="the"]"#).unwrap();
        assert_eq!(positions(&matches), vec![2]);
    }

    #[test]
    fn test_sentence_bounded_drops_crossing_windows() {
        let corpus = corpus();
        let engine = QueryEngine::with_config(
            &corpus,
            EngineConfig {
                sentence_bounded: true,
                ..EngineConfig::default()
            },
        );
        let matches = engine.find(r#"[word="sat"] [word="the"]"#).unwrap();
        assert!(matches.is_empty());
        // Windows inside one sentence survive.
        let matches = engine.find(r#"[word="the"] [word="dog"]"#).unwrap();
        assert_eq!(positions(&matches), vec![3]);
    }

    #[test]
    fn test_lenient_unknown_value_semantics() {
        let corpus = corpus();
        let engine = QueryEngine::new(&corpus);
        // Equality against a missing value: no matches.
        assert!(engine.find(r#"[word="zebra"]"#).unwrap().is_empty());
        // Inequality against a missing value: every position.
        let matches = engine.find(r#"[word!="zebra"]"#).unwrap();
        assert_eq!(matches.len(), corpus.len());
    }

    #[test]
    fn test_strict_unknown_value_is_an_error() {
        let corpus = corpus();
        let engine = QueryEngine::new(&corpus);
        let err = engine.find_strict(r#"[word="zebra"]"#).unwrap_err();
        assert!(matches!(err, ConcordError::UnknownValue(_)));
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = EngineConfig {
            gallop_factor: 4,
            sentence_bounded: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gallop_factor, 4);
        assert!(back.sentence_bounded);
    }
}
