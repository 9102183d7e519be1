//! # Concord - indexed positional pattern search over annotated corpora
//!
//! Concord answers positional pattern queries such as
//! `[lemma="house" pos!="VERB"]` or `[word="the"] [] []` over a corpus of
//! tokens annotated with surface form, C5 tag, lemma and part-of-speech.
//! A match is a starting position whose window satisfies every clause at
//! its offset.
//!
//! ## Architecture
//!
//! - [`corpus`] - Corpus loading, string interning, attribute indexes
//! - [`query`] - Query parsing, compilation, set algebra, evaluation
//! - [`shell`] - Interactive query loop
//! - [`output`] - Match rendering with ANSI highlighting
//!
//! ## Quick Start
//!
//! ```ignore
//! use concord::corpus::Corpus;
//! use concord::query::QueryEngine;
//! use std::path::Path;
//!
//! let corpus = Corpus::load(Path::new("bnc-05M.csv")).unwrap();
//! let engine = QueryEngine::new(&corpus);
//!
//! for m in engine.find(r#"[pos="ART"] [lemma="vaccine"]"#).unwrap() {
//!     println!("sentence {} position {}", m.sentence, m.pos);
//! }
//! ```
//!
//! All heavy lifting happens at load time: four stable-sorted attribute
//! indexes let every literal resolve to a contiguous index range in two
//! binary searches, and a size-aware intersection plan collapses the
//! per-clause sets without touching the token store again.

pub mod corpus;
pub mod error;
pub mod output;
pub mod query;
pub mod shell;

pub use corpus::Corpus;
pub use error::{ConcordError, Result};
pub use query::{parse_query, EngineConfig, QueryEngine};
