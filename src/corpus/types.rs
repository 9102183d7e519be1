use serde::Serialize;

/// Identifier assigned by the interner to a distinct attribute value.
///
/// Ids are dense, start at 0 and are allocated in first-seen order. There
/// is no reserved "not in corpus" sentinel; a failed lookup is reported
/// before any set is built.
pub type Id = u32;

/// Index of a token in the token store.
///
/// Positions are never negative, but the signed width keeps shift
/// arithmetic safe near the corpus start: the logical elements of a
/// shifted set may dip below zero.
pub type Pos = i32;

/// The four categorical attributes carried by every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Surface form.
    Word,
    /// Fine-grained tag (BNC C5 tagset).
    C5,
    /// Lemma.
    Lemma,
    /// Coarse part-of-speech.
    Pos,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Word,
        Attribute::C5,
        Attribute::Lemma,
        Attribute::Pos,
    ];

    /// Resolve a query-surface attribute name.
    pub fn from_name(name: &str) -> Option<Attribute> {
        match name {
            "word" => Some(Attribute::Word),
            "c5" => Some(Attribute::C5),
            "lemma" => Some(Attribute::Lemma),
            "pos" => Some(Attribute::Pos),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Word => "word",
            Attribute::C5 => "c5",
            Attribute::Lemma => "lemma",
            Attribute::Pos => "pos",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One corpus token: four interned attribute values. Immutable after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub word: Id,
    pub c5: Id,
    pub lemma: Id,
    pub pos: Id,
}

impl Token {
    pub fn get(&self, attr: Attribute) -> Id {
        match attr {
            Attribute::Word => self.word,
            Attribute::C5 => self.c5,
            Attribute::Lemma => self.lemma,
            Attribute::Pos => self.pos,
        }
    }
}

/// A query match: the starting token position plus the window length,
/// with the 0-based index of the sentence containing the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub sentence: usize,
    pub pos: Pos,
    pub len: usize,
}

/// Summary counters for a loaded corpus.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub tokens: usize,
    pub sentences: usize,
    pub distinct_words: usize,
    pub distinct_c5: usize,
    pub distinct_lemmas: usize,
    pub distinct_pos: usize,
    pub interned_strings: usize,
}
