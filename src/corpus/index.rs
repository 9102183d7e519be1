use crate::corpus::types::{Attribute, Id, Pos, Token};
use rayon::prelude::*;

/// Four permutations of `[0..N)`, one per attribute, each stable-sorted by
/// that attribute's id. Stability makes every equal-value run ascend in
/// token order, which the set algebra depends on.
#[derive(Debug)]
pub(crate) struct AttributeIndexes {
    word: Vec<Pos>,
    c5: Vec<Pos>,
    lemma: Vec<Pos>,
    pos: Vec<Pos>,
}

impl AttributeIndexes {
    pub(crate) fn build(tokens: &[Token]) -> Self {
        Self {
            word: build_one(tokens, Attribute::Word),
            c5: build_one(tokens, Attribute::C5),
            lemma: build_one(tokens, Attribute::Lemma),
            pos: build_one(tokens, Attribute::Pos),
        }
    }

    pub(crate) fn for_attribute(&self, attr: Attribute) -> &[Pos] {
        match attr {
            Attribute::Word => &self.word,
            Attribute::C5 => &self.c5,
            Attribute::Lemma => &self.lemma,
            Attribute::Pos => &self.pos,
        }
    }

    /// The maximal contiguous run of index entries whose tokens carry
    /// `value` for `attr`. Two binary searches; the result borrows the
    /// index, no copy. Unknown values yield an empty slice.
    pub(crate) fn equal_range<'a>(
        &'a self,
        tokens: &[Token],
        attr: Attribute,
        value: Id,
    ) -> &'a [Pos] {
        let index = self.for_attribute(attr);
        let lo = index.partition_point(|&p| tokens[p as usize].get(attr) < value);
        let hi = lo + index[lo..].partition_point(|&p| tokens[p as usize].get(attr) == value);
        &index[lo..hi]
    }
}

fn build_one(tokens: &[Token], attr: Attribute) -> Vec<Pos> {
    let mut index: Vec<Pos> = (0..tokens.len() as Pos).collect();
    // par_sort_by_key is a stable sort, matching the ordering contract.
    index.par_sort_by_key(|&p| tokens[p as usize].get(attr));
    index
}
