//! Query compilation and the cost-aware intersection plan.
//!
//! A literal of clause `k` becomes an indexed set shifted by `k`, so every
//! clause constrains the same *starting* position and a multi-clause query
//! collapses into one intersection.

use crate::corpus::{Attribute, Corpus, Id, Pos};
use crate::error::{ConcordError, Result};
use crate::query::algebra;
use crate::query::parser::ParsedQuery;
use crate::query::set::{DenseSet, IndexedSet, MatchSet, Set};

/// A compiled literal. `value` is `None` only under lenient compilation,
/// for a string absent from the corpus: such a literal evaluates to the
/// empty indexed run (so an equality never matches and an inequality
/// matches everywhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub attr: Attribute,
    pub value: Option<Id>,
    pub is_equality: bool,
}

pub type Clause = Vec<Literal>;

/// A compiled query: value strings resolved to interner ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Window length of a match.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Strict compilation: any value string absent from the corpus is an
/// `UnknownValue` error.
pub fn compile(parsed: &ParsedQuery, corpus: &Corpus) -> Result<Query> {
    compile_inner(parsed, corpus, true)
}

/// Lenient compilation: absent value strings compile to literals that
/// evaluate against the empty set, so typos yield "no matches" instead of
/// an error.
pub fn compile_lenient(parsed: &ParsedQuery, corpus: &Corpus) -> Result<Query> {
    compile_inner(parsed, corpus, false)
}

fn compile_inner(parsed: &ParsedQuery, corpus: &Corpus, strict: bool) -> Result<Query> {
    if parsed.clauses.is_empty() {
        return Err(ConcordError::EmptyQuery);
    }

    let mut clauses = Vec::with_capacity(parsed.clauses.len());
    for parsed_clause in &parsed.clauses {
        let mut clause = Vec::with_capacity(parsed_clause.len());
        for literal in parsed_clause {
            let value = match corpus.lookup_value(&literal.value) {
                Some(id) => Some(id),
                None if strict => {
                    return Err(ConcordError::UnknownValue(literal.value.clone()));
                }
                None => None,
            };
            clause.push(Literal {
                attr: literal.attr,
                value,
                is_equality: literal.is_equality,
            });
        }
        clauses.push(clause);
    }
    Ok(Query { clauses })
}

/// The set of starting positions satisfying one literal at clause offset
/// `shift`: a borrowed equal-value run, complemented for inequalities.
pub(crate) fn literal_set<'c>(corpus: &'c Corpus, literal: &Literal, shift: Pos) -> MatchSet<'c> {
    let elems: &[Pos] = match literal.value {
        Some(id) => corpus.equal_range(literal.attr, id),
        None => &[],
    };
    MatchSet {
        set: Set::Indexed(IndexedSet { elems, shift }),
        complement: !literal.is_equality,
    }
}

/// The set of starting positions satisfying a whole clause. The empty
/// clause constrains nothing and yields the universe.
pub(crate) fn clause_set<'c>(
    corpus: &'c Corpus,
    clause: &Clause,
    shift: Pos,
    factor: usize,
) -> MatchSet<'c> {
    if clause.is_empty() {
        return MatchSet::new(Set::Dense(DenseSet::universe(corpus.len())));
    }
    let sets = clause
        .iter()
        .map(|literal| literal_set(corpus, literal, shift))
        .collect();
    intersect_with_plan(sets, factor)
}

/// Valid starting positions for a window of `len` clauses: every window
/// position must exist in the token store.
pub(crate) fn window_universe(n: usize, len: usize) -> DenseSet {
    DenseSet {
        first: 0,
        last: n as Pos - len.max(1) as Pos,
    }
}

/// The set of starting positions matching the whole query.
pub(crate) fn query_set<'c>(corpus: &'c Corpus, query: &Query, factor: usize) -> MatchSet<'c> {
    if query.clauses.is_empty() {
        return MatchSet::new(Set::Dense(DenseSet::EMPTY));
    }

    let len = query.clauses.len();
    let mut sets = Vec::with_capacity(len + 1);
    for (k, clause) in query.clauses.iter().enumerate() {
        sets.push(clause_set(corpus, clause, k as Pos, factor));
    }
    sets.push(MatchSet::new(Set::Dense(window_universe(corpus.len(), len))));

    let mut set = intersect_with_plan(sets, factor);
    if set.complement {
        // The window-universe operand resolves complements during the
        // fold; this handles any residue all the same.
        let universe = MatchSet::new(Set::Dense(window_universe(corpus.len(), len)));
        set = algebra::intersect_match(&universe, &set, factor);
    }
    set
}

/// Fold a bag of match sets into one, cost-aware:
///
/// 1. all dense operands collapse pairwise into at most one residual;
/// 2. the rest are sorted ascending by logical size and folded from the
///    smallest, keeping the running result small;
/// 3. the dense residual, if any, is intersected last.
pub fn intersect_with_plan<'c>(sets: Vec<MatchSet<'c>>, factor: usize) -> MatchSet<'c> {
    let mut dense: Option<MatchSet<'c>> = None;
    let mut rest: Vec<MatchSet<'c>> = Vec::new();

    for set in sets {
        if matches!(set.set, Set::Dense(_)) {
            dense = Some(match dense {
                Some(folded) => algebra::intersect_match(&folded, &set, factor),
                None => set,
            });
        } else {
            rest.push(set);
        }
    }

    rest.sort_by_key(|s| s.set.len());

    let mut rest = rest.into_iter();
    let Some(mut acc) = rest.next() else {
        return dense.unwrap_or_else(|| MatchSet::new(Set::Dense(DenseSet::EMPTY)));
    };
    for set in rest {
        acc = algebra::intersect_match(&acc, &set, factor);
    }
    if let Some(dense) = dense {
        acc = algebra::intersect_match(&acc, &dense, factor);
    }
    acc
}
