use crate::corpus::Attribute;
use crate::error::{ConcordError, Result};

/// A literal as written in the query text, value still a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    pub attr: Attribute,
    pub value: String,
    pub is_equality: bool,
}

/// A clause: the conjunction of literals constraining one window position.
pub type ParsedClause = Vec<ParsedLiteral>;

/// Parsed query, prior to value resolution against a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub clauses: Vec<ParsedClause>,
}

/// Parse query text of the form `[attr="v" attr!="v"] [...]`.
///
/// Whitespace between clauses and literals is insignificant; values run to
/// the closing quote and may contain spaces. Errors: malformed brackets,
/// quotes or operators (`Syntax`), attribute names outside the four known
/// ones (`UnknownAttribute`), and queries with no clauses (`EmptyQuery`).
pub fn parse_query(input: &str) -> Result<ParsedQuery> {
    let mut parser = QueryParser::new(input);
    parser.parse()
}

struct QueryParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> QueryParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(&mut self) -> Result<ParsedQuery> {
        let mut clauses = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_eof() {
                break;
            }
            if !self.consume_char('[') {
                return Err(self.syntax("expected '[' to open a clause"));
            }
            clauses.push(self.parse_clause()?);
        }

        if clauses.is_empty() {
            return Err(ConcordError::EmptyQuery);
        }
        Ok(ParsedQuery { clauses })
    }

    fn parse_clause(&mut self) -> Result<ParsedClause> {
        let mut literals = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                Some(']') => {
                    self.advance();
                    return Ok(literals);
                }
                Some('[') => return Err(self.syntax("nested '[' inside a clause")),
                None => return Err(self.syntax("missing ']' to close a clause")),
                Some(_) => literals.push(self.parse_literal()?),
            }
        }
    }

    fn parse_literal(&mut self) -> Result<ParsedLiteral> {
        let name = self.parse_ident()?;
        let attr = Attribute::from_name(&name)
            .ok_or_else(|| ConcordError::UnknownAttribute(name.clone()))?;

        let is_equality = if self.consume_str("!=") {
            false
        } else if self.consume_char('=') {
            true
        } else {
            return Err(self.syntax("expected '=' or '!=' after attribute name"));
        };

        let value = self.parse_quoted()?;
        Ok(ParsedLiteral {
            attr,
            value,
            is_equality,
        })
    }

    fn parse_ident(&mut self) -> Result<String> {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(self.syntax("expected an attribute name"));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_quoted(&mut self) -> Result<String> {
        if !self.consume_char('"') {
            return Err(self.syntax("attribute value must be quoted"));
        }
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch == '"' {
                let value = self.input[start..self.pos].to_string();
                self.advance();
                return Ok(value);
            }
            self.advance();
        }
        Err(self.syntax("value is missing its closing quote"))
    }

    fn syntax(&self, msg: &str) -> ConcordError {
        ConcordError::Syntax(format!("{msg} (at byte {})", self.pos))
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map(|c| c.is_whitespace()).unwrap_or(false) {
            self.advance();
        }
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume_str(&mut self, expected: &str) -> bool {
        if self.input[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
        }
    }
}
