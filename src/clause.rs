//! WHERE clause composition.
//!
//! Filters are collected as an ordered list of clauses and rendered into the
//! single `Where` token when the statement is rendered:
//!
//! ```text
//! where_("x = ?", 1) . and_where("y = ?", 2) . or_where("z = ?", 3)
//!   => WHERE x = 1 AND y = 2 OR z = 3
//! ```

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{anychar, char},
    combinator::{map, recognize},
    multi::many0,
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult, Unrepresentable};
use crate::formatter::Formatter;
use crate::value::Value;

/// The placeholder a condition uses for its value.
pub const VALUE_PLACEHOLDER: char = '?';

/// A quoted literal with backslash escapes, e.g. `'it\'s'`.
fn quoted(input: &str, quote: char) -> IResult<&str, &str> {
    recognize(tuple((
        char(quote),
        many0(alt((
            recognize(preceded(char('\\'), anychar)),
            take_while1(|c: char| c != quote && c != '\\'),
        ))),
        char(quote),
    )))(input)
}

fn single_quoted(input: &str) -> IResult<&str, &str> {
    quoted(input, '\'')
}

fn double_quoted(input: &str) -> IResult<&str, &str> {
    quoted(input, '"')
}

/// One piece of condition text, flagged when it is a value marker.
fn piece(input: &str) -> IResult<&str, (&str, bool)> {
    alt((
        map(recognize(char(VALUE_PLACEHOLDER)), |s| (s, true)),
        map(alt((single_quoted, double_quoted)), |s| (s, false)),
        map(
            take_while1(|c: char| c != VALUE_PLACEHOLDER && c != '\'' && c != '"'),
            |s| (s, false),
        ),
        // unterminated quote
        map(recognize(anychar), |s| (s, false)),
    ))(input)
}

/// Byte offsets of the value markers outside quoted literals.
fn markers(condition: &str) -> Vec<usize> {
    let pieces = match many0(piece)(condition) {
        Ok((_, pieces)) => pieces,
        Err(_) => return Vec::new(),
    };

    let mut offset = 0;
    let mut found = Vec::new();
    for (text, is_marker) in pieces {
        if is_marker {
            found.push(offset);
        }
        offset += text.len();
    }
    found
}

/// Boolean connector placed before a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connector {
    None,
    And,
    Or,
}

impl Connector {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Connector::None => None,
            Connector::And => Some("AND"),
            Connector::Or => Some("OR"),
        }
    }
}

/// One filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub connector: Connector,
    /// Condition text; holds one `?` outside quotes when `value` is set,
    /// none otherwise
    pub condition: String,
    pub value: Option<Value>,
}

impl Clause {
    /// Build a clause, checking the condition's `?` count against the value.
    /// A `?` inside a quoted literal is text, not a marker.
    pub fn new(
        connector: Connector,
        condition: impl Into<String>,
        value: Option<Value>,
    ) -> QueryResult<Self> {
        let condition = condition.into();
        let found = markers(&condition).len();
        let expected = usize::from(value.is_some());
        if found != expected {
            return Err(QueryError::PlaceholderMismatch {
                condition,
                expected,
                found,
            });
        }
        Ok(Self {
            connector,
            condition,
            value,
        })
    }

    /// Build a clause whose condition is known to match its value.
    pub(crate) fn trusted(
        connector: Connector,
        condition: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            connector,
            condition: condition.into(),
            value,
        }
    }

    /// The condition with its value spliced in by `formatter`.
    pub fn resolve(&self, formatter: Formatter) -> Result<String, Unrepresentable> {
        match &self.value {
            Some(value) => {
                let literal = formatter
                    .format(std::slice::from_ref(value))?
                    .unwrap_or_default();
                match markers(&self.condition).first() {
                    Some(&at) => Ok(format!(
                        "{}{}{}",
                        &self.condition[..at],
                        literal,
                        &self.condition[at + VALUE_PLACEHOLDER.len_utf8()..]
                    )),
                    None => Ok(self.condition.clone()),
                }
            }
            None => Ok(self.condition.clone()),
        }
    }
}

/// Ordered filter clauses of one statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Clauses {
    clauses: Vec<Clause>,
}

impl Clauses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the opening clause. Fails when clauses already exist.
    pub fn open(&mut self, clause: Clause) -> QueryResult<()> {
        if !self.clauses.is_empty() {
            return Err(QueryError::WhereAlreadySet {
                condition: clause.condition,
            });
        }
        self.push(clause);
        Ok(())
    }

    pub fn push(&mut self, clause: Clause) {
        tracing::trace!("clause {:?} {}", clause.connector, clause.condition);
        self.clauses.push(clause);
    }

    pub fn reset(&mut self) {
        self.clauses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Render `WHERE …`, or `None` when there are no clauses. The first
    /// clause never carries its connector keyword.
    pub fn render(&self, formatter: Formatter) -> Result<Option<String>, Unrepresentable> {
        if self.clauses.is_empty() {
            return Ok(None);
        }

        let mut out = String::from("WHERE");
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                if let Some(keyword) = clause.connector.keyword() {
                    out.push(' ');
                    out.push_str(keyword);
                }
            }
            out.push(' ');
            out.push_str(&clause.resolve(formatter)?);
        }
        Ok(Some(out))
    }
}

impl<'a> IntoIterator for &'a Clauses {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
