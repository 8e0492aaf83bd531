//! Schema templates.
//!
//! A schema is statement text with `:Name` placeholders, e.g.
//! `DELETE VERTEX :Class :Where :Limit`. It is compiled once into literal
//! and placeholder segments; rendering walks the segments and never rescans
//! the text.
//!
//! ```text
//! DELETE FROM index::Name :Where
//! ──────┬──────────── ─┬── ┬ ──┬──
//!       │              │   │   └── Placeholder "Where" (slot 1)
//!       │              │   └── Literal " "
//!       │              └── Placeholder "Name" (slot 0)
//!       └── Literal "DELETE FROM index:"  (a ':' not followed by a word char)
//! ```

use std::sync::{Arc, OnceLock};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, satisfy},
    combinator::{map, not, recognize},
    multi::{many0, many1},
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::QueryResult;

/// A compiled template piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as is
    Literal(String),
    /// A `:Name` reference; `slot` is its position among the placeholders
    Placeholder { name: String, slot: usize },
}

/// A compiled schema template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    placeholders: Vec<String>,
}

enum Piece<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse `:Name`.
fn placeholder(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(is_word))(input)
}

/// Parse text up to the next placeholder. A colon that does not start a
/// placeholder is literal text.
fn literal(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((
        take_while1(|c: char| c != ':'),
        terminated(tag(":"), not(satisfy(is_word))),
    ))))(input)
}

fn pieces(input: &str) -> IResult<&str, Vec<Piece<'_>>> {
    many0(alt((
        map(placeholder, Piece::Placeholder),
        map(literal, Piece::Literal),
    )))(input)
}

impl Template {
    /// Compile a schema. Every string is a valid schema; text without
    /// placeholders compiles to a single literal.
    pub fn compile(source: &str) -> Self {
        let parsed = match pieces(source) {
            Ok(("", parsed)) => parsed,
            Ok((rest, mut parsed)) => {
                parsed.push(Piece::Literal(rest));
                parsed
            }
            Err(_) => vec![Piece::Literal(source)],
        };

        let mut segments = Vec::with_capacity(parsed.len());
        let mut placeholders = Vec::new();
        for piece in parsed {
            match piece {
                Piece::Literal(text) => segments.push(Segment::Literal(text.to_string())),
                Piece::Placeholder(name) => {
                    segments.push(Segment::Placeholder {
                        name: name.to_string(),
                        slot: placeholders.len(),
                    });
                    placeholders.push(name.to_string());
                }
            }
        }

        Self {
            source: source.to_string(),
            segments,
            placeholders,
        }
    }

    /// The schema text this template was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance, indexed by slot.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Fill the template.
    ///
    /// `resolve` receives each placeholder's slot and name and returns its
    /// literal, or `None` when the token contributes nothing. An absent
    /// placeholder takes the whitespace character after it along; when it
    /// ends the template it takes the one before it instead. Remaining runs
    /// of spaces are collapsed and the result is trimmed.
    pub fn render<F>(&self, mut resolve: F) -> QueryResult<String>
    where
        F: FnMut(usize, &str) -> QueryResult<Option<String>>,
    {
        let mut out = String::with_capacity(self.source.len() + 16);
        let mut eat_space = false;

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => {
                    let text = if eat_space { strip_leading_space(text) } else { text };
                    out.push_str(text);
                    eat_space = false;
                }
                Segment::Placeholder { name, slot } => {
                    eat_space = false;
                    match resolve(*slot, name)? {
                        Some(literal) => out.push_str(&literal),
                        None => match self.segments.get(i + 1) {
                            Some(Segment::Literal(next)) if next.starts_with(char::is_whitespace) => {
                                eat_space = true;
                            }
                            None => {
                                if out.ends_with(char::is_whitespace) {
                                    out.pop();
                                }
                            }
                            _ => {}
                        },
                    }
                }
            }
        }

        Ok(collapse_spaces(&out))
    }
}

fn strip_leading_space(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => text,
    }
}

/// Collapse runs of spaces to one and trim.
fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.trim().chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out
}

/// A schema compiled on first use and shared by every statement of a kind.
///
/// ```
/// use orientql::template::Schema;
///
/// static SCHEMA: Schema = Schema::new("DROP CLASS :Class");
/// assert_eq!(SCHEMA.template().placeholders(), ["Class"]);
/// ```
pub struct Schema {
    source: &'static str,
    compiled: OnceLock<Arc<Template>>,
}

impl Schema {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn template(&self) -> Arc<Template> {
        self.compiled
            .get_or_init(|| Arc::new(Template::compile(self.source)))
            .clone()
    }
}
