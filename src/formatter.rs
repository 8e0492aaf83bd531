//! Token formatters.
//!
//! A formatter turns the ordered values of one token into the literal text
//! spliced into the schema, or into nothing at all. "Nothing" (`Ok(None)`)
//! is a real outcome: the render loop then removes the placeholder and
//! the whitespace next to it, so optional clauses leave no keyword behind.
//!
//! Formatters are bound to token names through a [`FormatterMap`]; they never
//! inspect a value to decide which formatter applies.

use std::collections::BTreeMap;

use crate::command::WHERE;
use crate::error::Unrepresentable;
use crate::value::Value;

/// One rendering rule per value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// `a, b, c` verbatim; identifiers and class names
    Regular,
    /// Regular wrapped in double quotes: `"a"`; an empty token gives `""`
    EmbeddedRegular,
    /// First value as a validated record id: `#12:0`
    EmbeddedRid,
    /// `[A,B]`, absent when empty
    ClassList,
    /// `LIMIT n`
    Limit,
    /// `SKIP n`
    Skip,
    /// Escaped literals: `'abc', 12, #1:2`
    Quoted,
    /// One target bare, several as `[a, b]`
    Target,
    /// Keyword followed by a Regular join: `ORDER BY name ASC`
    Keyword(&'static str),
    /// `BETWEEN l AND r`
    Between,
    /// `field = 'value', other = 1`
    Updates,
    /// `field = #12:0`
    RidUpdates,
    /// `field = 'key', #12:0`
    MapUpdates,
}

impl Formatter {
    /// Render `values`, or return `None` when the token contributes nothing.
    /// Every formatter but EmbeddedRegular treats an empty token as absent.
    pub fn format(&self, values: &[Value]) -> Result<Option<String>, Unrepresentable> {
        match self {
            Formatter::EmbeddedRegular => Ok(Some(format!("\"{}\"", regular(values)?))),
            _ if values.is_empty() => Ok(None),
            Formatter::Regular => regular(values).map(Some),
            Formatter::EmbeddedRid => Ok(Some(values[0].as_rid()?.to_string())),
            Formatter::ClassList => {
                let classes = plain_all(values)?;
                Ok(Some(format!("[{}]", classes.join(","))))
            }
            Formatter::Limit => Ok(Some(format!("LIMIT {}", values[0].as_count()?))),
            Formatter::Skip => Ok(Some(format!("SKIP {}", values[0].as_count()?))),
            Formatter::Quoted => {
                let literals = values
                    .iter()
                    .map(Value::to_literal)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(literals.join(", ")))
            }
            Formatter::Target => {
                let targets = regular(values)?;
                if values.len() > 1 {
                    Ok(Some(format!("[{}]", targets)))
                } else {
                    Ok(Some(targets))
                }
            }
            Formatter::Keyword(keyword) => Ok(Some(format!("{} {}", keyword, regular(values)?))),
            Formatter::Between => match values {
                [left, right] => Ok(Some(format!(
                    "BETWEEN {} AND {}",
                    left.to_literal()?,
                    right.to_literal()?
                ))),
                _ => Err(Unrepresentable::new(format!(
                    "BETWEEN takes exactly two bounds, got {}",
                    values.len()
                ))),
            },
            Formatter::Updates => assignments(values, |field, value| {
                Ok(format!("{} = {}", field, value.to_literal()?))
            }),
            Formatter::RidUpdates => assignments(values, |field, value| {
                Ok(format!("{} = {}", field, value.as_rid()?))
            }),
            Formatter::MapUpdates => assignments(values, |field, entry| match entry {
                Value::Pair(key, rid) => Ok(format!(
                    "{} = {}, {}",
                    field,
                    Value::from(key.as_str()).to_literal()?,
                    rid.as_rid()?
                )),
                other => Err(Unrepresentable::new(format!(
                    "map entry for '{}' must be a key/record id pair, got {}",
                    field,
                    other.kind()
                ))),
            }),
        }
    }
}

fn plain_all(values: &[Value]) -> Result<Vec<String>, Unrepresentable> {
    values.iter().map(Value::to_plain).collect()
}

fn regular(values: &[Value]) -> Result<String, Unrepresentable> {
    Ok(plain_all(values)?.join(", "))
}

/// Render field pairs with `render`, joined by `", "`.
fn assignments<F>(values: &[Value], render: F) -> Result<Option<String>, Unrepresentable>
where
    F: Fn(&str, &Value) -> Result<String, Unrepresentable>,
{
    let parts = values
        .iter()
        .map(|value| match value {
            Value::Pair(field, inner) => render(field, inner),
            other => Err(Unrepresentable::new(format!(
                "expected a field pair, got {}",
                other.kind()
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(parts.join(", ")))
}

/// Token name to formatter bindings for one statement.
///
/// [`FormatterMap::new`] starts from the base bindings every statement
/// shares and falls back to [`Formatter::Regular`] for unlisted tokens.
/// Statements layer their own bindings on top with [`FormatterMap::with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterMap {
    bindings: BTreeMap<&'static str, Formatter>,
    fallback: Option<Formatter>,
}

impl Default for FormatterMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterMap {
    /// Base bindings with a Regular fallback.
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
            fallback: Some(Formatter::Regular),
        }
        .with(WHERE, Formatter::Regular)
        .with("Limit", Formatter::Limit)
        .with("Skip", Formatter::Skip)
        .with("OrderBy", Formatter::Keyword("ORDER BY"))
        .with("Fetchplan", Formatter::Keyword("FETCHPLAN"))
        .with("Target", Formatter::Target)
        .with("Rid", Formatter::EmbeddedRid)
        .with("ClassList", Formatter::ClassList)
    }

    /// No bindings and no fallback; every placeholder must be bound explicitly.
    pub fn strict() -> Self {
        Self {
            bindings: BTreeMap::new(),
            fallback: None,
        }
    }

    /// Bind `token` to `formatter`, replacing any earlier binding.
    pub fn with(mut self, token: &'static str, formatter: Formatter) -> Self {
        self.bindings.insert(token, formatter);
        self
    }

    /// The formatter responsible for `token`, if any.
    pub fn resolve(&self, token: &str) -> Option<Formatter> {
        self.bindings.get(token).copied().or(self.fallback)
    }
}
