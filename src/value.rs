//! Raw values held by tokens and clauses.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Unrepresentable};

/// Date-time layout the dialect accepts in literals.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record id, the database's native reference literal `#cluster:position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rid {
    pub cluster: i32,
    pub position: i64,
}

impl Rid {
    pub fn new(cluster: i32, position: i64) -> Self {
        Self { cluster, position }
    }
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.cluster, self.position)
    }
}

impl FromStr for Rid {
    type Err = QueryError;

    /// Parse `#12:0` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_rid(s.trim()) {
            Ok(("", rid)) => Ok(rid),
            _ => Err(QueryError::InvalidRid(s.to_string())),
        }
    }
}

/// Parse a signed decimal integer.
fn signed(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

/// Parse a record id.
fn parse_rid(input: &str) -> IResult<&str, Rid> {
    let (input, _) = opt(char('#'))(input)?;
    let (input, cluster) = map_res(signed, |s: &str| s.parse::<i32>())(input)?;
    let (input, _) = char(':')(input)?;
    let (input, position) = map_res(signed, |s: &str| s.parse::<i64>())(input)?;
    Ok((input, Rid { cluster, position }))
}

/// A raw input value.
///
/// Values are stored untouched; how they appear in the statement text is
/// decided by the formatter bound to the token holding them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Unsigned integer, for counts and sizes beyond `i64::MAX`
    UInt(u64),
    /// Float
    Float(f64),
    /// String
    String(String),
    /// Record id
    Rid(Rid),
    /// Date-time, rendered as `yyyy-MM-dd HH:mm:ss`
    DateTime(NaiveDateTime),
    /// Ordered list of values
    List(Vec<Value>),
    /// Named field and its value (update assignments, map entries)
    Pair(String, Box<Value>),
}

impl Value {
    /// Build a field pair.
    pub fn pair(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Pair(field.into(), Box::new(value.into()))
    }

    /// Interpret this value as a record id.
    pub fn as_rid(&self) -> Result<Rid, Unrepresentable> {
        match self {
            Value::Rid(rid) => Ok(*rid),
            Value::String(s) => s
                .parse()
                .map_err(|_| Unrepresentable::new(format!("'{}' is not a record id", s))),
            other => Err(Unrepresentable::new(format!(
                "expected a record id, got {}",
                other.kind()
            ))),
        }
    }

    /// Interpret this value as a non-negative integer.
    pub fn as_count(&self) -> Result<u64, Unrepresentable> {
        let parsed = match self {
            Value::Int(n) => u64::try_from(*n).ok(),
            Value::UInt(n) => Some(*n),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            Unrepresentable::new(format!("expected a non-negative integer, got {}", self.kind()))
        })
    }

    /// Render the value as written, without quoting.
    pub fn to_plain(&self) -> Result<String, Unrepresentable> {
        match self {
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::UInt(n) => Ok(n.to_string()),
            Value::Float(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Rid(rid) => Ok(rid.to_string()),
            Value::DateTime(dt) => Ok(dt.format(DATETIME_FORMAT).to_string()),
            Value::List(_) | Value::Pair(..) => Err(Unrepresentable::new(format!(
                "{} cannot be rendered verbatim",
                self.kind()
            ))),
        }
    }

    /// Render the value as a dialect literal: strings and dates are quoted
    /// and escaped, lists become `[a,b]`.
    pub fn to_literal(&self) -> Result<String, Unrepresentable> {
        match self {
            Value::String(s) => Ok(quote(s)),
            Value::DateTime(dt) => Ok(quote(&dt.format(DATETIME_FORMAT).to_string())),
            Value::List(items) => {
                let items = items
                    .iter()
                    .map(Value::to_literal)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("[{}]", items.join(",")))
            }
            Value::Pair(..) => Err(Unrepresentable::new("a field pair is not a literal")),
            scalar => scalar.to_plain(),
        }
    }

    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::UInt(_) => "an unsigned integer",
            Value::Float(_) => "a float",
            Value::String(_) => "a string",
            Value::Rid(_) => "a record id",
            Value::DateTime(_) => "a date-time",
            Value::List(_) => "a list",
            Value::Pair(..) => "a field pair",
        }
    }
}

/// Single-quote a string, escaping backslashes and quotes.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Rid> for Value {
    fn from(rid: Rid) -> Self {
        Value::Rid(rid)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.naive_utc())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(u)) => Value::UInt(u),
                (None, None) => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::List(
                map.into_iter()
                    .map(|(k, v)| Value::Pair(k, Box::new(Value::from(v))))
                    .collect(),
            ),
        }
    }
}
