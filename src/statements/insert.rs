//! INSERT.

use crate::command::Command;
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;
use crate::token::TokenMode;
use crate::value::Value;

static SCHEMA: Schema = Schema::new("INSERT INTO :Target (:Fields) VALUES (:Values)");

statement!(
    /// `INSERT INTO <target> (fields) VALUES (values)`
    ///
    /// Values are rendered as escaped literals.
    Insert,
    hydrates = true
);

impl Insert {
    pub fn new() -> Self {
        let formatters = FormatterMap::new().with("Values", Formatter::Quoted);
        Self {
            command: Command::new(SCHEMA.template(), &formatters),
        }
    }

    /// Set the class or cluster to insert into.
    pub fn into(mut self, target: &str) -> Self {
        self.command.set_token("Target", target);
        self
    }

    pub fn fields<I, S>(mut self, fields: I, append: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<Value> = fields.into_iter().map(|f| Value::from(f.as_ref())).collect();
        self.command
            .set_token_values("Fields", fields, TokenMode::from(append));
        self
    }

    pub fn values<I, V>(mut self, values: I, append: bool) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.command.set_token_values("Values", values, append);
        self
    }
}

impl Default for Insert {
    fn default() -> Self {
        Self::new()
    }
}
