//! UPDATE and its collection variants: ADD, REMOVE, PUT.

use crate::command::{Command, Filterable};
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;
use crate::token::TokenMode;
use crate::value::{Rid, Value};

static SET: Schema = Schema::new("UPDATE :Class SET :Updates :Where");
static ADD: Schema = Schema::new("UPDATE :Class ADD :RidUpdates :Where");
static REMOVE: Schema = Schema::new("UPDATE :Class REMOVE :RidUpdates :Where");
static PUT: Schema = Schema::new("UPDATE :Class PUT :MapUpdates :Where");

fn command(schema: &Schema, class: &str) -> Command {
    let formatters = FormatterMap::new()
        .with("Updates", Formatter::Updates)
        .with("RidUpdates", Formatter::RidUpdates)
        .with("MapUpdates", Formatter::MapUpdates);
    let mut command = Command::new(schema.template(), &formatters);
    command.set_token("Class", class);
    command
}

statement!(
    /// `UPDATE <class> SET field = value, … [WHERE …]`
    Update,
    hydrates = false
);

impl Update {
    pub fn new(class: &str) -> Self {
        Self {
            command: command(&SET, class),
        }
    }

    /// Add one assignment.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.command
            .set_token_values("Updates", [Value::pair(field, value)], TokenMode::Append);
        self
    }

    /// Set or extend the assignments from `(field, value)` pairs.
    pub fn values<I, K, V>(mut self, values: I, append: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let pairs: Vec<Value> = values
            .into_iter()
            .map(|(field, value)| Value::pair(field, value))
            .collect();
        self.command.set_token_values("Updates", pairs, append);
        self
    }
}

impl Filterable for Update {}

statement!(
    /// `UPDATE <class> ADD field = #rid, … [WHERE …]`
    UpdateAdd,
    hydrates = false
);

impl UpdateAdd {
    pub fn new(class: &str) -> Self {
        Self {
            command: command(&ADD, class),
        }
    }

    /// Add `rid` to the link collection `field`.
    pub fn add(mut self, field: &str, rid: Rid) -> Self {
        self.command
            .set_token_values("RidUpdates", [Value::pair(field, rid)], TokenMode::Append);
        self
    }
}

impl Filterable for UpdateAdd {}

statement!(
    /// `UPDATE <class> REMOVE field = #rid, … [WHERE …]`
    UpdateRemove,
    hydrates = false
);

impl UpdateRemove {
    pub fn new(class: &str) -> Self {
        Self {
            command: command(&REMOVE, class),
        }
    }

    /// Remove `rid` from the link collection `field`.
    pub fn remove(mut self, field: &str, rid: Rid) -> Self {
        self.command
            .set_token_values("RidUpdates", [Value::pair(field, rid)], TokenMode::Append);
        self
    }
}

impl Filterable for UpdateRemove {}

statement!(
    /// `UPDATE <class> PUT field = 'key', #rid, … [WHERE …]`
    UpdatePut,
    hydrates = false
);

impl UpdatePut {
    pub fn new(class: &str) -> Self {
        Self {
            command: command(&PUT, class),
        }
    }

    /// Put `key → rid` into the link map `field`.
    pub fn put(mut self, field: &str, key: &str, rid: Rid) -> Self {
        let entry = Value::pair(field, Value::pair(key, rid));
        self.command
            .set_token_values("MapUpdates", [entry], TokenMode::Append);
        self
    }
}

impl Filterable for UpdatePut {}
