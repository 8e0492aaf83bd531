//! Index statements: create, drop, put, remove and count.
//!
//! Index names appear after the literal `index:` prefix, so the schemas
//! read `index::Name`: the first colon is text, the second opens the
//! placeholder.

use crate::clause::{Clause, Connector};
use crate::command::{Command, Filterable, WHERE};
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;
use crate::value::{Rid, Value};

static CREATE: Schema = Schema::new("CREATE INDEX :Target :Type");
static DROP: Schema = Schema::new("DROP INDEX :Target");
static PUT: Schema = Schema::new("INSERT INTO index::Name (key,rid) VALUES (:Key, :Value)");
static REMOVE: Schema = Schema::new("DELETE FROM index::Name :Where");
static COUNT: Schema = Schema::new("SELECT count(*) AS size FROM index::Name");

/// `Class.property`, or the bare property.
fn qualified(property: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!("{}.{}", class, property),
        None => property.to_string(),
    }
}

statement!(
    /// `CREATE INDEX [<class>.]<property> <type>`
    IndexCreate,
    hydrates = false
);

impl IndexCreate {
    pub fn new(property: &str, class: Option<&str>, index_type: &str) -> Self {
        let formatters = FormatterMap::new().with("Target", Formatter::Regular);
        let mut command = Command::new(CREATE.template(), &formatters);
        command.set_token("Target", qualified(property, class));
        command.set_token("Type", index_type);
        Self { command }
    }
}

statement!(
    /// `DROP INDEX [<class>.]<property>`
    IndexDrop,
    hydrates = false
);

impl IndexDrop {
    pub fn new(property: &str, class: Option<&str>) -> Self {
        let formatters = FormatterMap::new().with("Target", Formatter::Regular);
        let mut command = Command::new(DROP.template(), &formatters);
        command.set_token("Target", qualified(property, class));
        Self { command }
    }
}

statement!(
    /// `INSERT INTO index:<name> (key,rid) VALUES ("<key>", <rid>)`
    IndexPut,
    hydrates = false
);

impl IndexPut {
    pub fn new(name: &str, key: impl Into<Value>, rid: Rid) -> Self {
        let formatters = FormatterMap::new()
            .with("Name", Formatter::Regular)
            .with("Key", Formatter::EmbeddedRegular)
            .with("Value", Formatter::EmbeddedRid);
        let mut command = Command::new(PUT.template(), &formatters);
        command.set_token("Name", name);
        command.set_token("Key", key);
        command.set_token("Value", rid);
        Self { command }
    }
}

statement!(
    /// `DELETE FROM index:<name> [WHERE key = … [AND rid = …]]`
    ///
    /// Clause values are quoted, so keys may come from untrusted input.
    IndexRemove,
    hydrates = false
);

impl IndexRemove {
    /// Remove entries of `name` matching `key`, `rid`, or both. With
    /// neither, the statement removes every entry.
    pub fn new(name: &str, key: Option<Value>, rid: Option<Rid>) -> Self {
        let formatters = FormatterMap::new()
            .with("Name", Formatter::Regular)
            .with(WHERE, Formatter::Quoted);
        let mut command = Command::new(REMOVE.template(), &formatters);
        command.set_token("Name", name);

        let has_key = key.is_some();
        if let Some(key) = key {
            command.push_clause(Clause::trusted(Connector::None, "key = ?", Some(key)));
        }
        if let Some(rid) = rid {
            let connector = if has_key { Connector::And } else { Connector::None };
            command.push_clause(Clause::trusted(connector, "rid = ?", Some(rid.into())));
        }

        Self { command }
    }
}

impl Filterable for IndexRemove {}

statement!(
    /// `SELECT count(*) AS size FROM index:<name>`
    IndexCount,
    hydrates = false
);

impl IndexCount {
    pub fn new(name: &str) -> Self {
        let formatters = FormatterMap::new().with("Name", Formatter::Regular);
        let mut command = Command::new(COUNT.template(), &formatters);
        command.set_token("Name", name);
        Self { command }
    }
}
