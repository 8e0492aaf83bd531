//! FIND REFERENCES.

use crate::command::Command;
use crate::formatter::FormatterMap;
use crate::template::Schema;
use crate::value::{Rid, Value};

static SCHEMA: Schema = Schema::new("FIND REFERENCES :Rid :ClassList");

statement!(
    /// `FIND REFERENCES <rid> [[Class,…]]`
    FindReferences,
    hydrates = false
);

impl FindReferences {
    pub fn new(rid: Rid) -> Self {
        let mut command = Command::new(SCHEMA.template(), &FormatterMap::new());
        command.set_token("Rid", rid);
        Self { command }
    }

    /// Restrict the search to `classes`.
    pub fn in_classes<I, S>(mut self, classes: I, append: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: Vec<Value> = classes.into_iter().map(|c| Value::from(c.as_ref())).collect();
        self.command.set_token_values("ClassList", classes, append);
        self
    }
}
