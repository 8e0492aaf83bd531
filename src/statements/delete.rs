//! DELETE FROM a class.

use crate::command::{Command, Filterable};
use crate::formatter::FormatterMap;
use crate::template::Schema;

static SCHEMA: Schema = Schema::new("DELETE FROM :Class :Where");

statement!(
    /// `DELETE FROM <class> [WHERE …]`
    Delete,
    hydrates = false
);

impl Delete {
    pub fn new(from: &str) -> Self {
        let mut command = Command::new(SCHEMA.template(), &FormatterMap::new());
        command.set_token("Class", from);
        Self { command }
    }
}

impl Filterable for Delete {}
