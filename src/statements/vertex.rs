//! DELETE VERTEX.

use crate::command::{Command, Filterable};
use crate::formatter::FormatterMap;
use crate::template::Schema;
use crate::token::TokenMode;

static SCHEMA: Schema = Schema::new("DELETE VERTEX :Class :Where :Limit");

statement!(
    /// `DELETE VERTEX <class> [WHERE …] [LIMIT n]`
    DeleteVertex,
    hydrates = false
);

impl DeleteVertex {
    pub fn new(class: &str) -> Self {
        let mut command = Command::new(SCHEMA.template(), &FormatterMap::new());
        command.set_token("Class", class);
        Self { command }
    }

    /// Delete at most `limit` vertices.
    pub fn limit(mut self, limit: u64) -> Self {
        self.command
            .set_token_values("Limit", [limit], TokenMode::Overwrite);
        self
    }
}

impl Filterable for DeleteVertex {}
