//! GRANT and REVOKE.

use crate::command::Command;
use crate::formatter::FormatterMap;
use crate::template::Schema;

static GRANT: Schema = Schema::new("GRANT :Permission ON :Resource TO :Role");
static REVOKE: Schema = Schema::new("REVOKE :Permission ON :Resource FROM :Role");

fn command(schema: &Schema, permission: &str) -> Command {
    let mut command = Command::new(schema.template(), &FormatterMap::new());
    command.set_token("Permission", permission);
    command
}

statement!(
    /// `GRANT <permission> ON <resource> TO <role>`
    Grant,
    hydrates = false
);

impl Grant {
    pub fn new(permission: &str) -> Self {
        Self {
            command: command(&GRANT, permission),
        }
    }

    pub fn on(mut self, resource: &str) -> Self {
        self.command.set_token("Resource", resource);
        self
    }

    pub fn to(mut self, role: &str) -> Self {
        self.command.set_token("Role", role);
        self
    }
}

statement!(
    /// `REVOKE <permission> ON <resource> FROM <role>`
    Revoke,
    hydrates = false
);

impl Revoke {
    pub fn new(permission: &str) -> Self {
        Self {
            command: command(&REVOKE, permission),
        }
    }

    pub fn on(mut self, resource: &str) -> Self {
        self.command.set_token("Resource", resource);
        self
    }

    pub fn from(mut self, role: &str) -> Self {
        self.command.set_token("Role", role);
        self
    }
}
