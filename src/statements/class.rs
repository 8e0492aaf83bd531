//! CREATE, DROP and ALTER CLASS.

use crate::command::Command;
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;

static CREATE: Schema = Schema::new("CREATE CLASS :Class :Parent");
static DROP: Schema = Schema::new("DROP CLASS :Class");
static ALTER: Schema = Schema::new("ALTER CLASS :Class :Attribute :Value");

statement!(
    /// `CREATE CLASS <class> [EXTENDS <parent>]`
    CreateClass,
    hydrates = false
);

impl CreateClass {
    pub fn new(class: &str) -> Self {
        let formatters = FormatterMap::new().with("Parent", Formatter::Keyword("EXTENDS"));
        let mut command = Command::new(CREATE.template(), &formatters);
        command.set_token("Class", class);
        Self { command }
    }

    pub fn extends(mut self, parent: &str) -> Self {
        self.command.set_token("Parent", parent);
        self
    }
}

statement!(
    /// `DROP CLASS <class>`
    DropClass,
    hydrates = false
);

impl DropClass {
    pub fn new(class: &str) -> Self {
        let mut command = Command::new(DROP.template(), &FormatterMap::new());
        command.set_token("Class", class);
        Self { command }
    }
}

statement!(
    /// `ALTER CLASS <class> <attribute> <value>`
    AlterClass,
    hydrates = false
);

impl AlterClass {
    pub fn new(class: &str, attribute: &str, value: &str) -> Self {
        let mut command = Command::new(ALTER.template(), &FormatterMap::new());
        command.set_token("Class", class);
        command.set_token("Attribute", attribute);
        command.set_token("Value", value);
        Self { command }
    }
}
