//! CREATE, DROP and ALTER PROPERTY.

use crate::command::Command;
use crate::formatter::FormatterMap;
use crate::template::Schema;

static CREATE: Schema = Schema::new("CREATE PROPERTY :Class.:Property :Type :Linked");
static DROP: Schema = Schema::new("DROP PROPERTY :Class.:Property");
static ALTER: Schema = Schema::new("ALTER PROPERTY :Class.:Property :Attribute :Value");

fn command(schema: &Schema, class: &str, property: &str) -> Command {
    let mut command = Command::new(schema.template(), &FormatterMap::new());
    command.set_token("Class", class);
    command.set_token("Property", property);
    command
}

statement!(
    /// `CREATE PROPERTY <class>.<property> <type> [<linked>]`
    CreateProperty,
    hydrates = false
);

impl CreateProperty {
    pub fn new(class: &str, property: &str, property_type: &str) -> Self {
        let mut command = command(&CREATE, class, property);
        command.set_token("Type", property_type);
        Self { command }
    }

    /// The linked class or type of a LINK/EMBEDDED collection property.
    pub fn linked(mut self, linked: &str) -> Self {
        self.command.set_token("Linked", linked);
        self
    }
}

statement!(
    /// `DROP PROPERTY <class>.<property>`
    DropProperty,
    hydrates = false
);

impl DropProperty {
    pub fn new(class: &str, property: &str) -> Self {
        Self {
            command: command(&DROP, class, property),
        }
    }
}

statement!(
    /// `ALTER PROPERTY <class>.<property> <attribute> <value>`
    AlterProperty,
    hydrates = false
);

impl AlterProperty {
    pub fn new(class: &str, property: &str, attribute: &str, value: &str) -> Self {
        let mut command = command(&ALTER, class, property);
        command.set_token("Attribute", attribute);
        command.set_token("Value", value);
        Self { command }
    }
}
