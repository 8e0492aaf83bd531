//! TRUNCATE CLASS / CLUSTER / RECORD.

use crate::command::{Command, Statement};
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;
use crate::value::{Rid, Value};

static CLASS: Schema = Schema::new("TRUNCATE CLASS :Name");
static CLUSTER: Schema = Schema::new("TRUNCATE CLUSTER :Name");
static RECORD: Schema = Schema::new("TRUNCATE RECORD :Name");

/// What a [`Truncate`] empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncateTarget {
    Class,
    Cluster,
    Record,
}

impl TruncateTarget {
    pub fn keyword(&self) -> &'static str {
        match self {
            TruncateTarget::Class => "CLASS",
            TruncateTarget::Cluster => "CLUSTER",
            TruncateTarget::Record => "RECORD",
        }
    }

    fn schema(&self) -> &'static Schema {
        match self {
            TruncateTarget::Class => &CLASS,
            TruncateTarget::Cluster => &CLUSTER,
            TruncateTarget::Record => &RECORD,
        }
    }

    fn name_formatter(&self) -> Formatter {
        match self {
            TruncateTarget::Record => Formatter::EmbeddedRid,
            TruncateTarget::Class | TruncateTarget::Cluster => Formatter::Regular,
        }
    }
}

/// `TRUNCATE <CLASS|CLUSTER|RECORD> <name>`
#[derive(Debug, Clone)]
pub struct Truncate {
    target: TruncateTarget,
    command: Command,
}

impl Truncate {
    fn new(target: TruncateTarget, name: impl Into<Value>) -> Self {
        let formatters = FormatterMap::new().with("Name", target.name_formatter());
        let mut command = Command::new(target.schema().template(), &formatters);
        command.set_token("Name", name);
        Self { target, command }
    }

    pub fn class(name: &str) -> Self {
        Self::new(TruncateTarget::Class, name)
    }

    pub fn cluster(name: &str) -> Self {
        Self::new(TruncateTarget::Cluster, name)
    }

    pub fn record(rid: Rid) -> Self {
        Self::new(TruncateTarget::Record, rid)
    }

    pub fn target(&self) -> TruncateTarget {
        self.target
    }
}

impl Statement for Truncate {
    fn command(&self) -> &Command {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command {
        &mut self.command
    }

    fn can_hydrate(&self) -> bool {
        false
    }
}
