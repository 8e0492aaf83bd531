//! DELETE EDGE.

use crate::clause::{Clause, Connector};
use crate::command::{Command, Filterable};
use crate::formatter::FormatterMap;
use crate::template::Schema;
use crate::value::Rid;

static SCHEMA: Schema = Schema::new("DELETE EDGE :Where");

statement!(
    /// `DELETE EDGE [WHERE …]`
    DeleteEdge,
    hydrates = false
);

impl DeleteEdge {
    pub fn new() -> Self {
        Self {
            command: Command::new(SCHEMA.template(), &FormatterMap::new()),
        }
    }

    /// Delete the edge with the given record id.
    ///
    /// # Example
    ///
    /// ```
    /// use orientql::prelude::*;
    ///
    /// let edge = DeleteEdge::rid(Rid::new(12, 0));
    /// assert_eq!(edge.raw().unwrap(), "DELETE EDGE WHERE rid = #12:0");
    /// ```
    pub fn rid(rid: Rid) -> Self {
        let mut edge = Self::new();
        edge.command
            .push_clause(Clause::trusted(Connector::None, "rid = ?", Some(rid.into())));
        edge
    }
}

impl Default for DeleteEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl Filterable for DeleteEdge {}
