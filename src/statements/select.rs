//! SELECT.

use crate::clause::{Clause, Connector};
use crate::command::{Command, Filterable, WHERE};
use crate::error::QueryResult;
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Schema;
use crate::token::TokenMode;
use crate::value::Value;

static SCHEMA: Schema = Schema::new(
    "SELECT :Projections FROM :Target :Where :OrderBy :Skip :Limit :Fetchplan",
);

statement!(
    /// `SELECT [projections] FROM <target> [WHERE …] [ORDER BY …] [SKIP n]
    /// [LIMIT n] [FETCHPLAN …]`
    ///
    /// # Example
    ///
    /// ```
    /// use orientql::prelude::*;
    ///
    /// let select = Select::new(["name", "age"])
    ///     .from(["Person"], false)
    ///     .where_("age > ?", 30)?
    ///     .order_by("name ASC")
    ///     .limit(10);
    /// assert_eq!(
    ///     select.raw()?,
    ///     "SELECT name, age FROM Person WHERE age > 30 ORDER BY name ASC LIMIT 10"
    /// );
    /// # Ok::<(), orientql::error::QueryError>(())
    /// ```
    Select,
    hydrates = true
);

impl Select {
    /// Start a SELECT with the given projections; none selects whole records.
    pub fn new<I, S>(projections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let command = Command::new(SCHEMA.template(), &FormatterMap::new());
        Self { command }.select(projections, false)
    }

    /// Set or extend the projections.
    pub fn select<I, S>(mut self, projections: I, append: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.command
            .set_token_values("Projections", strings(projections), append);
        self
    }

    /// Set or extend the targets: classes, clusters, record ids or
    /// `index:<name>`.
    pub fn from<I, S>(mut self, targets: I, append: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.command.set_token_values("Target", strings(targets), append);
        self
    }

    /// Turn the statement into an index range scan:
    /// `WHERE <key> BETWEEN <left> AND <right>`. Replaces any filter; the
    /// range is an ordinary clause, so `and_where`, `or_where` and
    /// `reset_where` apply to it. Bounds are rendered as literals.
    pub fn between(
        mut self,
        key: &str,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> QueryResult<Self> {
        let range = Formatter::Between
            .format(&[left.into(), right.into()])
            .map_err(|e| e.for_token(WHERE))?
            .unwrap_or_default();
        self.command.reset_where();
        self.command.push_clause(Clause::trusted(
            Connector::None,
            format!("{} {}", key, range),
            None,
        ));
        Ok(self)
    }

    /// Append an ordering, e.g. `"name ASC"`.
    pub fn order_by(mut self, order: &str) -> Self {
        self.command.set_token_values("OrderBy", [order], TokenMode::Append);
        self
    }

    /// Put an ordering before the existing ones.
    pub fn order_by_first(mut self, order: &str) -> Self {
        self.command.set_token_values("OrderBy", [order], TokenMode::Prepend);
        self
    }

    pub fn skip(mut self, records: u64) -> Self {
        self.command.set_token_values("Skip", [records], TokenMode::Overwrite);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.command.set_token_values("Limit", [limit], TokenMode::Overwrite);
        self
    }

    /// Set the fetch plan, e.g. `"*:-1"`.
    pub fn fetch_plan(mut self, plan: &str) -> Self {
        self.command.set_token("Fetchplan", plan);
        self
    }
}

impl Filterable for Select {}

fn strings<I, S>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| Value::from(s.as_ref()))
        .collect()
}
