//! The statement model: a schema template, the tokens filling it and the
//! WHERE clauses, rendered into statement text on demand.

use std::sync::Arc;

use crate::clause::{Clause, Clauses, Connector};
use crate::error::{QueryError, QueryResult};
use crate::formatter::{Formatter, FormatterMap};
use crate::template::Template;
use crate::token::{TokenMode, TokenRegistry};
use crate::value::Value;

/// The token rendered from the clause list rather than from the registry.
/// Its formatter renders the clause values.
pub const WHERE: &str = "Where";

/// A statement under construction.
///
/// Formatters are resolved per placeholder when the command is built, so
/// rendering only looks up token values. Rendering never mutates the
/// command and may be repeated.
#[derive(Debug, Clone)]
pub struct Command {
    template: Arc<Template>,
    bindings: Vec<Option<Formatter>>,
    registry: TokenRegistry,
    clauses: Clauses,
}

impl Command {
    pub fn new(template: Arc<Template>, formatters: &FormatterMap) -> Self {
        let bindings = template
            .placeholders()
            .iter()
            .map(|name| formatters.resolve(name))
            .collect();

        Self {
            template,
            bindings,
            registry: TokenRegistry::new(),
            clauses: Clauses::new(),
        }
    }

    /// Build a command from a schema that is not shared with other commands.
    ///
    /// # Example
    ///
    /// ```
    /// use orientql::command::Command;
    /// use orientql::formatter::FormatterMap;
    ///
    /// let mut cmd = Command::from_schema("REBUILD INDEX :Name", &FormatterMap::new());
    /// cmd.set_token("Name", "Person.name");
    /// assert_eq!(cmd.raw().unwrap(), "REBUILD INDEX Person.name");
    /// ```
    pub fn from_schema(schema: &str, formatters: &FormatterMap) -> Self {
        Self::new(Arc::new(Template::compile(schema)), formatters)
    }

    pub fn schema(&self) -> &str {
        self.template.source()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Replace the token's values with `[value]`.
    pub fn set_token(&mut self, name: &str, value: impl Into<Value>) {
        self.registry.set(name, value.into());
    }

    /// Write several values into the token. `mode` also accepts a bool
    /// (`true` appends).
    pub fn set_token_values<I, V>(&mut self, name: &str, values: I, mode: impl Into<TokenMode>)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.registry.write(name, values, mode.into());
    }

    pub fn clear_token(&mut self, name: &str) {
        self.registry.clear(name);
    }

    /// Snapshot of the token registry.
    pub fn tokens(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn clauses(&self) -> &Clauses {
        &self.clauses
    }

    /// Add the opening WHERE clause. Fails if clauses already exist.
    pub fn open_where(&mut self, clause: Clause) -> QueryResult<()> {
        self.clauses.open(clause)
    }

    pub fn push_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn reset_where(&mut self) {
        self.clauses.reset();
    }

    /// Render the statement text.
    pub fn raw(&self) -> QueryResult<String> {
        let raw = self.template.render(|slot, name| {
            let formatter = self
                .bindings
                .get(slot)
                .copied()
                .flatten()
                .ok_or_else(|| QueryError::Configuration {
                    token: name.to_string(),
                })?;

            let rendered = if name == WHERE {
                self.clauses.render(formatter)
            } else {
                formatter.format(self.registry.values(name))
            };

            rendered.map_err(|e| {
                tracing::warn!("Cannot render token '{}' of '{}': {}", name, self.schema(), e);
                e.for_token(name)
            })
        })?;

        tracing::debug!("Rendered statement: {}", raw);
        Ok(raw)
    }
}

/// A concrete statement kind.
pub trait Statement {
    fn command(&self) -> &Command;

    fn command_mut(&mut self) -> &mut Command;

    /// Whether result rows of this statement map to records. Fixed per kind.
    fn can_hydrate(&self) -> bool;

    /// Render the statement text.
    fn raw(&self) -> QueryResult<String> {
        self.command().raw()
    }

    fn tokens(&self) -> &TokenRegistry {
        self.command().tokens()
    }
}

/// Statements whose schema has a `:Where` placeholder.
pub trait Filterable: Statement + Sized {
    /// Open the filter. Fails if a filter is already open; use
    /// [`and_where`](Filterable::and_where) or
    /// [`or_where`](Filterable::or_where) to extend it, or
    /// [`reset_where`](Filterable::reset_where) to start over.
    fn where_(mut self, condition: &str, value: impl Into<Value>) -> QueryResult<Self> {
        let clause = Clause::new(Connector::None, condition, Some(value.into()))?;
        self.command_mut().open_where(clause)?;
        Ok(self)
    }

    fn and_where(mut self, condition: &str, value: impl Into<Value>) -> QueryResult<Self> {
        let clause = Clause::new(Connector::And, condition, Some(value.into()))?;
        self.command_mut().push_clause(clause);
        Ok(self)
    }

    fn or_where(mut self, condition: &str, value: impl Into<Value>) -> QueryResult<Self> {
        let clause = Clause::new(Connector::Or, condition, Some(value.into()))?;
        self.command_mut().push_clause(clause);
        Ok(self)
    }

    /// Add a condition that takes no value, e.g. `out IS NULL`.
    /// `Connector::None` opens the filter like [`where_`](Filterable::where_).
    fn condition(mut self, connector: Connector, condition: &str) -> QueryResult<Self> {
        let clause = Clause::new(connector, condition, None)?;
        match connector {
            Connector::None => self.command_mut().open_where(clause)?,
            _ => self.command_mut().push_clause(clause),
        }
        Ok(self)
    }

    fn reset_where(mut self) -> Self {
        self.command_mut().reset_where();
        self
    }
}
