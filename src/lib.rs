//! # orientql: statements for the OrientDB SQL dialect
//!
//! > **Declare the statement. Render the text.**
//!
//! Every statement is a schema template with `:Name` placeholders, a set of
//! tokens holding raw values, and one formatter per token deciding how those
//! values are written. Rendering fills the template; tokens that were never
//! set disappear together with their keyword.
//!
//! ## Quick Example
//!
//! ```
//! use orientql::prelude::*;
//!
//! let stmt = DeleteVertex::new("Person")
//!     .where_("age > ?", 30)?
//!     .limit(10);
//! assert_eq!(stmt.raw()?, "DELETE VERTEX Person WHERE age > 30 LIMIT 10");
//!
//! let remove = IndexRemove::new("myIdx", Some("abc".into()), None);
//! assert_eq!(remove.raw()?, "DELETE FROM index:myIdx WHERE key = 'abc'");
//! # Ok::<(), orientql::error::QueryError>(())
//! ```
//!
//! ## Pieces
//!
//! | Piece       | Module        | Role                                        |
//! |-------------|---------------|---------------------------------------------|
//! | Template    | [`template`]  | schema compiled into literal/placeholder segments |
//! | Token       | [`token`]     | named value slot, overwrite/append/prepend  |
//! | Formatter   | [`formatter`] | values → literal text, or nothing           |
//! | Clause      | [`clause`]    | `WHERE … AND … OR …` composition            |
//! | Command     | [`command`]   | owns the above, renders the statement       |
//!
//! Values handed to WHERE conditions are formatted by the formatter bound to
//! the statement's `Where` token. Condition text itself is never escaped:
//! build conditions from trusted literals and pass untrusted data as values.

pub mod clause;
pub mod command;
pub mod config;
pub mod error;
pub mod formatter;
pub mod query;
pub mod statements;
pub mod template;
pub mod token;
pub mod value;

pub mod prelude {
    pub use crate::clause::Connector;
    pub use crate::command::{Command, Filterable, Statement};
    pub use crate::config::Config;
    pub use crate::error::*;
    pub use crate::formatter::{Formatter, FormatterMap};
    pub use crate::query::Query;
    pub use crate::statements::{
        AlterClass, AlterProperty, CreateClass, CreateProperty, Delete, DeleteEdge, DeleteVertex,
        DropClass, DropProperty, FindReferences, Grant, IndexCount, IndexCreate, IndexDrop,
        IndexPut, IndexRemove, Insert, Link, Revoke, Select, Truncate, TruncateTarget, Update,
        UpdateAdd, UpdatePut, UpdateRemove,
    };
    pub use crate::token::TokenMode;
    pub use crate::value::{Rid, Value};
}

pub use query::Query;
