//! Concrete statement declarations.
//!
//! Each statement is a schema, the formatter bindings layered over the base
//! map, and a constructor that sets the mandatory tokens so a fresh
//! statement renders right away.

/// Declare a statement struct wrapping a [`Command`](crate::command::Command).
macro_rules! statement {
    ($(#[$meta:meta])* $name:ident, hydrates = $hydrates:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            command: $crate::command::Command,
        }

        impl $crate::command::Statement for $name {
            fn command(&self) -> &$crate::command::Command {
                &self.command
            }

            fn command_mut(&mut self) -> &mut $crate::command::Command {
                &mut self.command
            }

            fn can_hydrate(&self) -> bool {
                $hydrates
            }
        }
    };
}

pub mod class;
pub mod credential;
pub mod delete;
pub mod edge;
pub mod index;
pub mod insert;
pub mod link;
pub mod property;
pub mod reference;
pub mod select;
pub mod truncate;
pub mod update;
pub mod vertex;

#[cfg(test)]
mod tests;

pub use class::{AlterClass, CreateClass, DropClass};
pub use credential::{Grant, Revoke};
pub use delete::Delete;
pub use edge::DeleteEdge;
pub use index::{IndexCount, IndexCreate, IndexDrop, IndexPut, IndexRemove};
pub use insert::Insert;
pub use link::Link;
pub use property::{AlterProperty, CreateProperty, DropProperty};
pub use reference::FindReferences;
pub use select::Select;
pub use truncate::{Truncate, TruncateTarget};
pub use update::{Update, UpdateAdd, UpdatePut, UpdateRemove};
pub use vertex::DeleteVertex;
