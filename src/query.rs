//! The `Query` facade: one constructor per statement kind.
//!
//! ```
//! use orientql::prelude::*;
//!
//! let q = Query::new();
//! assert_eq!(
//!     q.delete_vertex("Person").limit(5).raw().unwrap(),
//!     "DELETE VERTEX Person LIMIT 5"
//! );
//! assert_eq!(q.truncate_class("Person").raw().unwrap(), "TRUNCATE CLASS Person");
//! ```

use crate::config::Config;
use crate::statements::*;
use crate::value::{Rid, Value};

/// Entry point for building statements, carrying the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct Query {
    config: Config,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// SELECT `projections`. Configured default fields, target, fetch plan
    /// and limit fill in whatever is not given here.
    pub fn select<I, S>(&self, projections: I) -> Select
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defaults = &self.config.select;
        let projections: Vec<String> = projections
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        let mut select = if projections.is_empty() {
            Select::new(&defaults.fields)
        } else {
            Select::new(&projections)
        };
        if !defaults.target.is_empty() {
            select = select.from(&defaults.target, false);
        }
        if let Some(plan) = &defaults.fetch_plan {
            select = select.fetch_plan(plan);
        }
        if let Some(limit) = defaults.limit {
            select = select.limit(limit);
        }
        select
    }

    pub fn insert(&self) -> Insert {
        Insert::new()
    }

    pub fn update(&self, class: &str) -> Update {
        Update::new(class)
    }

    /// UPDATE … ADD on a link collection.
    pub fn add(&self, class: &str) -> UpdateAdd {
        UpdateAdd::new(class)
    }

    /// UPDATE … REMOVE on a link collection.
    pub fn remove(&self, class: &str) -> UpdateRemove {
        UpdateRemove::new(class)
    }

    /// UPDATE … PUT on a link map.
    pub fn put(&self, class: &str) -> UpdatePut {
        UpdatePut::new(class)
    }

    pub fn delete(&self, from: &str) -> Delete {
        Delete::new(from)
    }

    pub fn delete_edge(&self) -> DeleteEdge {
        DeleteEdge::new()
    }

    pub fn delete_vertex(&self, class: &str) -> DeleteVertex {
        DeleteVertex::new(class)
    }

    pub fn grant(&self, permission: &str) -> Grant {
        Grant::new(permission)
    }

    pub fn revoke(&self, permission: &str) -> Revoke {
        Revoke::new(permission)
    }

    pub fn index(&self, property: &str, class: Option<&str>, index_type: &str) -> IndexCreate {
        IndexCreate::new(property, class, index_type)
    }

    pub fn unindex(&self, property: &str, class: Option<&str>) -> IndexDrop {
        IndexDrop::new(property, class)
    }

    pub fn index_put(&self, name: &str, key: impl Into<Value>, rid: Rid) -> IndexPut {
        IndexPut::new(name, key, rid)
    }

    pub fn index_remove(&self, name: &str, key: Option<Value>, rid: Option<Rid>) -> IndexRemove {
        IndexRemove::new(name, key, rid)
    }

    pub fn index_count(&self, name: &str) -> IndexCount {
        IndexCount::new(name)
    }

    /// CREATE LINK `alias` from `class.property`; finish with
    /// [`Link::with`].
    pub fn link(&self, class: &str, property: &str, alias: &str, inverse: bool) -> Link {
        let link = Link::new(class, property, alias);
        if inverse { link.inverse() } else { link }
    }

    pub fn create(&self, class: &str) -> CreateClass {
        CreateClass::new(class)
    }

    pub fn create_property(&self, class: &str, property: &str, property_type: &str) -> CreateProperty {
        CreateProperty::new(class, property, property_type)
    }

    pub fn drop(&self, class: &str) -> DropClass {
        DropClass::new(class)
    }

    pub fn drop_property(&self, class: &str, property: &str) -> DropProperty {
        DropProperty::new(class, property)
    }

    pub fn alter(&self, class: &str, attribute: &str, value: &str) -> AlterClass {
        AlterClass::new(class, attribute, value)
    }

    pub fn alter_property(
        &self,
        class: &str,
        property: &str,
        attribute: &str,
        value: &str,
    ) -> AlterProperty {
        AlterProperty::new(class, property, attribute, value)
    }

    pub fn find_references(&self, rid: Rid) -> FindReferences {
        FindReferences::new(rid)
    }

    pub fn truncate_class(&self, name: &str) -> Truncate {
        Truncate::class(name)
    }

    pub fn truncate_cluster(&self, name: &str) -> Truncate {
        Truncate::cluster(name)
    }

    pub fn truncate_record(&self, rid: Rid) -> Truncate {
        Truncate::record(rid)
    }
}
