//! Configuration for the [`Query`](crate::query::Query) facade.
//!
//! ```toml
//! [select]
//! target = ["Person"]
//! fields = ["name", "age"]
//! fetch_plan = "*:1"
//! limit = 20
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// Facade configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub select: SelectDefaults,
}

/// Defaults applied to SELECT statements built through the facade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectDefaults {
    /// FROM target(s) used until `from` is called
    pub target: Vec<String>,
    /// Projections used when none are given
    pub fields: Vec<String>,
    pub fetch_plan: Option<String>,
    pub limit: Option<u64>,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> QueryResult<Self> {
        toml::from_str(content).map_err(|e| QueryError::Config(e.to_string()))
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded query config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml(
            r#"
            [select]
            target = ["Person"]
            fields = ["name", "age"]
            fetch_plan = "*:1"
            limit = 20
            "#,
        )
        .unwrap();

        assert_eq!(
            config.select,
            SelectDefaults {
                target: vec!["Person".to_string()],
                fields: vec!["name".to_string(), "age".to_string()],
                fetch_plan: Some("*:1".to_string()),
                limit: Some(20),
            }
        );
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(
            Config::from_toml("[select]\nlimit = 5").unwrap().select.limit,
            Some(5)
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[select]\nlimit = \"many\"").unwrap_err();
        assert!(matches!(err, QueryError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/orientql.toml").unwrap_err();
        assert!(matches!(err, QueryError::Io(_)));
    }
}
