//! Record store connection settings.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::infrastructure::paths;

/// Schemas every SQLite connection opens with.
pub const BUILTIN_SCHEMAS: [&str; 2] = ["main", "temp"];

/// Where and how the guest table is reached.
///
/// Endpoints are SQLite database URLs or file paths. The fallback is only
/// tried when the primary cannot be opened.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Endpoint tried first.
    pub primary: String,
    /// Endpoint tried once when the primary fails.
    pub fallback: Option<String>,
    /// Schema qualifying the table, `main` or `temp`.
    pub schema: String,
    /// Table holding guest rows.
    pub table: String,
    /// How long a statement waits on a locked database, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            primary: paths::default_database().to_string_lossy().into_owned(),
            fallback: None,
            schema: "main".into(),
            table: "party_info".into(),
            busy_timeout_ms: 5000,
        }
    }
}

impl StoreConfig {
    /// Config pointing at a single endpoint with default naming.
    #[must_use]
    pub fn with_primary(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            ..Self::default()
        }
    }

    /// Add a fallback endpoint.
    #[must_use]
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Check endpoint and identifier settings.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "store.primary",
            });
        }
        if matches!(&self.fallback, Some(fallback) if fallback.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "store.fallback",
                reason: "must not be empty when set".to_string(),
            });
        }
        check_identifier("store.schema", &self.schema)?;
        if !BUILTIN_SCHEMAS.contains(&self.schema.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "store.schema",
                reason: format!("'{}' is not attached; use main or temp", self.schema),
            });
        }
        check_identifier("store.table", &self.table)?;
        Ok(())
    }

    /// The table name quoted and qualified by its schema.
    #[must_use]
    pub fn qualified_table(&self) -> String {
        format!("\"{}\".\"{}\"", self.schema, self.table)
    }
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !starts_well || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{value}' is not a plain SQL identifier"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.qualified_table(), "\"main\".\"party_info\"");
        assert!(config.fallback.is_none());
    }

    #[test]
    fn table_name_must_be_identifier() {
        let config = StoreConfig {
            table: "party_info; DROP TABLE x".into(),
            ..StoreConfig::with_primary("a.db")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "store.table",
                ..
            })
        ));
    }

    #[test]
    fn identifier_may_not_start_with_digit() {
        let config = StoreConfig {
            schema: "1main".into(),
            ..StoreConfig::with_primary("a.db")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn schema_must_be_builtin() {
        let config = StoreConfig {
            schema: "guests".into(),
            ..StoreConfig::with_primary("a.db")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "store.schema",
                ..
            })
        ));

        let config = StoreConfig {
            schema: "temp".into(),
            ..StoreConfig::with_primary("a.db")
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_primary_is_missing() {
        let config = StoreConfig::with_primary("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField {
                field: "store.primary"
            })
        ));
    }

    #[test]
    fn blank_fallback_is_rejected() {
        let config = StoreConfig::with_primary("a.db").fallback("");
        assert!(config.validate().is_err());
    }
}
