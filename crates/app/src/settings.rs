//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` in the working directory and from `ENVELOPE__*`
//! environment variables.
//!
//! ```toml
//! [app]
//! level = "debug"
//!
//! [[categories]]
//! name = "Food"
//! deposit = "1000"
//!
//! [[operations]]
//! kind = "withdraw"
//! category = "Food"
//! amount = "10.15"
//! description = "groceries"
//!
//! [[operations]]
//! kind = "transfer"
//! category = "Food"
//! to = "Clothing"
//! amount = "50"
//! ```
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

/// A category created before any operation is replayed.
#[derive(Debug, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    /// Opening deposit, as a decimal string.
    pub deposit: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    Deposit {
        category: String,
        amount: String,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        amount: String,
        #[serde(default)]
        description: String,
    },
    Transfer {
        category: String,
        to: String,
        amount: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub categories: Vec<SeedCategory>,
    pub operations: Vec<Operation>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("ENVELOPE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_settings_use_defaults() {
        let settings = parse("");

        assert_eq!(settings.app.level, "info");
        assert!(settings.categories.is_empty());
        assert!(settings.operations.is_empty());
    }

    #[test]
    fn parses_seed_budget() {
        let settings = parse(
            r#"
            [app]
            level = "debug"

            [[categories]]
            name = "Food"
            deposit = "1000"

            [[categories]]
            name = "Clothing"

            [[operations]]
            kind = "withdraw"
            category = "Food"
            amount = "10.15"
            description = "groceries"

            [[operations]]
            kind = "transfer"
            category = "Food"
            to = "Clothing"
            amount = "50"
            "#,
        );

        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.categories.len(), 2);
        assert_eq!(settings.categories[0].deposit.as_deref(), Some("1000"));
        assert_eq!(settings.categories[1].deposit, None);
        assert_eq!(
            settings.operations,
            vec![
                Operation::Withdraw {
                    category: "Food".to_string(),
                    amount: "10.15".to_string(),
                    description: "groceries".to_string(),
                },
                Operation::Transfer {
                    category: "Food".to_string(),
                    to: "Clothing".to_string(),
                    amount: "50".to_string(),
                },
            ]
        );
    }
}
