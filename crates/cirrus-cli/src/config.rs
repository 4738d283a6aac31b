//! cirrus.toml configuration parser.
//!
//! Every section is optional; a missing file yields the built-in sample
//! deployment (the `HelloWorld` function on an hourly schedule). The table
//! section is the opt-in extension point: when present, the assembly adds a
//! key-value table alongside the function.

use std::collections::BTreeMap;
use std::path::Path;

use cirrus_core::{FunctionOptions, RetentionPolicy, TableOptions};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STACK_NAME: &str = "lambda-deployment";
pub const DEFAULT_FUNCTION_NAME: &str = "HelloWorld";
pub const DEFAULT_CODE_LOCATION: &str = "lambdas/sample-lambda";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub stack: Option<StackSection>,
    pub tags: Option<BTreeMap<String, String>>,
    pub function: Option<FunctionSection>,
    pub table: Option<TableSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionSection {
    pub name: Option<String>,
    pub code: Option<String>,
    pub memory_mb: Option<u32>,
    pub timeout_seconds: Option<u32>,
    pub env_var_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSection {
    pub name: String,
    pub partition_key: Option<String>,
    pub retention: Option<RetentionPolicy>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from an explicit path, from `cirrus.toml` in the working
    /// directory when present, or fall back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new("cirrus.toml");
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn stack_name(&self) -> String {
        self.stack
            .as_ref()
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| DEFAULT_STACK_NAME.to_string())
    }

    pub fn tags(&self) -> BTreeMap<String, String> {
        self.tags.clone().unwrap_or_else(|| {
            BTreeMap::from([
                ("Project".to_string(), "SampleLambdaDeployment".to_string()),
                ("Environment".to_string(), "Dev".to_string()),
            ])
        })
    }

    pub fn function_name(&self) -> String {
        self.function
            .as_ref()
            .and_then(|f| f.name.clone())
            .unwrap_or_else(|| DEFAULT_FUNCTION_NAME.to_string())
    }

    pub fn code_location(&self) -> String {
        self.function
            .as_ref()
            .and_then(|f| f.code.clone())
            .unwrap_or_else(|| DEFAULT_CODE_LOCATION.to_string())
    }

    pub fn function_options(&self) -> FunctionOptions {
        let defaults = FunctionOptions::default();
        match &self.function {
            Some(section) => FunctionOptions {
                memory_mb: section.memory_mb.unwrap_or(defaults.memory_mb),
                timeout_seconds: section.timeout_seconds.unwrap_or(defaults.timeout_seconds),
                env_var_names: section.env_var_names.clone().unwrap_or_default(),
            },
            None => defaults,
        }
    }

    pub fn table_options(section: &TableSection) -> TableOptions {
        let defaults = TableOptions::default();
        TableOptions {
            partition_key: section
                .partition_key
                .clone()
                .unwrap_or(defaults.partition_key),
            retention: section.retention.unwrap_or(defaults.retention),
        }
    }
}
