//! Factory functions producing resource descriptors.
//!
//! Defaults live in the options structs rather than in call sites, so a
//! caller that wants the stock configuration passes
//! `FunctionOptions::default()` and nothing else. No factory validates its
//! inputs; the external deployment engine owns structural validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::env::ProcessEnv;
use crate::schedule::ScheduleExpression;
use crate::types::{
    AttributeType, BillingMode, FunctionSpec, KeyAttribute, RetentionPolicy, RuleSpec, TableSpec,
};

/// Memory given to a function when unspecified, in MiB.
pub const DEFAULT_MEMORY_MB: u32 = 128;

/// Timeout given to a function when unspecified, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u32 = 120;

/// Partition key name given to a table when unspecified.
pub const DEFAULT_PARTITION_KEY: &str = "id";

/// Tunable settings for [`create_function`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionOptions {
    pub memory_mb: u32,
    pub timeout_seconds: u32,
    /// Names resolved against the [`ProcessEnv`] snapshot and injected into
    /// the function's environment.
    pub env_var_names: Vec<String>,
}

impl Default for FunctionOptions {
    fn default() -> Self {
        Self {
            memory_mb: DEFAULT_MEMORY_MB,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            env_var_names: Vec::new(),
        }
    }
}

/// Tunable settings for [`create_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    pub partition_key: String,
    pub retention: RetentionPolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
            retention: RetentionPolicy::Retain,
        }
    }
}

/// Build a compute-function descriptor.
///
/// Each name in `options.env_var_names` is resolved against the snapshot;
/// a missing variable becomes an empty-string entry, never an error.
pub fn create_function(
    name: &str,
    code_location: &str,
    options: FunctionOptions,
    env: &ProcessEnv,
) -> FunctionSpec {
    let environment: BTreeMap<String, String> = options
        .env_var_names
        .iter()
        .map(|name| (name.clone(), env.get(name)))
        .collect();

    FunctionSpec {
        name: name.to_string(),
        logical_id: format!("{name}Function"),
        code_location: code_location.to_string(),
        memory_mb: options.memory_mb,
        timeout_seconds: options.timeout_seconds,
        environment,
        tags: BTreeMap::new(),
    }
}

/// Build a key-value table descriptor with a single string-typed partition
/// key and pay-per-request capacity.
pub fn create_table(name: &str, options: TableOptions) -> TableSpec {
    TableSpec {
        name: name.to_string(),
        partition_key: KeyAttribute {
            name: options.partition_key,
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
        retention: options.retention,
        tags: BTreeMap::new(),
    }
}

/// Bind a schedule to a function, producing a trigger rule with the
/// function as its sole target. `None` defaults to hourly.
pub fn add_schedule(
    name: &str,
    function: &FunctionSpec,
    schedule: Option<ScheduleExpression>,
    description: &str,
) -> RuleSpec {
    let schedule = schedule.unwrap_or_default();
    RuleSpec {
        name: name.to_string(),
        schedule_expression: schedule.expression(),
        schedule,
        description: description.to_string(),
        target: function.logical_id.clone(),
        tags: BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::hourly;

    #[test]
    fn function_defaults() {
        let spec = create_function(
            "HelloWorld",
            "lambdas/sample-lambda",
            FunctionOptions::default(),
            &ProcessEnv::empty(),
        );
        assert_eq!(spec.name, "HelloWorld");
        assert_eq!(spec.logical_id, "HelloWorldFunction");
        assert_eq!(spec.memory_mb, 128);
        assert_eq!(spec.timeout_seconds, 120);
        assert!(spec.environment.is_empty());
    }

    #[test]
    fn environment_has_one_entry_per_name() {
        let env = ProcessEnv::from_vars([("API_KEY", "secret"), ("UNRELATED", "x")]);
        let options = FunctionOptions {
            env_var_names: vec!["API_KEY".to_string(), "MISSING".to_string()],
            ..Default::default()
        };
        let spec = create_function("Worker", "lambdas/worker", options, &env);
        assert_eq!(spec.environment.len(), 2);
        assert_eq!(spec.environment["API_KEY"], "secret");
        assert_eq!(spec.environment["MISSING"], "");
        assert!(!spec.environment.contains_key("UNRELATED"));
    }

    #[test]
    fn table_defaults() {
        let spec = create_table("SampleTable", TableOptions::default());
        assert_eq!(spec.partition_key.name, "id");
        assert_eq!(spec.partition_key.attribute_type, AttributeType::String);
        assert_eq!(spec.billing_mode, BillingMode::PayPerRequest);
        assert_eq!(spec.retention, RetentionPolicy::Retain);
    }

    #[test]
    fn omitted_schedule_defaults_to_hourly() {
        let function = create_function(
            "HelloWorld",
            "lambdas/sample-lambda",
            FunctionOptions::default(),
            &ProcessEnv::empty(),
        );
        let defaulted = add_schedule("Rule", &function, None, "");
        let explicit = add_schedule("Rule", &function, Some(hourly(1)), "");
        assert_eq!(defaulted, explicit);
        assert_eq!(defaulted.target, "HelloWorldFunction");
    }

    #[test]
    fn rule_carries_rendered_wire_form() {
        let function = create_function(
            "HelloWorld",
            "lambdas/sample-lambda",
            FunctionOptions::default(),
            &ProcessEnv::empty(),
        );
        let rule = add_schedule("Rule", &function, None, "");
        assert_eq!(rule.schedule_expression, "rate(1 hour)");

        let cron = add_schedule("Daily", &function, Some(crate::daily_at(9, 0)), "");
        assert_eq!(cron.schedule_expression, "cron(0 9 * * ? *)");
    }
}
