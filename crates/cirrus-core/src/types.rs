//! Descriptor types for the resources a stack can own.
//!
//! These are immutable value descriptors of desired configuration, not
//! runtime objects. They are created once during stack assembly and
//! serialized to JSON for the external deployment engine; any later
//! lifecycle (create/update/delete reconciliation) happens outside this
//! process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleExpression;

/// Desired configuration for one compute function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Construct name as given by the caller (e.g. `HelloWorld`).
    pub name: String,
    /// Generated identifier, `{name}Function`. Trigger rules and outputs
    /// reference the function by this id.
    pub logical_id: String,
    /// Where the function's code lives (container image directory).
    pub code_location: String,
    pub memory_mb: u32,
    pub timeout_seconds: u32,
    /// Environment variables injected into the function.
    pub environment: BTreeMap<String, String>,
    /// Stack-wide tags, stamped at assembly time.
    pub tags: BTreeMap<String, String>,
}

/// Desired configuration for one key-value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
    pub retention: RetentionPolicy,
    pub tags: BTreeMap<String, String>,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Attribute types supported for table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
}

/// Capacity mode for a table. Fixed to pay-per-request in this design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    PayPerRequest,
}

/// What happens to a table when its stack is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    #[default]
    Retain,
    Destroy,
}

/// A trigger rule binding one schedule to one target function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub schedule: ScheduleExpression,
    /// The schedule rendered in the external scheduler's wire form
    /// (`rate(..)` / `cron(..)`), so the engine never re-derives it.
    pub schedule_expression: String,
    pub description: String,
    /// Logical id of the targeted function. One rule, one target.
    pub target: String,
    pub tags: BTreeMap<String, String>,
}

/// A named value exposed by the stack for external use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub value: String,
    pub description: String,
}

/// Any resource a stack can own, discriminated by `kind` in the
/// synthesized graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Function(FunctionSpec),
    Table(TableSpec),
    Rule(RuleSpec),
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::Function(spec) => &spec.name,
            Resource::Table(spec) => &spec.name,
            Resource::Rule(spec) => &spec.name,
        }
    }

    /// The `kind` discriminator as it appears in the synthesized graph.
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Function(_) => "function",
            Resource::Table(_) => "table",
            Resource::Rule(_) => "rule",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_kind_tag_in_json() {
        let table = TableSpec {
            name: "SampleTable".to_string(),
            partition_key: KeyAttribute {
                name: "id".to_string(),
                attribute_type: AttributeType::String,
            },
            billing_mode: BillingMode::PayPerRequest,
            retention: RetentionPolicy::default(),
            tags: BTreeMap::new(),
        };
        let json = serde_json::to_value(Resource::Table(table)).unwrap();
        assert_eq!(json["kind"], "table");
        assert_eq!(json["billing_mode"], "pay_per_request");
        assert_eq!(json["retention"], "retain");
    }
}
