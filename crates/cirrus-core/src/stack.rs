//! Stack assembly and synthesis.
//!
//! A [`Stack`] owns every descriptor for one deployment unit. Registration
//! stamps the stack's tags onto each resource; [`Stack::synth`] produces the
//! descriptor graph the external deployment engine diffs against previously
//! deployed state. No validation happens here — duplicate names and
//! out-of-range values pass through to the engine untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{FunctionSpec, OutputSpec, Resource, RuleSpec, TableSpec};

/// Stack-level settings, passed explicitly so two stacks assembled in one
/// process never share hidden state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackProps {
    /// Tags applied uniformly to every resource registered on the stack.
    pub tags: BTreeMap<String, String>,
}

/// One deployment unit's descriptor set.
#[derive(Debug, Clone)]
pub struct Stack {
    name: String,
    tags: BTreeMap<String, String>,
    resources: Vec<Resource>,
    outputs: BTreeMap<String, OutputSpec>,
}

/// The synthesized descriptor graph handed to the external engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackTemplate {
    pub stack: String,
    pub tags: BTreeMap<String, String>,
    pub resources: Vec<Resource>,
    pub outputs: BTreeMap<String, OutputSpec>,
}

impl Stack {
    pub fn new(name: impl Into<String>, props: StackProps) -> Self {
        Self {
            name: name.into(),
            tags: props.tags,
            resources: Vec::new(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a function. Returns the tagged descriptor so callers can
    /// wire rules and outputs to it.
    pub fn add_function(&mut self, mut spec: FunctionSpec) -> FunctionSpec {
        self.stamp_tags(&mut spec.tags);
        debug!(name = %spec.name, "function registered");
        self.resources.push(Resource::Function(spec.clone()));
        spec
    }

    /// Register a table. Returns the tagged descriptor.
    pub fn add_table(&mut self, mut spec: TableSpec) -> TableSpec {
        self.stamp_tags(&mut spec.tags);
        debug!(name = %spec.name, "table registered");
        self.resources.push(Resource::Table(spec.clone()));
        spec
    }

    /// Register a trigger rule.
    pub fn add_rule(&mut self, mut spec: RuleSpec) {
        self.stamp_tags(&mut spec.tags);
        debug!(name = %spec.name, target = %spec.target, "rule registered");
        self.resources.push(Resource::Rule(spec));
    }

    /// Expose a named value for external use (e.g. manual invocation).
    pub fn add_output(&mut self, name: &str, value: &str, description: &str) {
        self.outputs.insert(
            name.to_string(),
            OutputSpec {
                value: value.to_string(),
                description: description.to_string(),
            },
        );
    }

    fn stamp_tags(&self, tags: &mut BTreeMap<String, String>) {
        tags.extend(self.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn outputs(&self) -> &BTreeMap<String, OutputSpec> {
        &self.outputs
    }

    /// Produce the descriptor graph, preserving registration order.
    pub fn synth(&self) -> StackTemplate {
        debug!(stack = %self.name, resources = self.resources.len(), "stack synthesized");
        StackTemplate {
            stack: self.name.clone(),
            tags: self.tags.clone(),
            resources: self.resources.clone(),
            outputs: self.outputs.clone(),
        }
    }

    /// Synthesize straight to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.synth())
    }
}
