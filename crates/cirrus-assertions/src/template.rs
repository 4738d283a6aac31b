//! Template queries over a synthesized descriptor graph.
//!
//! A [`Template`] holds the graph as plain JSON, so tests exercise the same
//! representation the external deployment engine receives. Property checks
//! are subset matches: the expectation may name any slice of a resource's
//! fields, order-insensitive, and extra fields on the resource are ignored.

use cirrus_core::Stack;
use serde_json::Value;

use crate::error::{AssertionError, AssertionResult};

/// A synthesized descriptor graph loaded for inspection.
#[derive(Debug, Clone)]
pub struct Template {
    graph: Value,
}

impl Template {
    /// Synthesize a stack and load the resulting graph.
    pub fn from_stack(stack: &Stack) -> AssertionResult<Self> {
        let graph = serde_json::to_value(stack.synth())
            .map_err(|e| AssertionError::Malformed(e.to_string()))?;
        Ok(Self { graph })
    }

    /// Load a graph from its JSON wire form.
    pub fn from_json(json: &str) -> AssertionResult<Self> {
        let graph: Value =
            serde_json::from_str(json).map_err(|e| AssertionError::Malformed(e.to_string()))?;
        Ok(Self { graph })
    }

    /// All resources of the given kind, in registration order.
    pub fn find_resources(&self, kind: &str) -> Vec<&Value> {
        self.graph["resources"]
            .as_array()
            .map(|resources| {
                resources
                    .iter()
                    .filter(|r| r["kind"] == kind)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Assert the graph holds exactly `expected` resources of a kind.
    pub fn resource_count_is(&self, kind: &str, expected: usize) -> AssertionResult<()> {
        let actual = self.find_resources(kind).len();
        if actual != expected {
            return Err(AssertionError::CountMismatch {
                kind: kind.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Assert a resource of the given kind and name exists.
    pub fn has_resource(&self, kind: &str, name: &str) -> AssertionResult<()> {
        self.resource(kind, name).map(|_| ())
    }

    /// Assert a resource exists and carries the expected properties
    /// (subset match against the synthesized object).
    pub fn has_resource_properties(
        &self,
        kind: &str,
        name: &str,
        expected: &Value,
    ) -> AssertionResult<()> {
        let actual = self.resource(kind, name)?;
        if !is_subset(expected, actual) {
            return Err(AssertionError::PropertyMismatch {
                kind: kind.to_string(),
                name: name.to_string(),
                expected: pretty(expected),
                actual: pretty(actual),
            });
        }
        Ok(())
    }

    /// Assert an output exists with the given value.
    pub fn has_output(&self, name: &str, expected_value: &str) -> AssertionResult<()> {
        let output = &self.graph["outputs"][name];
        if output.is_null() {
            return Err(AssertionError::OutputNotFound(name.to_string()));
        }
        let actual = output["value"].as_str().unwrap_or_default();
        if actual != expected_value {
            return Err(AssertionError::OutputMismatch {
                name: name.to_string(),
                expected: expected_value.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    fn resource(&self, kind: &str, name: &str) -> AssertionResult<&Value> {
        self.find_resources(kind)
            .into_iter()
            .find(|r| r["name"] == name)
            .ok_or_else(|| AssertionError::ResourceNotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            })
    }
}

/// Order-insensitive subset match. Objects match when every expected key
/// matches recursively; arrays match element-wise at equal length; scalars
/// match by equality.
fn is_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => exp
            .iter()
            .all(|(key, value)| act.get(key).is_some_and(|a| is_subset(value, a))),
        (Value::Array(exp), Value::Array(act)) => {
            exp.len() == act.len() && exp.iter().zip(act).all(|(e, a)| is_subset(e, a))
        }
        _ => expected == actual,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
