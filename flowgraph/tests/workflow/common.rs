//! Shared fixtures: a registry of deterministic steps and definition helpers.

use flowgraph::{GraphDefinition, State, StepError, StepRegistry};
use serde_json::json;

/// Registry with small deterministic steps used across the suite.
pub fn registry() -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry.register_step_fn("set_x", |mut state: State| {
        state.insert("x".into(), json!(1));
        Ok(state)
    });
    registry.register_step_fn("set_y", |mut state: State| {
        state.insert("y".into(), json!(2));
        Ok(state)
    });
    registry.register_step_fn("always_fail", |_: State| {
        Err(StepError::Failed("step blew up".into()))
    });
    registry.register_condition_fn("flag_route", |state: &State| {
        Ok(state
            .get("flag")
            .and_then(|v| v.as_str())
            .unwrap_or("bad")
            .to_string())
    });
    registry
}

/// Deserializes a JSON literal into a definition, mirroring the wire format.
pub fn definition(value: serde_json::Value) -> GraphDefinition {
    serde_json::from_value(value).expect("definition deserializes")
}

/// `START → a(set_x) → b(set_y) → END`.
pub fn two_step_definition() -> GraphDefinition {
    definition(json!({
        "nodes": [
            {"id": "a", "function_name": "set_x"},
            {"id": "b", "function_name": "set_y"}
        ],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "b"},
            {"source": "b", "target": "END"}
        ]
    }))
}
