//! Built-in demo steps registered at server startup.
//!
//! Deterministic text-analysis steps so a fresh server can compile and run
//! graphs out of the box. Real deployments register their own steps here
//! before the service is constructed; the engine only sees the `Step` /
//! `Condition` contracts.

use flowgraph::{State, StepError, StepRegistry};
use serde_json::{json, Value};

fn text_of(state: &State) -> &str {
    state.get("text").and_then(Value::as_str).unwrap_or_default()
}

/// Registers the default step set. Call before building the service.
pub fn register_builtin_steps(registry: &mut StepRegistry) {
    // Counts whitespace-separated words of state["text"].
    registry.register_step_fn("word_count", |mut state: State| {
        let words = text_of(&state).split_whitespace().count();
        state.insert("word_count".into(), json!(words));
        Ok(state)
    });

    // Uppercases state["text"] into state["text_upper"].
    registry.register_step_fn("uppercase_text", |mut state: State| {
        let upper = text_of(&state).to_uppercase();
        state.insert("text_upper".into(), json!(upper));
        Ok(state)
    });

    // Fails the run when no usable text was supplied.
    registry.register_step_fn("require_text", |mut state: State| {
        if text_of(&state).trim().is_empty() {
            return Err(StepError::Failed("state has no 'text' to analyze".into()));
        }
        state.insert("checked".into(), json!(true));
        Ok(state)
    });

    // Routes "long" / "short" on the word count of state["text"].
    registry.register_condition_fn("text_length_route", |state: &State| {
        let words = text_of(state).split_whitespace().count();
        Ok(if words > 50 { "long" } else { "short" }.to_string())
    });
}
