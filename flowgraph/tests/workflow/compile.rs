//! Successful compilation: node set, conditional edges, no step execution.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use flowgraph::State;
use serde_json::json;

use crate::common::{definition, registry, two_step_definition};

#[test]
fn compiled_node_set_equals_declared_node_set() {
    let graph = two_step_definition()
        .compile(&registry())
        .expect("graph compiles");
    let ids: HashSet<&str> = graph.node_ids().collect();
    assert_eq!(ids, HashSet::from(["a", "b"]));
}

#[test]
fn compile_accepts_conditional_edges_to_nodes_and_end() {
    let def = definition(json!({
        "nodes": [
            {"id": "a", "function_name": "set_x"},
            {"id": "b", "function_name": "set_y"}
        ],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "b", "target": "END"}
        ],
        "conditional_edges": [
            {"source": "a", "condition_function": "flag_route",
             "mapping": {"ok": "b", "bad": "END"}}
        ]
    }));
    assert!(def.compile(&registry()).is_ok());
}

#[test]
fn conditional_edges_default_to_empty_on_the_wire() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "set_x"}],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "END"}
        ]
    }));
    assert!(def.conditional_edges.is_empty());
    assert!(def.compile(&registry()).is_ok());
}

/// Compilation resolves names only; it must never call a step.
#[test]
fn compile_does_not_invoke_step_functions() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);

    let mut registry = registry();
    registry.register_step_fn("observer", move |state: State| {
        flag.store(true, Ordering::SeqCst);
        Ok(state)
    });

    definition(json!({
        "nodes": [{"id": "a", "function_name": "observer"}],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "END"}
        ]
    }))
    .compile(&registry)
    .expect("graph compiles");

    assert!(!invoked.load(Ordering::SeqCst), "compile ran a step function");
}
