//! Compile failure cases: unknown references, duplicates, bad shape.

use flowgraph::CompileError;
use serde_json::json;

use crate::common::{definition, registry};

#[test]
fn compile_fails_when_edge_refers_to_unknown_node() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "set_x"}],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "missing"}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::UnknownNode(id)) => assert_eq!(id, "missing"),
        other => panic!("expected UnknownNode, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_on_duplicate_node_id() {
    let def = definition(json!({
        "nodes": [
            {"id": "a", "function_name": "set_x"},
            {"id": "a", "function_name": "set_y"}
        ],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "END"}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::DuplicateNodeId(id)) => assert_eq!(id, "a"),
        other => panic!("expected DuplicateNodeId, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_on_unregistered_step_function() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "no_such_fn"}],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "END"}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::UnknownFunction(name)) => assert_eq!(name, "no_such_fn"),
        other => panic!("expected UnknownFunction, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_on_unregistered_condition_function() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "set_x"}],
        "edges": [{"source": "START", "target": "a"}],
        "conditional_edges": [
            {"source": "a", "condition_function": "no_such_condition",
             "mapping": {"ok": "END"}}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::UnknownFunction(name)) => assert_eq!(name, "no_such_condition"),
        other => panic!("expected UnknownFunction, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_when_mapping_targets_undeclared_node() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "set_x"}],
        "edges": [{"source": "START", "target": "a"}],
        "conditional_edges": [
            {"source": "a", "condition_function": "flag_route",
             "mapping": {"ok": "ghost", "bad": "END"}}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::UnknownNode(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected UnknownNode, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_on_reserved_node_id() {
    let def = definition(json!({
        "nodes": [{"id": "END", "function_name": "set_x"}],
        "edges": [{"source": "START", "target": "END"}]
    }));
    match def.compile(&registry()) {
        Err(CompileError::ReservedNodeId(id)) => assert_eq!(id, "END"),
        other => panic!("expected ReservedNodeId, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_without_start_edge() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "set_x"}],
        "edges": [{"source": "a", "target": "END"}]
    }));
    assert!(matches!(
        def.compile(&registry()),
        Err(CompileError::MissingStart)
    ));
}

#[test]
fn compile_fails_on_unreachable_node() {
    let def = definition(json!({
        "nodes": [
            {"id": "a", "function_name": "set_x"},
            {"id": "island", "function_name": "set_y"}
        ],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "END"},
            {"source": "island", "target": "END"}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::UnreachableNode(id)) => assert_eq!(id, "island"),
        other => panic!("expected UnreachableNode, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_on_second_edge_from_same_source() {
    let def = definition(json!({
        "nodes": [
            {"id": "a", "function_name": "set_x"},
            {"id": "b", "function_name": "set_y"}
        ],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "b"},
            {"source": "a", "target": "END"},
            {"source": "b", "target": "END"}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::ConflictingTransition(id)) => assert_eq!(id, "a"),
        other => panic!("expected ConflictingTransition, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn compile_fails_when_conditional_source_also_has_plain_edge() {
    let def = definition(json!({
        "nodes": [{"id": "a", "function_name": "set_x"}],
        "edges": [
            {"source": "START", "target": "a"},
            {"source": "a", "target": "END"}
        ],
        "conditional_edges": [
            {"source": "a", "condition_function": "flag_route",
             "mapping": {"bad": "END"}}
        ]
    }));
    match def.compile(&registry()) {
        Err(CompileError::ConflictingTransition(id)) => assert_eq!(id, "a"),
        other => panic!("expected ConflictingTransition, got {:?}", other.map(|_| ())),
    }
}
