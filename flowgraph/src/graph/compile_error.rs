//! Graph compilation error.
//!
//! Returned by `GraphDefinition::compile` when a definition references
//! unknown functions or nodes, or its shape cannot be executed.

use thiserror::Error;

/// Error when compiling a graph definition.
///
/// All variants are caller-correctable problems with the definition itself;
/// a failed compile stores nothing and never invokes user functions.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Two node descriptors share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// A referenced step or condition function was never registered.
    #[error("function not registered: {0}")]
    UnknownFunction(String),

    /// An edge or branch mapping names a node id that was not declared.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A declared node cannot be reached from START through any edge.
    #[error("node not reachable from START: {0}")]
    UnreachableNode(String),

    /// A node id is spelled like a reserved sentinel (`START`/`END`).
    #[error("node id collides with reserved sentinel: {0}")]
    ReservedNodeId(String),

    /// No edge leaves START.
    #[error("graph must have an edge from START")]
    MissingStart,

    /// A source already has an outgoing transition; execution follows
    /// exactly one path, so each source gets one edge or one conditional set.
    #[error("node already has an outgoing transition: {0}")]
    ConflictingTransition(String),
}
