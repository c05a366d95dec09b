//! Run-time execution failure.
//!
//! Never crosses the engine boundary as an `Err`: `CompiledGraph::execute`
//! folds every variant into a failed `RunOutcome`.

use thiserror::Error;

/// Why a run failed: a step or condition raised, a condition returned a
/// branch key with no mapping entry, or control reached a node with no way
/// out.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A node's step function returned an error.
    #[error("node '{node}' failed: {message}")]
    NodeFailed { node: String, message: String },

    /// A conditional edge's condition function returned an error.
    #[error("condition at '{node}' failed: {message}")]
    ConditionFailed { node: String, message: String },

    /// The condition returned a branch key absent from the edge's mapping.
    #[error("condition at '{node}' returned unmapped branch '{branch}'")]
    UnmappedBranch { node: String, branch: String },

    /// Control reached a node with no outgoing transition.
    #[error("node '{node}' has no outgoing transition")]
    DeadEnd { node: String },
}

impl ExecutionError {
    /// Id of the step where the failure originated.
    pub fn node(&self) -> &str {
        match self {
            ExecutionError::NodeFailed { node, .. }
            | ExecutionError::ConditionFailed { node, .. }
            | ExecutionError::UnmappedBranch { node, .. }
            | ExecutionError::DeadEnd { node } => node,
        }
    }
}
