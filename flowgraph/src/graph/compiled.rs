//! Compiled graph: immutable, supports execute only.
//!
//! Built by `GraphDefinition::compile`. Holds the resolved step table and
//! one outgoing transition per source; concurrent runs share it via `Arc`
//! because nothing here mutates after compilation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::graph::execution_error::ExecutionError;
use crate::graph::outcome::RunOutcome;
use crate::graph::START;
use crate::registry::{Condition, Step};
use crate::state::{merge, State};

/// Outgoing transition of a node (or of START).
pub(super) enum Transition {
    Unconditional(Target),
    Conditional {
        name: String,
        condition: Arc<dyn Condition>,
        mapping: BTreeMap<String, Target>,
    },
}

/// Where a transition leads: another node, or out of the graph.
pub(super) enum Target {
    Node(String),
    End,
}

/// Validated, executable form of a graph definition.
///
/// Every transition target is guaranteed to resolve to an entry in `nodes`,
/// START has an outgoing transition, and every node is reachable from START.
pub struct CompiledGraph {
    pub(super) nodes: HashMap<String, Arc<dyn Step>>,
    pub(super) transitions: HashMap<String, Transition>,
}

impl CompiledGraph {
    /// Ids of the nodes in this graph, in no particular order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Runs the graph once against `initial` and returns the outcome.
    ///
    /// Always returns a [`RunOutcome`]: step errors, unmapped branches and
    /// dead ends become a failed outcome naming the originating step, never
    /// an error past this boundary. The walk is strictly sequential, one
    /// path per run.
    pub async fn execute(&self, initial: State) -> RunOutcome {
        let mut logs = Vec::new();
        match self.walk(initial, &mut logs).await {
            Ok(state) => {
                tracing::info!("graph execution complete");
                logs.push("Execution successful".to_string());
                RunOutcome::completed(state, logs)
            }
            Err(error) => {
                tracing::warn!(node = error.node(), %error, "graph execution failed");
                logs.push(format!("Error: {error}"));
                RunOutcome::failed(error, logs)
            }
        }
    }

    /// Walks from START until END or a failure, mutating `state` per step.
    ///
    /// Entering a node runs its step and merges the returned update; a
    /// conditional transition only evaluates its condition to pick the edge,
    /// so branching straight to END skips the unvisited branch entirely.
    async fn walk(&self, mut state: State, logs: &mut Vec<String>) -> Result<State, ExecutionError> {
        let mut current = String::from(START);
        loop {
            if current != START {
                // Compile-time validation guarantees the id resolves.
                let step = self
                    .nodes
                    .get(&current)
                    .expect("compiled graph resolves every transition target");
                let update =
                    step.apply(state.clone())
                        .await
                        .map_err(|e| ExecutionError::NodeFailed {
                            node: current.clone(),
                            message: e.to_string(),
                        })?;
                merge(&mut state, update);
                tracing::debug!(node = %current, "node executed");
                logs.push(format!("node '{current}' executed"));
            }

            match self.transitions.get(&current) {
                None => return Err(ExecutionError::DeadEnd { node: current }),
                Some(Transition::Unconditional(Target::End)) => return Ok(state),
                Some(Transition::Unconditional(Target::Node(id))) => current = id.clone(),
                Some(Transition::Conditional {
                    name,
                    condition,
                    mapping,
                }) => {
                    let branch = condition.evaluate(&state).await.map_err(|e| {
                        ExecutionError::ConditionFailed {
                            node: current.clone(),
                            message: e.to_string(),
                        }
                    })?;
                    tracing::debug!(node = %current, condition = %name, branch = %branch, "branch selected");
                    logs.push(format!("condition '{name}' selected branch '{branch}'"));
                    match mapping.get(&branch) {
                        None => {
                            return Err(ExecutionError::UnmappedBranch {
                                node: current,
                                branch,
                            })
                        }
                        Some(Target::End) => return Ok(state),
                        Some(Target::Node(id)) => current = id.clone(),
                    }
                }
            }
        }
    }
}
