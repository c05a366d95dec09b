//! Service facade: compile-and-store, run-by-id, inspect.
//!
//! Owns the registry and both stores; the HTTP layer (or any other caller)
//! talks only to this type. Constructed explicitly in the composition root,
//! no process-wide singletons.

use std::sync::Arc;

use thiserror::Error;

use crate::graph::{CompileError, CompiledGraph, GraphDefinition, RunOutcome};
use crate::registry::StepRegistry;
use crate::state::State;
use crate::store::{GraphStore, RunStore};

/// Lookup failure for stored graphs and runs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("graph not found: {0}")]
    GraphNotFound(String),

    #[error("run not found: {0}")]
    RunNotFound(String),
}

/// Workflow engine entry point: create graphs, run them, inspect runs.
pub struct WorkflowService {
    registry: Arc<StepRegistry>,
    graphs: GraphStore,
    runs: RunStore,
}

impl WorkflowService {
    /// Creates a service around a fully-populated registry. Registration
    /// must be finished before the service is built; the registry is
    /// read-only from here on.
    pub fn new(registry: Arc<StepRegistry>) -> Self {
        Self {
            registry,
            graphs: GraphStore::new(),
            runs: RunStore::new(),
        }
    }

    /// Compiles and stores a definition, returning the new graph id.
    /// A failed compile stores nothing.
    pub fn create_graph(&self, definition: &GraphDefinition) -> Result<String, CompileError> {
        let compiled = definition.compile(&self.registry)?;
        let graph_id = self.graphs.insert(compiled);
        tracing::info!(graph_id = %graph_id, "graph created");
        Ok(graph_id)
    }

    /// Looks up a stored compiled graph.
    pub fn graph(&self, graph_id: &str) -> Result<Arc<CompiledGraph>, StoreError> {
        self.graphs
            .get(graph_id)
            .ok_or_else(|| StoreError::GraphNotFound(graph_id.to_string()))
    }

    /// Runs a stored graph to completion and records the outcome.
    ///
    /// Synchronous from the caller's perspective: the future resolves only
    /// once the run has finished and its outcome is stored. The run id is
    /// returned even when the run itself failed; only an unknown graph id
    /// is an error here.
    pub async fn run_graph(&self, graph_id: &str, initial_state: State) -> Result<String, StoreError> {
        let graph = self.graph(graph_id)?;
        let outcome = graph.execute(initial_state).await;
        let run_id = self.runs.insert(outcome);
        tracing::info!(graph_id = %graph_id, run_id = %run_id, "run recorded");
        Ok(run_id)
    }

    /// Looks up a recorded run outcome.
    pub fn run_outcome(&self, run_id: &str) -> Result<RunOutcome, StoreError> {
        self.runs
            .get(run_id)
            .ok_or_else(|| StoreError::RunNotFound(run_id.to_string()))
    }
}
