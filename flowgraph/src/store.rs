//! In-memory graph and run stores.
//!
//! Process-lifetime maps keyed by generated uuids. Inserts and lookups are
//! the only operations; entries are never mutated or evicted. Both stores
//! are concurrency-safe on their own, so no lock is ever held across a step
//! invocation.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::graph::{CompiledGraph, RunOutcome};

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// graph id → compiled graph. Written once per successful compile.
#[derive(Default)]
pub struct GraphStore {
    graphs: DashMap<String, Arc<CompiledGraph>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a compiled graph under a fresh id and returns the id.
    pub fn insert(&self, graph: CompiledGraph) -> String {
        let id = fresh_id();
        self.graphs.insert(id.clone(), Arc::new(graph));
        id
    }

    pub fn get(&self, id: &str) -> Option<Arc<CompiledGraph>> {
        self.graphs.get(id).map(|entry| Arc::clone(entry.value()))
    }
}

/// run id → outcome. Written once when the run finishes.
#[derive(Default)]
pub struct RunStore {
    runs: DashMap<String, RunOutcome>,
}

impl RunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a finished run's outcome under a fresh id and returns the id.
    pub fn insert(&self, outcome: RunOutcome) -> String {
        let id = fresh_id();
        self.runs.insert(id.clone(), outcome);
        id
    }

    pub fn get(&self, id: &str) -> Option<RunOutcome> {
        self.runs.get(id).map(|entry| entry.value().clone())
    }
}
