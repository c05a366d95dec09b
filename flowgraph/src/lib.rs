//! # flowgraph
//!
//! A declarative workflow engine: define a directed graph of named steps
//! over a shared state mapping, compile it once, execute it repeatedly.
//!
//! ## Design Principles
//!
//! - **State-in, state-out**: one open JSON mapping flows through the run;
//!   each step returns an update that is merged in (keys overwrite/add,
//!   never delete).
//! - **Compile once, run many**: a [`GraphDefinition`] is resolved against
//!   a [`StepRegistry`] into an immutable [`CompiledGraph`]; concurrent
//!   runs share it freely.
//! - **Failures are results**: a run always produces a [`RunOutcome`].
//!   Step errors, unmapped branches and dead ends are recorded, not raised.
//!
//! ## Main Modules
//!
//! - [`registry`]: [`Step`] / [`Condition`] traits and the name → impl map.
//! - [`graph`]: definition, compiler, compiled graph and execution engine.
//! - [`store`]: in-memory graph/run stores with generated ids.
//! - [`service`]: [`WorkflowService`] facade tying the above together.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use flowgraph::{GraphDefinition, State, StepRegistry, WorkflowService};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut registry = StepRegistry::new();
//! registry.register_step_fn("greet", |mut state: State| {
//!     state.insert("greeting".into(), json!("hello"));
//!     Ok(state)
//! });
//!
//! let definition: GraphDefinition = serde_json::from_value(json!({
//!     "nodes": [{"id": "greet", "function_name": "greet"}],
//!     "edges": [
//!         {"source": "START", "target": "greet"},
//!         {"source": "greet", "target": "END"}
//!     ]
//! }))
//! .unwrap();
//!
//! let service = WorkflowService::new(Arc::new(registry));
//! let graph_id = service.create_graph(&definition).unwrap();
//! let run_id = service.run_graph(&graph_id, State::new()).await.unwrap();
//! let outcome = service.run_outcome(&run_id).unwrap();
//! assert!(outcome.final_state.unwrap().contains_key("greeting"));
//! # }
//! ```

pub mod graph;
pub mod registry;
pub mod service;
pub mod state;
pub mod store;

pub use graph::{
    CompileError, CompiledGraph, ConditionalEdgeConfig, EdgeConfig, ExecutionError,
    GraphDefinition, NodeConfig, RunError, RunOutcome, RunStatus, END, START,
};
pub use registry::{Condition, FnCondition, FnStep, Step, StepError, StepRegistry};
pub use service::{StoreError, WorkflowService};
pub use state::State;
pub use store::{GraphStore, RunStore};
