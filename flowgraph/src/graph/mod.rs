//! Workflow graphs: declarative definition, compilation, execution.
//!
//! Declare a [`GraphDefinition`] (nodes + edges + conditional edges),
//! `compile` it once against a registry, then `execute` the resulting
//! [`CompiledGraph`] any number of times with different initial states.

mod compile_error;
mod compiled;
mod definition;
mod execution_error;
mod outcome;

pub use compile_error::CompileError;
pub use compiled::CompiledGraph;
pub use definition::{ConditionalEdgeConfig, EdgeConfig, GraphDefinition, NodeConfig};
pub use execution_error::ExecutionError;
pub use outcome::{RunError, RunOutcome, RunStatus};

/// Reserved spelling for graph entry in definitions. Not a valid node id.
pub const START: &str = "START";

/// Reserved spelling for graph exit in definitions. Not a valid node id.
pub const END: &str = "END";
