//! Terminal result of one run.

use serde::{Deserialize, Serialize};

use crate::graph::execution_error::ExecutionError;
use crate::state::State;

/// Whether the run reached END or stopped at a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Failed,
}

/// The failing step and what it reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunError {
    pub node: String,
    pub message: String,
}

/// Outcome of one run: written once when the run finishes, never mutated.
///
/// `final_state` is present iff the run completed; `error` iff it failed.
/// `logs` is an ordered human-readable trace either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state: Option<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RunError>,
    pub logs: Vec<String>,
}

impl RunOutcome {
    pub(crate) fn completed(final_state: State, logs: Vec<String>) -> Self {
        Self {
            status: RunStatus::Completed,
            final_state: Some(final_state),
            error: None,
            logs,
        }
    }

    pub(crate) fn failed(error: ExecutionError, logs: Vec<String>) -> Self {
        Self {
            status: RunStatus::Failed,
            final_state: None,
            error: Some(RunError {
                node: error.node().to_string(),
                message: error.to_string(),
            }),
            logs,
        }
    }
}
