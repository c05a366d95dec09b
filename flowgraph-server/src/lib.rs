//! Server wiring for the flowgraph HTTP API.
//!
//! [`routes::app`] builds the axum router over a shared `WorkflowService`;
//! [`steps`] registers the built-in demo steps a fresh server starts with.

pub mod routes;
pub mod steps;

pub use routes::app;
