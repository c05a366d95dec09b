//! Step registry: named node and condition functions.
//!
//! Graph definitions reference steps by name; the registry maps each name to
//! a typed implementation so compilation resolves every reference once and
//! runtime dispatch is a direct call. Build the registry in the composition
//! root before the first compile, then share it read-only via `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::state::State;

/// Error raised by a step or condition function.
///
/// Steps may fail for arbitrary reasons; the engine records the message as
/// the run's failure cause without further classification.
#[derive(Debug, Error)]
pub enum StepError {
    /// The step could not produce a new state.
    #[error("{0}")]
    Failed(String),
}

/// A named processing step: receives the current state, returns an update.
///
/// The returned mapping is merged into the run state (overwrite/add); keys
/// it omits are carried forward unchanged.
#[async_trait]
pub trait Step: Send + Sync {
    async fn apply(&self, state: State) -> Result<State, StepError>;
}

/// A branch chooser: inspects the current state and returns a branch key,
/// which a conditional edge's mapping turns into the next node.
#[async_trait]
pub trait Condition: Send + Sync {
    async fn evaluate(&self, state: &State) -> Result<String, StepError>;
}

/// Adapter turning a plain function into a [`Step`].
pub struct FnStep<F>(pub F);

#[async_trait]
impl<F> Step for FnStep<F>
where
    F: Fn(State) -> Result<State, StepError> + Send + Sync,
{
    async fn apply(&self, state: State) -> Result<State, StepError> {
        (self.0)(state)
    }
}

/// Adapter turning a plain function into a [`Condition`].
pub struct FnCondition<F>(pub F);

#[async_trait]
impl<F> Condition for FnCondition<F>
where
    F: Fn(&State) -> Result<String, StepError> + Send + Sync,
{
    async fn evaluate(&self, state: &State) -> Result<String, StepError> {
        (self.0)(state)
    }
}

/// Mapping from name to step/condition implementation.
///
/// Registration overwrites: the last registration under a name wins. There
/// is no removal. Lookups return `None` for unregistered names; compilation
/// turns a miss into [`CompileError::UnknownFunction`](crate::CompileError).
#[derive(Default)]
pub struct StepRegistry {
    steps: HashMap<String, Arc<dyn Step>>,
    conditions: HashMap<String, Arc<dyn Condition>>,
}

impl StepRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a step under `name`, replacing any previous registration.
    pub fn register_step(&mut self, name: impl Into<String>, step: Arc<dyn Step>) -> &mut Self {
        self.steps.insert(name.into(), step);
        self
    }

    /// Registers a condition under `name`, replacing any previous registration.
    pub fn register_condition(
        &mut self,
        name: impl Into<String>,
        condition: Arc<dyn Condition>,
    ) -> &mut Self {
        self.conditions.insert(name.into(), condition);
        self
    }

    /// Registers a plain function as a step.
    pub fn register_step_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(State) -> Result<State, StepError> + Send + Sync + 'static,
    {
        self.register_step(name, Arc::new(FnStep(f)))
    }

    /// Registers a plain function as a condition.
    pub fn register_condition_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&State) -> Result<String, StepError> + Send + Sync + 'static,
    {
        self.register_condition(name, Arc::new(FnCondition(f)))
    }

    /// Looks up a step by name.
    pub fn step(&self, name: &str) -> Option<Arc<dyn Step>> {
        self.steps.get(name).cloned()
    }

    /// Looks up a condition by name.
    pub fn condition(&self, name: &str) -> Option<Arc<dyn Condition>> {
        self.conditions.get(name).cloned()
    }
}
