//! Declarative graph definition and its compilation into an executable form.
//!
//! A [`GraphDefinition`] is pure data in the wire format the HTTP layer
//! accepts: nodes naming registered functions, plain edges, and conditional
//! edges with a branch mapping. `compile` resolves every name against a
//! [`StepRegistry`], validates structure, and freezes a [`CompiledGraph`].

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graph::compile_error::CompileError;
use crate::graph::compiled::{CompiledGraph, Target, Transition};
use crate::graph::{END, START};
use crate::registry::{Step, StepRegistry};

/// One named step: `id` unique within the graph, `function_name` a registry key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub id: String,
    pub function_name: String,
}

/// Unconditional transition. `source`/`target` are node ids or the reserved
/// spellings `"START"`/`"END"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub source: String,
    pub target: String,
}

/// Conditional transition: at run time `condition_function` is evaluated
/// against the current state and its returned branch key is looked up in
/// `mapping` (branch key → node id or `"END"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalEdgeConfig {
    pub source: String,
    pub condition_function: String,
    pub mapping: BTreeMap<String, String>,
}

/// Declarative workflow graph. No behavior beyond [`compile`](Self::compile).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeConfig>,
    pub edges: Vec<EdgeConfig>,
    #[serde(default)]
    pub conditional_edges: Vec<ConditionalEdgeConfig>,
}

impl GraphDefinition {
    /// Resolves and validates the definition into an immutable [`CompiledGraph`].
    ///
    /// Checks, in order: reserved/duplicate node ids and step resolution,
    /// plain edges, conditional edges, then shape (an edge out of START,
    /// every node reachable). Reachability is structural: a node behind a
    /// conditional branch counts as reachable whether or not any input ever
    /// selects that branch. Compilation never invokes user functions.
    pub fn compile(&self, registry: &StepRegistry) -> Result<CompiledGraph, CompileError> {
        let mut nodes: HashMap<String, Arc<dyn Step>> = HashMap::new();
        for node in &self.nodes {
            if node.id == START || node.id == END {
                return Err(CompileError::ReservedNodeId(node.id.clone()));
            }
            let step = registry
                .step(&node.function_name)
                .ok_or_else(|| CompileError::UnknownFunction(node.function_name.clone()))?;
            if nodes.insert(node.id.clone(), step).is_some() {
                return Err(CompileError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut transitions: HashMap<String, Transition> = HashMap::new();

        for edge in &self.edges {
            if edge.source != START && !nodes.contains_key(&edge.source) {
                return Err(CompileError::UnknownNode(edge.source.clone()));
            }
            let target = resolve_target(&edge.target, &nodes)?;
            if transitions
                .insert(edge.source.clone(), Transition::Unconditional(target))
                .is_some()
            {
                return Err(CompileError::ConflictingTransition(edge.source.clone()));
            }
        }

        for cond in &self.conditional_edges {
            let condition = registry
                .condition(&cond.condition_function)
                .ok_or_else(|| CompileError::UnknownFunction(cond.condition_function.clone()))?;
            if !nodes.contains_key(&cond.source) {
                return Err(CompileError::UnknownNode(cond.source.clone()));
            }
            let mut mapping = BTreeMap::new();
            for (branch, target) in &cond.mapping {
                mapping.insert(branch.clone(), resolve_target(target, &nodes)?);
            }
            let transition = Transition::Conditional {
                name: cond.condition_function.clone(),
                condition,
                mapping,
            };
            if transitions.insert(cond.source.clone(), transition).is_some() {
                return Err(CompileError::ConflictingTransition(cond.source.clone()));
            }
        }

        if !transitions.contains_key(START) {
            return Err(CompileError::MissingStart);
        }

        let mut reached: HashSet<&str> = HashSet::new();
        let mut frontier = vec![START];
        while let Some(current) = frontier.pop() {
            let Some(transition) = transitions.get(current) else {
                continue;
            };
            let targets: Vec<&Target> = match transition {
                Transition::Unconditional(target) => vec![target],
                Transition::Conditional { mapping, .. } => mapping.values().collect(),
            };
            for target in targets {
                if let Target::Node(id) = target {
                    if reached.insert(id.as_str()) {
                        frontier.push(id);
                    }
                }
            }
        }
        for node in &self.nodes {
            if !reached.contains(node.id.as_str()) {
                return Err(CompileError::UnreachableNode(node.id.clone()));
            }
        }

        Ok(CompiledGraph { nodes, transitions })
    }
}

/// Maps an edge/mapping target string onto [`Target`]: `"END"` exits, any
/// other spelling must be a declared node id.
fn resolve_target(
    target: &str,
    nodes: &HashMap<String, Arc<dyn Step>>,
) -> Result<Target, CompileError> {
    if target == END {
        Ok(Target::End)
    } else if nodes.contains_key(target) {
        Ok(Target::Node(target.to_string()))
    } else {
        Err(CompileError::UnknownNode(target.to_string()))
    }
}
