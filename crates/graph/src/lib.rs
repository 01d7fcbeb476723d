//! # Pantheon Dominance Graph
//!
//! Turns the layering engine's output into a directed acyclic graph whose
//! edges read "this performance directly out-performs that one".
//!
//! Edges are restricted to *adjacent* layers (parent.layer = child.layer - 1)
//! by deliberate policy. Onion peeling only guarantees a dominator somewhere
//! in an earlier layer, not in the immediately preceding one, so a genuine
//! dominator two layers up gets no edge here. That under-reporting is part
//! of the graph's contract; widening the edge relation would change what
//! downstream consumers render.
//!
//! Acyclicity is free: dominance is a strict partial order and every edge
//! runs from a lower layer index to a higher one.

use crate::error::GraphError;
use core_types::{DimensionSet, PerformanceVector};
use dominance::dominates;
use layering::LayerAssignments;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};

pub mod error;

/// One ranked entry, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagNode {
    pub id: String,
    pub layer: u32,
    /// Display metadata carried through from the input vector.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagStats {
    pub total_entries: usize,
    pub max_layer: u32,
    pub layer_sizes: BTreeMap<u32, usize>,
}

/// The dominance DAG for one mode: nodes in (layer, id) order, edges as
/// (parent id, child id) pairs grouped by child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceDag {
    pub stats: DagStats,
    pub nodes: Vec<DagNode>,
    pub edges: Vec<(String, String)>,
}

impl DominanceDag {
    /// A compact view keeping only nodes at `cutoff` or above in the ranking
    /// (layer index <= `cutoff`) and the edges between them.
    pub fn restricted_to_layers(&self, cutoff: u32) -> DominanceDag {
        let nodes: Vec<DagNode> = self
            .nodes
            .iter()
            .filter(|node| node.layer <= cutoff)
            .cloned()
            .collect();
        let kept: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
        let edges: Vec<(String, String)> = self
            .edges
            .iter()
            .filter(|(parent, child)| {
                kept.contains(parent.as_str()) && kept.contains(child.as_str())
            })
            .cloned()
            .collect();

        let mut layer_sizes: BTreeMap<u32, usize> = BTreeMap::new();
        for node in &nodes {
            *layer_sizes.entry(node.layer).or_insert(0) += 1;
        }
        let max_layer = layer_sizes.keys().next_back().copied().unwrap_or(0);

        DominanceDag {
            stats: DagStats {
                total_entries: nodes.len(),
                max_layer,
                layer_sizes,
            },
            nodes,
            edges,
        }
    }
}

/// Builds the dominance DAG from full-dimension layering output.
#[derive(Debug, Default)]
pub struct DagBuilder {}

impl DagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces a node for every ranked entry and an edge for every
    /// adjacent-layer pair (parent, child) where the parent dominates the
    /// child under the full dimension set. Unranked entries appear nowhere
    /// in the graph.
    pub fn build(
        &self,
        population: &[PerformanceVector],
        dims: &DimensionSet,
        assignments: &LayerAssignments,
    ) -> Result<DominanceDag, GraphError> {
        let by_id: HashMap<&str, &PerformanceVector> =
            population.iter().map(|v| (v.id.as_str(), v)).collect();
        let full = dims.full_subset();

        let mut nodes = Vec::new();
        let mut layer_sizes: BTreeMap<u32, usize> = BTreeMap::new();
        for (layer, ids) in assignments.ranked.iter().enumerate() {
            let layer = layer as u32;
            layer_sizes.insert(layer, ids.len());
            for id in ids {
                let vector = resolve(&by_id, id)?;
                nodes.push(DagNode {
                    id: id.clone(),
                    layer,
                    metadata: vector.metadata.clone(),
                });
            }
        }

        let mut edges = Vec::new();
        for layer in 1..assignments.ranked.len() {
            let parents = &assignments.ranked[layer - 1];
            for child_id in &assignments.ranked[layer] {
                let child = resolve(&by_id, child_id)?;
                for parent_id in parents {
                    let parent = resolve(&by_id, parent_id)?;
                    if dominates(parent, child, &full)? {
                        edges.push((parent_id.clone(), child_id.clone()));
                    }
                }
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            layers = assignments.ranked.len(),
            "dominance graph built"
        );

        Ok(DominanceDag {
            stats: DagStats {
                total_entries: nodes.len(),
                max_layer: assignments.max_layer().unwrap_or(0),
                layer_sizes,
            },
            nodes,
            edges,
        })
    }
}

fn resolve<'a>(
    by_id: &HashMap<&str, &'a PerformanceVector>,
    id: &String,
) -> Result<&'a PerformanceVector, GraphError> {
    by_id
        .get(id.as_str())
        .copied()
        .ok_or_else(|| GraphError::UnknownEntry(id.clone()))
}
