//! # Pantheon Layering Engine
//!
//! Partitions a population of performance vectors into Pareto "onion"
//! layers: layer 0 is the frontier of the whole population, layer 1 the
//! frontier of what remains once layer 0 is peeled away, and so on until the
//! working pool is empty.
//!
//! Layer membership is a set property and fully deterministic. The order
//! entries are *listed* within a layer is a presentation concern, pinned here
//! to the natural ordering of entry ids so that two runs over the same
//! population produce byte-identical output.

use crate::error::LayeringError;
use core_types::{DimensionSet, PerformanceVector, SkippedEntry};
use dominance::frontier_among;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;

/// The result of peeling one population under one dimension set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerAssignments {
    /// Every input entry, mapped to its layer. `None` is the unranked
    /// sentinel for vectors that were ineligible under the dimension set.
    pub layers: BTreeMap<String, Option<u32>>,
    /// Ranked entry ids, layer by layer, each layer sorted by id.
    pub ranked: Vec<Vec<String>>,
    /// The ineligible entries, with the reason each one sat out.
    pub skipped: Vec<SkippedEntry>,
}

impl LayerAssignments {
    /// The highest layer index observed, if anything was ranked.
    pub fn max_layer(&self) -> Option<u32> {
        if self.ranked.is_empty() {
            None
        } else {
            Some((self.ranked.len() - 1) as u32)
        }
    }

    /// Ids of the eligible entries, in ranking order.
    pub fn ranked_ids(&self) -> impl Iterator<Item = &String> {
        self.ranked.iter().flatten()
    }
}

/// A stateless engine for assigning Pareto layers by iterative frontier
/// extraction.
#[derive(Debug, Default)]
pub struct LayeringEngine {}

impl LayeringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peels `population` into layers under `dims`.
    ///
    /// Entries failing the dimension-set check are assigned the unranked
    /// sentinel and excluded from peeling entirely; one bad record never
    /// aborts the rest. Callers guarantee entry ids are unique.
    pub fn assign(
        &self,
        population: &[PerformanceVector],
        dims: &DimensionSet,
    ) -> Result<LayerAssignments, LayeringError> {
        let full = dims.full_subset();
        let mut layers: BTreeMap<String, Option<u32>> = BTreeMap::new();
        let mut skipped = Vec::new();

        // 1. Partition the pool into the eligible working set and the
        //    unranked remainder.
        let mut remaining: Vec<usize> = Vec::with_capacity(population.len());
        for (index, vector) in population.iter().enumerate() {
            match vector.check_against(dims) {
                Ok(()) => remaining.push(index),
                Err(reason) => {
                    layers.insert(vector.id.clone(), None);
                    skipped.push(SkippedEntry {
                        id: vector.id.clone(),
                        reason: reason.to_string(),
                    });
                }
            }
        }

        // 2. Repeatedly extract the frontier of what remains.
        let mut ranked: Vec<Vec<String>> = Vec::new();
        let mut layer: u32 = 0;
        while !remaining.is_empty() {
            let front = frontier_among(population, &remaining, &full)?;
            if front.is_empty() {
                // A non-empty finite pool always has maximal elements; an
                // empty frontier here would loop forever.
                return Err(LayeringError::Internal(format!(
                    "frontier extraction made no progress at layer {} with {} entries remaining",
                    layer,
                    remaining.len()
                )));
            }

            for &index in &front {
                layers.insert(population[index].id.clone(), Some(layer));
            }

            let mut ids: Vec<String> =
                front.iter().map(|&index| population[index].id.clone()).collect();
            ids.sort();

            tracing::debug!(
                layer,
                peeled = ids.len(),
                remaining = remaining.len() - front.len(),
                "peeled frontier"
            );

            remaining.retain(|index| !front.contains(index));
            ranked.push(ids);
            layer += 1;
        }

        Ok(LayerAssignments {
            layers,
            ranked,
            skipped,
        })
    }
}
