use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier usable as a graph vertex.
///
/// Blanket-implemented for every comparable, hashable, printable type, so
/// `String`, `&str` and the integer types all qualify. `Ord` is needed for the
/// deterministic tie-break in the search frontier and `Display` for hazard
/// alert descriptions.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Qualitative traffic density attached to an edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    #[default]
    Low,
    Medium,
    High,
}

impl Congestion {
    /// Fraction of an edge's base cost added as crowd bias in learner mode.
    pub fn bias_factor(self) -> f64 {
        match self {
            Congestion::Low => 0.0,
            Congestion::Medium => 0.2,
            Congestion::High => 0.5,
        }
    }
}

impl fmt::Display for Congestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Congestion::Low => "low",
            Congestion::Medium => "medium",
            Congestion::High => "high",
        };
        f.write_str(value)
    }
}

/// Directed edge within the road graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N> {
    pub target: N,
    pub base_cost: f64,
    pub congestion: Congestion,
    pub advisory: Option<String>,
    pub hazard: bool,
}

/// Attributes for a new edge, consumed by [`Graph::add_edge`].
///
/// Only the base cost is mandatory; congestion defaults to
/// [`Congestion::Low`], with no advisory and no hazard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeSpec {
    pub base_cost: f64,
    pub congestion: Congestion,
    pub advisory: Option<String>,
    pub hazard: bool,
}

impl EdgeSpec {
    pub fn new(base_cost: f64) -> Self {
        Self {
            base_cost,
            ..Self::default()
        }
    }

    pub fn with_congestion(mut self, congestion: Congestion) -> Self {
        self.congestion = congestion;
        self
    }

    pub fn with_advisory(mut self, advisory: impl Into<String>) -> Self {
        self.advisory = Some(advisory.into());
        self
    }

    /// Mark the edge as a visibility-obstructed segment.
    pub fn hazardous(mut self) -> Self {
        self.hazard = true;
        self
    }

    fn into_edge<N>(self, target: N) -> Edge<N> {
        Edge {
            target,
            base_cost: self.base_cost,
            congestion: self.congestion,
            advisory: self.advisory,
            hazard: self.hazard,
        }
    }
}

#[derive(Debug, Clone)]
struct Adjacency<N> {
    order: Vec<N>,
    edges: HashMap<N, Vec<Edge<N>>>,
}

impl<N> Default for Adjacency<N> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            edges: HashMap::new(),
        }
    }
}

/// Weighted directed graph used by the path engine.
///
/// Nodes are remembered in the order their first outgoing edge was inserted.
/// The adjacency lives behind an [`Arc`], so cloning a built graph hands out a
/// cheap read-only snapshot; inserting into a shared clone copies on write.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: Arc<Adjacency<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: Arc::new(Adjacency::default()),
        }
    }
}

impl<N: NodeKey> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directed edge from `source` to `target`.
    ///
    /// Fails with [`Error::InvalidEdgeCost`] when the base cost is negative or
    /// NaN, leaving the graph untouched. Self-loops and parallel edges are kept.
    pub fn add_edge(&mut self, source: N, target: N, spec: EdgeSpec) -> Result<()> {
        if spec.base_cost.is_nan() || spec.base_cost < 0.0 {
            return Err(Error::InvalidEdgeCost {
                source_node: source.to_string(),
                target_node: target.to_string(),
                cost: spec.base_cost,
            });
        }

        let adjacency = Arc::make_mut(&mut self.adjacency);
        let edge = spec.into_edge(target);
        match adjacency.edges.get_mut(&source) {
            Some(edges) => edges.push(edge),
            None => {
                adjacency.order.push(source.clone());
                adjacency.edges.insert(source, vec![edge]);
            }
        }
        Ok(())
    }

    /// Insert a two-way road as two independent directed edges.
    pub fn add_road(&mut self, a: N, b: N, spec: EdgeSpec) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), spec.clone())?;
        self.add_edge(b, a, spec)
    }

    /// Outgoing edges of `node`, or an empty slice when it has none recorded.
    pub fn neighbors<Q>(&self, node: &Q) -> &[Edge<N>]
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .edges
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First-inserted edge from `source` to `target`, if any.
    pub fn first_edge<Q>(&self, source: &Q, target: &N) -> Option<&Edge<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(source)
            .iter()
            .find(|edge| edge.target == *target)
    }

    /// Whether `node` has an adjacency entry (at least one outgoing edge).
    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.edges.contains_key(node)
    }

    /// Nodes with outgoing edges, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.order.iter()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learner_bias_factors_scale_with_congestion() {
        assert_eq!(Congestion::Low.bias_factor(), 0.0);
        assert_eq!(Congestion::Medium.bias_factor(), 0.2);
        assert_eq!(Congestion::High.bias_factor(), 0.5);
    }

    #[test]
    fn edge_spec_defaults_are_low_and_safe() {
        let spec = EdgeSpec::new(3.5);
        assert_eq!(spec.congestion, Congestion::Low);
        assert!(spec.advisory.is_none());
        assert!(!spec.hazard);
    }

    #[test]
    fn clone_is_isolated_from_later_insertions() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", EdgeSpec::new(1.0)).unwrap();
        let snapshot = graph.clone();
        graph.add_edge("A", "C", EdgeSpec::new(2.0)).unwrap();

        assert_eq!(snapshot.neighbors("A").len(), 1);
        assert_eq!(graph.neighbors("A").len(), 2);
    }
}
