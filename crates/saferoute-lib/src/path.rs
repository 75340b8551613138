use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Edge, Graph, NodeKey};

/// Learner mode adds this multiple of an edge's base cost when it is hazardous.
const HAZARD_PENALTY_FACTOR: f64 = 2.0;

/// Cost model applied to edges during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Plain base costs; the fastest route.
    #[default]
    Normal,
    /// Base costs biased away from congested and hazardous segments, with
    /// advisories collected along the route.
    Learner,
}

impl RouteMode {
    /// Mode-adjusted weight of `edge`. Never negative for a validated edge.
    pub fn effective_cost<N>(self, edge: &Edge<N>) -> f64 {
        let base = edge.base_cost;
        match self {
            RouteMode::Normal => base,
            RouteMode::Learner => {
                let crowd_bias = base * edge.congestion.bias_factor();
                let hazard_penalty = if edge.hazard {
                    base * HAZARD_PENALTY_FACTOR
                } else {
                    0.0
                };
                base + crowd_bias + hazard_penalty
            }
        }
    }

    pub fn collects_advisories(self) -> bool {
        matches!(self, RouteMode::Learner)
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Normal => "normal",
            RouteMode::Learner => "learner",
        };
        f.write_str(value)
    }
}

/// A hazard-flagged segment traversed by a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardAlert<N> {
    pub from: N,
    pub to: N,
}

impl<N: fmt::Display> fmt::Display for HazardAlert<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blind spot at {} to {}", self.from, self.to)
    }
}

/// Outcome of [`shortest_path`].
///
/// An empty `path` means no route exists. A single-node path is a valid,
/// successful result for `start == end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    pub path: Vec<N>,
    pub advisories: Vec<String>,
    pub hazard_alerts: Vec<HazardAlert<N>>,
}

impl<N> PathResult<N> {
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            advisories: Vec::new(),
            hazard_alerts: Vec::new(),
        }
    }

    fn single(node: N) -> Self {
        Self {
            path: vec![node],
            advisories: Vec::new(),
            hazard_alerts: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the least-cost route from `start` to `end` under `mode`.
///
/// Runs Dijkstra's algorithm over mode-adjusted edge weights. Frontier ties
/// on equal cost pop the smaller node identifier first. Returns
/// [`PathResult::not_found`] when `end` is unreachable or `start` has no
/// outgoing edges (unless `start == end`).
pub fn shortest_path<N: NodeKey>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    mode: RouteMode,
) -> PathResult<N> {
    if start == end {
        return PathResult::single(start.clone());
    }
    if !graph.contains_node(start) {
        debug!(%start, %end, "start node has no outgoing edges");
        return PathResult::not_found();
    }

    let mut distances: HashMap<N, f64> = HashMap::new();
    let mut parents: HashMap<N, N> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start.clone(), 0.0);
    queue.push(QueueEntry::new(start.clone(), 0.0));

    while let Some(entry) = queue.pop() {
        let best = distances
            .get(&entry.node)
            .copied()
            .unwrap_or(f64::INFINITY);
        if entry.cost.0 > best {
            continue;
        }
        settled += 1;

        if entry.node == *end {
            break;
        }

        for edge in graph.neighbors(&entry.node) {
            let next_cost = entry.cost.0 + mode.effective_cost(edge);
            let known = distances
                .get(&edge.target)
                .copied()
                .unwrap_or(f64::INFINITY);
            if next_cost < known {
                distances.insert(edge.target.clone(), next_cost);
                parents.insert(edge.target.clone(), entry.node.clone());
                queue.push(QueueEntry::new(edge.target.clone(), next_cost));
            }
        }
    }

    debug!(%start, %end, %mode, settled, "shortest path search finished");

    let Some(path) = reconstruct_path(&parents, start, end) else {
        return PathResult::not_found();
    };

    let (advisories, hazard_alerts) = collect_annotations(graph, &path, mode);
    PathResult {
        path,
        advisories,
        hazard_alerts,
    }
}

/// Whether any directed route leads from `start` to `end`.
///
/// Breadth-first reachability over the recorded edges, ignoring costs.
pub fn is_connected<N: NodeKey>(graph: &Graph<N>, start: &N, end: &N) -> bool {
    if start == end {
        return true;
    }

    let mut visited: HashSet<&N> = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbors(current) {
            let next = &edge.target;
            if next == end {
                return true;
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}

fn reconstruct_path<N: NodeKey>(parents: &HashMap<N, N>, start: &N, end: &N) -> Option<Vec<N>> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        current = parents.get(current)?;
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}

fn collect_annotations<N: NodeKey>(
    graph: &Graph<N>,
    path: &[N],
    mode: RouteMode,
) -> (Vec<String>, Vec<HazardAlert<N>>) {
    let mut advisories = Vec::new();
    let mut hazard_alerts = Vec::new();

    for hop in path.windows(2) {
        let (from, to) = (&hop[0], &hop[1]);
        let Some(edge) = graph.first_edge(from, to) else {
            continue;
        };

        if mode.collects_advisories() {
            if let Some(advisory) = edge.advisory.as_deref().filter(|text| !text.is_empty()) {
                advisories.push(advisory.to_string());
            }
        }
        // Reported in every mode: normal routing does not steer around hazards.
        if edge.hazard {
            hazard_alerts.push(HazardAlert {
                from: from.clone(),
                to: to.clone(),
            });
        }
    }

    (advisories, hazard_alerts)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry<N> {
    node: N,
    cost: FloatOrd,
}

impl<N> QueueEntry<N> {
    fn new(node: N, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl<N: Ord> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Congestion;

    fn edge(base_cost: f64, congestion: Congestion, hazard: bool) -> Edge<&'static str> {
        Edge {
            target: "T",
            base_cost,
            congestion,
            advisory: None,
            hazard,
        }
    }

    #[test]
    fn normal_mode_ignores_bias() {
        let e = edge(10.0, Congestion::High, true);
        assert_eq!(RouteMode::Normal.effective_cost(&e), 10.0);
    }

    #[test]
    fn learner_mode_adds_crowd_and_hazard_penalties() {
        assert_eq!(
            RouteMode::Learner.effective_cost(&edge(10.0, Congestion::Low, false)),
            10.0
        );
        assert_eq!(
            RouteMode::Learner.effective_cost(&edge(10.0, Congestion::Medium, false)),
            12.0
        );
        assert_eq!(
            RouteMode::Learner.effective_cost(&edge(10.0, Congestion::High, true)),
            35.0
        );
    }

    #[test]
    fn queue_pops_lowest_cost_then_smallest_node() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("C", 1.0));
        queue.push(QueueEntry::new("B", 1.0));
        queue.push(QueueEntry::new("A", 2.0));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn hazard_alert_display_names_both_endpoints() {
        let alert = HazardAlert { from: "X", to: "Y" };
        assert_eq!(alert.to_string(), "Blind spot at X to Y");
    }
}
