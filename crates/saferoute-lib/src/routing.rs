//! Route planning over a loaded [`RoadNetwork`].
//!
//! [`plan_route`] is the entry point for callers that work with node names:
//! it resolves both endpoints, rejects disconnected pairs up front, runs the
//! biased search and attaches a [`RouteSummary`]. Failures are reported as
//! typed errors instead of the empty sentinel returned by
//! [`shortest_path`](crate::path::shortest_path).
//!
//! # Example
//!
//! ```ignore
//! use saferoute_lib::{plan_route, RoadNetwork, RouteRequest};
//!
//! let network = RoadNetwork::load("campus_roads.csv".as_ref())?;
//! let plan = plan_route(&network, &RouteRequest::learner("Rose St", "Farm Rd"))?;
//! println!("Route: {} hops", plan.hop_count());
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::RoadNetwork;
use crate::path::{is_connected, shortest_path, HazardAlert, RouteMode};
use crate::summary::{RouteSummary, TravelSpeed};

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub mode: RouteMode,
    pub speed: TravelSpeed,
}

impl RouteRequest {
    /// Fastest-route request at the default travel speed.
    pub fn normal(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            mode: RouteMode::Normal,
            speed: TravelSpeed::default(),
        }
    }

    /// Learner-mode request at the default travel speed.
    pub fn learner(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            mode: RouteMode::Learner,
            ..Self::normal(start, goal)
        }
    }

    pub fn with_speed(mut self, speed: TravelSpeed) -> Self {
        self.speed = speed;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub mode: RouteMode,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub advisories: Vec<String>,
    pub hazard_alerts: Vec<HazardAlert<String>>,
    pub summary: RouteSummary,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Plan a route between two named nodes of `network`.
pub fn plan_route(network: &RoadNetwork, request: &RouteRequest) -> Result<RoutePlan> {
    let start = network.resolve_node(&request.start)?;
    let goal = network.resolve_node(&request.goal)?;
    let graph = network.graph();

    if !is_connected(graph, &start, &goal) {
        debug!(%start, %goal, "endpoints are not connected");
        return Err(Error::RouteNotFound { start, goal });
    }

    let result = shortest_path(graph, &start, &goal, request.mode);
    if !result.is_found() {
        return Err(Error::RouteNotFound { start, goal });
    }

    let summary = RouteSummary::from_path(graph, &result.path, request.speed);
    Ok(RoutePlan {
        mode: request.mode,
        start,
        goal,
        steps: result.path,
        advisories: result.advisories,
        hazard_alerts: result.hazard_alerts,
        summary,
    })
}
