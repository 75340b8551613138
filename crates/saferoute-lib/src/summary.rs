//! Distance, turn and travel-time summaries for computed routes.
//!
//! Base edge costs are interpreted as metres. Travel time is a flat projection
//! from a single average speed; no per-road speed model is applied.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeKey};

/// Miles per metre.
pub const MILES_PER_METER: f64 = 0.000621371;

/// Average urban driving speed used when the caller does not supply one.
pub const DEFAULT_SPEED_MPH: f64 = 30.0;

/// Convert metres to statute miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

/// Validated average travel speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelSpeed {
    mph: f64,
}

impl TravelSpeed {
    pub fn from_mph(mph: f64) -> Result<Self> {
        if !mph.is_finite() || mph <= 0.0 {
            return Err(Error::InvalidSpeed { mph });
        }
        Ok(Self { mph })
    }

    pub fn mph(&self) -> f64 {
        self.mph
    }
}

impl Default for TravelSpeed {
    fn default() -> Self {
        Self {
            mph: DEFAULT_SPEED_MPH,
        }
    }
}

/// Aggregate figures for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub distance_km: f64,
    pub distance_miles: f64,
    pub time_minutes: f64,
    /// Every intermediate node counts as one turn.
    pub turns: usize,
    pub nodes: usize,
}

impl RouteSummary {
    /// Summary for a path with fewer than two nodes.
    pub fn empty() -> Self {
        Self {
            distance_meters: 0.0,
            distance_km: 0.0,
            distance_miles: 0.0,
            time_minutes: 0.0,
            turns: 0,
            nodes: 0,
        }
    }

    /// Summarise `path` using the first-inserted edge for every hop.
    ///
    /// Hops without a matching edge contribute no distance.
    pub fn from_path<N: NodeKey>(graph: &Graph<N>, path: &[N], speed: TravelSpeed) -> Self {
        if path.len() < 2 {
            return Self::empty();
        }

        let distance_meters: f64 = path
            .windows(2)
            .filter_map(|hop| graph.first_edge(&hop[0], &hop[1]))
            .map(|edge| edge.base_cost)
            .sum();
        let distance_miles = meters_to_miles(distance_meters);

        Self {
            distance_meters,
            distance_km: distance_meters / 1000.0,
            distance_miles,
            time_minutes: distance_miles / speed.mph() * 60.0,
            turns: path.len() - 2,
            nodes: path.len(),
        }
    }
}
