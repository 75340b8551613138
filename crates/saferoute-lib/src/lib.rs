//! SafeRoute library entry points.
//!
//! This crate exposes the weighted road graph, the mode-biased shortest-path
//! engine, route summaries and road-segment ingestion. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod network;
pub mod path;
pub mod routing;
pub mod summary;

pub use error::{Error, Result};
pub use graph::{Congestion, Edge, EdgeSpec, Graph, NodeKey};
pub use network::{RoadNetwork, RoadSegment};
pub use path::{is_connected, shortest_path, HazardAlert, PathResult, RouteMode};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use summary::{meters_to_miles, RouteSummary, TravelSpeed};
