//! Network loading plus the `connected` and `stats` subcommands.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use saferoute_lib::{is_connected, RoadNetwork};

use crate::output::{
    render_connectivity, render_stats, ConnectivityReport, NetworkStats, OutputFormat,
};

/// Environment variable consulted when `--network` is not given.
pub const NETWORK_ENV_VAR: &str = "SAFEROUTE_NETWORK";

/// Resolve the road-segment file from the CLI flag or `SAFEROUTE_NETWORK`.
pub fn resolve_network_path(cli_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path.to_path_buf());
    }
    std::env::var(NETWORK_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("no road network given; pass --network or set {NETWORK_ENV_VAR}"))
}

/// Load the road network named on the command line.
pub fn load_network(cli_path: Option<&Path>) -> Result<RoadNetwork> {
    let path = resolve_network_path(cli_path)?;
    RoadNetwork::load(&path)
        .with_context(|| format!("failed to load road network from {}", path.display()))
}

/// Handle the `connected` subcommand.
pub fn handle_connected(
    network: &RoadNetwork,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let start = network.resolve_node(from)?;
    let goal = network.resolve_node(to)?;
    let report = ConnectivityReport {
        connected: is_connected(network.graph(), &start, &goal),
        from: start,
        to: goal,
    };
    println!("{}", render_connectivity(&report, format)?);
    Ok(())
}

/// Handle the `stats` subcommand.
pub fn handle_stats(network: &RoadNetwork, format: OutputFormat) -> Result<()> {
    let graph = network.graph();
    let hazardous_segments = graph
        .nodes()
        .flat_map(|node| graph.neighbors(node.as_str()))
        .filter(|edge| edge.hazard)
        .count();
    let stats = NetworkStats {
        intersections: network.nodes().count(),
        road_segments: graph.edge_count(),
        hazardous_segments,
    };
    println!("{}", render_stats(&stats, format)?);
    Ok(())
}
