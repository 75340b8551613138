//! Route command handler for computing paths between intersections.

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use saferoute_lib::{plan_route, RoadNetwork, RouteMode, RouteRequest, TravelSpeed};

use crate::output::{render_route_plan, OutputFormat};

/// Routing mode selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Fastest route by raw distance.
    #[default]
    Normal,
    /// Safer route that avoids congestion and blind spots, with advisories.
    Learner,
}

impl From<ModeArg> for RouteMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Normal => RouteMode::Normal,
            ModeArg::Learner => RouteMode::Learner,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting intersection name.
    pub from: String,
    /// Destination intersection name.
    pub to: String,
    pub mode: ModeArg,
    /// Average speed used for the travel-time estimate.
    pub speed_mph: f64,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> Result<RouteRequest> {
        let speed = TravelSpeed::from_mph(self.speed_mph)?;
        Ok(RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            mode: self.mode.into(),
            speed,
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network: &RoadNetwork,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request()?;
    let plan = plan_route(network, &request)?;
    info!(
        mode = %plan.mode,
        hops = plan.hop_count(),
        hazards = plan.hazard_alerts.len(),
        "route planned"
    );
    println!("{}", render_route_plan(&plan, format)?);
    Ok(())
}
