use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use saferoute_cli::commands::network::{handle_connected, handle_stats, load_network};
use saferoute_cli::commands::route::{handle_route_command, ModeArg, RouteCommandArgs};
use saferoute_cli::logging::{init_logging, LoggingConfig};
use saferoute_cli::output::OutputFormat;
use saferoute_lib::summary::DEFAULT_SPEED_MPH;

#[derive(Parser, Debug)]
#[command(author, version, about = "Learner-aware road routing utilities")]
struct Cli {
    /// Road-segment CSV file (falls back to SAFEROUTE_NETWORK).
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two intersections.
    Route {
        /// Starting intersection name.
        #[arg(long = "from")]
        from: String,
        /// Destination intersection name.
        #[arg(long = "to")]
        to: String,
        /// Routing mode.
        #[arg(long, value_enum, default_value_t = ModeArg::Normal)]
        mode: ModeArg,
        /// Average speed in mph for the travel-time estimate.
        #[arg(long = "speed-mph", default_value_t = DEFAULT_SPEED_MPH)]
        speed_mph: f64,
    },
    /// Check whether any directed route joins two intersections.
    Connected {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Report the size of the loaded road network.
    Stats,
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let network = load_network(cli.network.as_deref())?;

    match cli.command {
        Command::Route {
            from,
            to,
            mode,
            speed_mph,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                mode,
                speed_mph,
            };
            handle_route_command(&network, &args, cli.format)
        }
        Command::Connected { from, to } => handle_connected(&network, &from, &to, cli.format),
        Command::Stats => handle_stats(&network, cli.format),
    }
}
