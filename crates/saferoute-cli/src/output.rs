//! Output formatting for route plans and network reports.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use saferoute_lib::RoutePlan;

/// Output format for command results on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Network size figures reported by the `stats` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetworkStats {
    pub intersections: usize,
    pub road_segments: usize,
    pub hazardous_segments: usize,
}

/// Reachability answer reported by the `connected` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub from: String,
    pub to: String,
    pub connected: bool,
}

pub fn render_route_plan(plan: &RoutePlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        OutputFormat::Text => Ok(route_plan_text(plan)),
    }
}

pub fn render_stats(stats: &NetworkStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        OutputFormat::Text => Ok(format!(
            "Intersections: {}\nRoad segments: {}\nHazardous segments: {}",
            stats.intersections, stats.road_segments, stats.hazardous_segments
        )),
    }
}

pub fn render_connectivity(report: &ConnectivityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let verdict = if report.connected {
                "connected"
            } else {
                "not connected"
            };
            Ok(format!("{} -> {}: {}", report.from, report.to, verdict))
        }
    }
}

fn route_plan_text(plan: &RoutePlan) -> String {
    let summary = &plan.summary;
    let mut lines = vec![format!(
        "Route ({} mode): {} -> {} ({} hops)",
        plan.mode,
        plan.start,
        plan.goal,
        plan.hop_count()
    )];
    lines.extend(
        plan.steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {}", index + 1, step)),
    );
    lines.push(format!(
        "Distance: {:.2} miles ({:.2} km)",
        summary.distance_miles, summary.distance_km
    ));
    lines.push(format!("Estimated time: {:.1} min", summary.time_minutes));
    lines.push(format!("Turns: {}", summary.turns));

    if !plan.advisories.is_empty() {
        lines.push("Advisories:".to_string());
        lines.extend(plan.advisories.iter().map(|advisory| format!("  - {advisory}")));
    }
    if !plan.hazard_alerts.is_empty() {
        lines.push("Hazard alerts:".to_string());
        lines.extend(plan.hazard_alerts.iter().map(|alert| format!("  ! {alert}")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use saferoute_lib::{HazardAlert, RouteMode, RouteSummary};

    fn sample_plan() -> RoutePlan {
        RoutePlan {
            mode: RouteMode::Learner,
            start: "A".to_string(),
            goal: "C".to_string(),
            steps: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            advisories: vec!["watch for children".to_string()],
            hazard_alerts: vec![HazardAlert {
                from: "B".to_string(),
                to: "C".to_string(),
            }],
            summary: RouteSummary {
                distance_meters: 1000.0,
                distance_km: 1.0,
                distance_miles: 0.621371,
                time_minutes: 1.242742,
                turns: 1,
                nodes: 3,
            },
        }
    }

    #[test]
    fn text_rendering_lists_steps_and_annotations() {
        let text = render_route_plan(&sample_plan(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Route (learner mode): A -> C (2 hops)"));
        assert!(text.contains("  2. B"));
        assert!(text.contains("Distance: 0.62 miles (1.00 km)"));
        assert!(text.contains("  - watch for children"));
        assert!(text.contains("  ! Blind spot at B to C"));
    }

    #[test]
    fn json_rendering_is_structured() {
        let json = render_route_plan(&sample_plan(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "learner");
        assert_eq!(value["steps"][1], "B");
        assert_eq!(value["hazard_alerts"][0]["from"], "B");
        assert_eq!(value["summary"]["turns"], 1);
    }

    #[test]
    fn connectivity_text_names_verdict() {
        let report = ConnectivityReport {
            from: "A".to_string(),
            to: "B".to_string(),
            connected: false,
        };
        assert_eq!(
            render_connectivity(&report, OutputFormat::Text).unwrap(),
            "A -> B: not connected"
        );
    }

    #[test]
    fn text_rendering_omits_empty_annotation_sections() {
        let mut plan = sample_plan();
        plan.advisories.clear();
        plan.hazard_alerts.clear();
        let text = render_route_plan(&plan, OutputFormat::Text).unwrap();
        assert!(!text.contains("Advisories:"));
        assert!(!text.contains("Hazard alerts:"));
        assert!(text.ends_with("Turns: 1"));
    }
}
