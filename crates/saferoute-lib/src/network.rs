//! Road network ingestion from local road-segment files.
//!
//! A segment file is a CSV document with the header
//! `from,to,length_m,highway,name,maxspeed,oneway`. The `highway` tag decides
//! how each segment is annotated for learner routing:
//!
//! | highway                                       | congestion | hazard |
//! |-----------------------------------------------|------------|--------|
//! | `motorway`, `trunk`, `primary`                | high       | no     |
//! | `secondary`, `tertiary`                       | medium     | no     |
//! | `motorway_link`, `trunk_link`, `primary_link` | low        | yes    |
//! | anything else                                 | low        | no     |
//!
//! Segments are inserted in both directions unless flagged `oneway`.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{Congestion, EdgeSpec, Graph};

/// Minimum Jaro-Winkler similarity for a node name to be suggested.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// One row of a road-segment file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub from: String,
    pub to: String,
    pub length_m: f64,
    #[serde(default)]
    pub highway: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub maxspeed: Option<String>,
    #[serde(default)]
    pub oneway: Option<bool>,
}

impl RoadSegment {
    /// Edge attributes derived from the segment's road classification.
    pub fn edge_spec(&self) -> EdgeSpec {
        let mut spec = EdgeSpec::new(self.length_m)
            .with_congestion(classify_congestion(&self.highway))
            .with_advisory(advisory_for(
                &self.highway,
                self.name.as_deref(),
                self.maxspeed.as_deref(),
            ));
        if is_hazard(&self.highway) {
            spec = spec.hazardous();
        }
        spec
    }

    pub fn is_oneway(&self) -> bool {
        self.oneway.unwrap_or(false)
    }
}

/// Traffic density expected on a road of the given `highway` class.
pub fn classify_congestion(highway: &str) -> Congestion {
    match highway {
        "motorway" | "trunk" | "primary" => Congestion::High,
        "secondary" | "tertiary" => Congestion::Medium,
        _ => Congestion::Low,
    }
}

/// Slip roads merge into fast traffic with poor sight lines.
pub fn is_hazard(highway: &str) -> bool {
    matches!(highway, "motorway_link" | "trunk_link" | "primary_link")
}

/// Driving advisory shown to learners on a road of the given class.
pub fn advisory_for(highway: &str, name: Option<&str>, maxspeed: Option<&str>) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    let label = name.unwrap_or("this road");

    let mut advisory = match highway {
        "motorway" => format!("Highway driving on {label}: check mirrors, maintain highway speed"),
        "primary" => format!("Main road {label}: be alert for intersections"),
        "residential" => format!("Residential street {label}: watch for children"),
        _ => match name {
            Some(name) => format!("Navigate carefully on {name}"),
            None => "Drive safely".to_string(),
        },
    };

    if let Some(limit) = maxspeed.map(str::trim).filter(|s| !s.is_empty()) {
        advisory.push_str(&format!(" (speed limit: {limit})"));
    }
    advisory
}

/// Road graph keyed by intersection name, plus the set of every endpoint.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    graph: Graph<String>,
    endpoints: BTreeSet<String>,
}

impl RoadNetwork {
    /// Load a road-segment CSV file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let network = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            nodes = network.endpoints.len(),
            edges = network.graph.edge_count(),
            "road network loaded"
        );
        Ok(network)
    }

    /// Parse road segments from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut network = Self::default();
        let mut record = csv::StringRecord::new();
        while csv_reader.read_record(&mut record)? {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let segment: RoadSegment = record
                .deserialize(Some(&headers))
                .map_err(|err| invalid_row(line, err))?;
            network
                .insert_segment(segment)
                .map_err(|err| invalid_row(line, err))?;
        }

        debug!(
            nodes = network.endpoints.len(),
            edges = network.graph.edge_count(),
            "parsed road segments"
        );
        Ok(network)
    }

    /// Build a network from already-decoded segments.
    pub fn from_segments(segments: impl IntoIterator<Item = RoadSegment>) -> Result<Self> {
        let mut network = Self::default();
        for segment in segments {
            network.insert_segment(segment)?;
        }
        Ok(network)
    }

    fn insert_segment(&mut self, segment: RoadSegment) -> Result<()> {
        let spec = segment.edge_spec();
        if segment.is_oneway() {
            self.graph
                .add_edge(segment.from.clone(), segment.to.clone(), spec)?;
        } else {
            self.graph
                .add_road(segment.from.clone(), segment.to.clone(), spec)?;
        }
        self.endpoints.insert(segment.from);
        self.endpoints.insert(segment.to);
        Ok(())
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Every intersection named by a segment, including one-way sinks.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains(name)
    }

    /// Resolve `name` to a known node, suggesting close matches on failure.
    pub fn resolve_node(&self, name: &str) -> Result<String> {
        if self.contains(name) {
            return Ok(name.to_string());
        }
        Err(Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.fuzzy_node_matches(name, 3),
        })
    }

    /// Node names similar to `query`, best match first, at most `limit`.
    pub fn fuzzy_node_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .endpoints
            .iter()
            .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

fn invalid_row(line: u64, err: impl std::fmt::Display) -> Error {
    warn!(line, %err, "invalid road segment");
    Error::NetworkParse {
        line,
        message: err.to_string(),
    }
}
