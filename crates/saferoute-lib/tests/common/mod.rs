//! Shared fixtures for integration tests.

use std::path::PathBuf;

use saferoute_lib::{Congestion, EdgeSpec, Graph, RoadNetwork};

/// Path to the campus road-segment fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_roads.csv")
}

#[allow(dead_code)]
pub fn campus_network() -> RoadNetwork {
    RoadNetwork::load(&fixture_path()).expect("fixture loads")
}

/// Six-node graph where the cheapest raw route crosses a hazardous,
/// congested A -> B edge and the learner route detours through C.
#[allow(dead_code)]
pub fn learner_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph
        .add_edge(
            "A",
            "B",
            EdgeSpec::new(4.0)
                .with_congestion(Congestion::High)
                .with_advisory("Blind spot alert: check right")
                .hazardous(),
        )
        .unwrap();
    graph
        .add_edge(
            "A",
            "C",
            EdgeSpec::new(5.0).with_advisory("Instructor: maintain speed"),
        )
        .unwrap();
    graph
        .add_edge(
            "B",
            "D",
            EdgeSpec::new(5.0).with_congestion(Congestion::Medium),
        )
        .unwrap();
    graph.add_edge("C", "B", EdgeSpec::new(1.0)).unwrap();
    graph
        .add_edge(
            "C",
            "E",
            EdgeSpec::new(10.0).with_congestion(Congestion::High),
        )
        .unwrap();
    graph.add_edge("D", "E", EdgeSpec::new(2.0)).unwrap();
    graph
        .add_edge(
            "E",
            "F",
            EdgeSpec::new(3.0).with_congestion(Congestion::Medium),
        )
        .unwrap();
    graph
}
