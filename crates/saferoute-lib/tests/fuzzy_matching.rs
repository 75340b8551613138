mod common;

use saferoute_lib::{plan_route, RouteRequest};

use common::campus_network;

#[test]
fn fuzzy_matches_returns_similar_names() {
    let network = campus_network();

    let exact = network.fuzzy_node_matches("Farm Rd Gate", 3);
    assert_eq!(exact.first().map(String::as_str), Some("Farm Rd Gate"));

    let typo = network.fuzzy_node_matches("Farm Rd Gat", 3);
    assert!(typo.contains(&"Farm Rd Gate".to_string()));

    let case = network.fuzzy_node_matches("stadium lot", 3);
    assert!(case.contains(&"Stadium Lot".to_string()));
}

#[test]
fn fuzzy_matches_respects_limit() {
    let network = campus_network();
    let matches = network.fuzzy_node_matches("Limestone &", 1);
    assert!(matches.len() <= 1);
}

#[test]
fn fuzzy_matches_filters_low_similarity() {
    let network = campus_network();
    let no_match = network.fuzzy_node_matches("Qqqqqqqqqq", 3);
    assert!(no_match.is_empty());
}

#[test]
fn unknown_node_includes_suggestions() {
    let network = campus_network();
    let err = plan_route(&network, &RouteRequest::normal("Farm Rd Gat", "Stadium Lot"))
        .expect_err("unknown start");

    let message = err.to_string();
    assert!(message.contains("unknown node: Farm Rd Gat"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Farm Rd Gate"));
}
