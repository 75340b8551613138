use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus_roads.csv")
        .canonicalize()
        .expect("fixture network present")
}

#[test]
fn stats_counts_fixture_network() {
    cargo_bin_cmd!("saferoute-cli")
        .env("RUST_LOG", "error")
        .arg("--network")
        .arg(fixture_path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Intersections: 7"))
        .stdout(predicate::str::contains("Road segments: 13"))
        .stdout(predicate::str::contains("Hazardous segments: 1"));
}

#[test]
fn network_can_come_from_environment() {
    cargo_bin_cmd!("saferoute-cli")
        .env("RUST_LOG", "error")
        .env("SAFEROUTE_NETWORK", fixture_path())
        .args(["connected", "--from", "Farm Rd Gate", "--to", "Rose St & Euclid Ave"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Farm Rd Gate -> Rose St & Euclid Ave: connected",
        ));
}

#[test]
fn separate_components_are_not_connected() {
    cargo_bin_cmd!("saferoute-cli")
        .env("RUST_LOG", "error")
        .arg("--network")
        .arg(fixture_path())
        .args(["connected", "--from", "Stadium Lot", "--to", "Farm Rd Gate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not connected"));
}

#[test]
fn missing_network_is_reported() {
    cargo_bin_cmd!("saferoute-cli")
        .env("RUST_LOG", "error")
        .env_remove("SAFEROUTE_NETWORK")
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no road network given"));
}

#[test]
fn negative_segment_length_fails_to_load() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("roads.csv");
    fs::write(&path, "from,to,length_m\nA,B,5\nB,C,-2\n").expect("write network");

    cargo_bin_cmd!("saferoute-cli")
        .env("RUST_LOG", "error")
        .arg("--network")
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load road network"))
        .stderr(predicate::str::contains("line 3"));
}
