//! Integration tests for the parse phase: document decoding, defaults,
//! graph building.

use std::path::Path;

use flowlint::error::ParseError;
use flowlint::parse::{self, ExecutionMode, WorkflowGraph};

#[test]
fn parse_example_workflow() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("should parse");
    assert_eq!(workflow.nodes.len(), 5);
    assert_eq!(workflow.connections.len(), 4);
    assert_eq!(workflow.code_nodes().count(), 1);
    assert_eq!(workflow.merge_nodes().count(), 1);
}

#[test]
fn parse_round_trip() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("should parse");
    let serialized = serde_json::to_string(&workflow).expect("should serialize");
    let workflow2 = parse::parse(&serialized).expect("should parse again");
    assert_eq!(workflow.nodes.len(), workflow2.nodes.len());
    assert_eq!(workflow.connections.len(), workflow2.connections.len());
}

#[test]
fn parse_invalid_json_is_decode_error() {
    let result = parse::parse("not valid json");
    assert!(matches!(result, Err(ParseError::Decode(_))));
}

#[test]
fn parse_rejects_wrong_shape() {
    assert!(parse::parse(r#"{ "nodes": 42 }"#).is_err());
    assert!(parse::parse(r#"{ "nodes": [ { "type": "merge" } ] }"#).is_err());
}

#[test]
fn missing_connections_defaults_to_empty() {
    let workflow = parse::parse(r#"{ "nodes": [] }"#).expect("should parse");
    assert!(workflow.connections.is_empty());
}

#[test]
fn code_node_accessors() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("should parse");
    let code_node = workflow.code_nodes().next().expect("has a code node");
    assert_eq!(code_node.execution_mode(), ExecutionMode::PerItem);
    assert!(code_node.source_code().contains("return ["));

    // A code node without parameters still has a (empty) source view.
    let bare = parse::parse(r#"{ "nodes": [ { "name": "X", "type": "code-execution" } ] }"#)
        .expect("should parse");
    let node = bare.code_nodes().next().expect("has a code node");
    assert_eq!(node.source_code(), "");
    assert_eq!(node.execution_mode(), ExecutionMode::PerItem);
}

#[test]
fn unknown_mode_falls_back_to_default() {
    let workflow = parse::parse(
        r#"{
            "nodes": [
                {
                    "name": "X",
                    "type": "code-execution",
                    "parameters": { "mode": "batched", "code": "return [];" }
                }
            ]
        }"#,
    )
    .expect("should parse");
    let node = workflow.code_nodes().next().expect("has a code node");
    assert_eq!(node.execution_mode(), ExecutionMode::PerItem);
}

#[test]
fn build_graph_from_example() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("should parse");
    let graph = WorkflowGraph::build(&workflow);
    assert_eq!(graph.node_indices.len(), 5);
    assert_eq!(graph.graph.edge_count(), 4);
}

#[test]
fn build_graph_drops_dangling_edges() {
    let workflow = parse::parse(
        r#"{
            "nodes": [ { "name": "A", "type": "http-request" } ],
            "connections": {
                "A": { "main": [ [ { "node": "Nowhere", "index": 0 } ] ] },
                "Ghost": { "main": [ [ { "node": "A", "index": 0 } ] ] }
            }
        }"#,
    )
    .expect("should parse");
    let graph = WorkflowGraph::build(&workflow);
    assert_eq!(graph.node_indices.len(), 1);
    assert_eq!(graph.graph.edge_count(), 0);
}

#[test]
fn load_reads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/example_workflow.json");
    let workflow = parse::load(&path).expect("should load");
    assert_eq!(workflow.nodes.len(), 5);
}

#[test]
fn load_missing_file_is_io_error() {
    let result = parse::load(Path::new("does/not/exist.json"));
    assert!(matches!(result, Err(ParseError::Io { .. })));
}
