//! Export tests for the DOT format (encoded AST → Graphviz)
//!
//! Fixtures are encoded with prost and decoded by the library loader, so these
//! cover the whole path a file takes through the CLI minus the filesystem.

use crate::common::{balance_root, call, decode, raw, stream, uint, value};
use animagus_dot::formats::dot::{emit, to_dot_str};
use animagus_dot::proto::value::Type;
use animagus_dot::proto::Root;
use insta::assert_snapshot;
use std::collections::HashSet;

#[test]
fn test_balance_query_graph() {
    let doc = decode(&balance_root());
    let output = to_dot_str(&doc, "balance").unwrap();

    assert_snapshot!(output, @r#"
digraph G {
newrank="true"
balance -> { streams  calls }

calls -> c0
subgraph cluster_c0 {
c0 [label ="balance", shape="box"]
c0 -> c0v0
c0v0 [label="REDUCE"]
c0v0 -> c0v0c0
c0v0c0 [label="ADD"]
c0v0c0 -> c0v0c0c0
c0v0c0c0 [label="ARG(0)"]
c0v0c0 -> c0v0c0c1
c0v0c0c1 [label="ARG(1)"]
c0v0 -> c0v0c1
c0v0c1 [label="UINT64(0)"]
c0v0 -> c0v0c2
c0v0c2 [label="MAP"]
c0v0c2 -> c0v0c2c0
c0v0c2c0 [label="GET_CAPACITY"]
c0v0c2c0 -> c0v0c2c0c0
c0v0c2c0c0 [label="ARG(0)"]
c0v0c2 -> c0v0c2c1
c0v0c2c1 [label="QUERY_CELLS"]
}
streams -> s0
s0 [label="cells", shape="box"]
s0 -> s0v0
s0v0 [label="EQUAL"]
s0v0 -> s0v0c0
s0v0c0 [label="GET_CODE_HASH"]
s0v0c0 -> s0v0c0c0
s0v0c0c0 [label="PARAM(0)"]
s0v0 -> s0v0c1
s0v0c1 [label="BYTES(0xdeadbeef)"]
}
"#);
}

#[test]
fn test_empty_root_renders_frame_only() {
    let doc = decode(&Root::default());
    let output = to_dot_str(&doc, "empty").unwrap();

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "digraph G {",
            "newrank=\"true\"",
            "empty -> { streams  calls }",
            "",
            "}",
        ]
    );
    assert!(!output.contains("subgraph"));
}

#[test]
fn test_call_order_follows_input() {
    let root = Root {
        calls: vec![
            call("a", uint(Type::Uint64, 1)),
            call("b", uint(Type::Uint64, 2)),
        ],
        streams: vec![],
    };
    let output = to_dot_str(&decode(&root), "t").unwrap();

    let call_nodes: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("shape=\"box\""))
        .collect();
    assert_eq!(
        call_nodes,
        vec![
            "c0 [label =\"a\", shape=\"box\"]",
            "c1 [label =\"b\", shape=\"box\"]",
        ]
    );
}

#[test]
fn test_every_declared_identifier_is_unique() {
    let mut root = balance_root();
    root.calls.push(root.calls[0].clone());
    root.streams.push(root.streams[0].clone());
    let doc = decode(&root);
    let output = to_dot_str(&doc, "dup").unwrap();

    let declared: Vec<&str> = output
        .lines()
        .filter(|line| line.contains(" [label"))
        .filter_map(|line| line.split(' ').next())
        .collect();
    let unique: HashSet<&str> = declared.iter().copied().collect();

    assert_eq!(declared.len(), unique.len());
    assert_eq!(
        declared.len(),
        doc.calls.len() + doc.streams.len() + doc.value_count()
    );
}

#[test]
fn test_edges_only_reference_declared_nodes() {
    let output = to_dot_str(&decode(&balance_root()), "balance").unwrap();

    let declared: HashSet<&str> = output
        .lines()
        .filter(|line| line.contains(" [label"))
        .filter_map(|line| line.split(' ').next())
        .collect();
    for line in output.lines().filter(|line| line.contains(" -> ")) {
        if line.contains('{') {
            continue;
        }
        let (from, to) = line.split_once(" -> ").unwrap();
        assert!(declared.contains(to), "edge target {to} is not declared");
        assert!(
            from == "calls" || from == "streams" || declared.contains(from),
            "edge source {from} is not declared"
        );
    }
}

#[test]
fn test_payload_rendering_from_wire() {
    let root = Root {
        calls: vec![call(
            "payloads",
            value(
                Type::List,
                vec![
                    raw(Type::Bytes, &[0xde, 0xad]),
                    crate::common::boolean(true),
                    uint(Type::Uint64, 42),
                    raw(Type::Error, b"no such cell"),
                ],
            ),
        )],
        streams: vec![],
    };
    let output = to_dot_str(&decode(&root), "t").unwrap();

    assert!(output.contains("c0v0c0 [label=\"BYTES(0xdead)\"]"));
    assert!(output.contains("c0v0c1 [label=\"BOOL(true)\"]"));
    assert!(output.contains("c0v0c2 [label=\"UINT64(42)\"]"));
    assert!(output.contains("c0v0c3 [label=\"ERROR(no such cell)\"]"));
}

#[test]
fn test_missing_filter_renders_nil() {
    let root = Root {
        calls: vec![],
        streams: vec![animagus_dot::proto::Stream {
            name: "all".to_string(),
            filter: None,
        }],
    };
    let output = to_dot_str(&decode(&root), "t").unwrap();
    assert!(output.contains("s0 -> s0v0\ns0v0 [label=\"NIL\"]\n"));
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let doc = decode(&balance_root());
    let mut first = Vec::new();
    let mut second = Vec::new();
    emit(&doc, "balance", &mut first).unwrap();
    emit(&doc, "balance", &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stream_uses_cluster_free_layout() {
    let root = Root {
        calls: vec![],
        streams: vec![stream("s", uint(Type::Param, 5))],
    };
    let output = to_dot_str(&decode(&root), "t").unwrap();
    assert!(!output.contains("cluster"));
    assert!(output.contains("s0v0 [label=\"PARAM(5)\"]"));
}
