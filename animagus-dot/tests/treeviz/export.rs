//! Export tests for the treeviz format

use crate::common::{balance_root, decode};
use animagus_dot::formats::treeviz::to_treeviz_str;
use animagus_dot::{Format, FormatRegistry};
use insta::assert_snapshot;
use std::collections::HashMap;

#[test]
fn test_balance_query_tree() {
    let doc = decode(&balance_root());
    let output = to_treeviz_str(&doc, "balance").unwrap();

    assert_snapshot!(output, @r"
⧉ balance (1 calls, 1 streams)
├─ ƒ calls
│ └─ ▭ balance
│   └─ ○ REDUCE
│     ├─ ○ ADD
│     │ ├─ @ ARG(0)
│     │ └─ @ ARG(1)
│     ├─ ◦ UINT64(0)
│     └─ ○ MAP
│       ├─ ○ GET_CAPACITY
│       │ └─ @ ARG(0)
│       └─ ○ QUERY_CELLS
└─ ≋ streams
  └─ ⇶ cells
    └─ ○ EQUAL
      ├─ ○ GET_CODE_HASH
      │ └─ @ PARAM(0)
      └─ ◦ BYTES(0xdeadbeef)
");
}

#[test]
fn test_registry_passes_options_through() {
    let registry = FormatRegistry::default();
    let doc = decode(&balance_root());
    let mut options = HashMap::new();
    options.insert("show-ids".to_string(), "yes".to_string());

    let mut buf = Vec::new();
    registry
        .write_with_options(&doc, "balance", "treeviz", &options, &mut buf)
        .unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(output.contains("@ ARG(1) [c0v0c0c1]"));
    assert!(output.contains("◦ BYTES(0xdeadbeef) [s0v0c1]"));
}

#[test]
fn test_treeviz_labels_match_dot_labels() {
    let registry = FormatRegistry::default();
    let doc = decode(&balance_root());

    let tree = registry
        .get("treeviz")
        .unwrap()
        .serialize(&doc, "balance")
        .unwrap();
    let dot = registry.get("dot").unwrap().serialize(&doc, "balance").unwrap();

    for label in ["REDUCE", "ARG(1)", "GET_CAPACITY", "BYTES(0xdeadbeef)"] {
        assert!(tree.contains(label));
        assert!(dot.contains(&format!("[label=\"{label}\"]")));
    }
}
