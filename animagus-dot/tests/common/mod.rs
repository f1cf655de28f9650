//! Fixture builders for integration tests.
//!
//! Fixtures go through the protobuf encoder so every test exercises the same
//! decode path as a real input file.

use animagus_dot::proto::value::{Primitive, Type};
use animagus_dot::proto::{self, Call, Root, Stream};
use animagus_dot::Document;
use prost::Message;

pub fn value(t: Type, children: Vec<proto::Value>) -> proto::Value {
    proto::Value {
        t: t as i32,
        children,
        primitive: None,
    }
}

pub fn uint(t: Type, u: u64) -> proto::Value {
    proto::Value {
        t: t as i32,
        children: vec![],
        primitive: Some(Primitive::U(u)),
    }
}

pub fn raw(t: Type, bytes: &[u8]) -> proto::Value {
    proto::Value {
        t: t as i32,
        children: vec![],
        primitive: Some(Primitive::Raw(bytes.to_vec())),
    }
}

pub fn boolean(b: bool) -> proto::Value {
    proto::Value {
        t: Type::Bool as i32,
        children: vec![],
        primitive: Some(Primitive::B(b)),
    }
}

pub fn call(name: &str, result: proto::Value) -> Call {
    Call {
        name: name.to_string(),
        result: Some(result),
    }
}

pub fn stream(name: &str, filter: proto::Value) -> Stream {
    Stream {
        name: name.to_string(),
        filter: Some(filter),
    }
}

/// A balance query: one call summing cell capacities, one stream of cells
/// locked by a given script.
pub fn balance_root() -> Root {
    Root {
        calls: vec![call(
            "balance",
            value(
                Type::Reduce,
                vec![
                    value(
                        Type::Add,
                        vec![uint(Type::Arg, 0), uint(Type::Arg, 1)],
                    ),
                    uint(Type::Uint64, 0),
                    value(
                        Type::Map,
                        vec![
                            value(Type::GetCapacity, vec![uint(Type::Arg, 0)]),
                            value(Type::QueryCells, vec![]),
                        ],
                    ),
                ],
            ),
        )],
        streams: vec![stream(
            "cells",
            value(
                Type::Equal,
                vec![
                    value(Type::GetCodeHash, vec![uint(Type::Param, 0)]),
                    raw(Type::Bytes, &[0xde, 0xad, 0xbe, 0xef]),
                ],
            ),
        )],
    }
}

/// Encode `root` and load it back through the library loader.
pub fn decode(root: &Root) -> Document {
    animagus_dot::load(&root.encode_to_vec()).expect("fixture to decode")
}
