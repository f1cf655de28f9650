//! Typed AST model
//!
//! The wire format stores every payload slot on every value and lets the `t`
//! tag decide which one means something. Here each [`Kind`] variant carries
//! only the payload relevant to it, and a [`Value`] owns its children.
//!
//! Conversion from the wire types follows protobuf getter semantics: a missing
//! message decodes as the default value (`NIL`), and a payload slot that does
//! not match the kind decodes as the zero payload for that kind.

use crate::proto;
use crate::proto::value::{Primitive, Type};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Root container: ordered calls and streams.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub calls: Vec<Call>,
    pub streams: Vec<Stream>,
}

/// A named operation producing one result value tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub name: String,
    pub result: Value,
}

/// A named data stream gated by a filter value tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    pub name: String,
    pub filter: Value,
}

/// Kind tag as found on the wire.
///
/// Tags outside the known table are kept verbatim so a newer producer does not
/// break rendering; they display as their decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Known(Type),
    Unknown(i32),
}

impl Tag {
    pub fn from_wire(t: i32) -> Self {
        match Type::try_from(t) {
            Ok(known) => Tag::Known(known),
            Err(_) => Tag::Unknown(t),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Known(t) => f.write_str(t.as_str_name()),
            Tag::Unknown(n) => write!(f, "{n}"),
        }
    }
}

/// Value kind together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Uint64(u64),
    Arg(u64),
    Param(u64),
    Bool(bool),
    Error(Vec<u8>),
    Bytes(Vec<u8>),
    /// Structural kinds (`NIL`, `APPLY`, `LIST`, ...) carry no payload.
    Node(Tag),
}

impl Kind {
    pub fn tag(&self) -> Tag {
        match self {
            Kind::Uint64(_) => Tag::Known(Type::Uint64),
            Kind::Arg(_) => Tag::Known(Type::Arg),
            Kind::Param(_) => Tag::Known(Type::Param),
            Kind::Bool(_) => Tag::Known(Type::Bool),
            Kind::Error(_) => Tag::Known(Type::Error),
            Kind::Bytes(_) => Tag::Known(Type::Bytes),
            Kind::Node(tag) => *tag,
        }
    }

    /// Payload rendered the way labels show it, without parentheses.
    ///
    /// `ERROR` payloads are decoded lossily as UTF-8; `BYTES` become lowercase
    /// hex prefixed with `0x`.
    pub fn payload_text(&self) -> Option<String> {
        match self {
            Kind::Uint64(u) | Kind::Arg(u) | Kind::Param(u) => Some(u.to_string()),
            Kind::Bool(b) => Some(b.to_string()),
            Kind::Error(raw) => Some(String::from_utf8_lossy(raw).into_owned()),
            Kind::Bytes(raw) => Some(to_hex(raw)),
            Kind::Node(_) => None,
        }
    }

    /// Full node label: kind name followed by the parenthesized payload.
    pub fn label(&self) -> String {
        match self.payload_text() {
            Some(payload) => format!("{}({})", self.tag(), payload),
            None => self.tag().to_string(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tag().fmt(f)
    }
}

/// A typed tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub kind: Kind,
    pub children: Vec<Value>,
}

impl Value {
    pub fn new(kind: Kind) -> Self {
        Value {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: Kind, children: Vec<Value>) -> Self {
        Value { kind, children }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Value::node_count).sum::<usize>()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::new(Kind::Node(Tag::Known(Type::Nil)))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Value", 3)?;
        state.serialize_field("kind", &self.kind.tag().to_string())?;
        match &self.kind {
            Kind::Uint64(u) | Kind::Arg(u) | Kind::Param(u) => {
                state.serialize_field("payload", u)?
            }
            Kind::Bool(b) => state.serialize_field("payload", b)?,
            Kind::Error(_) | Kind::Bytes(_) => {
                state.serialize_field("payload", &self.kind.payload_text())?
            }
            Kind::Node(_) => state.skip_field("payload")?,
        }
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

impl Document {
    /// Total number of value nodes across all calls and streams.
    pub fn value_count(&self) -> usize {
        let calls: usize = self.calls.iter().map(|c| c.result.node_count()).sum();
        let streams: usize = self.streams.iter().map(|s| s.filter.node_count()).sum();
        calls + streams
    }
}

fn to_hex(raw: &[u8]) -> String {
    let mut out = String::with_capacity(2 + raw.len() * 2);
    out.push_str("0x");
    for byte in raw {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

fn unsigned(primitive: Option<Primitive>) -> u64 {
    match primitive {
        Some(Primitive::U(u)) => u,
        _ => 0,
    }
}

fn raw(primitive: Option<Primitive>) -> Vec<u8> {
    match primitive {
        Some(Primitive::Raw(bytes)) => bytes,
        _ => Vec::new(),
    }
}

impl From<proto::Value> for Value {
    fn from(value: proto::Value) -> Self {
        let proto::Value {
            t,
            children,
            primitive,
        } = value;

        let kind = match Tag::from_wire(t) {
            Tag::Known(Type::Uint64) => Kind::Uint64(unsigned(primitive)),
            Tag::Known(Type::Arg) => Kind::Arg(unsigned(primitive)),
            Tag::Known(Type::Param) => Kind::Param(unsigned(primitive)),
            Tag::Known(Type::Bool) => Kind::Bool(matches!(primitive, Some(Primitive::B(true)))),
            Tag::Known(Type::Error) => Kind::Error(raw(primitive)),
            Tag::Known(Type::Bytes) => Kind::Bytes(raw(primitive)),
            tag => Kind::Node(tag),
        };

        Value {
            kind,
            children: children.into_iter().map(Value::from).collect(),
        }
    }
}

impl From<proto::Call> for Call {
    fn from(call: proto::Call) -> Self {
        Call {
            name: call.name,
            result: call.result.map(Value::from).unwrap_or_default(),
        }
    }
}

impl From<proto::Stream> for Stream {
    fn from(stream: proto::Stream) -> Self {
        Stream {
            name: stream.name,
            filter: stream.filter.map(Value::from).unwrap_or_default(),
        }
    }
}

impl From<proto::Root> for Document {
    fn from(root: proto::Root) -> Self {
        Document {
            calls: root.calls.into_iter().map(Call::from).collect(),
            streams: root.streams.into_iter().map(Stream::from).collect(),
        }
    }
}
