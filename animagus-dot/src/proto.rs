//! Protobuf wire types for animagus AST documents
//!
//! These mirror the `ast.proto` schema consumed by the animagus runtime:
//!
//! ```text
//! message Value {
//!   Type t = 1;
//!   oneof primitive { bool b = 2; uint64 u = 3; bytes raw = 4; }
//!   repeated Value children = 5;
//! }
//! message Call   { string name = 1; Value result = 2; }
//! message Stream { string name = 1; Value filter = 2; }
//! message Root   { repeated Call calls = 1; repeated Stream streams = 2; }
//! ```
//!
//! They are only the decoding surface. The rest of the crate works on the
//! typed tree in [`crate::ast`], built from these through `From` impls.

#[derive(Clone, PartialEq, prost::Message)]
pub struct Value {
    #[prost(enumeration = "value::Type", tag = "1")]
    pub t: i32,
    #[prost(message, repeated, tag = "5")]
    pub children: Vec<Value>,
    #[prost(oneof = "value::Primitive", tags = "2, 3, 4")]
    pub primitive: Option<value::Primitive>,
}

pub mod value {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Nil = 0,
        Uint64 = 1,
        Bool = 2,
        Bytes = 3,
        Error = 4,

        Arg = 16,
        Param = 17,
        Apply = 18,
        Reduce = 19,
        List = 20,
        QueryCells = 21,
        Map = 22,
        Filter = 23,
        GetHeader = 24,

        Hash = 25,
        SerializeToCore = 26,
        SerializeToJson = 27,
        Not = 28,
        And = 29,
        Or = 30,
        Equal = 31,
        Less = 32,
        Len = 33,
        Slice = 34,
        Index = 35,
        Cond = 36,
        Add = 37,
        Subtract = 38,
        Multiply = 39,
        Divide = 40,
        Mod = 41,

        Transaction = 48,
        Header = 49,
        Cell = 50,
        Script = 51,
        CellInput = 52,
        OutPoint = 53,
        CellDep = 54,

        GetCapacity = 64,
        GetData = 65,
        GetLock = 66,
        GetType = 67,
        GetDataHash = 68,
        GetOutPoint = 69,
        GetCodeHash = 70,
        GetHashType = 71,
        GetArgs = 72,
        GetCellDeps = 73,
        GetHeaderDeps = 74,
        GetInputs = 75,
        GetOutputs = 76,
        GetWitnesses = 77,
        GetCompactTarget = 78,
        GetTimestamp = 79,
        GetNumber = 80,
        GetEpoch = 81,
        GetParentHash = 82,
        GetTransactionsRoot = 83,
        GetProposalsHash = 84,
        GetUnclesHash = 85,
        GetDao = 86,
        GetNonce = 87,
        GetDepType = 88,
        GetTxHash = 89,
        GetIndex = 90,
        GetSince = 91,
        GetPreviousOutput = 92,
    }

    impl Type {
        /// The name used for this kind in the `.proto` definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Type::Nil => "NIL",
                Type::Uint64 => "UINT64",
                Type::Bool => "BOOL",
                Type::Bytes => "BYTES",
                Type::Error => "ERROR",
                Type::Arg => "ARG",
                Type::Param => "PARAM",
                Type::Apply => "APPLY",
                Type::Reduce => "REDUCE",
                Type::List => "LIST",
                Type::QueryCells => "QUERY_CELLS",
                Type::Map => "MAP",
                Type::Filter => "FILTER",
                Type::GetHeader => "GET_HEADER",
                Type::Hash => "HASH",
                Type::SerializeToCore => "SERIALIZE_TO_CORE",
                Type::SerializeToJson => "SERIALIZE_TO_JSON",
                Type::Not => "NOT",
                Type::And => "AND",
                Type::Or => "OR",
                Type::Equal => "EQUAL",
                Type::Less => "LESS",
                Type::Len => "LEN",
                Type::Slice => "SLICE",
                Type::Index => "INDEX",
                Type::Cond => "COND",
                Type::Add => "ADD",
                Type::Subtract => "SUBTRACT",
                Type::Multiply => "MULTIPLY",
                Type::Divide => "DIVIDE",
                Type::Mod => "MOD",
                Type::Transaction => "TRANSACTION",
                Type::Header => "HEADER",
                Type::Cell => "CELL",
                Type::Script => "SCRIPT",
                Type::CellInput => "CELL_INPUT",
                Type::OutPoint => "OUT_POINT",
                Type::CellDep => "CELL_DEP",
                Type::GetCapacity => "GET_CAPACITY",
                Type::GetData => "GET_DATA",
                Type::GetLock => "GET_LOCK",
                Type::GetType => "GET_TYPE",
                Type::GetDataHash => "GET_DATA_HASH",
                Type::GetOutPoint => "GET_OUT_POINT",
                Type::GetCodeHash => "GET_CODE_HASH",
                Type::GetHashType => "GET_HASH_TYPE",
                Type::GetArgs => "GET_ARGS",
                Type::GetCellDeps => "GET_CELL_DEPS",
                Type::GetHeaderDeps => "GET_HEADER_DEPS",
                Type::GetInputs => "GET_INPUTS",
                Type::GetOutputs => "GET_OUTPUTS",
                Type::GetWitnesses => "GET_WITNESSES",
                Type::GetCompactTarget => "GET_COMPACT_TARGET",
                Type::GetTimestamp => "GET_TIMESTAMP",
                Type::GetNumber => "GET_NUMBER",
                Type::GetEpoch => "GET_EPOCH",
                Type::GetParentHash => "GET_PARENT_HASH",
                Type::GetTransactionsRoot => "GET_TRANSACTIONS_ROOT",
                Type::GetProposalsHash => "GET_PROPOSALS_HASH",
                Type::GetUnclesHash => "GET_UNCLES_HASH",
                Type::GetDao => "GET_DAO",
                Type::GetNonce => "GET_NONCE",
                Type::GetDepType => "GET_DEP_TYPE",
                Type::GetTxHash => "GET_TX_HASH",
                Type::GetIndex => "GET_INDEX",
                Type::GetSince => "GET_SINCE",
                Type::GetPreviousOutput => "GET_PREVIOUS_OUTPUT",
            }
        }
    }

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Primitive {
        #[prost(bool, tag = "2")]
        B(bool),
        #[prost(uint64, tag = "3")]
        U(u64),
        #[prost(bytes = "vec", tag = "4")]
        Raw(Vec<u8>),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Call {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub result: Option<Value>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Stream {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Value>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Root {
    #[prost(message, repeated, tag = "1")]
    pub calls: Vec<Call>,
    #[prost(message, repeated, tag = "2")]
    pub streams: Vec<Stream>,
}
