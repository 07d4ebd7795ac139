//! Wire values returned by the graph database
//!
//! Every cell of a result set is one of these variants. Composites (vertex,
//! edge, path, list, map, set) nest further values.

use bytes::Bytes;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Calendar date as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Date {
    pub year: i16,
    pub month: i8,
    pub day: i8,
}

/// Time of day as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Time {
    pub hour: i8,
    pub minute: i8,
    pub sec: i8,
    pub microsec: i32,
}

/// Date and time as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateTime {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub hour: i8,
    pub minute: i8,
    pub sec: i8,
    pub microsec: i32,
}

/// One tag attached to a vertex, with its properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    pub props: IndexMap<String, Value>,
}

/// A vertex with all of its tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub vid: Box<Value>,
    pub tags: Vec<Tag>,
}

impl Node {
    pub fn new(vid: Value) -> Self {
        Self {
            vid: Box::new(vid),
            tags: Vec::new(),
        }
    }

    /// Attach a tag and its properties
    pub fn with_tag(mut self, name: impl Into<String>, props: IndexMap<String, Value>) -> Self {
        self.tags.push(Tag {
            name: name.into(),
            props,
        });
        self
    }
}

/// A directed edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub src: Box<Value>,
    pub dst: Box<Value>,
    pub edge_type: String,
    pub ranking: i64,
    pub props: IndexMap<String, Value>,
}

/// One hop of a path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub dst: Node,
    pub edge_type: String,
    pub ranking: i64,
    pub props: IndexMap<String, Value>,
}

/// A path: a source vertex followed by steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub src: Node,
    pub steps: Vec<Step>,
}

/// Dynamically typed cell value
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(#[serde(serialize_with = "serialize_text")] Bytes),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    Vertex(Node),
    Edge(Relationship),
    Path(Path),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Set(Vec<Value>),
}

impl Value {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Raw bytes of a text value
    pub fn as_text(&self) -> Option<&Bytes> {
        match self {
            Value::Text(b) => Some(b),
            _ => None,
        }
    }

    /// Text value decoded as (lossy) UTF-8
    pub fn as_string(&self) -> Option<String> {
        self.as_text()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn as_vertex(&self) -> Option<&Node> {
        match self {
            Value::Vertex(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::DateTime(_) => "datetime",
            Value::Vertex(_) => "vertex",
            Value::Edge(_) => "edge",
            Value::Path(_) => "path",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
        }
    }
}

fn serialize_text<S: serde::Serializer>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

fn write_props(f: &mut fmt::Formatter<'_>, props: &IndexMap<String, Value>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (key, val)) in props.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", key, val)?;
    }
    write!(f, "}}")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.vid)?;
        for tag in &self.tags {
            write!(f, " :{} ", tag.name)?;
            write_props(f, &tag.props)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Text(b) => write!(f, "\"{}\"", String::from_utf8_lossy(b)),
            Value::Date(d) => write!(f, "{:04}-{:02}-{:02}", d.year, d.month, d.day),
            Value::Time(t) => write!(
                f,
                "{:02}:{:02}:{:02}.{:06}",
                t.hour, t.minute, t.sec, t.microsec
            ),
            Value::DateTime(dt) => write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}",
                dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.sec, dt.microsec
            ),
            Value::Vertex(node) => write!(f, "{}", node),
            Value::Edge(rel) => {
                write!(f, "({})-[:{}@{} ", rel.src, rel.edge_type, rel.ranking)?;
                write_props(f, &rel.props)?;
                write!(f, "]->({})", rel.dst)
            }
            Value::Path(path) => {
                write!(f, "<{}", path.src)?;
                for step in &path.steps {
                    write!(f, "-[:{}@{}]->{}", step.edge_type, step.ranking, step.dst)?;
                }
                write!(f, ">")
            }
            Value::List(items) => write_seq(f, "[", items, "]"),
            Value::Map(map) => write_props(f, map),
            Value::Set(items) => write_seq(f, "{", items, "}"),
        }
    }
}

// Convenience conversions
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Bytes::from(s))
    }
}

impl From<Node> for Value {
    fn from(n: Node) -> Self {
        Value::Vertex(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
