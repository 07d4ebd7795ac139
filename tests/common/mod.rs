//! Shared fixtures for integration tests
//!
//! `FakeGraph` is an in-memory executor that understands the statements
//! this crate generates (inserts, deletes, update/upsert with yield, match
//! by id). Identifiers are keyed by their literal text, so `'a'` and
//! `hash('a')` are different vertices.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use nebula_ogm::model::{Edge, EdgeKey, FieldValue, Policy, Vertex, VertexKey};
use nebula_ogm::{mapped, Executor, Logger, OgmError, OgmResult, ResultSet, Value};
use regex::Regex;
use std::sync::{Arc, Mutex};

pub type Props = IndexMap<String, Value>;

#[derive(Default)]
struct State {
    vertices: IndexMap<(String, String), Props>,
    edges: IndexMap<(String, String, String), Props>,
}

#[derive(Default)]
pub struct FakeGraph {
    state: Mutex<State>,
    statements: Mutex<Vec<String>>,
    closed: Mutex<bool>,
}

impl FakeGraph {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn vertex(&self, tag: &str, vid: &str) -> Option<Props> {
        let state = self.state.lock().unwrap();
        state
            .vertices
            .get(&(tag.to_string(), vid.to_string()))
            .cloned()
    }

    pub fn has_edge(&self, edge: &str, src: &str, dst: &str) -> bool {
        let state = self.state.lock().unwrap();
        state
            .edges
            .contains_key(&(edge.to_string(), src.to_string(), dst.to_string()))
    }

    pub fn edge_count(&self) -> usize {
        self.state.lock().unwrap().edges.len()
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.lock().unwrap()
    }

    fn run(&self, stmt: &str) -> OgmResult<ResultSet> {
        let insert_vertex =
            Regex::new(r"^insert vertex (if not exists )?(\w+)\(([^)]*)\) values (.+)$").unwrap();
        let insert_edge =
            Regex::new(r"^insert edge (if not exists )?(\w+)\(([^)]*)\) values (.+)$").unwrap();
        let delete_vertex = Regex::new(r"^delete vertex (.+) with edge$").unwrap();
        let delete_edge = Regex::new(r"^delete edge (\w+) (.+)$").unwrap();
        let mutate_vertex = Regex::new(
            r"^(update|upsert) vertex on (\w+) (.+?) set (.+?)(?: when (.+?))?(?: yield (.+))?$",
        )
        .unwrap();
        let mutate_edge = Regex::new(
            r"^(update|upsert) edge on (\w+) (.+?) -> (.+?) set (.+?)(?: when (.+?))?(?: yield (.+))?$",
        )
        .unwrap();
        let match_vertex = Regex::new(r"^match ?\(v:(\w+)\) where id\(v\)==(.+?) return (.+)$").unwrap();

        let mut state = self.state.lock().unwrap();

        if let Some(c) = insert_vertex.captures(stmt) {
            let ignore = c.get(1).is_some();
            let columns = split_top(&c[3], ',');
            for entry in split_top(&c[4], ',') {
                let (vid, values) = split_entry(&entry)?;
                let key = (c[2].to_string(), vid);
                if ignore && state.vertices.contains_key(&key) {
                    continue;
                }
                state.vertices.insert(key, props(&columns, &values));
            }
            return Ok(ResultSet::default());
        }

        if let Some(c) = insert_edge.captures(stmt) {
            let ignore = c.get(1).is_some();
            let columns = split_top(&c[3], ',');
            for entry in split_top(&c[4], ',') {
                let (head, values) = split_entry(&entry)?;
                let (src, dst) = endpoints(&head)?;
                let key = (c[2].to_string(), src, dst);
                if ignore && state.edges.contains_key(&key) {
                    continue;
                }
                state.edges.insert(key, props(&columns, &values));
            }
            return Ok(ResultSet::default());
        }

        if let Some(c) = delete_vertex.captures(stmt) {
            for vid in split_top(&c[1], ',') {
                state.vertices.retain(|(_, v), _| *v != vid);
                state.edges.retain(|(_, s, d), _| *s != vid && *d != vid);
            }
            return Ok(ResultSet::default());
        }

        if let Some(c) = delete_edge.captures(stmt) {
            for pair in split_top(&c[2], ',') {
                let (src, dst) = endpoints(&pair)?;
                state.edges.shift_remove(&(c[1].to_string(), src, dst));
            }
            return Ok(ResultSet::default());
        }

        if let Some(c) = mutate_vertex.captures(stmt) {
            let key = (c[2].to_string(), c[3].to_string());
            let upsert = &c[1] == "upsert";
            let yields = c.get(6).map(|m| projections(m.as_str())).unwrap_or_default();
            let target = if upsert {
                Some(state.vertices.entry(key).or_default())
            } else {
                state.vertices.get_mut(&key)
            };
            return Ok(apply(target, &c[4], &yields));
        }

        if let Some(c) = mutate_edge.captures(stmt) {
            let key = (c[2].to_string(), c[3].to_string(), c[4].to_string());
            let upsert = &c[1] == "upsert";
            let yields = c.get(7).map(|m| projections(m.as_str())).unwrap_or_default();
            let target = if upsert {
                Some(state.edges.entry(key).or_default())
            } else {
                state.edges.get_mut(&key)
            };
            return Ok(apply(target, &c[5], &yields));
        }

        if let Some(c) = match_vertex.captures(stmt) {
            let yields = projections(&c[3]);
            let mut rs = ResultSet::new(yields.iter().map(|(_, alias)| alias.clone()));
            if let Some(found) = state.vertices.get(&(c[1].to_string(), c[2].to_string())) {
                rs.push_row(row(found, &yields));
            }
            return Ok(rs);
        }

        Err(OgmError::Execution {
            code: -1004,
            message: format!("SyntaxError: fake graph cannot run `{}`", stmt),
        })
    }
}

impl Executor for FakeGraph {
    fn execute(&self, stmt: &str) -> OgmResult<ResultSet> {
        self.statements.lock().unwrap().push(stmt.to_string());
        self.run(stmt)
    }

    fn close(&self) -> OgmResult<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }
}

fn apply(target: Option<&mut Props>, set: &str, yields: &[(String, String)]) -> ResultSet {
    let mut rs = ResultSet::new(yields.iter().map(|(_, alias)| alias.clone()));
    if let Some(props) = target {
        for assignment in split_top(set, ',') {
            if let Some((name, expr)) = assignment.split_once('=') {
                props.insert(name.trim().to_string(), parse_literal(expr));
            }
        }
        rs.push_row(row(props, yields));
    }
    rs
}

fn row(props: &Props, yields: &[(String, String)]) -> Vec<Value> {
    yields
        .iter()
        .map(|(source, _)| props.get(source).cloned().unwrap_or(Value::Null))
        .collect()
}

/// `a as a, v.tag.b as b` into (property, alias) pairs
fn projections(clause: &str) -> Vec<(String, String)> {
    split_top(clause, ',')
        .into_iter()
        .filter_map(|p| {
            let (source, alias) = p.split_once(" as ")?;
            let prop = source.trim().rsplit('.').next()?.to_string();
            Some((prop, alias.trim().to_string()))
        })
        .collect()
}

fn props(columns: &[String], values: &[String]) -> Props {
    columns
        .iter()
        .zip(values.iter())
        .map(|(c, v)| (c.clone(), parse_literal(v)))
        .collect()
}

/// `<head>:(<v1>,<v2>)` into the head text and the value literals
fn split_entry(entry: &str) -> OgmResult<(String, Vec<String>)> {
    let mut depth = 0;
    let mut quoted = false;
    let mut escaped = false;
    let mut last_open = None;
    for (i, ch) in entry.char_indices() {
        if quoted {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => quoted = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '\'' => quoted = true,
            '(' => {
                if depth == 0 {
                    last_open = Some(i);
                }
                depth += 1;
            }
            ')' => depth -= 1,
            _ => {}
        }
    }
    let open = last_open.ok_or_else(|| malformed(entry))?;
    let head = entry[..open].trim().trim_end_matches(':').to_string();
    let inner = entry[open + 1..]
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| malformed(entry))?;
    Ok((head, split_top(inner, ',')))
}

fn endpoints(pair: &str) -> OgmResult<(String, String)> {
    let (src, dst) = pair.split_once(" -> ").ok_or_else(|| malformed(pair))?;
    Ok((src.trim().to_string(), dst.trim().to_string()))
}

fn malformed(text: &str) -> OgmError {
    OgmError::Execution {
        code: -1004,
        message: format!("SyntaxError: near `{}`", text),
    }
}

/// Split on `sep` outside quotes and parentheses, trimming each part
pub fn split_top(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0;
    let mut quoted = false;
    let mut escaped = false;
    for ch in s.chars() {
        if quoted {
            current.push(ch);
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => quoted = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '\'' => quoted = true,
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if ch == sep && depth == 0 {
            parts.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }
    parts
}

/// Parse one literal the way the server would store it
pub fn parse_literal(text: &str) -> Value {
    let text = text.trim();
    if let Some(inner) = text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(ch);
            }
        }
        return Value::from(out);
    }
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = text.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }
    Value::from(text)
}

#[derive(Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push(msg.to_string());
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// Entities

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestVertex {
    pub key: VertexKey,
    pub chain_key: String,
    pub parent_key: String,
}

mapped!(TestVertex {
    chain_key => "chain_key",
    parent_key => "parent_key",
});

impl Vertex for TestVertex {
    fn tag_name(&self) -> &str {
        "test_vertex"
    }

    fn vid(&self) -> FieldValue {
        self.key.vid.clone()
    }

    fn policy(&self) -> Policy {
        self.key.policy
    }
}

pub fn test_vertex(vid: &str, chain_key: &str, parent_key: &str) -> TestVertex {
    TestVertex {
        key: VertexKey::new(vid),
        chain_key: chain_key.to_string(),
        parent_key: parent_key.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestEdge {
    pub key: EdgeKey,
    pub label: String,
}

mapped!(TestEdge {
    label => "label",
});

impl Edge for TestEdge {
    fn edge_name(&self) -> &str {
        "test_edge"
    }

    fn src(&self) -> FieldValue {
        self.key.src.clone()
    }

    fn src_policy(&self) -> Policy {
        self.key.src_policy
    }

    fn dst(&self) -> FieldValue {
        self.key.dst.clone()
    }

    fn dst_policy(&self) -> Policy {
        self.key.dst_policy
    }
}

pub fn test_edge(src: &str, dst: &str) -> TestEdge {
    TestEdge {
        key: EdgeKey::new(src, dst),
        label: format!("{}->{}", src, dst),
    }
}

/// A vertex covering every decodable field kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub key: VertexKey,
    pub name: String,
    pub age: i32,
    pub score: f64,
    pub active: bool,
    pub joined: DateTime<Utc>,
    pub scratch: String,
}

mapped!(Profile {
    name => "name",
    age => "age",
    score => "score",
    active => "active",
    joined => "joined",
    scratch => "-",
});

impl Vertex for Profile {
    fn tag_name(&self) -> &str {
        "profile"
    }

    fn vid(&self) -> FieldValue {
        self.key.vid.clone()
    }

    fn policy(&self) -> Policy {
        self.key.policy
    }
}
