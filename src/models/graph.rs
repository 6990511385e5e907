//! Directed graph of parameters, nutrients and their dependencies.
//!
//! The graph may contain cycles and self-loops. Node and edge lists keep insertion
//! order, so repeated builds from the same inputs produce identical output.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::dependency::NO_PARENT;

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Parameter,
    Nutrient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
}

/// Origin of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Parameter to an implicated nutrient
    Need,
    /// Nutrient to the nutrient a dependency row relates it to
    Dependency,
    /// Connectivity edge for a dependency row with no parent; not a real relationship
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub relation_type: Option<String>,
    pub comment: Option<String>,
    pub body_signs: Option<String>,
    /// Parent column of the originating row, kept for annotations
    pub source_parent: Option<String>,
}

impl DependencyEdge {
    /// A parameter-to-nutrient edge without metadata
    #[must_use]
    pub fn need(parameter: impl Into<String>, nutrient: impl Into<String>) -> Self {
        Self {
            from: parameter.into(),
            to: nutrient.into(),
            kind: EdgeKind::Need,
            relation_type: None,
            comment: None,
            body_signs: None,
            source_parent: None,
        }
    }

    /// Label drawn next to a dependency edge: `"{parent} {comment}\nBody Signs: {signs}"`
    #[must_use]
    pub fn annotation(&self) -> Option<String> {
        if self.kind == EdgeKind::Need {
            return None;
        }
        let parent = self.source_parent.as_deref().unwrap_or(NO_PARENT);
        Some(format!(
            "{parent} {}\nBody Signs: {}",
            self.comment.as_deref().unwrap_or_default(),
            self.body_signs.as_deref().unwrap_or_default()
        ))
    }
}

/// Nodes and edges with lookup by identity
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<DependencyEdge>,
    #[serde(skip)]
    node_index: FxHashMap<String, usize>,
    #[serde(skip)]
    edge_index: FxHashMap<(String, String), usize>,
}

impl PartialEq for DependencyGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node unless one with the same id exists; returns whether it was added.
    /// An existing nutrient node asked for as a parameter becomes a parameter.
    pub fn add_node(&mut self, id: &str, kind: NodeKind) -> bool {
        if let Some(&idx) = self.node_index.get(id) {
            if kind == NodeKind::Parameter {
                self.nodes[idx].kind = NodeKind::Parameter;
            }
            return false;
        }
        self.node_index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(GraphNode {
            id: id.to_string(),
            kind,
        });
        true
    }

    /// Add an edge, creating missing endpoints as nutrient nodes. An edge between the
    /// same pair replaces the earlier edge in place, except that a bare need edge
    /// leaves existing dependency metadata alone.
    pub fn add_edge(&mut self, edge: DependencyEdge) {
        self.add_node(&edge.from, NodeKind::Nutrient);
        self.add_node(&edge.to, NodeKind::Nutrient);

        let key = (edge.from.clone(), edge.to.clone());
        match self.edge_index.get(&key) {
            Some(&idx) if edge.kind == EdgeKind::Need && self.edges[idx].kind != EdgeKind::Need => {}
            Some(&idx) => self.edges[idx] = edge,
            None => {
                self.edge_index.insert(key, self.edges.len());
                self.edges.push(edge);
            }
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    #[must_use]
    pub fn edge(&self, from: &str, to: &str) -> Option<&DependencyEdge> {
        self.edge_index
            .get(&(from.to_string(), to.to_string()))
            .map(|&idx| &self.edges[idx])
    }

    #[must_use]
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge(from, to).is_some()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Graphviz DOT text. Parameters are boxes, fallback edges are dashed, and
    /// dependency edges carry their annotation as a label.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph nutrient_dependencies {\n");
        for node in &self.nodes {
            let shape = match node.kind {
                NodeKind::Parameter => "box",
                NodeKind::Nutrient => "ellipse",
            };
            let _ = writeln!(out, "    \"{}\" [shape={shape}];", escape_dot(&node.id));
        }
        for edge in &self.edges {
            let mut attrs = Vec::new();
            if edge.kind == EdgeKind::Fallback {
                attrs.push("style=dashed".to_string());
            }
            if let Some(label) = edge.annotation() {
                attrs.push(format!("label=\"{}\"", escape_dot(&label)));
            }
            let attrs = if attrs.is_empty() {
                String::new()
            } else {
                format!(" [{}]", attrs.join(", "))
            };
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\"{attrs};",
                escape_dot(&edge.from),
                escape_dot(&edge.to)
            );
        }
        out.push_str("}\n");
        out
    }
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
