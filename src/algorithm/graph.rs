//! Dependency graph construction
//!
//! Flagged parameters point at the nutrients they implicate. Each implicated nutrient is
//! then expanded through the dependency table:
//!
//! - [`EdgeDirection::TowardParent`] looks up rows where the nutrient is the child and
//!   draws an edge to the parent. A row without a parent yields a fallback edge from the
//!   nutrient to the row's child, marked [`EdgeKind::Fallback`].
//! - [`EdgeDirection::TowardChild`] looks up rows where the nutrient is the parent and
//!   draws an edge to the child.
//!
//! A nutrient is expanded at most once per graph, which keeps cyclic tables finite.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::catalog::ReferenceCatalogs;
use crate::config::{EdgeDirection, EngineConfig, ExpansionDepth};
use crate::models::{
    DeficiencyMap, DependencyEdge, DependencyGraph, EdgeKind, NodeKind, NutrientDependency,
    normalize_key,
};

/// A nutrient reached from another through one dependency row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeeperDependency<'a> {
    pub target: &'a str,
    pub kind: EdgeKind,
    pub row: &'a NutrientDependency,
}

impl DeeperDependency<'_> {
    /// Edge from `from` to this dependency's target, carrying the row's metadata
    #[must_use]
    pub fn to_edge(&self, from: &str) -> DependencyEdge {
        DependencyEdge {
            from: from.to_string(),
            to: self.target.to_string(),
            kind: self.kind,
            relation_type: self.row.relation_type.clone(),
            comment: self.row.comments.clone(),
            body_signs: self.row.body_signs.clone(),
            source_parent: self.row.parent.clone(),
        }
    }
}

/// Dependencies one level below `nutrient`, in catalog order
#[must_use]
pub fn deeper_dependencies<'a>(
    catalogs: &'a ReferenceCatalogs,
    nutrient: &str,
    direction: EdgeDirection,
) -> Vec<DeeperDependency<'a>> {
    match direction {
        EdgeDirection::TowardParent => catalogs
            .dependencies_with_child(nutrient)
            .map(|row| match row.parent.as_deref() {
                Some(parent) => DeeperDependency {
                    target: parent,
                    kind: EdgeKind::Dependency,
                    row,
                },
                None => DeeperDependency {
                    target: &row.child,
                    kind: EdgeKind::Fallback,
                    row,
                },
            })
            .collect(),
        EdgeDirection::TowardChild => catalogs
            .dependencies_with_parent(nutrient)
            .map(|row| DeeperDependency {
                target: &row.child,
                kind: EdgeKind::Dependency,
                row,
            })
            .collect(),
    }
}

/// Incremental builder for a [`DependencyGraph`]
#[derive(Debug)]
pub struct GraphBuilder<'a> {
    catalogs: &'a ReferenceCatalogs,
    direction: EdgeDirection,
    expansion: ExpansionDepth,
    graph: DependencyGraph,
    expanded: FxHashSet<String>,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    pub fn new(catalogs: &'a ReferenceCatalogs, config: &EngineConfig) -> Self {
        Self {
            catalogs,
            direction: config.edge_direction,
            expansion: config.expansion,
            graph: DependencyGraph::new(),
            expanded: FxHashSet::default(),
        }
    }

    /// Add a flagged parameter, an edge to each of its nutrients, and their dependencies
    pub fn add_parameter(&mut self, parameter: &str, nutrients: &[String]) -> &mut Self {
        self.graph.add_node(parameter, NodeKind::Parameter);
        for nutrient in nutrients {
            self.graph.add_edge(DependencyEdge::need(parameter, nutrient.as_str()));
            self.expand(nutrient);
        }
        self
    }

    /// Add a nutrient as a root and expand its dependencies
    pub fn add_root(&mut self, nutrient: &str) -> &mut Self {
        self.graph.add_node(nutrient, NodeKind::Nutrient);
        self.expand(nutrient);
        self
    }

    fn expand(&mut self, nutrient: &str) {
        let catalogs = self.catalogs;
        let mut queue = VecDeque::from([nutrient.to_string()]);

        while let Some(current) = queue.pop_front() {
            if !self.expanded.insert(normalize_key(&current)) {
                continue;
            }
            for dependency in deeper_dependencies(catalogs, &current, self.direction) {
                self.graph.add_edge(dependency.to_edge(&current));
                if self.expansion == ExpansionDepth::Transitive
                    && dependency.kind == EdgeKind::Dependency
                {
                    queue.push_back(dependency.target.to_string());
                }
            }
        }
    }

    #[must_use]
    pub fn build(self) -> DependencyGraph {
        log::debug!(
            "Built dependency graph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}

/// Graph for every parameter in `deficiencies`, in processing order
#[must_use]
pub fn build_graph(
    catalogs: &ReferenceCatalogs,
    deficiencies: &DeficiencyMap,
    config: &EngineConfig,
) -> DependencyGraph {
    let mut builder = GraphBuilder::new(catalogs, config);
    for need in deficiencies {
        builder.add_parameter(&need.parameter, &need.nutrients);
    }
    builder.build()
}

/// Graph rooted at a single nutrient
#[must_use]
pub fn build_for_root(
    catalogs: &ReferenceCatalogs,
    nutrient: &str,
    config: &EngineConfig,
) -> DependencyGraph {
    let mut builder = GraphBuilder::new(catalogs, config);
    builder.add_root(nutrient);
    builder.build()
}
