//! Linkage graph between tables
//!
//! Builds a directed graph from [`TableLink`] declarations, parent to
//! child, and answers load order and reachability questions about it.

use crate::schema::{TABLE_LINKS, TABLES, TableLink, TableSpec};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Error during relationship validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelationshipValidationError {
    #[error("Link {link} references unknown table {table}")]
    UnknownTable { link: String, table: String },
    #[error("Link {link} references unknown column {table}.{column}")]
    UnknownColumn {
        link: String,
        table: String,
        column: String,
    },
    #[error("Links form a cycle through {0}")]
    Cycle(String),
}

/// Directed parent → child graph of table links
pub struct LinkGraph {
    graph: DiGraph<&'static str, &'static TableLink>,
    nodes: HashMap<&'static str, NodeIndex>,
}

impl LinkGraph {
    /// Graph of the declared tables and links
    pub fn build() -> Result<Self, RelationshipValidationError> {
        Self::from_parts(TABLES, TABLE_LINKS)
    }

    /// Graph over the given tables and links. Every link must reference
    /// tables and columns that exist in `tables`.
    pub fn from_parts(
        tables: &[&'static TableSpec],
        links: &'static [TableLink],
    ) -> Result<Self, RelationshipValidationError> {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();
        for table in tables {
            nodes.insert(table.db_table, graph.add_node(table.db_table));
        }

        for link in links {
            let parent =
                Self::resolve(tables, &nodes, link, link.parent_table, link.parent_column)?;
            let child =
                Self::resolve(tables, &nodes, link, link.child_table, link.child_column)?;
            graph.add_edge(parent, child, link);
        }

        Ok(Self { graph, nodes })
    }

    fn resolve(
        tables: &[&'static TableSpec],
        nodes: &HashMap<&'static str, NodeIndex>,
        link: &TableLink,
        table: &str,
        column: &str,
    ) -> Result<NodeIndex, RelationshipValidationError> {
        let spec = tables
            .iter()
            .find(|t| t.db_table == table)
            .ok_or_else(|| RelationshipValidationError::UnknownTable {
                link: link.to_string(),
                table: table.to_string(),
            })?;
        if !spec.columns().any(|c| c == column) {
            return Err(RelationshipValidationError::UnknownColumn {
                link: link.to_string(),
                table: table.to_string(),
                column: column.to_string(),
            });
        }
        nodes
            .get(spec.db_table)
            .copied()
            .ok_or_else(|| RelationshipValidationError::UnknownTable {
                link: link.to_string(),
                table: table.to_string(),
            })
    }

    /// Tables ordered so every parent precedes its children
    pub fn load_order(&self) -> Result<Vec<&'static str>, RelationshipValidationError> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|n| self.graph[n]).collect())
            .map_err(|cycle| {
                RelationshipValidationError::Cycle(self.graph[cycle.node_id()].to_string())
            })
    }

    /// Tables that hold rows pointing at `db_table`
    pub fn children_of(&self, db_table: &str) -> Vec<&'static str> {
        self.neighbors(db_table, Direction::Outgoing)
    }

    /// Tables that rows of `db_table` point at
    pub fn parents_of(&self, db_table: &str) -> Vec<&'static str> {
        self.neighbors(db_table, Direction::Incoming)
    }

    fn neighbors(&self, db_table: &str, direction: Direction) -> Vec<&'static str> {
        let Some(&node) = self.nodes.get(db_table) else {
            return Vec::new();
        };
        let mut tables: Vec<&'static str> = self
            .graph
            .edges_directed(node, direction)
            .map(|edge| match direction {
                Direction::Outgoing => self.graph[edge.target()],
                Direction::Incoming => self.graph[edge.source()],
            })
            .collect();
        tables.sort_unstable();
        tables.dedup();
        tables
    }

    /// Links in the graph joining `child` to `parent`
    pub fn links_between(&self, parent: &str, child: &str) -> Vec<&'static TableLink> {
        match (self.nodes.get(parent), self.nodes.get(child)) {
            (Some(&p), Some(&c)) => self
                .graph
                .edges_connecting(p, c)
                .map(|edge| *edge.weight())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether rows of `to` can be reached from `from` by following links
    pub fn can_reach(&self, from: &str, to: &str) -> bool {
        match (self.nodes.get(from), self.nodes.get(to)) {
            (Some(&start), Some(&goal)) => {
                petgraph::algo::has_path_connecting(&self.graph, start, goal, None)
            }
            _ => false,
        }
    }
}
