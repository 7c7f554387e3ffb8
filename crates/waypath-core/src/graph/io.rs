//! Loading graph descriptions from disk
//!
//! A graph file lists declared nodes, unweighted adjacency lists, and
//! individually weighted edges. Any section may be omitted:
//!
//! ```toml
//! nodes = ["isolated"]
//!
//! [adjacency]
//! you = ["alice", "bob", "claire"]
//!
//! [[edges]]
//! from = "start"
//! to = "a"
//! weight = 6.0
//! ```
//!
//! The same structure is accepted as JSON or YAML, chosen by file extension.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bail_invalid;
use crate::bail_unsupported;
use crate::error::{Result, WaypathError};
use crate::graph::types::Weight;
use crate::graph::Graph;

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
    Yaml,
}

impl GraphFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(GraphFormat::Json),
            "toml" => Ok(GraphFormat::Toml),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            _ => bail_unsupported!(
                "graph file extension",
                format!("{:?}", ext),
                "json, toml, yaml, yml"
            ),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Json => write!(f, "json"),
            GraphFormat::Toml => write!(f, "toml"),
            GraphFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A single edge entry in a graph file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// The `adjacency` section: `source -> [targets]` in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyLists(pub Vec<(String, Vec<String>)>);

impl AdjacencyLists {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<String>)> {
        self.0.iter()
    }
}

impl IntoIterator for AdjacencyLists {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for AdjacencyLists {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (from, tos) in &self.0 {
            map.serialize_entry(from, tos)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AdjacencyLists {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ListsVisitor;

        impl<'de> Visitor<'de> for ListsVisitor {
            type Value = AdjacencyLists;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of node names to lists of neighbor names")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut lists = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((from, tos)) = access.next_entry::<String, Vec<String>>()? {
                    lists.push((from, tos));
                }
                Ok(AdjacencyLists(lists))
            }
        }

        deserializer.deserialize_map(ListsVisitor)
    }
}

/// On-disk graph description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Nodes declared without (or in addition to) outgoing edges
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Unweighted adjacency lists, kept in file order; list order is
    /// neighbor order
    #[serde(default, skip_serializing_if = "AdjacencyLists::is_empty")]
    pub adjacency: AdjacencyLists,

    /// Edges with optional weights, applied in file order
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphFile {
    /// Parse a graph description in the given format
    pub fn parse(content: &str, format: GraphFormat) -> Result<Self> {
        let file: GraphFile = match format {
            GraphFormat::Json => serde_json::from_str(content)?,
            GraphFormat::Toml => toml::from_str(content)?,
            GraphFormat::Yaml => serde_yaml::from_str(content)?,
        };
        file.check_names()?;
        Ok(file)
    }

    /// Read and parse a graph file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = GraphFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read graph", path.display(), e))?;

        let file = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            %format,
            nodes = file.nodes.len(),
            adjacency = file.adjacency.len(),
            edges = file.edges.len(),
            "loaded graph file"
        );
        Ok(file)
    }

    fn check_names(&self) -> Result<()> {
        let adjacency_names = self
            .adjacency
            .iter()
            .flat_map(|(from, tos)| std::iter::once(from).chain(tos));
        let edge_names = self.edges.iter().flat_map(|e| [&e.from, &e.to]);

        for name in self.nodes.iter().chain(adjacency_names).chain(edge_names) {
            if name.trim().is_empty() {
                bail_invalid!("node name", format!("{:?}", name));
            }
        }
        Ok(())
    }

    /// Build the in-memory graph: declared nodes, then adjacency lists, then
    /// weighted edges.
    pub fn into_graph(self) -> Graph {
        let mut graph = Graph::new();

        for node in self.nodes {
            graph.add_node(node);
        }

        for (from, tos) in self.adjacency {
            graph.add_node(from.clone());
            for to in tos {
                graph.add_edge(from.clone(), to, None);
            }
        }

        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }

        graph
    }
}

/// Load a graph file straight into a [`Graph`]
pub fn load_graph(path: &Path) -> Result<Graph> {
    Ok(GraphFile::load(path)?.into_graph())
}
