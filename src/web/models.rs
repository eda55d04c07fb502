use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::SearchMode;
use crate::graph::DirectedGraph;
use crate::path::Path;

/// Graph type the service searches: string labels, float weights
pub type ServiceGraph = DirectedGraph<String, OrderedFloat<f64>>;

/// Path type the service produces
pub type ServicePath = Path<String, OrderedFloat<f64>>;

/// Represents an edge of an uploaded graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Represents a complete graph as exchanged over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<String>,
    pub links: Vec<WebEdge>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    #[serde(default = "default_edge_factor")]
    pub edge_factor: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,
    #[serde(default)]
    pub layers: Option<usize>,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_node_count() -> usize { 50 }
fn default_edge_factor() -> f64 { 3.0 }
fn default_max_weight() -> u32 { 10 }

/// Single shortest path query
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub mode: SearchMode,
}

/// k-shortest paths query
#[derive(Debug, Clone, Deserialize)]
pub struct KPathsRequest {
    pub start: String,
    pub end: String,
    pub k: usize,
    #[serde(default)]
    pub mode: SearchMode,
}

/// A path as returned over the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebPath {
    pub nodes: Vec<String>,
    /// Cumulative weight at each node
    pub weights: Vec<f64>,
    pub weight: f64,
}

impl From<&ServicePath> for WebPath {
    fn from(path: &ServicePath) -> Self {
        WebPath {
            nodes: path.node_sequence(),
            weights: path.elements().iter().map(|e| e.weight.into_inner()).collect(),
            weight: path.weight().into_inner(),
        }
    }
}

/// Response containing query results
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub mode: SearchMode,
    pub start: String,
    pub end: String,
    pub k: usize,
    pub found: bool,
    pub paths: Vec<WebPath>,
    pub execution_time_ms: f64,
}

/// Both engines run on the same query
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub vanilla: PathResponse,
    pub bidirectional: PathResponse,
    /// Same found flag and same total weight
    pub agree: bool,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing graph data and the last query answered on it
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub index: Arc<ServiceGraph>,
}

impl Session {
    pub fn new(graph: WebGraph, index: ServiceGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
            index: Arc::new(index),
        }
    }
}

/// Listing entry for `/api/sessions`
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}
