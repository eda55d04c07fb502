use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::algorithm::{k_shortest_paths, shortest_path, PathSearch, SearchMode};
use crate::data_structures::BannedEdges;
use crate::graph::generators::{generate_grid, generate_layered, generate_random};
use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/paths/shortest/:session_id", post(find_shortest_path))
        .route("/api/paths/k-shortest/:session_id", post(find_k_shortest_paths))
        .route("/api/paths/compare/:session_id", post(compare_modes))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
        details: None,
    }))
}

fn invalid_input(err: Error) -> ApiError {
    let code = match err {
        Error::UnknownNode(_) => "unknown_node",
        Error::NegativeWeight(_) => "negative_weight",
        _ => "invalid_input",
    };
    api_error(StatusCode::BAD_REQUEST, code, err.to_string())
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn lock_sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
    state.sessions.lock().map_err(|_| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "session_store_unavailable",
            "Session store is unavailable".to_string(),
        )
    })
}

/// Stores a session, evicting the oldest one when the store is full
fn store_session(state: &AppState, session: Session) -> Result<(), ApiError> {
    let mut sessions = lock_sessions(state)?;
    if sessions.len() >= state.config.max_sessions {
        let oldest = sessions
            .values()
            .min_by_key(|s| s.created_at)
            .map(|s| s.id);
        if let Some(id) = oldest {
            warn!("session limit {} reached, evicting {}", state.config.max_sessions, id);
            sessions.remove(&id);
        }
    }
    sessions.insert(session.id, session);
    Ok(())
}

fn session_graph(state: &AppState, session_id: &Uuid) -> Result<Arc<ServiceGraph>, ApiError> {
    let sessions = lock_sessions(state)?;
    sessions
        .get(session_id)
        .map(|session| Arc::clone(&session.index))
        .ok_or_else(session_not_found)
}

fn remember_result(state: &AppState, session_id: &Uuid, response: &PathResponse) -> Result<(), ApiError> {
    let mut sessions = lock_sessions(state)?;
    if let Some(session) = sessions.get_mut(session_id) {
        session.last_result = Some(response.clone());
    }
    Ok(())
}

/// Upload a graph
pub async fn create_graph(
    State(state): State<AppState>,
    Json(graph): Json<WebGraph>,
) -> Result<Json<Session>, ApiError> {
    let index = convert_web_graph_to_rust(&graph).map_err(invalid_input)?;
    info!("stored graph with {} nodes and {} edges", index.node_count(), index.edge_count());

    let session = Session::new(graph, index);
    store_session(&state, session.clone())?;
    Ok(Json(session))
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    let shape = GraphShape::from_request(&request)?;
    check_generation_limits(&state, &shape)?;

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let max_weight = request.max_weight.max(1);

    let built = run_bounded(&state, move |_| {
        let generated = shape.generate(&mut rng, max_weight);
        let graph = convert_graph_to_web(&generated);
        convert_web_graph_to_rust(&graph).map(|index| (graph, index))
    })
    .await?;
    let (graph, index) = built.map_err(invalid_input)?;

    info!("generated {:?} graph with {} nodes", shape, index.node_count());
    let session = Session::new(graph, index);
    store_session(&state, session.clone())?;
    Ok(Json(session))
}

/// Generator choice with every dimension resolved
#[derive(Debug, Clone, Copy)]
enum GraphShape {
    Random { nodes: usize, edge_factor: f64 },
    Layered { layers: usize, width: usize },
    Grid { width: usize, height: usize },
}

impl GraphShape {
    fn from_request(request: &GraphGenerationRequest) -> Result<Self, ApiError> {
        match request.graph_type.as_str() {
            "random" => Ok(GraphShape::Random {
                nodes: request.node_count,
                edge_factor: request.edge_factor,
            }),
            "layered" => Ok(GraphShape::Layered {
                layers: request.layers.unwrap_or(4).max(1),
                width: request.width.unwrap_or(3).max(1),
            }),
            "grid" => {
                let side = (request.node_count as f64).sqrt().ceil() as usize;
                Ok(GraphShape::Grid {
                    width: request.width.unwrap_or(side),
                    height: request.height.unwrap_or(side),
                })
            }
            _ => Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            )),
        }
    }

    /// Planned (nodes, edges), or `None` when the request cannot be sized
    fn size(&self) -> Option<(usize, usize)> {
        match *self {
            GraphShape::Random { nodes, edge_factor } => {
                let edges = edge_factor * nodes as f64;
                if !edges.is_finite() || edges < 0.0 || edges >= usize::MAX as f64 {
                    return None;
                }
                Some((nodes, edges as usize))
            }
            GraphShape::Layered { layers, width } => {
                let nodes = layers.checked_mul(width)?.checked_add(2)?;
                let between = width.checked_mul(width)?.checked_mul(layers - 1)?;
                let edges = between.checked_add(width.checked_mul(2)?)?;
                Some((nodes, edges))
            }
            GraphShape::Grid { width, height } => {
                let nodes = width.checked_mul(height)?;
                Some((nodes, nodes.checked_mul(4)?))
            }
        }
    }

    fn generate(&self, rng: &mut StdRng, max_weight: u32) -> DirectedGraph<usize, u32> {
        match *self {
            GraphShape::Random { nodes, edge_factor } => generate_random(rng, nodes, edge_factor, 1, max_weight),
            GraphShape::Layered { layers, width } => generate_layered(rng, layers, width, max_weight),
            GraphShape::Grid { width, height } => generate_grid(width, height),
        }
    }
}

fn check_generation_limits(state: &AppState, shape: &GraphShape) -> Result<(), ApiError> {
    let (nodes, edges) = shape.size().ok_or_else(|| {
        invalid_input(Error::InvalidParameter(format!("{:?} cannot be built", shape)))
    })?;

    let config = &state.config;
    if nodes > config.max_generated_nodes || edges > config.max_generated_edges {
        return Err(invalid_input(Error::InvalidParameter(format!(
            "{} nodes and {} edges exceed the limits of {} and {}",
            nodes, edges, config.max_generated_nodes, config.max_generated_edges
        ))));
    }
    Ok(())
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = lock_sessions(&state)?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.graph.clone()))
        .ok_or_else(session_not_found)
}

/// Lightest path between two nodes
pub async fn find_shortest_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let graph = session_graph(&state, &session_id)?;
    check_endpoints(&graph, &request.start, &request.end)?;

    let query = request.clone();
    let (paths, elapsed) = run_bounded(&state, move |_| {
        let started = Instant::now();
        let path = shortest_path(graph.as_ref(), &query.start, &query.end, query.mode);
        (path.into_iter().collect::<Vec<_>>(), started.elapsed())
    })
    .await?;

    let response = build_response(request.mode, request.start, request.end, 1, &paths, elapsed);
    remember_result(&state, &session_id, &response)?;
    Ok(Json(response))
}

/// Up to k lightest loopless paths between two nodes
pub async fn find_k_shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<KPathsRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    if request.k > state.config.max_k {
        return Err(invalid_input(Error::InvalidParameter(format!(
            "k = {} exceeds the limit of {}",
            request.k, state.config.max_k
        ))));
    }

    let graph = session_graph(&state, &session_id)?;
    check_endpoints(&graph, &request.start, &request.end)?;

    let query = request.clone();
    let (paths, elapsed) = run_bounded(&state, move |deadline| {
        let started = Instant::now();
        // Past the deadline every deviation search reports no path, so the enumeration
        // drains its queue and returns instead of running on unobserved.
        let search = |graph: &ServiceGraph, from: &String, to: &String, banned: &BannedEdges<String>| {
            if deadline.expired() {
                return None;
            }
            query.mode.search(graph, from, to, banned)
        };
        let paths = k_shortest_paths(graph.as_ref(), &query.start, &query.end, query.k, search);
        (paths, started.elapsed())
    })
    .await?;

    let response = build_response(request.mode, request.start, request.end, request.k, &paths, elapsed);
    remember_result(&state, &session_id, &response)?;
    Ok(Json(response))
}

/// Run the same query through both engines
pub async fn compare_modes(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let vanilla_query = PathRequest { mode: SearchMode::Vanilla, ..request.clone() };
    let Json(vanilla) =
        find_shortest_path(State(state.clone()), Path(session_id), Json(vanilla_query)).await?;

    let bidirectional_query = PathRequest { mode: SearchMode::Bidirectional, ..request.clone() };
    let Json(bidirectional) =
        find_shortest_path(State(state.clone()), Path(session_id), Json(bidirectional_query)).await?;

    let agree = match (vanilla.paths.first(), bidirectional.paths.first()) {
        (Some(v), Some(b)) => weights_agree(v.weight, b.weight),
        (None, None) => true,
        _ => false,
    };
    if !agree {
        warn!("search modes disagree on {} -> {}", request.start, request.end);
    }

    Ok(Json(CompareResponse {
        vanilla,
        bidirectional,
        agree,
    }))
}

/// List all sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = lock_sessions(&state)?;
    let mut summaries: Vec<SessionSummary> = sessions
        .values()
        .map(|session| SessionSummary {
            id: session.id,
            node_count: session.index.node_count(),
            edge_count: session.index.edge_count(),
            created_at: session.created_at,
        })
        .collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get a specific session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = lock_sessions(&state)?;
    sessions
        .get(&session_id)
        .cloned()
        .map(Json)
        .ok_or_else(session_not_found)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "kshortest",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    }))
}

fn check_endpoints(graph: &ServiceGraph, start: &str, end: &str) -> Result<(), ApiError> {
    for node in [start, end] {
        if !graph.has_node(&node.to_string()) {
            return Err(invalid_input(Error::UnknownNode(node.to_string())));
        }
    }
    Ok(())
}

/// Point in time after which a running search result is no longer wanted.
/// `None` is a limit too far out to represent, which never expires.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn expired(&self) -> bool {
        self.0.map_or(false, |at| Instant::now() >= at)
    }
}

/// Runs a search off the async workers, abandoning it after the configured timeout.
///
/// An abandoned search yields no partial result. A job that is still running when the
/// timeout fires keeps its blocking thread until it returns; jobs that can stop early
/// poll the [`Deadline`] they are handed. A job that finishes past the deadline counts
/// as timed out, since it may have stopped early.
async fn run_bounded<T, F>(state: &AppState, job: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(Deadline) -> T + Send + 'static,
{
    let limit = Duration::from_millis(state.config.request_timeout_ms);
    let deadline = Deadline(Instant::now().checked_add(limit));
    let timed_out = || {
        api_error(
            StatusCode::REQUEST_TIMEOUT,
            "search_timeout",
            format!("Search did not finish within {} ms", state.config.request_timeout_ms),
        )
    };

    let task = tokio::task::spawn_blocking(move || {
        let result = job(deadline);
        (!deadline.expired()).then_some(result)
    });

    match tokio::time::timeout(limit, task).await {
        Ok(Ok(Some(result))) => Ok(result),
        Ok(Ok(None)) | Err(_) => Err(timed_out()),
        Ok(Err(err)) => Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "search_failed",
            format!("Search task failed: {}", err),
        )),
    }
}

/// Total weights of the same optimum, allowing for the rounding of float sums taken
/// in a different order
pub fn weights_agree(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn build_response(
    mode: SearchMode,
    start: String,
    end: String,
    k: usize,
    paths: &[ServicePath],
    elapsed: Duration,
) -> PathResponse {
    PathResponse {
        execution_id: Uuid::new_v4(),
        algorithm: PathSearch::<String, OrderedFloat<f64>, ServiceGraph>::name(&mode).to_string(),
        mode,
        start,
        end,
        k,
        found: !paths.is_empty(),
        paths: paths.iter().map(WebPath::from).collect(),
        execution_time_ms: elapsed.as_secs_f64() * 1000.0,
    }
}

fn convert_graph_to_web(graph: &DirectedGraph<usize, u32>) -> WebGraph {
    let mut ids: Vec<usize> = graph.nodes().copied().collect();
    ids.sort_unstable();

    let mut links: Vec<WebEdge> = graph
        .edges()
        .map(|(from, to, weight)| WebEdge {
            source: from.to_string(),
            target: to.to_string(),
            weight: f64::from(weight),
        })
        .collect();
    links.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

    WebGraph {
        nodes: ids.into_iter().map(|id| id.to_string()).collect(),
        links,
    }
}

/// Builds the searchable graph, rejecting negative or NaN weights and undeclared nodes
pub fn convert_web_graph_to_rust(web_graph: &WebGraph) -> crate::Result<ServiceGraph> {
    let mut graph = DirectedGraph::with_capacity(web_graph.nodes.len());
    for node in &web_graph.nodes {
        graph.add_node(node.clone());
    }

    for edge in &web_graph.links {
        if edge.weight.is_nan() || edge.weight < 0.0 {
            return Err(Error::NegativeWeight(edge.weight));
        }
        for endpoint in [&edge.source, &edge.target] {
            if !graph.has_node(endpoint) {
                return Err(Error::UnknownNode(endpoint.clone()));
            }
        }
        graph.add_edge(edge.source.clone(), edge.target.clone(), OrderedFloat(edge.weight));
    }

    Ok(graph)
}
