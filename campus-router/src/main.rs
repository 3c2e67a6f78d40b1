use campus_router::cache::CacheConfig;
use campus_router::config::AppConfig;
use campus_router::dataset::{campus_graph, load_graph};
use campus_router::planner::SearchConfig;
use campus_router::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campus_router=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Load the graph
    let graph = match &config.graph_path {
        Some(path) => load_graph(path)?,
        None => campus_graph(),
    };
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    // Build app state
    let state = AppState::new(graph, SearchConfig::default(), &CacheConfig::default());

    // Create router
    let static_dir = config.static_dir.to_string_lossy();
    let app = create_router(state, &static_dir);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, static_dir = %static_dir, "campus router listening");
    info!("GET /api/landmarks, /api/route, /api/distances");

    axum::serve(listener, app).await?;
    Ok(())
}
