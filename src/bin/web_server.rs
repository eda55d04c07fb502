use kshortest::web::server::{start_server, ServerConfig};
use std::env;

fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let defaults = ServerConfig::default();

    // Port from the first argument, then the environment
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse().unwrap_or(defaults.port),
        None => env_or("KSHORTEST_PORT", defaults.port),
    };

    let config = ServerConfig {
        max_k: env_or("KSHORTEST_MAX_K", defaults.max_k),
        max_generated_nodes: env_or("KSHORTEST_MAX_GENERATED_NODES", defaults.max_generated_nodes),
        request_timeout_ms: env_or("KSHORTEST_TIMEOUT_MS", defaults.request_timeout_ms),
        ..defaults
    }
    .with_port(port);

    println!("Starting kshortest server...");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Max k: {}", config.max_k);
    println!("   Max generated nodes: {}", config.max_generated_nodes);
    println!("   Search timeout: {} ms", config.request_timeout_ms);
    println!();

    start_server(config).await?;

    Ok(())
}
