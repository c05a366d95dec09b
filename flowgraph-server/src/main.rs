//! flowgraph HTTP server: create, run, and inspect workflow graphs.
//!
//! Configure via env: LISTEN (default 0.0.0.0:8123), RUST_LOG. A `.env`
//! file in the working directory or workspace root is loaded at startup.

use std::sync::Arc;

use flowgraph::{StepRegistry, WorkflowService};
use tracing::info;

use flowgraph_server::steps::register_builtin_steps;

/// Load .env from current directory; if not found, try parent (workspace
/// root when run from the crate dir).
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(parent) = cwd.parent() {
            let env_path = parent.join(".env");
            if env_path.is_file() {
                let _ = dotenv::from_path(env_path);
            }
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,flowgraph=debug,flowgraph_server=debug")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    load_dotenv();
    init_tracing();

    // Registration finishes before the service exists; the registry is
    // read-only from here on.
    let mut registry = StepRegistry::new();
    register_builtin_steps(&mut registry);
    let service = Arc::new(WorkflowService::new(Arc::new(registry)));

    let app = flowgraph_server::app(service);
    let listen = std::env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8123".to_string());
    info!("listening on http://{}", listen);
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
