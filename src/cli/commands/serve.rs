use anyhow::Result;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::initialize_app_state;
use crate::router::create_router;

pub async fn serve(data_path: &Path, bind_address: &str, asset_dir: &Path) -> Result<()> {
    trace!("Entering serve function");
    info!("Covidash application starting up");
    debug!("Data path: {}", data_path.display());
    debug!("Asset directory: {}", asset_dir.display());
    debug!("Bind address: {}", bind_address);

    // Load the dataset once; the server refuses to start without it
    trace!("Initializing application state");
    let state = match initialize_app_state(data_path, asset_dir) {
        Ok(state) => {
            debug!("Application state initialized with {} rows", state.table.height());
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Covidash API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
