use std::error::Error;

use tokio::net::TcpListener;
use todo_server::{config::ServerConfig, telemetry, TodoStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;
    telemetry::init(&config.log_filter);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %listener.local_addr()?,
        cors = ?config.cors_origins,
        "listening on {}{}",
        config.bind_addr(),
        todo_server::API_PREFIX
    );

    let app = todo_server::router_with_cors(TodoStore::new(), &config.cors_origins);
    todo_server::run_until(listener, app, shutdown_signal()).await?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
