use inventory_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env overrides nothing already set)
    dotenv::dotenv().ok();

    // 2. Load configuration and set up logging
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        work_dir = %config.work_dir,
        "inventory server starting"
    );

    // 3. Open the store and build shared state
    let state = ServerState::initialize(&config)?;

    // 4. Run the HTTP server until shutdown
    let server = Server::new(state);
    if let Err(e) = server.run().await {
        tracing::error!("server error: {e}");
        return Err(e);
    }

    Ok(())
}
