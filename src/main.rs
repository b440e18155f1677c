use authgate::logging::init_tracing;
use authgate::router::init_router;
use authgate::state::init_app_state;
use authgate_config::ServerConfig;
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(&server_config);

    if let Err(e) = run(server_config).await {
        error!(error = ?e, "Server exited with error");
        std::process::exit(1);
    }
}

async fn run(server_config: ServerConfig) -> anyhow::Result<()> {
    let state = init_app_state();
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}
