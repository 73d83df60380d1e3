//! # Parc Server
//!
//! Main entry point for the Parc inventory service: loads configuration,
//! connects the database pool, wires the repositories and services once
//! with process-wide lifetime, and serves the REST API until shutdown.

use parc_config::ConfigLoader;
use parc_core::{ParcError, ParcResult};
use parc_repository::{
    create_pool, MySqlCompanyRepository, MySqlComputerRepository, MySqlUserRepository,
};
use parc_rest::{create_router, AppState};
use parc_security::PasswordHasher;
use parc_service::{
    CompanyService, CompanyServiceImpl, ComputerMapper, ComputerService, ComputerServiceImpl,
    DateFormat, UserService, UserServiceImpl,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting Parc server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ParcResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and bring the schema up to date
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Wire repositories and services; one shared instance of each for the
    // whole process.
    let computer_repository = Arc::new(MySqlComputerRepository::new(db_pool.clone()));
    let company_repository = Arc::new(MySqlCompanyRepository::new(
        db_pool.clone(),
        computer_repository.clone(),
    ));
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let mapper = ComputerMapper::new(DateFormat::new(&config.format.date_format));

    let computer_service: Arc<dyn ComputerService> = Arc::new(ComputerServiceImpl::new(
        computer_repository,
        company_repository.clone(),
        mapper,
    ));
    let company_service: Arc<dyn CompanyService> =
        Arc::new(CompanyServiceImpl::new(company_repository));
    let user_service: Arc<dyn UserService> =
        Arc::new(UserServiceImpl::new(user_repository, password_hasher));

    let app_state = AppState::new(computer_service, company_service, user_service);

    // Create the router and start serving
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    info!("Starting HTTP server on http://{}", addr);
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ParcError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ParcError::Internal(format!("HTTP server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,parc=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
