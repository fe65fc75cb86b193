//! parlor-admin - Admin backend for an ice-cream parlor.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use sqlx::mysql::MySqlConnectOptions;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parlor_admin::{
    config::Config,
    hash::PasswordHasher,
    server::{create_router, AppState, RouterConfig},
    store::MySqlStore,
    upload::UploadStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads the environment
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!(
        "  Database: {}@{}/{}",
        config.database_user, config.database_host, config.database
    );
    info!("  Pool size: {}", config.pool_size);
    info!("  Public dir: {}", config.public_dir.display());
    info!("  Upload dir: {}", config.upload_dir.display());
    info!("  Bcrypt cost: {}", config.bcrypt_cost);

    // Connect to MySQL
    info!("");
    info!("Connecting to MySQL...");
    let store = match MySqlStore::connect(connect_options(&config), config.pool_size).await {
        Ok(store) => {
            info!("  Connected successfully");
            store
        }
        Err(e) => {
            error!("  Failed to connect to MySQL: {}", e);
            error!("");
            error!("  Please check:");
            error!(
                "    - The database server at '{}' is running and reachable",
                config.database_host
            );
            error!("    - DATABASE_USER and DATABASE_PASSWORD are correct");
            error!(
                "    - The database '{}' exists and is accessible",
                config.database
            );
            return ExitCode::FAILURE;
        }
    };

    // Initialize the schema (idempotent)
    if let Err(e) = store.init_schema().await {
        error!("Failed to initialize database schema: {}", e);
        return ExitCode::FAILURE;
    }

    // Create the upload directory if needed
    let uploads = UploadStore::new(&config.upload_dir);
    if let Err(e) = uploads.ensure_dir().await {
        error!(
            "Failed to create upload directory {}: {}",
            config.upload_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    // Build application state and router
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let state = AppState::new(store, hasher, uploads);
    let router = create_router(state, build_router_config(&config));

    // Bind and serve
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    open http://{}/admin_signup", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Build MySQL connection options from the application config.
fn connect_options(config: &Config) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&config.database_host)
        .username(&config.database_user)
        .database(&config.database);

    if let Some(password) = &config.database_password {
        options = options.password(password);
    }

    options
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::new(&config.public_dir)
        .with_max_upload_bytes(config.max_upload_bytes)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "parlor_admin=debug,tower_http=debug"
    } else {
        "parlor_admin=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
