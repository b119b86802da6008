//! AssetFlow Server - Asset Tracking System
//!
//! A Rust REST API server for tracking assets, vendors and assignments.

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetflow_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("assetflow_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting AssetFlow Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(
        repository,
        config.auth.clone(),
        config.uploads.clone(),
        config.assets.clone(),
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/admin_signup/", post(api::auth::admin_signup))
        .route("/admin_login/", post(api::auth::admin_login))
        .route("/vendor-signup/", post(api::auth::vendor_signup))
        .route("/vendor-login/", post(api::auth::vendor_login))
        // Admin dashboard
        .route("/admin/", get(api::stats::dashboard))
        // Assets
        .route("/admin/assets/", get(api::assets::list_assets))
        .route("/admin/assets/add/", post(api::assets::create_asset))
        .route("/admin/assets/delete/:id/", post(api::assets::delete_asset))
        .route("/admin/assets/status/:id/", post(api::assets::change_status))
        .route("/admin/history/:id/", get(api::assets::asset_history))
        // Assignments
        .route("/admin/assignments/", get(api::assignments::list_assignments))
        .route(
            "/admin/assignments/assign/:id/",
            post(api::assignments::assign_asset),
        )
        // Categories
        .route("/admin/categories/", get(api::categories::list_categories))
        .route("/admin/categories/add/", post(api::categories::add_category))
        // Vendor management
        .route("/admin/vendors/", get(api::vendors::list_vendors))
        .route("/admin/vendors/add/", post(api::vendors::add_vendor))
        .route("/admin/vendors/delete/:id/", post(api::vendors::delete_vendor))
        .route("/admin/vendor/:id/assets", get(api::vendors::vendor_assets))
        // Vendor portal
        .route("/vendor/", get(api::vendors::vendor_dashboard))
        .route("/vendor-add-asset/", post(api::vendors::vendor_add_asset))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
