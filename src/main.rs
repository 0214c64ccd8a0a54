//! Atelier Backend
//!
//! REST backend for a tattoo artist's portfolio and booking site: SQLite
//! persistence, local media storage for uploads, and a markdown content
//! layer for guest spots and global site settings.

mod api;
mod auth;
mod config;
mod content;
mod db;
mod errors;
mod models;
mod storage;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use content::ContentStore;
use db::Repository;
use storage::MediaStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub storage: Arc<MediaStore>,
    pub content: Arc<ContentStore>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Atelier Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Media path: {:?}", config.media_path);
    tracing::info!("Content path: {:?}", config.content_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if the admin login is not configured
    if config.admin_email.is_none() || config.admin_password.is_none() {
        tracing::warn!(
            "Admin credentials not configured (ATELIER_ADMIN_EMAIL / ATELIER_ADMIN_PASSWORD). Admin login is disabled!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Initialize media storage
    let storage = Arc::new(MediaStore::open(&config.media_path, &config.public_base_url).await?);

    // Load authored content
    tracing::info!("Loading content...");
    let content = Arc::new(ContentStore::load(&config.content_path)?);
    tracing::info!("Loaded {} guest spots", content.guest_spots().len());

    // Create application state
    let state = AppState {
        repo,
        storage,
        content,
        sessions: Arc::new(SessionStore::default()),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the session store for the auth layer
    let sessions = state.sessions.clone();

    // Admin routes: everything registered before the layer is guarded by the
    // session middleware; login is added after it and stays open.
    let admin_routes = Router::new()
        .route("/bookings", get(api::list_bookings))
        .route("/bookings/{id}/status", put(api::update_booking_status))
        .route("/tattoos", get(api::list_tattoos))
        .route("/tattoos", post(api::create_tattoo))
        .route("/tattoos/{id}", delete(api::delete_tattoo))
        .route("/stats", get(api::get_stats))
        .route("/logout", post(api::logout))
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(sessions.clone(), req, next)
        }))
        .route("/login", post(api::login));

    // Public routes (no auth required)
    let api_routes = Router::new()
        .route("/booking", post(api::submit_booking))
        .route("/portfolio", get(api::list_portfolio))
        .route("/guests", get(api::list_guest_spots))
        .route("/info", get(api::get_global_info))
        .nest("/admin", admin_routes);

    // Uploaded images are served directly from the media directory
    let media = ServeDir::new(state.storage.root().to_path_buf());

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/media", media)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
