//! Randevu Booking Backend
//!
//! REST backend for patient registration and doctor appointments, backed by SQLite
//! or an in-memory store.

mod api;
mod booking;
mod config;
mod db;
mod errors;
mod models;
mod uploads;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::RecordStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!("Starting Randevu Booking Backend");
    tracing::info!("Store backend: {:?}", config.store_backend);
    tracing::info!("Database URL: {}", config.database_url);
    tracing::info!("Upload directory: {:?}", config.upload_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.public_base_url.is_none() {
        tracing::warn!(
            "No RANDEVU_PUBLIC_BASE_URL set; upload links echo the client-supplied Host header"
        );
    }

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let store = db::open_store(&config).await?;

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    let serve_uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health_check))
        // Doctors
        .route("/doktorlar", get(api::list_doctors))
        .route("/doktorlar/{id}", get(api::get_doctor))
        // Patients
        .route("/hasta_kayit", post(api::register_patient))
        .route(
            "/hastalar",
            get(api::list_patients).post(api::register_patient),
        )
        .route("/hastalar/{id}", get(api::get_patient))
        // Appointments
        .route(
            "/randevular",
            get(api::list_appointments)
                .post(api::create_appointment)
                .patch(api::confirm_appointment),
        )
        .route(
            "/randevular/onayla",
            get(api::list_confirm_segment_appointments).patch(api::confirm_appointment),
        )
        .route(
            "/randevular/id/{id}",
            patch(api::set_appointment_confirmation),
        )
        .route("/randevular/{hasta_id}", get(api::list_patient_appointments))
        // Uploads
        .route("/uploadfile", post(api::upload_file).layer(upload_limit))
        .route("/uploadfile/", post(api::upload_file).layer(upload_limit))
        .nest_service(uploads::PUBLIC_PREFIX, serve_uploads)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
