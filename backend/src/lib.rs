//! # Pet Care Backend
//!
//! Everything behind the pet care tracker's HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! UI (any HTTP client)
//!     ↓
//! IO Layer (REST handlers, error mapping)
//!     ↓
//! Domain Layer (per-entity services, derived views)
//!     ↓
//! Storage Layer (in-memory entity store)
//! ```
//!
//! The store is built once at startup and shared with every service through
//! [`AppState`]; tests build their own fresh state.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::domain::{DiaryService, PetService, TaskService, UserService, VaccineService};
use crate::storage::MemoryStore;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub pet_service: PetService,
    pub task_service: TaskService,
    pub vaccine_service: VaccineService,
    pub diary_service: DiaryService,
    /// The fixed user every request acts as
    pub current_user_id: i64,
    pub due_soon_days: u32,
}

impl AppState {
    /// Wire every service to the same store
    pub fn with_store(store: MemoryStore, config: &ServerConfig) -> Self {
        let store = Arc::new(store);

        Self {
            user_service: UserService::new(store.clone()),
            pet_service: PetService::new(store.clone()),
            task_service: TaskService::new(store.clone()),
            vaccine_service: VaccineService::new(store.clone()),
            diary_service: DiaryService::new(store),
            current_user_id: config.current_user_id,
            due_soon_days: config.due_soon_days,
        }
    }
}

/// Initialize the backend with a fresh store holding only the seed user
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up in-memory store");
    let app_state = AppState::with_store(MemoryStore::new(), config);

    match app_state.user_service.get_user(config.current_user_id).await? {
        Some(user) => info!("Acting as user {} ({})", user.id, user.username),
        None => warn!(
            "Configured user {} does not exist; listings will be empty",
            config.current_user_id
        ),
    }

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(io::health))
        .route("/pets", get(io::list_pets).post(io::create_pet))
        .route(
            "/pets/:id",
            get(io::get_pet).put(io::update_pet).delete(io::delete_pet),
        )
        .route("/pets/:id/tasks", get(io::list_pet_tasks))
        .route("/pets/:id/vaccines", get(io::list_pet_vaccines))
        .route("/pets/:id/diary", get(io::list_pet_diary_entries))
        .route("/tasks", get(io::list_tasks).post(io::create_task))
        .route("/tasks/summary", get(io::get_task_summary))
        .route(
            "/tasks/:id",
            get(io::get_task).put(io::update_task).delete(io::delete_task),
        )
        .route("/vaccines", get(io::list_vaccines).post(io::create_vaccine))
        .route("/vaccines/schedule", get(io::get_vaccine_schedule))
        .route(
            "/vaccines/:id",
            get(io::get_vaccine)
                .put(io::update_vaccine)
                .delete(io::delete_vaccine),
        )
        .route(
            "/diary",
            get(io::list_diary_entries).post(io::create_diary_entry),
        )
        .route(
            "/diary/:id",
            get(io::get_diary_entry)
                .put(io::update_diary_entry)
                .delete(io::delete_diary_entry),
        );

    let mut app = Router::new().nest("/api", api_routes);

    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    Ok(app
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
