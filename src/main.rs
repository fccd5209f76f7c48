use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod api;
mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_api_rust=info,tower_http=info".into()),
        )
        .init();

    let config = config::AppConfig::from_env();
    tracing::info!("starting workout API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET must be set outside development");
    }

    let pool = database::pool::connect(&config.database).await?;
    let state = AppState::new(config, pool.clone());

    let app = app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Explicit teardown of the one process-wide store handle
    pool.close().await;
    tracing::info!("database pool closed, bye");

    Ok(())
}

fn app(state: AppState) -> Router {
    use handlers::protected::{day_exercises, days, exercises, routines, weights};
    use handlers::public::{debug, login};

    let protected = Router::new()
        .route("/api/routines", get(routines::list).post(routines::create))
        .route("/api/routines/today", get(routines::today))
        .route(
            "/api/routines/:routine_id",
            get(routines::get)
                .put(routines::update)
                .delete(routines::remove),
        )
        .route(
            "/api/routines/:routine_id/days",
            get(days::list).post(days::create),
        )
        .route(
            "/api/routines/:routine_id/days/:day_id",
            get(days::get).put(days::update).delete(days::remove),
        )
        .route(
            "/api/routines/:routine_id/days/:day_id/exercises",
            get(day_exercises::list).post(day_exercises::create),
        )
        .route(
            "/api/routines/:routine_id/days/:day_id/exercises/:exercise_id",
            delete(day_exercises::remove),
        )
        .route("/api/exercises", get(exercises::list).post(exercises::create))
        .route(
            "/api/exercises/:exercise_id",
            get(exercises::get).delete(exercises::remove),
        )
        .route(
            "/api/exercises/:exercise_id/weights",
            get(weights::list).post(weights::create),
        )
        .route(
            "/api/exercises/:exercise_id/weights/:weight_id",
            get(weights::get_nested)
                .put(weights::update_nested)
                .delete(weights::remove_nested),
        )
        .route(
            "/api/weights/:weight_id",
            get(weights::get_flat)
                .put(weights::update_flat)
                .delete(weights::remove_flat),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/auth/login", post(login::login))
        // Debug/seed endpoints, development only
        .route("/api/debug/seed", post(debug::seed))
        .route("/api/debug/stats", get(debug::stats))
        // Everything else requires a bearer token
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Workout API (Rust)",
        "version": version,
        "description": "Personal workout tracking API",
        "endpoints": {
            "login": "POST /api/auth/login (public)",
            "routines": "/api/routines[/:id] (bearer)",
            "today": "GET /api/routines/today (bearer)",
            "days": "/api/routines/:id/days[/:id] (bearer)",
            "day_exercises": "/api/routines/:id/days/:id/exercises[/:id] (bearer)",
            "exercises": "/api/exercises[/:id] (bearer)",
            "weights": "/api/exercises/:id/weights[/:id], /api/weights/:id (bearer)",
            "debug": "POST /api/debug/seed, GET /api/debug/stats (development only)"
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::pool::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "error": e.to_string()
            })),
        ),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {}", e);
    }
}
