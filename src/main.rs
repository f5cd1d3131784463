use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use devconnect_api::config;
use devconnect_api::database::manager::DatabaseManager;
use devconnect_api::handlers::{posts, users};
use devconnect_api::middleware::jwt_auth_middleware;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting devconnect API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("DEVCONNECT_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("devconnect API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(post_routes())
        .merge(user_routes())
        .layer(CorsLayer::permissive());

    if config::config().api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn post_routes() -> Router {
    Router::new()
        .route("/api/posts/test", get(posts::test))
        // List and create both require a bearer token
        .route(
            "/api/posts",
            get(posts::list)
                .post(posts::create)
                .route_layer(from_fn(jwt_auth_middleware)),
        )
        // Single-post fetch is public; delete is owner-only behind auth
        .route(
            "/api/posts/:id",
            get(posts::get).merge(delete(posts::delete).route_layer(from_fn(jwt_auth_middleware))),
        )
}

fn user_routes() -> Router {
    Router::new()
        .route("/api/users/register", post(users::register))
        .route("/api/users/login", post(users::login))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "devconnect API",
            "version": version,
            "description": "Social posts backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "users": "/api/users/register, /api/users/login (public - token acquisition)",
                "posts_test": "/api/posts/test (public)",
                "posts": "/api/posts (protected - list, create)",
                "post": "/api/posts/:id (public fetch, owner-only delete)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
