//! 应用层：路由与各业务模块

pub mod calendar;
pub mod products;
pub mod users;

use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;
use users::{RandomSource, ThreadRandom, UserService};

/// 共享应用状态
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub rng: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self::with_rng(user_service, Arc::new(ThreadRandom))
    }

    pub fn with_rng(user_service: UserService, rng: Arc<dyn RandomSource>) -> Self {
        Self { user_service, rng }
    }
}

/// 构建完整路由
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/day", get(calendar::get_day))
        .route(
            "/users",
            get(users::handler::list_users).post(users::handler::create_user),
        )
        .route(
            "/users/adults",
            get(users::handler::adult_users).post(users::handler::filter_adults_in_body),
        )
        .route(
            "/users/random",
            get(users::handler::random_users).post(users::handler::bisect_in_body),
        )
        .route("/products", post(products::handler::create_product))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
                .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "users_count": state.user_service.count().await,
    }))
}
