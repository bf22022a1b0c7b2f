//! 用户处理器

use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};

use super::model::{CreateUserRequest, User};
use super::selection::{bisect_random, filter_adults, Selection};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::optional_json, response::ApiResponse};

pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(state.user_service.list_users().await))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), CoreError> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

pub async fn adult_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(state.user_service.adult_users().await))
}

pub async fn random_users(State(state): State<AppState>) -> Json<ApiResponse<Selection<User>>> {
    let selection = state.user_service.random_users(state.rng.as_ref()).await;
    Json(ApiResponse::success(selection))
}

/// 对请求体中的用户列表做成年过滤，没有请求体时视为空列表
pub async fn filter_adults_in_body(
    body: Bytes,
) -> Result<Json<ApiResponse<Vec<User>>>, CoreError> {
    let users: Vec<User> = optional_json(&body)?.unwrap_or_default();
    Ok(Json(ApiResponse::success(filter_adults(users.as_slice()))))
}

/// 对请求体中的用户列表做随机二分，没有请求体时返回 `false`
pub async fn bisect_in_body(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Selection<User>>>, CoreError> {
    let users: Option<Vec<User>> = optional_json(&body)?;
    let selection = bisect_random(users.as_deref(), state.rng.as_ref());
    Ok(Json(ApiResponse::success(selection)))
}
