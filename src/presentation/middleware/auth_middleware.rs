// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::services::auth_service::AuthService;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    pub auth: Arc<AuthService>,
}

/// 管理员认证中间件
///
/// 校验 Bearer 令牌并要求管理员角色，通过后将 [`User`] 注入请求扩展。
///
/// [`User`]: crate::domain::models::user::User
///
/// # 返回值
///
/// * 缺失或未知令牌 - 401
/// * 非管理员 - 403
/// * 用户存储不可用 - 500
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    debug!("AuthMiddleware processing path: {}", req.uri().path());

    let token = match bearer_token(&req) {
        Some(token) => token.to_string(),
        None => return deny(StatusCode::UNAUTHORIZED, "Missing bearer token"),
    };

    let user = match state.auth.current_user(&token).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("Rejected request with unknown token");
            return deny(StatusCode::UNAUTHORIZED, "Invalid token");
        }
        Err(e) => {
            error!("Database error resolving token: {}", e);
            return deny(StatusCode::INTERNAL_SERVER_ERROR, "Authentication unavailable");
        }
    };

    match state.auth.is_admin(&user).await {
        Ok(true) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(false) => {
            warn!("Non-admin user {} denied", user.email);
            deny(StatusCode::FORBIDDEN, "Access denied")
        }
        Err(e) => {
            error!("Database error checking admin role: {}", e);
            deny(StatusCode::INTERNAL_SERVER_ERROR, "Authentication unavailable")
        }
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn deny(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
