//! 认证中间件
//!
//! 为 JWT 认证和授权提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::AppError;

use crate::auth::access::{self, AccessRequirement, CurrentUser};
use crate::auth::jwt::{JwtError, JwtService};
use crate::core::AppState;

/// 认证中间件 - 要求用户登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，再对照活跃令牌
/// 注册表确认未被撤销，最后按目录当前状态解析调用者并注入
/// [`CurrentUser`] (`req.extensions_mut().insert(user)`)。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (健康检查、根路径)
/// - `/api/auth/login` (登录接口)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 令牌已撤销 | 401 TokenRevoked |
/// | 无效令牌 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (让它们正常返回 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 公共 API 路由跳过认证
    if path == "/api/auth/login" {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(uri = %req.uri(), "auth missing");
            return Err(AppError::unauthorized());
        }
    };

    // 验证令牌签名和时效
    let claims = match state.jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "auth failed");
            return Err(match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            });
        }
    };

    // 检查令牌是否仍在活跃列表中 (登出即撤销)
    if !state.tokens.is_active(token) {
        tracing::warn!(user_id = %claims.sub, "revoked token rejected");
        return Err(AppError::token_revoked());
    }

    // 按目录当前状态解析调用者 (用户可能已被删除)
    let user = {
        let dir = state.db.directory.read().await;
        access::resolve_caller(&dir, &claims.sub)?
    };

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// 权限检查中间件 - 要求特定权限
///
/// # 参数
///
/// - `permission`: 所需权限点，如 `"user.create"`, `"role.delete"`
///
/// # 用法
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/members/users", post(handler::create_user))
///     .layer(middleware::from_fn(require_permission("user.create")));
/// ```
///
/// # 错误
///
/// 无权限返回 403 Forbidden
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if let Err(e) = access::check_access(user, &AccessRequirement::Permission(permission)) {
                tracing::warn!(
                    user_id = %user.id,
                    required_permission = permission,
                    "permission denied"
                );
                return Err(e);
            }

            Ok(next.run(req).await)
        })
    }
}

/// 角色检查中间件 - 要求角色名单之一
pub fn require_roles(
    roles: &'static [&'static str],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if let Err(e) = access::check_access(user, &AccessRequirement::AnyRole(roles)) {
                tracing::warn!(
                    user_id = %user.id,
                    user_role = %user.role_name,
                    required_roles = ?roles,
                    "role requirement not met"
                );
                return Err(e);
            }

            Ok(next.run(req).await)
        })
    }
}

/// 管理员中间件 - 要求顶级角色或通配权限
///
/// # 错误
///
/// 非管理员返回 403 Forbidden
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;

    if let Err(e) = access::check_access(user, &AccessRequirement::Admin) {
        tracing::warn!(
            user_id = %user.id,
            user_role = %user.role_name,
            "admin required"
        );
        return Err(e);
    }

    Ok(next.run(req).await)
}
