//! Authentication middleware and extractor.
//!
//! `auth_middleware` validates Bearer tokens through the `TokenValidator`
//! trait and injects the resulting `Caller` into request extensions.
//! Requests without a token pass through so the health endpoints stay
//! reachable; protected handlers take `RequireAuth` to enforce it.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::auth::{AuthError, TokenValidator};
use crate::application::Caller;

/// Auth middleware state, the token validator behind the trait.
pub type AuthState = Arc<dyn TokenValidator>;

/// Validates the `Authorization: Bearer <token>` header.
///
/// A valid token puts the `Caller` into request extensions. An invalid or
/// expired token is rejected with 401 immediately. A missing token passes
/// through without a caller.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match validator.validate(token).await {
            Ok(caller) => {
                request.extensions_mut().insert(caller);
                next.run(request).await
            }
            Err(e) => {
                let message = match e {
                    AuthError::TokenExpired => "Token expired",
                    AuthError::InvalidToken => "Invalid token",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "AUTH_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth(pub Caller);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Caller>()
                .copied()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection for requests reaching a protected handler without a caller.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::domain::foundation::{Role, UserId};
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn test_caller() -> Caller {
        Caller::new(UserId::new(), Role::Employee)
    }

    fn app(validator: AuthState) -> Router {
        async fn protected(RequireAuth(caller): RequireAuth) -> String {
            caller.user_id.to_string()
        }

        Router::new()
            .route("/protected", get(protected))
            .layer(axum::middleware::from_fn_with_state(
                validator,
                auth_middleware,
            ))
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler() {
        let caller = test_caller();
        let validator: AuthState =
            Arc::new(MockTokenValidator::new().with_caller("good-token", caller));

        let response = app(validator)
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("Authorization", "Bearer good-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_token_is_rejected_with_401() {
        let validator: AuthState = Arc::new(MockTokenValidator::new());

        let response = app(validator)
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("Authorization", "Bearer bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_token_fails_at_the_extractor() {
        let validator: AuthState = Arc::new(MockTokenValidator::new());

        let response = app(validator)
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
