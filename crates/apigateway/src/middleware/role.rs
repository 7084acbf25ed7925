use axum::{
    Extension, Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::{
    abstract_trait::DynSessionService,
    errors::ErrorResponse,
    guard::{Access, RoleGuard},
};
use tracing::debug;

/// Gates a view: placeholder while the store is loading, redirect to the
/// login view when the session is missing or has the wrong role.
pub async fn role_guard_middleware(
    State(guard): State<RoleGuard>,
    Extension(session_service): Extension<DynSessionService>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let access = guard.evaluate(&session_service.subscribe().borrow());

    match access {
        Access::Loading => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, "1")],
            Json(ErrorResponse {
                status: "loading".to_string(),
                message: "Loading...".to_string(),
            }),
        )
            .into_response(),
        Access::Redirect(path) => {
            debug!(
                "Redirecting {} to {path} (requires {:?})",
                req.uri().path(),
                guard.requirement()
            );
            Redirect::to(path).into_response()
        }
        Access::Granted(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
    }
}
