use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynSessionService,
    domain::{
        requests::{AuthRequest, RegisterRequest},
        responses::{ApiResponse, SessionResponse},
    },
    errors::{HttpError, ServiceError},
    model::{Session, SessionUpdate},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "GradLink session service";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynSessionService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AuthRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service
        .sign_in(&body.email, &body.password)
        .await
        .ok_or(ServiceError::InvalidCredentials)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Login successful",
            SessionResponse::from(user),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/demo",
    responses(
        (status = 200, description = "Demo session started", body = ApiResponse<SessionResponse>)
    ),
    tag = "Auth"
)]
pub async fn demo_login_handler(
    Extension(service): Extension<DynSessionService>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service.login_demo().await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Demo session started",
            SessionResponse::from(user),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration successful", body = ApiResponse<SessionResponse>)
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynSessionService>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service.sign_up(&body).await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "User registered successfully",
            SessionResponse::from(user),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<bool>)
    ),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(service): Extension<DynSessionService>,
) -> Result<impl IntoResponse, HttpError> {
    service.logout().await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Signed out", true)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session", body = ApiResponse<Session>),
        (status = 401, description = "Not signed in")
    ),
    tag = "Auth"
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynSessionService>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service
        .current_user()
        .ok_or(ServiceError::Unauthenticated)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Current session", user)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/auth/me",
    request_body = SessionUpdate,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<Session>),
        (status = 401, description = "Not signed in")
    ),
    tag = "Auth"
)]
pub async fn update_me_handler(
    Extension(service): Extension<DynSessionService>,
    Json(body): Json<SessionUpdate>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service
        .update_user(body)
        .await
        .ok_or(ServiceError::Unauthenticated)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile updated", user)),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/healthchecker", get(health_checker_handler))
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/auth/demo", post(demo_login_handler))
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/me", get(get_me_handler).patch(update_me_handler))
        .layer(Extension(app_state.di_container.session_service.clone()))
}
