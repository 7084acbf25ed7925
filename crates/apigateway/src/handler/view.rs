use crate::{middleware::role::role_guard_middleware, state::AppState};
use axum::{
    Extension, Json, http::StatusCode, middleware, response::IntoResponse, routing::get,
};
use serde::Serialize;
use shared::{
    domain::responses::ApiResponse,
    errors::HttpError,
    guard::RoleGuard,
    model::{Role, Session},
    service::StaticCredential,
};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Serialize, ToSchema)]
pub struct ViewResponse {
    pub view: String,
    pub user: Session,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn render(view: &str, user: Session) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("Welcome, {}", user.name),
            ViewResponse {
                view: view.to_string(),
                user,
            },
        )),
    )
}

#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login view with the demo accounts", body = ApiResponse<Vec<DemoAccount>>)
    ),
    tag = "View"
)]
pub async fn login_view_handler() -> Result<impl IntoResponse, HttpError> {
    let accounts = [
        StaticCredential::member(),
        StaticCredential::admin(),
        StaticCredential::institution(),
    ]
    .iter()
    .map(|credential| DemoAccount {
        email: credential.email().to_string(),
        password: credential.password().to_string(),
        role: credential.session().role,
    })
    .collect::<Vec<_>>();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Sign in to continue", accounts)),
    ))
}

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Member dashboard", body = ApiResponse<ViewResponse>),
        (status = 303, description = "Not signed in, redirected to /login"),
        (status = 503, description = "Session store still loading")
    ),
    tag = "View"
)]
pub async fn dashboard_handler(Extension(user): Extension<Session>) -> impl IntoResponse {
    render("dashboard", user)
}

#[utoipa::path(
    get,
    path = "/institution",
    responses(
        (status = 200, description = "Institution dashboard", body = ApiResponse<ViewResponse>),
        (status = 303, description = "Wrong role, redirected to /login"),
        (status = 503, description = "Session store still loading")
    ),
    tag = "View"
)]
pub async fn institution_handler(Extension(user): Extension<Session>) -> impl IntoResponse {
    render("institution", user)
}

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Admin dashboard", body = ApiResponse<ViewResponse>),
        (status = 303, description = "Wrong role, redirected to /login"),
        (status = 503, description = "Session store still loading")
    ),
    tag = "View"
)]
pub async fn admin_handler(Extension(user): Extension<Session>) -> impl IntoResponse {
    render("admin", user)
}

fn gated(path: &str, guard: RoleGuard, handler: axum::routing::MethodRouter) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(path, handler)
        .route_layer(middleware::from_fn_with_state(guard, role_guard_middleware))
}

pub fn view_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/login", get(login_view_handler))
        .merge(gated(
            "/dashboard",
            RoleGuard::authenticated(),
            get(dashboard_handler),
        ))
        .merge(gated(
            "/institution",
            RoleGuard::role(Role::Institution),
            get(institution_handler),
        ))
        .merge(gated("/admin", RoleGuard::role(Role::Admin), get(admin_handler)))
        .layer(Extension(app_state.di_container.session_service.clone()))
}
