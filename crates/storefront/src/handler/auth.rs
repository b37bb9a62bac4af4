use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{SigninRequest, SignupRequest},
        response::{SigninResponse, UserResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn signup_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.signup(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signin successful", body = SigninResponse),
        (status = 403, description = "Incorrect password", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn signin_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<SigninRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.signin(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
