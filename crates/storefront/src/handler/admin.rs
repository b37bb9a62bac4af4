use crate::{
    abstract_trait::DynProductCommandService,
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{ApiResponse, ProductResponse},
    },
    middleware::{jwt::admin_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, post, put},
};
use shared::{
    config::TokenClaims,
    errors::{AuthErrorResponse, ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/admin/product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 403, description = "Not authorized", body = AuthErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_product_handler(
    Extension(claims): Extension<TokenClaims>,
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("📦 Admin {} is creating a product", claims.user_id);
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/admin/product/{id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Not authorized", body = AuthErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_product_handler(
    Extension(claims): Extension<TokenClaims>,
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("🔄 Admin {} is updating product {id}", claims.user_id);
    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/admin/product/{id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<String>),
        (status = 403, description = "Not authorized", body = AuthErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_product_handler(
    Extension(claims): Extension<TokenClaims>,
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    info!("🗑️ Admin {} is deleting product {id}", claims.user_id);
    let response = service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/admin/product", post(create_product_handler))
        .route("/admin/product/{id}", put(update_product_handler))
        .route("/admin/product/{id}", delete(delete_product_handler))
        .route_layer(middleware::from_fn(admin_middleware))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
