use crate::{
    abstract_trait::DynProductQueryService,
    domain::response::{ApiResponse, ProductResponse},
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::get};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Catalog listing", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Catalog is empty", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn list_products_handler(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_products().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(list_products_handler))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
