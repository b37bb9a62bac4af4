use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::PlaceOrderRequest,
        response::{ApiResponse, OrderPlacedResponse, OrderResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/order/buy",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = OrderPlacedResponse),
        (status = 400, description = "Insufficient stock", body = ErrorResponse),
        (status = 404, description = "User or product not found", body = ErrorResponse)
    ),
    tag = "Order"
)]
pub async fn place_order_handler(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.place_order(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order/",
    responses(
        (status = 200, description = "Order history", body = ApiResponse<Vec<OrderResponse>>)
    ),
    tag = "Order"
)]
pub async fn list_orders_handler(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_orders().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/order/buy", post(place_order_handler))
        .route("/order/", get(list_orders_handler))
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
}
