use std::{sync::Arc, time::Instant};

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::rpc::RpcClient;

pub mod blocks;
mod error;
pub mod health;
pub mod types;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub rpc_client: Arc<RpcClient>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Polygon Blockchain Client",
        description = "A simple client for interacting with the Polygon blockchain"
    ),
    paths(
        health::api_health_check,
        blocks::api_get_block_number,
        blocks::api_get_block_by_number,
    ),
    components(
        schemas(
            types::HealthResponse,
            types::BlockNumberResponse,
            types::GetBlockByNumberRequest,
            types::ErrorResponse,
        )
    ),
    tags(
        (name = "polygon-gateway", description = "Polygon JSON-RPC gateway API"),
    )
)]
pub struct ApiDoc;

pub fn create_router(rpc_client: Arc<RpcClient>) -> Router {
    let app_state = AppState { rpc_client };

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::api_health_check))
        .route("/block/number", get(blocks::api_get_block_number))
        .route("/block/by-number", post(blocks::api_get_block_by_number))
        .layer(middleware::from_fn(log_requests))
        .with_state(app_state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method:% = method,
        path = &*path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64;
        "HTTP request handled"
    );
    response
}
