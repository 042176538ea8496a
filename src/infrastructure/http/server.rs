//! HTTP server implementation
//!
//! Wires the gateway adapter and services together, builds the routes, and
//! owns the rejection boundary: anything a handler did not answer itself is
//! logged and reported as a generic failure, never crashing the
//! request-handling flow.

use crate::{
    application::services::{PaymentService, StatusService},
    config::AppConfig,
    infrastructure::adapters::PixGatewayAdapter,
    infrastructure::http::models::ApiError,
    infrastructure::http::responses::ResponseFormatter,
    infrastructure::http::routes::RouteBuilder,
    middleware::cors::CorsMiddleware,
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::{Filter, Reply};

/// HTTP server implementation
pub struct HttpServer {
    config: AppConfig,
    payment_service: Arc<PaymentService>,
    status_service: Arc<StatusService>,
}

impl HttpServer {
    /// Create a new HTTP server instance
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let config_arc = Arc::new(config.clone());
        let gateway = Arc::new(PixGatewayAdapter::new(config_arc.clone())?);

        let payment_service = Arc::new(PaymentService::new(config_arc.clone(), gateway.clone()));
        let status_service = Arc::new(StatusService::new(gateway));

        Ok(Self {
            config,
            payment_service,
            status_service,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server
    pub async fn run(self) -> AppResult<()> {
        let addr: std::net::SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        info!("Starting HTTP server on {}", addr);

        let routes = self.create_routes();
        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Create the application routes with CORS and the rejection boundary
    fn create_routes(
        self,
    ) -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone {
        let cors = CorsMiddleware::build(&self.config);

        RouteBuilder::build_routes(self.config, self.payment_service, self.status_service)
            .with(cors)
            .recover(handle_rejection)
    }
}

/// Catch-all rejection handler
pub async fn handle_rejection(
    err: warp::Rejection,
) -> Result<impl Reply, std::convert::Infallible> {
    if let Some(app_err) = err.find::<AppError>() {
        error!(error = %app_err, "Request rejected");
        return Ok(ResponseFormatter::from_app_error(app_err));
    }

    let (body, status) = if err.is_not_found() {
        (ApiError::new("Rota não encontrada"), StatusCode::NOT_FOUND)
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (
            ApiError::new("Corpo da requisição inválido"),
            StatusCode::BAD_REQUEST,
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            ApiError::new("Método não permitido"),
            StatusCode::METHOD_NOT_ALLOWED,
        )
    } else {
        error!(rejection = ?err, "Unhandled rejection");
        (
            ApiError::new("Erro interno do servidor"),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
