pub mod config;
pub mod middleware;

use crate::{
    config::Config,
    error::AppError,
    health::HealthService,
    metrics,
    routes::{
        create_analyze_routes, create_docs_routes, create_health_routes, create_root_routes,
    },
    server::middleware::{cors_layer, request_id_middleware, request_response_logger},
    shutdown::ShutdownCoordinator,
    telemetry::Dataset,
};
use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware};
use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Maximum request body size (1MB); analysis requests are a handful of region names
const MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(Clone)]
pub struct Server {
    pub config: Arc<Config>,
    pub dataset: Dataset,
    pub health_service: Arc<HealthService>,
    pub shutdown_coordinator: Arc<ShutdownCoordinator>,
}

impl Server {
    /// Build a server over the built-in telemetry dataset
    pub async fn new(config: Config) -> Result<Self, AppError> {
        Self::with_dataset(config, Dataset::builtin()).await
    }

    pub async fn with_dataset(config: Config, dataset: Dataset) -> Result<Self, AppError> {
        if config.metrics.enabled {
            metrics::init_metrics_with_port(config.metrics.port).map_err(|e| {
                error!(
                    "Failed to start metrics exporter on port {}: {}",
                    config.metrics.port, e
                );
                AppError::Internal(format!("Failed to start metrics exporter: {e}"))
            })?;
        }

        info!(
            records = dataset.len(),
            regions = dataset.regions().len(),
            "Telemetry dataset loaded"
        );

        let health_service = Arc::new(HealthService::new());
        health_service.register(dataset.health_checker()).await;

        Ok(Self {
            config: Arc::new(config),
            dataset,
            health_service,
            shutdown_coordinator: Arc::new(ShutdownCoordinator::new()),
        })
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let app = self.create_app();

        let bind_addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to bind to {bind_addr}: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| AppError::Internal(format!("Failed to read listen address: {e}")))?;

        info!("Server listening on http://{}", addr);

        let signal_coordinator = self.shutdown_coordinator.clone();
        tokio::spawn(async move {
            signal_coordinator.wait_for_shutdown_signal().await;
        });

        let graceful = self.shutdown_coordinator.clone();
        let serve_future = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            graceful.wait_for_shutdown().await;
            info!("Graceful shutdown initiated");
        })
        .into_future();

        // Bound the drain phase once a signal arrives
        let timeout = Duration::from_secs(self.config.server.shutdown_timeout_secs);
        let deadline = self.shutdown_coordinator.clone();
        let drain_deadline = async move {
            deadline.wait_for_shutdown().await;
            tokio::time::sleep(timeout).await;
        };

        tokio::select! {
            result = serve_future => {
                result.map_err(|e| AppError::Internal(format!("Server error: {e}")))?;
            }
            _ = drain_deadline => {
                warn!("Shutdown timeout of {:?} elapsed, dropping open connections", timeout);
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Creates the application router
    pub fn create_app(&self) -> Router {
        let mut app = Router::new()
            .merge(create_root_routes())
            .merge(create_analyze_routes())
            .merge(create_health_routes());

        if self.config.docs.enabled {
            app = app.merge(create_docs_routes());
        }

        let app = app
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
            .with_state(self.clone());

        self.add_conditional_middleware(app)
    }

    /// Layers are applied inside-out: the last one added runs first
    fn add_conditional_middleware(&self, mut app: Router) -> Router {
        if self.config.metrics.enabled {
            app = app.layer(axum_middleware::from_fn(metrics::metrics_middleware));
        }
        if self.config.logging.log_request {
            app = app.layer(axum_middleware::from_fn(request_response_logger));
        }
        app = app.layer(axum_middleware::from_fn(request_id_middleware));
        if self.config.cors.enabled {
            app = app.layer(cors_layer());
        }
        app
    }
}
