//! AWS Ops Agent server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use aws_ops_agent::adapters::http::{conversation_routes, ConversationHandlers};
use aws_ops_agent::adapters::{
    FileConversationLog, FileSessionStore, HttpExecutionGateway, InMemoryConversationLog,
    InMemorySessionStore, UnconfiguredExecutionGateway,
};
use aws_ops_agent::application::{GetSessionHandler, HandleTurnHandler};
use aws_ops_agent::config::{AppConfig, ServerConfig};
use aws_ops_agent::ports::{ConversationLog, ExecutionGateway, SessionStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let app = build_app(&config)?;
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("AWS Ops Agent listening on {}", addr);
    info!("  POST /api/messages");
    info!("  GET  /api/sessions/:user_id");
    info!("  GET  /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_new(&server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn build_app(config: &AppConfig) -> Result<Router, BoxError> {
    let gateway: Arc<dyn ExecutionGateway> = match config.gateway.http_config() {
        Some(http) => {
            info!("Execution gateway: {}", http.endpoint);
            Arc::new(HttpExecutionGateway::new(http)?)
        }
        None => {
            warn!("No gateway endpoint configured - AWS actions will be refused");
            Arc::new(UnconfiguredExecutionGateway)
        }
    };

    let (store, log): (Arc<dyn SessionStore>, Arc<dyn ConversationLog>) =
        if config.storage.is_file_backed() {
            info!(
                "File storage: sessions in {}, log at {}",
                config.storage.sessions_dir.display(),
                config.storage.conversation_log_path.display()
            );
            (
                Arc::new(FileSessionStore::new(&config.storage.sessions_dir)),
                Arc::new(FileConversationLog::new(&config.storage.conversation_log_path)),
            )
        } else {
            info!("In-memory storage");
            (
                Arc::new(InMemorySessionStore::new()),
                Arc::new(InMemoryConversationLog::new()),
            )
        };

    let handlers = ConversationHandlers::new(
        Arc::new(HandleTurnHandler::new(store.clone(), gateway, log)),
        Arc::new(GetSessionHandler::new(store)),
    );

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.server));

    Ok(conversation_routes(handlers).layer(middleware))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
