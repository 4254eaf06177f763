pub mod handlers;
pub mod types;

use crate::{Error, Result, config::Config, intent::IntentClassifier, llm::OllamaClient};
use axum::{
    Router,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    routing::post,
};
use handlers::AppState;
use std::{future::Future, net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

pub const LISTEN_PORT: u16 = 8080;

/// How long in-flight connections may take to finish once shutdown begins.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/classify",
            post(handlers::classify)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = OllamaClient::new(&config.ollama)?;
    info!("Using inference endpoint {}", llm_client.endpoint());

    let classifier = IntentClassifier::new(Arc::new(llm_client));
    let app = router(AppState::new(classifier));

    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    let listener = TcpListener::bind(addr).await?;

    serve(listener, app, shutdown_signal(), SHUTDOWN_TIMEOUT).await
}

/// Serves `app` on a background task until `signal` resolves, then waits at
/// most `drain_timeout` for open connections to finish.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    info!("Server listening on {}", addr);

    tokio::select! {
        _ = signal => {}
        joined = &mut server => {
            return Err(match joined {
                Ok(Ok(())) => Error::internal("server stopped before a shutdown signal"),
                Ok(Err(e)) => e.into(),
                Err(e) => Error::internal(format!("server task failed: {}", e)),
            });
        }
    }

    info!("Shutting down server...");
    let _ = stop_tx.send(());

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(Ok(Ok(()))) => {
            info!("Server stopped gracefully");
            Ok(())
        }
        Ok(Ok(Err(e))) => Err(Error::shutdown(format!("server error during shutdown: {}", e))),
        Ok(Err(e)) => Err(Error::shutdown(format!("server task failed: {}", e))),
        Err(_) => {
            server.abort();
            Err(Error::shutdown(format!(
                "connections did not drain within {:?}",
                drain_timeout
            )))
        }
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for interrupt signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for terminate signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received interrupt signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
