use std::path::Path;

use anyhow::{Context, Result};
use goldensmile_notification::EmailService;
use tower_http::trace::TraceLayer;

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting goldensmile server...");

    // CLI overrides win over config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let email = EmailService::from_config(&config.email)
        .context("Failed to initialize email service")?;

    tracing::info!(
        provider = %config.email.provider,
        configured = email.is_configured(),
        notification_address = %config.email.notification_address,
        "Email service ready"
    );

    let state = AppState {
        contact_command: goldensmile_contact::Command::new(
            email,
            config.email.from_address.to_owned(),
            config.email.notification_address.to_owned(),
        ),
    };

    let static_dir = config.server.static_dir.as_deref().map(Path::new);
    if let Some(dir) = static_dir {
        tracing::info!(static_dir = %dir.display(), "Serving static site");
    }

    let app = crate::routes::router(state, static_dir).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let shutdown_signal = async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
