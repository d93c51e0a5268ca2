// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Server lifecycle: binding, serving and shutdown wiring

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::Result;

/// Binds the listening socket
///
/// Failure (address in use, missing privileges) is logged and returned, so
/// the binary exits non-zero.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    Ok(listener)
}

/// Serves `router` on `listener` until `shutdown` completes
///
/// In-flight requests are allowed to finish. The listener is dropped before
/// this returns, which releases the port.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

/// Resolves once the watch channel flips to `true` or its sender is gone
pub async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<bool>) {
    while !*shutdown_rx.borrow_and_update() {
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
}

/// Spawns a task that flips `shutdown_tx` on Ctrl+C or SIGTERM
pub fn spawn_signal_listener(shutdown_tx: watch::Sender<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                }
                Err(e) => {
                    tracing::warn!("Failed to listen for SIGTERM: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_for_shutdown_on_signal() {
        let (tx, rx) = watch::channel(false);
        let waiter = tokio::spawn(wait_for_shutdown(rx));

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn test_wait_for_shutdown_on_dropped_sender() {
        let (tx, rx) = watch::channel(false);
        drop(tx);
        tokio::time::timeout(Duration::from_secs(1), wait_for_shutdown(rx))
            .await
            .expect("waiter should finish");
    }

    #[tokio::test]
    async fn test_wait_for_shutdown_already_set() {
        let (_tx, rx) = watch::channel(true);
        tokio::time::timeout(Duration::from_secs(1), wait_for_shutdown(rx))
            .await
            .expect("waiter should finish");
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_sigterm_triggers_shutdown() {
        let (tx, rx) = watch::channel(false);
        let listener = spawn_signal_listener(tx);

        // Handler must be installed before the signal, or SIGTERM kills the test binary
        tokio::time::sleep(Duration::from_millis(300)).await;

        let status = std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(3), wait_for_shutdown(rx))
            .await
            .expect("SIGTERM should trigger shutdown");
        tokio::time::timeout(Duration::from_secs(1), listener)
            .await
            .expect("signal listener should exit")
            .unwrap();
    }

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(taken).await.unwrap_err();
        assert!(matches!(err, crate::AppError::Io(_)));
    }
}
