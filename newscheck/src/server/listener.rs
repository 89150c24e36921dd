// newscheck/src/server/listener.rs
//! Binds the primary port, falling back to a secondary one.

use anyhow::{Context, Result};
use log::{debug, warn};
use tokio::net::TcpListener;

/// Binds `host:port`; if that fails, binds `host:fallback_port` instead.
pub async fn bind_with_fallback(host: &str, port: u16, fallback_port: u16) -> Result<TcpListener> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => {
            debug!("Bound primary port {}.", port);
            Ok(listener)
        }
        Err(primary_err) => {
            warn!(
                "Could not bind {}:{} ({}); falling back to port {}.",
                host, port, primary_err, fallback_port
            );
            TcpListener::bind((host, fallback_port))
                .await
                .with_context(|| format!("Failed to bind {}:{} and fallback port {}", host, port, fallback_port))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_primary_port_is_used_when_free() -> Result<()> {
        let listener = bind_with_fallback("127.0.0.1", 0, 0).await?;
        assert_ne!(listener.local_addr()?.port(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_is_taken() -> Result<()> {
        let occupied = TcpListener::bind(("127.0.0.1", 0)).await?;
        let taken = occupied.local_addr()?.port();

        let listener = bind_with_fallback("127.0.0.1", taken, 0).await?;
        assert_ne!(listener.local_addr()?.port(), taken);
        Ok(())
    }

    #[tokio::test]
    async fn test_errors_when_both_ports_are_taken() -> Result<()> {
        let first = TcpListener::bind(("127.0.0.1", 0)).await?;
        let second = TcpListener::bind(("127.0.0.1", 0)).await?;
        let a = first.local_addr()?.port();
        let b = second.local_addr()?.port();

        assert!(bind_with_fallback("127.0.0.1", a, b).await.is_err());
        Ok(())
    }
}
