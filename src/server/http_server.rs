use super::request::build_incoming;
use super::response::{health_response, json_response, HttpResponse};
use super::service::GatewayService;
use crate::errors::ErrorEnvelope;
use anyhow::Context;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// The gateway's inbound HTTP/1 listener.
///
/// Each accepted connection is served on its own tokio task; each request
/// runs one validate-and-forward pass against the shared [`GatewayService`].
pub struct HttpServer {
    service: Arc<GatewayService>,
    listener: TcpListener,
}

impl HttpServer {
    /// Bind the listener.
    ///
    /// # Arguments
    ///
    /// * `service` - The gateway service handling every request
    /// * `addr` - Address to bind to (e.g., `0.0.0.0:8080`)
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound.
    pub async fn bind(service: GatewayService, addr: SocketAddr) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind to {addr}"))?;
        Ok(HttpServer {
            service: Arc::new(service),
            listener,
        })
    }

    /// The address the listener is actually bound to. Useful with port 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run until SIGINT or SIGTERM is received.
    pub async fn run(self) -> anyhow::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Run until the given future resolves. Lets tests and embedders control
    /// shutdown programmatically.
    pub async fn run_until<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        info!(addr = %addr, "gateway listening");

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote)) => {
                            let service = Arc::clone(&self.service);
                            tokio::spawn(async move {
                                let io = TokioIo::new(stream);
                                let hyper_service = service_fn(move |req: Request<Incoming>| {
                                    let service = Arc::clone(&service);
                                    async move { handle_request(service, req).await }
                                });
                                if let Err(err) =
                                    http1::Builder::new().serve_connection(io, hyper_service).await
                                {
                                    debug!(remote = %remote, error = %err, "connection error");
                                }
                            });
                        }
                        Err(err) => error!(error = %err, "failed to accept connection"),
                    }
                }
                _ = &mut shutdown => {
                    info!("shutdown signal received, stopping gateway");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Resolves when SIGINT or, on unix, SIGTERM is delivered.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
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
}

async fn handle_request(
    service: Arc<GatewayService>,
    req: Request<Incoming>,
) -> Result<HttpResponse, Infallible> {
    let method = req.method().clone();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    if method == Method::GET && req.uri().path() == "/health" {
        return Ok(health_response());
    }

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            error!(error = %err, "failed to read request body");
            let envelope = ErrorEnvelope::server(format!("failed to read request body: {err}"));
            return Ok(json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                envelope.to_json(),
            ));
        }
    };

    let incoming = build_incoming(method, &target, body);
    Ok(service.handle(incoming).await)
}
