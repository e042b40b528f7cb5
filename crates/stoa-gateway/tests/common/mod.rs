use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Router};
use tokio::net::TcpListener;
use url::Url;

/// A fake gateway serving one fixed status for every request, counting hits.
pub struct GatewayServer {
    base_url: Url,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

#[derive(Clone)]
struct GatewayBehavior {
    hits: Arc<AtomicUsize>,
    status: StatusCode,
    delay: Option<Duration>,
}

async fn gateway_handler(State(behavior): State<GatewayBehavior>) -> impl IntoResponse {
    behavior.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = behavior.delay {
        tokio::time::sleep(delay).await;
    }
    behavior.status
}

impl GatewayServer {
    pub async fn new(status: StatusCode) -> Self {
        Self::with_behavior(status, None).await
    }

    /// A gateway that sleeps before answering, to exercise probe timeouts.
    pub async fn slow(status: StatusCode, delay: Duration) -> Self {
        Self::with_behavior(status, Some(delay)).await
    }

    async fn with_behavior(status: StatusCode, delay: Option<Duration>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let behavior = GatewayBehavior {
            hits: hits.clone(),
            status,
            delay,
        };
        // Every path counts as a hit: probes and warm-up requests alike.
        let router = Router::new()
            .fallback(gateway_handler)
            .with_state(behavior);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server = axum::serve(listener, router).with_graceful_shutdown(async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(async move {
            server.await.unwrap();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            hits,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for GatewayServer {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}
