//! Shared helpers for tests that talk to live endpoints.

use axum::Router;
use std::io;
use switchboard::directory::domain::AgentUrl;
use switchboard::http;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// An endpoint served on an ephemeral local port.
pub struct RunningEndpoint {
    url: AgentUrl,
    stop: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl RunningEndpoint {
    /// Serves `app` on `127.0.0.1:0`.
    pub async fn spawn(app: Router) -> Result<Self, eyre::Report> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = AgentUrl::new(format!("http://{}", listener.local_addr()?))?;
        let (stop, stopped) = oneshot::channel::<()>();
        let task = tokio::spawn(http::serve(listener, app, async move {
            stopped.await.unwrap_or_default();
        }));
        Ok(Self { url, stop, task })
    }

    /// Returns the endpoint's base URL.
    pub const fn url(&self) -> &AgentUrl {
        &self.url
    }

    /// Stops serving and waits for the server task.
    pub async fn shutdown(self) -> Result<(), eyre::Report> {
        let Self { stop, task, .. } = self;
        stop.send(()).unwrap_or_default();
        task.await??;
        Ok(())
    }
}

/// Returns a URL on which nothing is listening.
pub async fn unbound_url() -> Result<AgentUrl, eyre::Report> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(AgentUrl::new(format!("http://{addr}"))?)
}
