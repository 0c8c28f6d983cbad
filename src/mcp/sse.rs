//! HTTP+SSE transport sessions.
//!
//! Each `GET /sse` opens an [`SseSession`]: an MCP service running on its
//! own task, fed by a channel that `POST /messages` pushes client messages
//! into, and draining server messages into the event stream. Dropping the
//! event stream ends the session.

use std::pin::Pin;
use std::sync::Arc;

use dashmap::DashMap;
use futures_util::{Stream, stream};
use rmcp::{
    ServerHandler, ServiceExt,
    model::{ClientJsonRpcMessage, ServerJsonRpcMessage},
};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, PollSender};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Per-session buffer in each direction.
const CHANNEL_CAPACITY: usize = 64;

type Inbound = mpsc::Sender<ClientJsonRpcMessage>;

/// Errors delivering a client message to a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Could not find session")]
    NotFound,
}

/// Registry of live SSE sessions, keyed by simple-hex UUID.
#[derive(Clone, Default)]
pub struct SseSessions {
    inner: Arc<DashMap<String, Inbound>>,
}

impl SseSessions {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.inner.contains_key(session_id)
    }

    /// Register a new session and start serving `handler` on it.
    ///
    /// The service stops when `ct` is cancelled or the returned session is
    /// dropped.
    pub fn open<H: ServerHandler>(&self, handler: H, ct: CancellationToken) -> SseSession {
        let id = Uuid::new_v4().simple().to_string();
        let (inbound_tx, inbound_rx) = mpsc::channel::<ClientJsonRpcMessage>(CHANNEL_CAPACITY);
        let (outbound_tx, outbound_rx) = mpsc::channel::<ServerJsonRpcMessage>(CHANNEL_CAPACITY);

        self.inner.insert(id.clone(), inbound_tx);

        let inbound = Box::pin(stream::unfold(inbound_rx, |mut rx| async move {
            rx.recv().await.map(|message| (message, rx))
        }));
        let transport = (PollSender::new(outbound_tx), inbound);

        let session_id = id.clone();
        let service_ct = ct.clone();
        tokio::spawn(async move {
            match handler.serve_with_ct(transport, service_ct).await {
                Ok(running) => match running.waiting().await {
                    Ok(reason) => debug!(%session_id, ?reason, "MCP session ended"),
                    Err(e) => warn!(%session_id, error = %e, "MCP session task failed"),
                },
                Err(e) => warn!(%session_id, error = %e, "MCP session failed to initialize"),
            }
        });

        SseSession {
            id: id.clone(),
            outbound: outbound_rx,
            guard: SessionGuard {
                id,
                sessions: Arc::clone(&self.inner),
                ct,
            },
        }
    }

    /// Forward a client message to the session's MCP service.
    pub async fn deliver(
        &self,
        session_id: &str,
        message: ClientJsonRpcMessage,
    ) -> Result<(), SessionError> {
        // Clone the sender so the map shard is not locked across the await.
        let tx = self
            .inner
            .get(session_id)
            .map(|entry| entry.value().clone())
            .ok_or(SessionError::NotFound)?;

        if tx.send(message).await.is_err() {
            self.inner.remove(session_id);
            return Err(SessionError::NotFound);
        }
        Ok(())
    }
}

/// A connected SSE client.
pub struct SseSession {
    id: String,
    outbound: mpsc::Receiver<ServerJsonRpcMessage>,
    guard: SessionGuard,
}

impl SseSession {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Server-to-client messages. The session stays registered for as long
    /// as this stream is alive.
    pub fn into_stream(self) -> Pin<Box<dyn Stream<Item = ServerJsonRpcMessage> + Send>> {
        let Self {
            outbound, guard, ..
        } = self;

        Box::pin(stream::unfold(
            (outbound, guard),
            |(mut outbound, guard)| async move {
                outbound
                    .recv()
                    .await
                    .map(|message| (message, (outbound, guard)))
            },
        ))
    }
}

/// Unregisters and cancels the session when dropped.
struct SessionGuard {
    id: String,
    sessions: Arc<DashMap<String, Inbound>>,
    ct: CancellationToken,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.sessions.remove(&self.id);
        self.ct.cancel();
        info!(session_id = %self.id, "SSE client disconnected");
    }
}
