//! TCP listener infrastructure for the server.
//!
//! Binds the listening socket with the configured backlog and runs the accept
//! loop.  Each accepted connection gets its own spawned task running one
//! [`Session`]; sessions share no state, so a fault in one is logged and
//! contained while the listener keeps accepting.  A fault in the accept loop
//! itself ends the listening role and unwinds to `main`.

use std::net::SocketAddr;

use passgen_core::PasswordPolicy;
use thiserror::Error;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};
use uuid::Uuid;

use crate::application::session::Session;

/// Errors from the listening role.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The listening socket could not be created, bound, or put into the
    /// listening state.
    #[error("bind failed on {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Accepting a connection failed; the listening role is over.
    #[error("accept failed: {0}")]
    AcceptFailed(#[source] std::io::Error),
}

/// Binds a TCP listener on `addr` with the given pending-connection backlog.
///
/// `tokio::net::TcpListener::bind` offers no backlog control, so this goes
/// through [`TcpSocket`].
///
/// # Errors
///
/// Returns [`NetworkError::BindFailed`] if any step of socket setup fails.
pub fn bind_listener(addr: SocketAddr, backlog: u32) -> Result<TcpListener, NetworkError> {
    let bind_failed = |source| NetworkError::BindFailed { addr, source };

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .map_err(bind_failed)?;
    socket.set_reuseaddr(true).map_err(bind_failed)?;
    socket.bind(addr).map_err(bind_failed)?;
    socket.listen(backlog).map_err(bind_failed)
}

/// Runs the accept loop forever, spawning one session task per connection.
///
/// # Errors
///
/// Returns [`NetworkError::AcceptFailed`] if accepting fails; individual
/// session faults never propagate here.
pub async fn serve(listener: TcpListener, policy: PasswordPolicy) -> Result<(), NetworkError> {
    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .map_err(NetworkError::AcceptFailed)?;

        let session_id = Uuid::new_v4();
        info!(%session_id, %peer, "client connected");

        tokio::spawn(async move {
            match Session::new(stream, policy).run().await {
                Ok(()) => info!(%session_id, "session closed"),
                Err(e) => error!(%session_id, "session aborted: {e}"),
            }
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
