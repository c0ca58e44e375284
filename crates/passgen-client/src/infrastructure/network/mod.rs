//! Network infrastructure for the client.
//!
//! [`ServerConnection`] owns the TCP stream for one session.  Reads and
//! writes move exactly one fixed-size record at a time; a short read or write
//! is a transport fault that ends the session; there is no retry and no
//! reassembly at this layer.

use std::net::SocketAddr;

use passgen_core::{
    decode_menu, decode_response, encode_request, MenuRecord, RequestRecord, ResponseRecord,
    MENU_RECORD_SIZE, RESPONSE_RECORD_SIZE,
};
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Errors that can occur in the client network layer.  All of them are fatal
/// to the client process.
#[derive(Debug, Error)]
pub enum ClientNetworkError {
    /// The TCP connection to the server failed.
    #[error("failed to connect to server at {addr}: {source}")]
    ConnectFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred on the established connection; a peer disconnect
    /// mid-record surfaces here as `UnexpectedEof`.
    #[error("connection I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("record error: {0}")]
    Record(#[from] passgen_core::RecordError),
}

/// One session's connection to the server.
pub struct ServerConnection {
    stream: TcpStream,
}

impl ServerConnection {
    /// Connects to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientNetworkError::ConnectFailed`] when the TCP connect
    /// fails.
    pub async fn connect(addr: SocketAddr) -> Result<Self, ClientNetworkError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| ClientNetworkError::ConnectFailed { addr, source })?;
        debug!(%addr, "connected to server");
        Ok(Self { stream })
    }

    /// Receives the Menu record the server sends once per session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientNetworkError`] on any transport or decode fault.
    pub async fn recv_menu(&mut self) -> Result<MenuRecord, ClientNetworkError> {
        let mut buf = [0u8; MENU_RECORD_SIZE];
        self.stream.read_exact(&mut buf).await?;
        Ok(decode_menu(&buf)?)
    }

    /// Sends one Request record and blocks for its Response record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientNetworkError`] on any transport or codec fault.
    pub async fn request(
        &mut self,
        request: &RequestRecord,
    ) -> Result<ResponseRecord, ClientNetworkError> {
        let bytes = encode_request(request)?;
        self.stream.write_all(&bytes).await?;
        self.stream.flush().await?;

        let mut buf = [0u8; RESPONSE_RECORD_SIZE];
        self.stream.read_exact(&mut buf).await?;
        Ok(decode_response(&buf)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
