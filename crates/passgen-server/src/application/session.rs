//! Per-connection session state machine.
//!
//! One session owns one connection for its full lifetime: it sends the menu
//! exactly once, then loops reading one Request record, answering with one
//! Response record, until the quit sentinel arrives.  Protocol rejections are
//! answered in-band and keep the loop alive; any transport fault (short read,
//! short write, peer disconnect mid-record) abandons the session immediately
//! with no retry.
//!
//! The session is generic over the stream so tests can drive it through
//! `tokio::io::duplex` without a socket.

use passgen_core::{
    decode_request, encode_menu, encode_response, generate, validate, MenuRecord, PasswordPolicy,
    RequestRecord, ResponseRecord, Selector, REQUEST_RECORD_SIZE,
};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Errors that end a session.  Every variant is fatal to the session; none is
/// reported to the peer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The transport failed: read/write error, or the peer disconnected
    /// mid-record (a short read surfaces as `UnexpectedEof`).
    #[error("transport fault: {0}")]
    Transport(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("record error: {0}")]
    Record(#[from] passgen_core::RecordError),
}

/// One connection's session, from menu delivery to close.
pub struct Session<S> {
    stream: S,
    policy: PasswordPolicy,
    rng: StdRng,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Session<S> {
    /// Creates a session with a fresh OS-entropy-seeded generator.
    pub fn new(stream: S, policy: PasswordPolicy) -> Self {
        Self::with_rng(stream, policy, StdRng::from_entropy())
    }

    /// Creates a session with a caller-provided generator.  Tests use this
    /// with a seeded `StdRng` to make generated passwords reproducible.
    pub fn with_rng(stream: S, policy: PasswordPolicy, rng: StdRng) -> Self {
        Self {
            stream,
            policy,
            rng,
        }
    }

    /// Drives the session to completion.
    ///
    /// Returns `Ok(())` when the peer quit cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on the first transport fault; the connection
    /// is dropped with it.
    pub async fn run(mut self) -> Result<(), SessionError> {
        self.send_menu().await?;

        loop {
            let request = self.read_request().await?;
            let response = self.respond_to(&request);
            self.send_response(&response).await?;

            if !response.keep_going {
                debug!("session closed by quit selector");
                return Ok(());
            }
        }
    }

    /// Sends the menu built from this session's policy, exactly once.
    async fn send_menu(&mut self) -> Result<(), SessionError> {
        let menu = MenuRecord::describing(&self.policy);
        let bytes = encode_menu(&menu)?;
        self.stream.write_all(&bytes).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Blocks for exactly one Request record.
    async fn read_request(&mut self) -> Result<RequestRecord, SessionError> {
        let mut buf = [0u8; REQUEST_RECORD_SIZE];
        self.stream.read_exact(&mut buf).await?;
        Ok(decode_request(&buf)?)
    }

    /// Classifies the request and builds the Response for it.
    ///
    /// The quit sentinel is handled here, before validation, and is the only
    /// path that clears `keep_going`.
    fn respond_to(&mut self, request: &RequestRecord) -> ResponseRecord {
        if Selector::is_quit(request.selector) {
            return ResponseRecord::closing();
        }

        match validate(request.selector, &request.length_text, &self.policy) {
            Ok(validated) => {
                let password = generate(validated.class, validated.length, &mut self.rng);
                info!(class = ?validated.class, length = validated.length, "password generated");
                ResponseRecord::granting(password)
            }
            Err(rejection) => {
                warn!(?rejection, "request rejected");
                ResponseRecord::rejecting(rejection.message())
            }
        }
    }

    async fn send_response(&mut self, response: &ResponseRecord) -> Result<(), SessionError> {
        let bytes = encode_response(response)?;
        self.stream.write_all(&bytes).await?;
        self.stream.flush().await?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
