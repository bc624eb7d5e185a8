//! Polled byte sources backed by reader threads.
//!
//! The script session is single-threaded and must never block on input: a
//! `DELAY`-heavy script and an idle control link both leave the loop free to
//! poll. Std's stdin and TCP reads block, so each source runs a reader
//! thread that pumps bytes into an `mpsc` channel; `poll_byte` is then a
//! non-blocking `try_recv`.
//!
//! When a reader thread ends (EOF, I/O error) its channel closes and the
//! source simply reports no data forever after; the session keeps polling
//! any other sources.

use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use thiserror::Error;
use tracing::{debug, info, warn};

use drake_core::ByteSource;

/// Errors from constructing a byte source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The reader thread could not be spawned.
    #[error("failed to start reader thread: {0}")]
    Thread(#[source] io::Error),

    /// The TCP listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
}

fn drain(rx: &Receiver<u8>) -> Option<u8> {
    match rx.try_recv() {
        Ok(byte) => Some(byte),
        Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
    }
}

// ── Stdin ─────────────────────────────────────────────────────────────────────

/// Interactive stdin as a byte source (development and bench use).
pub struct StdinSource {
    rx: Receiver<u8>,
}

impl StdinSource {
    /// Spawns the stdin reader thread.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Thread`] if the thread cannot be spawned.
    pub fn spawn() -> Result<Self, SourceError> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                for byte in io::stdin().lock().bytes() {
                    match byte {
                        Ok(b) => {
                            if tx.send(b).is_err() {
                                return; // session dropped the source
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "stdin read failed; source closed");
                            return;
                        }
                    }
                }
                debug!("stdin reached EOF");
            })
            .map_err(SourceError::Thread)?;
        Ok(Self { rx })
    }
}

impl ByteSource for StdinSource {
    fn poll_byte(&mut self) -> Option<u8> {
        drain(&self.rx)
    }
}

// ── TCP control link ──────────────────────────────────────────────────────────

/// A TCP listener as a byte source: the control link scripts arrive on.
///
/// One connection is serviced at a time; when it closes, the next incoming
/// connection takes over. Bytes from consecutive connections concatenate
/// into the same stream, which is harmless for a line-oriented protocol: a
/// sender that wants a clean boundary ends with a newline.
pub struct TcpSource {
    rx: Receiver<u8>,
    local_addr: SocketAddr,
}

impl TcpSource {
    /// Binds `addr` and spawns the accept/read thread.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Bind`] if the address cannot be bound, or
    /// [`SourceError::Thread`] if the thread cannot be spawned.
    pub fn bind(addr: &str) -> Result<Self, SourceError> {
        let bind_err = |source| SourceError::Bind {
            addr: addr.to_string(),
            source,
        };
        let listener = TcpListener::bind(addr).map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;
        info!(%local_addr, "script control link listening");

        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("tcp-reader".into())
            .spawn(move || accept_loop(listener, tx))
            .map_err(SourceError::Thread)?;
        Ok(Self { rx, local_addr })
    }

    /// The actually bound address (useful when binding port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl ByteSource for TcpSource {
    fn poll_byte(&mut self) -> Option<u8> {
        drain(&self.rx)
    }
}

fn accept_loop(listener: TcpListener, tx: Sender<u8>) {
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                info!(peer = ?stream.peer_addr().ok(), "script connection accepted");
                if !pump(stream, &tx) {
                    return; // session dropped the source
                }
            }
            Err(e) => warn!(error = %e, "accept failed"),
        }
    }
}

/// Copies one connection into the channel. Returns `false` once the
/// receiving side is gone and the whole source should shut down.
fn pump(stream: TcpStream, tx: &Sender<u8>) -> bool {
    for byte in stream.bytes() {
        match byte {
            Ok(b) => {
                if tx.send(b).is_err() {
                    return false;
                }
            }
            Err(e) => {
                warn!(error = %e, "script connection read failed");
                break;
            }
        }
    }
    debug!("script connection closed");
    true
}
