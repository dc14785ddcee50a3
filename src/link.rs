//! Broadcast link: the one live connection to the server.
//!
//! The session driver talks to the [`BroadcastLink`] trait; [`ShoutLink`] is
//! the production implementation over libshout (the `shout` crate), which
//! speaks the HTTP source, ICY, and legacy audiocast protocols and paces
//! delivery to the stream bitrate. Low-level status codes are translated into
//! the typed errors below so the driver never sees libshout directly.

use shout::{ShoutConn, ShoutConnBuilder, ShoutFormat, ShoutMetadata, ShoutProtocol};
use thiserror::Error;

use crate::config::{StreamConfig, StreamFormat, StreamProtocol};

/// Connect-phase failure. Always fatal: nothing was streamed yet.
#[derive(Debug, Error)]
#[error("Error opening connection: {0}")]
pub struct ConnectError(pub String);

/// Mid-stream transmission failure. Recoverable at the granularity of one
/// input source; the driver abandons the current source and moves on.
#[derive(Debug, Error)]
#[error("Send error: {0}")]
pub struct SendError(pub String);

/// Metadata push failure. Fatal, same policy as [`ConnectError`].
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Error adding metadata: {0}")]
    Add(String),
    #[error("Error setting metadata: {0}")]
    Set(String),
}

/// The operations the session driver needs from a live connection.
///
/// Exactly one implementation is ever connected per run; the link is owned by
/// the driver and never shared or cloned.
pub trait BroadcastLink {
    /// Transmit exactly the given byte span.
    fn send_chunk(&mut self, chunk: &[u8]) -> Result<(), SendError>;

    /// Block until the link is allowed to push more data. Pure flow control:
    /// the server expects near-real-time delivery, so every chunk send is
    /// followed by a sync.
    fn sync(&mut self);

    /// Push a single `song` key atomically to the server.
    fn set_song(&mut self, song: &str) -> Result<(), MetadataError>;
}

/// Production link backed by libshout.
pub struct ShoutLink {
    conn: ShoutConn,
}

impl ShoutLink {
    /// Open the outbound connection described by `config`.
    ///
    /// Profile fields are applied in a fixed order (host, port, user,
    /// password, mount, format, protocol); the first rejection aborts the
    /// attempt and surfaces the underlying status text. The effective
    /// destination is logged before the open is attempted.
    pub fn connect(config: &StreamConfig) -> Result<Self, ConnectError> {
        tracing::info!("Server: {}@{}:{}", config.user, config.host, config.port);
        tracing::info!("Mountpoint: {}", config.mount);

        let conn = ShoutConnBuilder::new()
            .host(config.host.clone())
            .port(config.port)
            .user(config.user.clone())
            .password(config.password.clone())
            .mount(config.mount.clone())
            .format(wire_format(config.format))
            .protocol(wire_protocol(config.protocol))
            .build()
            .map_err(|err| ConnectError(format!("{err:?}")))?;

        tracing::info!("Connected.");
        Ok(Self { conn })
    }

    /// Release the connection. Dropping the link has the same effect; this
    /// marks the intended shutdown point on the normal exit path.
    pub fn close(self) {}
}

impl BroadcastLink for ShoutLink {
    fn send_chunk(&mut self, chunk: &[u8]) -> Result<(), SendError> {
        self.conn
            .send(chunk.to_vec())
            .map_err(|err| SendError(format!("{err:?}")))
    }

    fn sync(&mut self) {
        self.conn.sync();
    }

    fn set_song(&mut self, song: &str) -> Result<(), MetadataError> {
        let mut metadata = ShoutMetadata::new();
        metadata
            .add("song".to_string(), song.to_string())
            .map_err(|err| MetadataError::Add(format!("{err:?}")))?;
        self.conn
            .set_metadata(metadata)
            .map_err(|err| MetadataError::Set(format!("{err:?}")))
    }
}

fn wire_format(format: StreamFormat) -> ShoutFormat {
    match format {
        StreamFormat::Mp3 => ShoutFormat::MP3,
        StreamFormat::Ogg => ShoutFormat::Ogg,
        StreamFormat::Webm => ShoutFormat::Webm,
    }
}

fn wire_protocol(protocol: StreamProtocol) -> ShoutProtocol {
    match protocol {
        StreamProtocol::Http => ShoutProtocol::HTTP,
        StreamProtocol::Icy => ShoutProtocol::Icy,
        StreamProtocol::XAudiocast => ShoutProtocol::XAudioCast,
    }
}
