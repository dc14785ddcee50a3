//! Connection profile: where to stream and in what shape.
//!
//! Pure data. Nothing here touches the network; the profile is applied to the
//! broadcast link once, at connect time, and is immutable afterwards.

/// Option defaults, shown in `--help` output.
pub mod defaults {
    pub const HOST: &str = "localhost";
    pub const PORT: u16 = 8000;
    pub const USER: &str = "source";
    pub const PASSWORD: &str = "hackme";
    pub const MOUNT: &str = "/live";
}

/// Everything needed to open the single outbound server connection.
#[derive(Clone, Debug)]
pub struct StreamConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub mount: String,
    pub format: StreamFormat,
    pub protocol: StreamProtocol,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            user: defaults::USER.to_string(),
            password: defaults::PASSWORD.to_string(),
            mount: defaults::MOUNT.to_string(),
            format: StreamFormat::Mp3,
            protocol: StreamProtocol::Http,
        }
    }
}

/// On-the-wire audio format of the stream.
///
/// Independent of [`StreamProtocol`]; the server may still reject a pair it
/// does not support, but that is reported at connect time, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamFormat {
    Mp3,
    Ogg,
    Webm,
}

impl StreamFormat {
    pub fn label(self) -> &'static str {
        match self {
            StreamFormat::Mp3 => "mp3",
            StreamFormat::Ogg => "ogg",
            StreamFormat::Webm => "webm",
        }
    }
}

/// Source protocol spoken to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamProtocol {
    Http,
    Icy,
    XAudiocast,
}

impl StreamProtocol {
    pub fn label(self) -> &'static str {
        match self {
            StreamProtocol::Http => "http",
            StreamProtocol::Icy => "icy",
            StreamProtocol::XAudiocast => "audiocast",
        }
    }
}
