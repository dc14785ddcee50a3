//! Streaming session driver.
//!
//! Iterates the input sources in command-line order and pushes their bytes
//! through the broadcast link, one blocking chunk at a time, announcing
//! per-track metadata as it goes. Strictly sequential: one connection, one
//! source at a time, a pacing sync after every chunk.
//!
//! Failure policy (asymmetric on purpose):
//! - an unopenable named file or a rejected metadata push ends the whole
//!   session;
//! - a mid-stream send failure abandons only the current source and the
//!   session moves on to the next one.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{StreamConfig, StreamFormat};
use crate::link::{BroadcastLink, MetadataError};
use crate::tags::TagReader;

/// Bytes read from a source per send.
pub const CHUNK_SIZE: usize = 4096;

/// One input to stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// The process's standard input, selected by the literal argument `-`.
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "-".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Fatal session failure; maps to exit code 1 at the top level.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot open {path}: {source}")]
    OpenInput { path: String, source: io::Error },

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// How far one source got before it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOutcome {
    pub name: String,
    pub bytes: u64,
    /// Set when a mid-stream send failure abandoned the source early.
    pub send_error: Option<String>,
}

/// Telemetry for a whole run: total bytes read across all sources, plus the
/// per-source trail in order.
#[derive(Debug, Default)]
pub struct SessionSummary {
    pub total_bytes: u64,
    pub sources: Vec<SourceOutcome>,
}

/// Stream every source through `link`, in order.
pub fn run_session<L: BroadcastLink>(
    link: &mut L,
    config: &StreamConfig,
    sources: &[Source],
    tags: &dyn TagReader,
) -> Result<SessionSummary, SessionError> {
    let mut summary = SessionSummary::default();

    for source in sources {
        let mut reader = open_source(source)?;

        // Standard input has no path to probe; only named files are queried.
        let song = match source {
            Source::File(path) => tags.read(path).map(|t| t.song()),
            Source::Stdin => None,
        };

        // Metadata travels in-band only on MP3 streams; other formats skip
        // the push but still announce the tags locally.
        if let Some(song) = song.as_deref() {
            if config.format == StreamFormat::Mp3 {
                link.set_song(song)?;
            }
        }
        tracing::info!("{}", streaming_line(&source.name(), song.as_deref()));

        let outcome = stream_source(link, reader.as_mut(), source.name());
        summary.total_bytes += outcome.bytes;
        summary.sources.push(outcome);
    }

    Ok(summary)
}

fn open_source(source: &Source) -> Result<Box<dyn Read>, SessionError> {
    match source {
        Source::Stdin => Ok(Box::new(io::stdin())),
        Source::File(path) => {
            let file = File::open(path).map_err(|err| SessionError::OpenInput {
                path: path.display().to_string(),
                source: err,
            })?;
            Ok(Box::new(file))
        }
    }
}

/// Pump one source until it is exhausted or the link rejects a send.
fn stream_source<L: BroadcastLink>(
    link: &mut L,
    reader: &mut dyn Read,
    name: String,
) -> SourceOutcome {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut bytes: u64 = 0;

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                tracing::warn!("Read error on {name}: {err}");
                break;
            }
        };

        // Counted before the send attempt: a failed send still consumed input.
        bytes += read as u64;

        if let Err(err) = link.send_chunk(&buf[..read]) {
            tracing::error!("{err}");
            return SourceOutcome {
                name,
                bytes,
                send_error: Some(err.to_string()),
            };
        }
        link.sync();
    }

    SourceOutcome {
        name,
        bytes,
        send_error: None,
    }
}

fn streaming_line(name: &str, song: Option<&str>) -> String {
    match song {
        Some(song) => format!("Streaming: {name} ({song})"),
        None => format!("Streaming: {name}"),
    }
}
