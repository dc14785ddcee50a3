//! audio-cast — stream audio files to a Shoutcast/Icecast server.
//!
//! One persistent source connection, files (or standard input) streamed in
//! command-line order, per-track `song` metadata pushed in-band on MP3
//! streams. The wire protocol is libshout's (HTTP source, ICY, legacy
//! audiocast); tags are read with lofty.

pub mod cli;
pub mod config;
pub mod link;
pub mod runtime;
pub mod session;
pub mod tags;
