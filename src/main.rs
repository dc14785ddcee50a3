//! audio-cast — a small CLI that streams audio files to a Shoutcast/Icecast
//! server over one persistent connection.
//!
//! ## Flow
//! 1. **Profile**: CLI flags become an immutable connection profile.
//! 2. **Connect**: the broadcast link applies the profile and opens the
//!    single outbound connection (fatal on failure).
//! 3. **Stream**: each input source is announced (with tags when known) and
//!    pumped through the link in paced 4 KiB chunks; a send failure skips to
//!    the next source.
//!
//! All status and error text goes to stderr; stdout is reserved for
//! `--help`/`--version`.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use audio_cast::{cli, runtime};

fn main() -> ExitCode {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap routes help/version to stdout and errors to stderr.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = args.stream_config();
    let sources = args.sources();

    match runtime::run(&config, &sources) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
