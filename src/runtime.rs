//! Composition root: connect, stream, report, close.

use anyhow::Result;

use crate::config::StreamConfig;
use crate::link::ShoutLink;
use crate::session::{self, Source};
use crate::tags::LoftyTagReader;

/// Run one full streaming session against the configured server.
///
/// Recoverable per-source send failures are logged by the session driver and
/// do not surface here; anything returned as `Err` is fatal and maps to exit
/// code 1. On fatal errors after connect, dropping the link releases the
/// connection.
pub fn run(config: &StreamConfig, sources: &[Source]) -> Result<()> {
    let mut link = ShoutLink::connect(config)?;

    let summary = session::run_session(&mut link, config, sources, &LoftyTagReader)?;
    tracing::info!("Total bytes read: {}", summary.total_bytes);

    link.close();
    Ok(())
}
