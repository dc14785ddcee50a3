//! Command-line surface.
//!
//! Long options only, mirroring the classic source-client flag set. Format
//! and protocol are picked by bare flags with last-one-wins semantics, so
//! `--mp3 --ogg` streams Ogg.

use clap::Parser;

use crate::config::{StreamConfig, StreamFormat, StreamProtocol, defaults};
use crate::session::Source;

#[derive(Parser, Debug)]
#[command(
    name = "audio-cast",
    version,
    about = "Stream FILE(s) to a Shoutcast/Icecast server.",
    after_help = "When FILE is - standard input is read.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Connect to HOST
    #[arg(long, value_name = "HOST", default_value = defaults::HOST)]
    pub host: String,

    /// Connect to PORT
    #[arg(
        long,
        value_name = "PORT",
        default_value_t = defaults::PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// Connect as USER
    #[arg(long, value_name = "USER", default_value = defaults::USER)]
    pub user: String,

    /// Connect with PASSWORD
    #[arg(long, value_name = "PASSWORD", default_value = defaults::PASSWORD)]
    pub password: String,

    /// Set stream mountpoint
    #[arg(long, value_name = "PATH", default_value = defaults::MOUNT)]
    pub mount: String,

    /// Stream in MP3 format (default)
    #[arg(long, overrides_with = "ogg")]
    pub mp3: bool,

    /// Stream in Ogg format
    #[arg(long, overrides_with = "mp3")]
    pub ogg: bool,

    /// Speak the HTTP source protocol (default)
    #[arg(long, overrides_with_all = ["icy", "audiocast"])]
    pub http: bool,

    /// Speak the ICY protocol
    #[arg(long, overrides_with_all = ["http", "audiocast"])]
    pub icy: bool,

    /// Speak the legacy audiocast protocol
    #[arg(long, overrides_with_all = ["http", "icy"])]
    pub audiocast: bool,

    /// Print this help message
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version info
    #[arg(long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Files to stream, in order; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Resolve the flag soup into a connection profile.
    pub fn stream_config(&self) -> StreamConfig {
        let format = if self.ogg {
            StreamFormat::Ogg
        } else {
            StreamFormat::Mp3
        };
        let protocol = if self.icy {
            StreamProtocol::Icy
        } else if self.audiocast {
            StreamProtocol::XAudiocast
        } else {
            StreamProtocol::Http
        };

        StreamConfig {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            mount: self.mount.clone(),
            format,
            protocol,
        }
    }

    /// Input sources in command-line order.
    pub fn sources(&self) -> Vec<Source> {
        self.files.iter().map(|arg| Source::from_arg(arg)).collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("audio-cast").chain(argv.iter().copied()))
            .expect("parse")
    }

    fn parse_err(argv: &[&str]) -> clap::Error {
        Args::try_parse_from(std::iter::once("audio-cast").chain(argv.iter().copied()))
            .expect_err("parse must fail")
    }

    #[test]
    fn no_flags_yield_the_default_profile() {
        let config = parse(&[]).stream_config();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8000);
        assert_eq!(config.user, "source");
        assert_eq!(config.password, "hackme");
        assert_eq!(config.mount, "/live");
        assert_eq!(config.format, StreamFormat::Mp3);
        assert_eq!(config.protocol, StreamProtocol::Http);
    }

    #[test]
    fn connection_flags_land_in_the_profile() {
        let config = parse(&[
            "--host=radio.example",
            "--port=9000",
            "--user=dj",
            "--password=secret",
            "--mount=/main",
        ])
        .stream_config();
        assert_eq!(config.host, "radio.example");
        assert_eq!(config.port, 9000);
        assert_eq!(config.user, "dj");
        assert_eq!(config.password, "secret");
        assert_eq!(config.mount, "/main");
    }

    #[test]
    fn format_and_protocol_flags_are_independent() {
        let config = parse(&["--ogg", "--icy"]).stream_config();
        assert_eq!(config.format, StreamFormat::Ogg);
        assert_eq!(config.protocol, StreamProtocol::Icy);

        let config = parse(&["--audiocast"]).stream_config();
        assert_eq!(config.format, StreamFormat::Mp3);
        assert_eq!(config.protocol, StreamProtocol::XAudiocast);
    }

    #[test]
    fn last_format_flag_wins() {
        assert_eq!(
            parse(&["--mp3", "--ogg"]).stream_config().format,
            StreamFormat::Ogg
        );
        assert_eq!(
            parse(&["--ogg", "--mp3"]).stream_config().format,
            StreamFormat::Mp3
        );
    }

    #[test]
    fn last_protocol_flag_wins() {
        assert_eq!(
            parse(&["--icy", "--http"]).stream_config().protocol,
            StreamProtocol::Http
        );
        assert_eq!(
            parse(&["--http", "--audiocast", "--icy"])
                .stream_config()
                .protocol,
            StreamProtocol::Icy
        );
    }

    #[test]
    fn trailing_arguments_become_ordered_sources() {
        let sources = parse(&["a.mp3", "-", "b.mp3"]).sources();
        assert_eq!(
            sources,
            vec![
                Source::from_arg("a.mp3"),
                Source::Stdin,
                Source::from_arg("b.mp3"),
            ]
        );
    }

    #[test]
    fn bad_ports_are_configuration_errors() {
        assert_eq!(parse_err(&["--port=0"]).kind(), ErrorKind::ValueValidation);
        assert_eq!(
            parse_err(&["--port=notaport"]).kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse_err(&["--port=70000"]).kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert_eq!(
            parse_err(&["--bitrate=128"]).kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn short_flags_do_not_exist() {
        assert_eq!(parse_err(&["-h"]).kind(), ErrorKind::UnknownArgument);
        assert_eq!(parse_err(&["-V"]).kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_clean_exits() {
        assert_eq!(parse_err(&["--help"]).kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_err(&["--version"]).kind(), ErrorKind::DisplayVersion);
    }
}
