//! Per-track display metadata, read through lofty.

use std::path::Path;

use lofty::{Accessor, TaggedFileExt, read_from_path};

/// Longest song string pushed to the server; longer values are silently cut.
pub const MAX_SONG_BYTES: usize = 4096;

/// Artist/title pair for one source, derived fresh per file and discarded
/// after being sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub title: String,
}

impl TrackTags {
    /// `"<artist> - <title>"`, truncated to [`MAX_SONG_BYTES`] on a char
    /// boundary.
    pub fn song(&self) -> String {
        let mut song = format!("{} - {}", self.artist, self.title);
        if song.len() > MAX_SONG_BYTES {
            let mut cut = MAX_SONG_BYTES;
            while !song.is_char_boundary(cut) {
                cut -= 1;
            }
            song.truncate(cut);
        }
        song
    }
}

/// Tag extraction seam. `None` means the source carries no usable tag data;
/// reading never fails the session.
pub trait TagReader {
    fn read(&self, path: &Path) -> Option<TrackTags>;
}

/// Production reader backed by lofty. Unreadable or untagged files count as
/// "no tag data".
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read(&self, path: &Path) -> Option<TrackTags> {
        let tagged = read_from_path(path).ok()?;
        let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;

        let artist = tag.artist().map(|v| v.to_string()).unwrap_or_default();
        let title = tag.title().map(|v| v.to_string()).unwrap_or_default();

        // A container with neither field announces the same as no container.
        if artist.is_empty() && title.is_empty() {
            return None;
        }

        Some(TrackTags { artist, title })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_joins_artist_and_title() {
        let tags = TrackTags {
            artist: "A".to_string(),
            title: "B".to_string(),
        };
        assert_eq!(tags.song(), "A - B");
    }

    #[test]
    fn song_at_limit_is_untouched() {
        let tags = TrackTags {
            artist: "a".repeat(MAX_SONG_BYTES - 4),
            title: "b".to_string(),
        };
        let song = tags.song();
        assert_eq!(song.len(), MAX_SONG_BYTES);
        assert!(song.ends_with("- b"));
    }

    #[test]
    fn song_truncates_silently_past_limit() {
        let tags = TrackTags {
            artist: "a".repeat(MAX_SONG_BYTES),
            title: "never seen".to_string(),
        };
        let song = tags.song();
        assert_eq!(song.len(), MAX_SONG_BYTES);
        assert!(!song.contains("never"));
    }

    #[test]
    fn song_truncation_respects_char_boundaries() {
        // The cut point lands in the middle of the trailing two-byte char.
        let tags = TrackTags {
            artist: "a".repeat(MAX_SONG_BYTES - 6),
            title: "éé".to_string(),
        };
        let song = tags.song();
        assert!(song.len() < MAX_SONG_BYTES);
        assert_eq!(song.chars().last(), Some('é'));
    }

    #[test]
    fn unreadable_file_has_no_tags() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, b"not an audio file at all").expect("write fixture");

        assert_eq!(LoftyTagReader.read(&path), None);
    }

    #[test]
    fn missing_file_has_no_tags() {
        assert_eq!(LoftyTagReader.read(Path::new("/no/such/file.mp3")), None);
    }
}
