// deckprep_core/src/domain.rs
use std::fmt;
use std::path::PathBuf;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::policy::PrefixPolicy;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Lowercase extensions (without the dot) accepted for this kind.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["jpg", "jpeg", "png", "gif"],
            MediaKind::Video => &["mp4", "avi", "mov", "mkv"],
            MediaKind::Audio => &["mp3", "wav", "ogg", "flac"],
        }
    }

    pub fn matches_extension(self, ext: &str) -> bool {
        let lower = ext.to_ascii_lowercase();
        self.extensions().contains(&lower.as_str())
    }

    /// Audio entries carry no thumbnail or pressed image.
    pub fn has_visuals(self) -> bool {
        !matches!(self, MediaKind::Audio)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BorderSpec {
    /// Always fully opaque.
    pub color: Rgba<u8>,
    pub width: u32,
}

/// Everything one run needs, already collected and validated by the front end.
#[derive(Clone, Debug)]
pub struct PrepareParams {
    pub root: PathBuf,
    pub kind: MediaKind,
    pub policy: PrefixPolicy,
    pub border_color_hex: String,
    pub border_width: u32,
}
