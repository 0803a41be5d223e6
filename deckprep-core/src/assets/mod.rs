use std::path::Path;

use crate::domain::{BorderSpec, MediaKind};
use crate::error::Result;

/// Width of every generated thumbnail, in pixels.
pub const THUMB_WIDTH: u32 = 144;

/// Produces a still image from the first decodable frame of a video.
pub trait FrameExtractor {
    fn extract_first_frame(&self, source: &Path, target: &Path) -> Result<()>;
}

pub mod ffmpeg;
pub mod thumbnail;

/// File names (not paths) of the derivatives written next to a source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedAssets {
    pub thumbnail: Option<String>,
    pub pressed: Option<String>,
}

/// `(thumb, pressed)` names for a source, or `None` for kinds without visuals.
pub fn asset_names(source: &Path, kind: MediaKind) -> Option<(String, String)> {
    let stem = source.file_stem()?.to_string_lossy();
    let ext = match kind {
        MediaKind::Image => source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default(),
        MediaKind::Video => ".jpg".to_string(),
        MediaKind::Audio => return None,
    };
    Some((format!("{stem}_thumb{ext}"), format!("{stem}_pressed{ext}")))
}

/// Writes the thumbnail and pressed variant for `source` into its directory.
///
/// `out` is filled in as each file lands, so on error it still names whatever
/// was written before the failure.
pub fn derive_assets(
    source: &Path,
    kind: MediaKind,
    border: &BorderSpec,
    extractor: &dyn FrameExtractor,
    out: &mut DerivedAssets,
) -> Result<()> {
    let Some((thumb_name, pressed_name)) = asset_names(source, kind) else {
        return Ok(());
    };
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let thumb_path = dir.join(&thumb_name);
    let pressed_path = dir.join(&pressed_name);

    match kind {
        MediaKind::Image => {
            thumbnail::make_thumbnail(source, &thumb_path, THUMB_WIDTH)?;
        }
        MediaKind::Video => {
            extractor.extract_first_frame(source, &thumb_path)?;
            thumbnail::make_thumbnail(&thumb_path, &thumb_path, THUMB_WIDTH)?;
        }
        MediaKind::Audio => return Ok(()),
    }
    out.thumbnail = Some(thumb_name);

    thumbnail::make_pressed_variant(&thumb_path, &pressed_path, border)?;
    out.pressed = Some(pressed_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;
    use image::{Rgb, RgbImage, Rgba};
    use std::path::PathBuf;

    struct NoVideo;

    impl FrameExtractor for NoVideo {
        fn extract_first_frame(&self, source: &Path, _target: &Path) -> Result<()> {
            Err(PrepError::FrameExtraction {
                path: source.to_path_buf(),
                reason: "no decoder".into(),
            })
        }
    }

    fn border() -> BorderSpec {
        BorderSpec {
            color: Rgba([0, 0, 0, 255]),
            width: 2,
        }
    }

    #[test]
    fn names_keep_image_extension() {
        let p = PathBuf::from("/media/Cat.PNG");
        assert_eq!(
            asset_names(&p, MediaKind::Image),
            Some(("Cat_thumb.PNG".into(), "Cat_pressed.PNG".into()))
        );
    }

    #[test]
    fn video_names_are_jpeg() {
        let p = PathBuf::from("intro.mov");
        assert_eq!(
            asset_names(&p, MediaKind::Video),
            Some(("intro_thumb.jpg".into(), "intro_pressed.jpg".into()))
        );
        assert_eq!(asset_names(&p, MediaKind::Audio), None);
    }

    #[test]
    fn image_gets_both_derivatives() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("pic.png");
        RgbImage::from_pixel(288, 144, Rgb([5, 5, 5])).save(&src).unwrap();

        let mut out = DerivedAssets::default();
        derive_assets(&src, MediaKind::Image, &border(), &NoVideo, &mut out).unwrap();
        assert_eq!(out.thumbnail.as_deref(), Some("pic_thumb.png"));
        assert_eq!(out.pressed.as_deref(), Some("pic_pressed.png"));
        assert!(dir.path().join("pic_thumb.png").is_file());
        assert!(dir.path().join("pic_pressed.png").is_file());
    }

    #[test]
    fn failed_extraction_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("clip.mp4");
        std::fs::write(&src, b"").unwrap();

        let mut out = DerivedAssets::default();
        let err = derive_assets(&src, MediaKind::Video, &border(), &NoVideo, &mut out).unwrap_err();
        assert!(matches!(err, PrepError::FrameExtraction { .. }));
        assert_eq!(out, DerivedAssets::default());
    }

    #[test]
    fn audio_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("song.mp3");
        std::fs::write(&src, b"ID3").unwrap();

        let mut out = DerivedAssets::default();
        derive_assets(&src, MediaKind::Audio, &border(), &NoVideo, &mut out).unwrap();
        assert_eq!(out, DerivedAssets::default());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
