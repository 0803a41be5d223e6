use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;
use wait_timeout::ChildExt;

use super::FrameExtractor;
use crate::error::{PrepError, Result};

pub const DEFAULT_FRAME_TIMEOUT: Duration = Duration::from_secs(30);

/// Pulls the first frame with an external `ffmpeg` binary.
#[derive(Clone, Debug)]
pub struct FfmpegExtractor {
    pub program: PathBuf,
    pub timeout: Duration,
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
            timeout: DEFAULT_FRAME_TIMEOUT,
        }
    }
}

impl FrameExtractor for FfmpegExtractor {
    fn extract_first_frame(&self, source: &Path, target: &Path) -> Result<()> {
        let fail = |reason: String| PrepError::FrameExtraction {
            path: source.to_path_buf(),
            reason,
        };

        debug!(program = %self.program.display(), source = %source.display(), "extracting first frame");
        let mut child = Command::new(&self.program)
            .arg("-y")
            .arg("-i")
            .arg(source)
            .args(["-vframes", "1", "-f", "image2"])
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| fail(format!("cannot run {}: {e}", self.program.display())))?;

        match child.wait_timeout(self.timeout) {
            Ok(Some(status)) if status.success() => Ok(()),
            Ok(Some(status)) => Err(fail(format!("{} {status}", self.program.display()))),
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(fail(format!("timed out after {:?}", self.timeout)))
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(fail(format!("waiting for {}: {e}", self.program.display())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_frame_error() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = FfmpegExtractor {
            program: dir.path().join("no-such-ffmpeg"),
            ..Default::default()
        };
        let err = extractor
            .extract_first_frame(&dir.path().join("clip.mp4"), &dir.path().join("clip_thumb.jpg"))
            .unwrap_err();
        assert!(matches!(err, PrepError::FrameExtraction { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_frame_error() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = FfmpegExtractor {
            program: PathBuf::from("false"),
            ..Default::default()
        };
        let err = extractor
            .extract_first_frame(&dir.path().join("clip.mp4"), &dir.path().join("clip_thumb.jpg"))
            .unwrap_err();
        assert!(matches!(err, PrepError::FrameExtraction { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn hung_extractor_is_killed_after_timeout() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Instant;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("stuck-ffmpeg");
        std::fs::write(&script, "#!/bin/sh\nsleep 10\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let extractor = FfmpegExtractor {
            program: script,
            timeout: Duration::from_millis(200),
        };
        let started = Instant::now();
        let err = extractor
            .extract_first_frame(&dir.path().join("clip.mp4"), &dir.path().join("clip_thumb.jpg"))
            .unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(5));
        match err {
            PrepError::FrameExtraction { reason, .. } => {
                assert!(reason.contains("timed out"), "{reason}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
