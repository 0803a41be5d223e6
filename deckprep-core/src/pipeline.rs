use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::assets::ffmpeg::FfmpegExtractor;
use crate::assets::{DerivedAssets, FrameExtractor, derive_assets};
use crate::color::parse_hex_color;
use crate::command::assign;
use crate::domain::{BorderSpec, MediaKind, PrepareParams};
use crate::error::Result;
use crate::manifest::{self, Manifest, MediaEntry};
use crate::policy::PrefixPolicy;
use crate::scan::scan;

/// A per-file problem that did not stop the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub entries: usize,
    pub manifest_path: PathBuf,
    pub failures: Vec<FileFailure>,
}

/// Builds the entry for the candidate at `index`. Derivation errors are
/// returned alongside the entry rather than instead of it.
pub fn build_entry(
    source: &Path,
    index: usize,
    kind: MediaKind,
    policy: &PrefixPolicy,
    border: &BorderSpec,
    extractor: &dyn FrameExtractor,
) -> (MediaEntry, Option<FileFailure>) {
    let mut assets = DerivedAssets::default();
    let failure = derive_assets(source, kind, border, extractor, &mut assets)
        .err()
        .map(|e| FileFailure {
            path: source.to_path_buf(),
            message: e.to_string(),
        });

    let entry = MediaEntry {
        title: source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        image: assets.thumbnail.unwrap_or_default(),
        image_pressed: assets.pressed.unwrap_or_default(),
        osc_commands: vec![assign(policy, index).into()],
        full_path: source.to_string_lossy().into_owned(),
        scripts: Vec::new(),
        script_paths: Vec::new(),
        delays: Vec::new(),
    };
    (entry, failure)
}

/// Scan, derive, assign and persist. Only color, scan and persist errors fail the run.
pub fn run_with(params: &PrepareParams, extractor: &dyn FrameExtractor) -> Result<RunSummary> {
    let border = BorderSpec {
        color: parse_hex_color(&params.border_color_hex)?,
        width: params.border_width,
    };
    let candidates = scan(&params.root, params.kind)?;
    info!(
        root = %params.root.display(),
        kind = %params.kind,
        candidates = candidates.len(),
        "processing media folder"
    );

    let mut manifest = Manifest::default();
    let mut failures = Vec::new();
    for (index, source) in candidates.iter().enumerate() {
        debug!(index, source = %source.display(), "processing file");
        let (entry, failure) =
            build_entry(source, index, params.kind, &params.policy, &border, extractor);
        if let Some(f) = failure {
            warn!("{}: {}", f.path.display(), f.message);
            failures.push(f);
        }
        manifest.push(entry);
    }

    let manifest_path = manifest::write(&manifest, &params.root)?;
    info!(
        entries = manifest.len(),
        failures = failures.len(),
        manifest = %manifest_path.display(),
        "manifest written"
    );
    Ok(RunSummary {
        entries: manifest.len(),
        manifest_path,
        failures,
    })
}

/// [`run_with`] using `ffmpeg` from `PATH` for video frames.
pub fn run(params: &PrepareParams) -> Result<RunSummary> {
    run_with(params, &FfmpegExtractor::default())
}
