use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::command::CommandBinding;
use crate::error::{PrepError, Result};

pub const MANIFEST_FILE: &str = "media_config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OscCommand {
    pub osc_path: String,
    pub osc_value: Vec<i64>,
    pub osc_port: u16,
}

impl From<CommandBinding> for OscCommand {
    fn from(b: CommandBinding) -> Self {
        Self {
            osc_path: b.path,
            osc_value: vec![b.argument],
            osc_port: b.port,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub title: String,
    /// Thumbnail file name, empty when none was produced.
    pub image: String,
    pub image_pressed: String,
    pub osc_commands: Vec<OscCommand>,
    pub full_path: String,
    pub scripts: Vec<String>,
    pub script_paths: Vec<String>,
    pub delays: Vec<i64>,
}

/// Entry order is positional: `files[i]` was named and bound with index `i`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub files: Vec<MediaEntry>,
    pub osc_root_path: String,
    pub osc_arg: Vec<String>,
}

impl Manifest {
    /// Appends an entry, keeping `osc_arg` parallel to `files`.
    pub fn push(&mut self, entry: MediaEntry) {
        self.osc_arg.push(entry.full_path.clone());
        self.files.push(entry);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Replaces `<root>/media_config.json` via a sibling temp file and rename.
pub fn write(manifest: &Manifest, root: &Path) -> Result<PathBuf> {
    let path = manifest_path(root);
    let persist_err = |source: std::io::Error| PrepError::Persist {
        path: path.clone(),
        source,
    };

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    manifest
        .serialize(&mut ser)
        .map_err(|e| persist_err(e.into()))?;

    let mut builder = tempfile::Builder::new();
    // readable by the deck surface, not just the owner
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut tmp = builder.tempfile_in(root).map_err(persist_err)?;
    tmp.write_all(&buf).map_err(persist_err)?;
    tmp.as_file().sync_all().map_err(persist_err)?;
    tmp.persist(&path).map_err(|e| persist_err(e.error))?;
    Ok(path)
}

pub fn read(root: &Path) -> Result<Manifest> {
    let path = manifest_path(root);
    let text = fs::read_to_string(&path)?;
    serde_json::from_str(&text).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{}: {e}", path.display()),
        )
        .into()
    })
}
