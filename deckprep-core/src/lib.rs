#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub mod color;
pub mod command;
pub mod config;
pub mod domain;

pub mod assets;

pub mod manifest;
pub mod pipeline;
pub mod scan;

// Re-exports: stable API surface
pub use assets::FrameExtractor;
pub use assets::ffmpeg::FfmpegExtractor;
pub use config::Config;
pub use domain::{BorderSpec, MediaKind, PrepareParams};
pub use pipeline::{RunSummary, run, run_with};
pub use policy::{ArgumentMode, PrefixPolicy};
