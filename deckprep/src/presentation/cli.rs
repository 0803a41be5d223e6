use clap::{Parser, Subcommand, ValueEnum};
use deckprep_core::MediaKind;
use deckprep_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Prepare a media folder for a button deck", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum KindArg {
    Image,
    Video,
    Audio,
}

impl From<KindArg> for MediaKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Image => MediaKind::Image,
            KindArg::Video => MediaKind::Video,
            KindArg::Audio => MediaKind::Audio,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write thumbnails, pressed variants and media_config.json for a folder
    Prepare {
        /// folder holding the media files (not searched recursively)
        folder: PathBuf,

        #[arg(long, value_enum)]
        kind: KindArg,

        /// named prefix option from the config catalog (defaults to the first one)
        #[arg(long, conflicts_with = "custom_prefix")]
        option: Option<String>,

        /// use this OSC prefix instead of a catalog option
        #[arg(long = "custom-prefix")]
        custom_prefix: Option<String>,

        /// append the zero-padded entry number to the prefix
        #[arg(long)]
        augment_index: bool,

        /// send base + index instead of a constant argument
        #[arg(long)]
        serial: bool,

        #[arg(long)]
        argument_base: Option<i64>,

        /// border color of the pressed variant, #RRGGBB (default from config)
        #[arg(long)]
        border_color: Option<String>,

        /// border width in pixels (default from config)
        #[arg(long)]
        border_width: Option<u32>,

        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// frame extraction program for video files
        #[arg(long, default_value = "ffmpeg")]
        ffmpeg: PathBuf,

        /// seconds before a frame extraction is abandoned
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
        frame_timeout: u64,
    },

    /// List the entries of an existing media_config.json
    Show { folder: PathBuf },

    /// List the configured OSC prefix options
    Options {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}
