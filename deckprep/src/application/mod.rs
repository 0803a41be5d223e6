pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use deckprep_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Prepare {
            folder,
            kind,
            option,
            custom_prefix,
            augment_index,
            serial,
            argument_base,
            border_color,
            border_width,
            config,
            ffmpeg,
            frame_timeout,
        } => handlers::handle_prepare(handlers::PrepareArgs {
            folder,
            kind: kind.into(),
            option,
            custom_prefix,
            augment_index,
            serial,
            argument_base,
            border_color,
            border_width,
            config,
            ffmpeg,
            frame_timeout,
        }),
        Commands::Show { folder } => handlers::handle_show(folder),
        Commands::Options { config } => handlers::handle_options(config),
    }
}
