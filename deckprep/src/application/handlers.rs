use std::path::PathBuf;
use std::time::Duration;

use deckprep_core::error::{PrepError, Result};
use deckprep_core::manifest;
use deckprep_core::{
    ArgumentMode, Config, FfmpegExtractor, MediaKind, PrefixPolicy, PrepareParams, run_with,
};

pub struct PrepareArgs {
    pub folder: PathBuf,
    pub kind: MediaKind,
    pub option: Option<String>,
    pub custom_prefix: Option<String>,
    pub augment_index: bool,
    pub serial: bool,
    pub argument_base: Option<i64>,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub config: PathBuf,
    pub ffmpeg: PathBuf,
    pub frame_timeout: u64,
}

fn select_policy(cfg: &Config, args: &PrepareArgs) -> Result<PrefixPolicy> {
    let mut policy = match (&args.custom_prefix, &args.option) {
        (Some(prefix), _) => PrefixPolicy::custom(prefix)?,
        (None, Some(name)) => cfg.policy(name).cloned().ok_or_else(|| {
            PrepError::Config(format!("unknown OSC prefix option {name:?}"))
        })?,
        (None, None) => cfg.default_policy()?.clone(),
    };
    if args.augment_index {
        policy.augment_index = true;
    }
    if args.serial {
        policy.argument_mode = ArgumentMode::Serial;
    }
    if let Some(base) = args.argument_base {
        policy.argument_base = base;
    }
    Ok(policy)
}

pub fn handle_prepare(args: PrepareArgs) -> Result<()> {
    let cfg = Config::load_or_default(&args.config);
    let policy = select_policy(&cfg, &args)?;
    let params = PrepareParams {
        root: args.folder,
        kind: args.kind,
        policy,
        border_color_hex: args.border_color.unwrap_or(cfg.border_color),
        border_width: args.border_width.unwrap_or(cfg.border_width),
    };
    let extractor = FfmpegExtractor {
        program: args.ffmpeg,
        timeout: Duration::from_secs(args.frame_timeout),
    };

    let summary = run_with(&params, &extractor)?;
    if !summary.failures.is_empty() {
        eprintln!(
            "prepare: {} file(s) listed without images",
            summary.failures.len()
        );
    }
    println!(
        "Successfully processed {} files. Configuration saved to {}",
        summary.entries,
        summary.manifest_path.display()
    );
    Ok(())
}

fn or_dash(name: &str) -> &str {
    if name.is_empty() { "-" } else { name }
}

pub fn handle_show(folder: PathBuf) -> Result<()> {
    let m = manifest::read(&folder)?;
    for (i, e) in m.files.iter().enumerate() {
        let (path, value) = e
            .osc_commands
            .first()
            .map(|c| (c.osc_path.as_str(), format!("{:?}", c.osc_value)))
            .unwrap_or(("-", String::new()));
        let image = or_dash(&e.image);
        let pressed = or_dash(&e.image_pressed);
        println!(
            "#{:<3} {}  image={} pressed={}  {} {}",
            i, e.title, image, pressed, path, value
        );
    }
    eprintln!("show: {} entries", m.files.len());
    Ok(())
}

pub fn handle_options(config: PathBuf) -> Result<()> {
    let cfg = Config::load_or_default(&config);
    for p in &cfg.osc_prefix_options {
        let mode = match p.argument_mode {
            ArgumentMode::Constant => "constant",
            ArgumentMode::Serial => "serial",
        };
        println!(
            "{:<12} {:<28} augment_index={} argument={} base={}",
            p.name, p.prefix, p.augment_index, mode, p.argument_base
        );
    }
    println!("border: {} width={}", cfg.border_color, cfg.border_width);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PrepareArgs {
        PrepareArgs {
            folder: PathBuf::from("."),
            kind: MediaKind::Image,
            option: None,
            custom_prefix: None,
            augment_index: false,
            serial: false,
            argument_base: None,
            border_color: None,
            border_width: None,
            config: PathBuf::from("config.json"),
            ffmpeg: PathBuf::from("ffmpeg"),
            frame_timeout: 30,
        }
    }

    #[test]
    fn first_option_is_the_default() {
        let p = select_policy(&Config::default(), &args()).unwrap();
        assert_eq!(p.prefix, "/streamdeck/option_1");
    }

    #[test]
    fn named_option_and_overrides() {
        let mut a = args();
        a.option = Some("Option 2".into());
        a.augment_index = true;
        a.serial = true;
        a.argument_base = Some(10);
        let p = select_policy(&Config::default(), &a).unwrap();
        assert_eq!(p.prefix, "/streamdeck/option_2");
        assert!(p.augment_index);
        assert_eq!(p.argument_mode, ArgumentMode::Serial);
        assert_eq!(p.argument_base, 10);
    }

    #[test]
    fn custom_prefix_wins() {
        let mut a = args();
        a.custom_prefix = Some("obs/scene".into());
        let p = select_policy(&Config::default(), &a).unwrap();
        assert_eq!(p.prefix, "/obs/scene");
        assert_eq!(p.argument_mode, ArgumentMode::Constant);
        assert!(!p.augment_index);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut a = args();
        a.option = Some("Option 9".into());
        assert!(select_policy(&Config::default(), &a).is_err());
    }
}
