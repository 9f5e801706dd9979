// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use confsite::application::port::{DisplaySurface, FragmentTarget, HostPage};
use confsite::calendar;
use confsite::config::{self, paths, Config, DEFAULT_AVATAR_SIZE};
use confsite::diagnostics::{BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, UserAction};
use confsite::domain::ui::AvatarSize;
use confsite::error::{Error, Result};
use confsite::infrastructure::{load_manifest, FileFragment};
use confsite::media::{save_avatar, AmbientAnimation, PixelAvatar};
use confsite::ui::lightbox::GalleryNavigator;
use confsite::ui::{FragmentLoader, LoadOutcome};

const HELP: &str = "\
confsite - conference website behaviors from the command line

USAGE:
  confsite [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  avatar <NAME> [--size PX] [--out FILE]        Render a pixel avatar (data URL without --out)
  calendar [--out DIR]                          Write the conference invitation (.ics)
  halftone --out DIR [--width W] [--height H] [--frames N]
                                                Render hero animation frames as PNG
  gallery <MANIFEST> [--viewport W]             Walk a gallery manifest through the lightbox
  fragment <FILE>                               Print a markup fragment as it would be injected

OPTIONS:
  --config-dir DIR     Read settings.toml from DIR (or set CONFSITE_CONFIG_DIR)
  --diagnostics FILE   Write collected diagnostic events as JSON on exit
  -v, --verbose        Debug logging
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<()> {
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").map_err(arg_error)?;
    let diagnostics_out: Option<PathBuf> =
        args.opt_value_from_str("--diagnostics").map_err(arg_error)?;
    paths::init_cli_override(config_dir);

    let (config, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(key = %key, "settings.toml ignored");
    }

    let capacity = BufferCapacity::new(
        config
            .diagnostics
            .buffer_capacity
            .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
    );
    let mut collector = DiagnosticsCollector::new(capacity);
    let diagnostics = collector.handle();

    let command: Option<String> = args.subcommand().map_err(arg_error)?;
    let outcome = match command.as_deref() {
        Some("avatar") => avatar(&mut args, &config, &diagnostics),
        Some("calendar") => calendar_cmd(&mut args, &diagnostics),
        Some("halftone") => halftone(&mut args, &config),
        Some("gallery") => gallery(&mut args, &config, &mut collector),
        Some("fragment") => fragment(&mut args, &diagnostics),
        Some(other) => Err(Error::Config(format!("unknown command `{other}`, see --help"))),
        None => {
            print!("{HELP}");
            Ok(())
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unused arguments");
    }

    if let Some(path) = diagnostics_out {
        collector.process_pending();
        let json = collector
            .export_json()
            .map_err(|e| Error::Io(e.to_string()))?;
        std::fs::write(&path, json)?;
        tracing::info!(path = %path.display(), events = collector.len(), "diagnostics written");
    }

    outcome
}

fn arg_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}

fn avatar(
    args: &mut pico_args::Arguments,
    config: &Config,
    diagnostics: &DiagnosticsHandle,
) -> Result<()> {
    let size: Option<u32> = args.opt_value_from_str("--size").map_err(arg_error)?;
    let out: Option<PathBuf> = args.opt_value_from_str("--out").map_err(arg_error)?;
    let name: String = args.free_from_str().map_err(arg_error)?;

    let size = AvatarSize::new(size.or(config.avatar.size).unwrap_or(DEFAULT_AVATAR_SIZE));
    diagnostics.log_action_with_details(UserAction::GenerateAvatar, Some(name.clone()));

    match out {
        Some(path) => save_avatar(&name, size, &path),
        None => {
            println!("{}", PixelAvatar::new(name, size).to_data_url()?);
            Ok(())
        }
    }
}

fn calendar_cmd(args: &mut pico_args::Arguments, diagnostics: &DiagnosticsHandle) -> Result<()> {
    let out: PathBuf = args
        .opt_value_from_str("--out")
        .map_err(arg_error)?
        .unwrap_or_else(|| PathBuf::from("."));

    let document = calendar::conference_invitation(chrono::Utc::now())?;
    let path = calendar::export_to_path(&document, &out)?;
    diagnostics.log_action(UserAction::DownloadCalendar);
    println!("{} ({})", path.display(), calendar::MIME_TYPE);
    Ok(())
}

fn halftone(args: &mut pico_args::Arguments, config: &Config) -> Result<()> {
    let out: PathBuf = args.value_from_str("--out").map_err(arg_error)?;
    let width: u32 = args.opt_value_from_str("--width").map_err(arg_error)?.unwrap_or(1200);
    let height: u32 = args.opt_value_from_str("--height").map_err(arg_error)?.unwrap_or(720);
    let frames: u32 = args.opt_value_from_str("--frames").map_err(arg_error)?.unwrap_or(1);

    std::fs::create_dir_all(&out)?;
    let mut animation = AmbientAnimation::from_config(&config.animation, width, height);
    animation.start();

    for index in 0..frames {
        let Some(frame) = animation.tick(Instant::now()) else {
            break;
        };
        let png = animation.field().render_png(frame.time)?;
        let path = out.join(format!("frame-{index:04}.png"));
        std::fs::write(&path, png)?;
        tracing::debug!(path = %path.display(), dots = frame.dots.len(), "frame written");
    }
    tracing::info!(frames, dir = %out.display(), "halftone frames written");
    Ok(())
}

fn gallery(
    args: &mut pico_args::Arguments,
    config: &Config,
    collector: &mut DiagnosticsCollector,
) -> Result<()> {
    let viewport: u32 = args
        .opt_value_from_str("--viewport")
        .map_err(arg_error)?
        .unwrap_or(1280);
    let manifest_path: PathBuf = args.free_from_str().map_err(arg_error)?;

    let manifest = load_manifest(&manifest_path)?;
    let diagnostics = collector.handle();
    manifest.report_to(&diagnostics);
    collector.process_pending();

    let mut navigator = GalleryNavigator::from_config(
        manifest.into_items(),
        ConsoleSurface,
        FixedViewport::new(viewport),
        &config.gallery,
    )
    .with_diagnostics(diagnostics);

    navigator
        .open(0)
        .map_err(|e| Error::Config(e.to_string()))?;
    collector.process_pending();
    for _ in 1..navigator.item_count() {
        navigator.next();
        collector.process_pending();
    }
    navigator.close();
    collector.process_pending();

    let info = navigator.navigation_info();
    println!("{} items at viewport {viewport}px", info.item_count);
    Ok(())
}

fn fragment(args: &mut pico_args::Arguments, diagnostics: &DiagnosticsHandle) -> Result<()> {
    let path: PathBuf = args.free_from_str().map_err(arg_error)?;
    let source = FileFragment::new(path);
    let mut target = StdoutTarget;

    let loader = FragmentLoader::new().with_diagnostics(diagnostics.clone());
    match loader.load(&source, Some(&mut target)) {
        LoadOutcome::Failed => Err(Error::Fragment(format!(
            "could not load {}",
            source.path().display()
        ))),
        LoadOutcome::Injected | LoadOutcome::NoTarget => Ok(()),
    }
}

/// Prints what a browser overlay would display.
struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    fn show(&mut self) {
        println!("[overlay shown]");
    }

    fn hide(&mut self) {
        println!("[overlay hidden]");
    }

    fn set_image(&mut self, url: &str, alt_text: &str) {
        println!("image: {url} ({alt_text})");
    }

    fn set_caption(&mut self, caption: Option<&str>) {
        if let Some(caption) = caption {
            println!("caption: {caption}");
        }
    }
}

struct FixedViewport {
    width: u32,
}

impl FixedViewport {
    fn new(width: u32) -> Self {
        Self { width }
    }
}

impl HostPage for FixedViewport {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        tracing::debug!(locked, "page scroll lock");
    }
}

struct StdoutTarget;

impl FragmentTarget for StdoutTarget {
    fn inject(&mut self, markup: &str) {
        print!("{markup}");
    }
}
