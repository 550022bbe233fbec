// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use studio_lens::application::port::EditorHost;
use studio_lens::config;
use studio_lens::diagnostics::{BufferCapacity, DiagnosticsCollector};
use studio_lens::domain::editing::{
    AdjustmentKind, BorderStyle, Color, FrameStyle, StylisticFilter,
};
use studio_lens::domain::session::{Photo, Session, SessionId};
use studio_lens::editor::{Editor, EditorSettings, LoadDisposition};
use studio_lens::error::{Error, Result};
use studio_lens::infrastructure::skia::load_font;
use studio_lens::infrastructure::{HttpFetcher, LocatorFetcher, SkiaSurface};
use studio_lens::media::decode_data_url;

const USAGE: &str = "\
Usage: studio-lens [OPTIONS] FILES...

Options:
  --config-dir DIR     Read settings.toml from DIR
  --out DIR            Write edited photos to DIR (default: .)
  --brightness N       Brightness, -100..100
  --contrast N         Contrast, -100..100
  --saturation N       Saturation, -100..100
  --filter NAME        none, black-and-white, sepia, cyberpunk, vivid, warm, cool, hdr
  --frame NAME         none, classic, modern, vintage, polaroid, ornate
  --border NAME        none, solid, dashed, dotted, double, rounded
  --border-width N     Border width, 1..100
  --border-color HEX   Border color, e.g. #ff0000
  --watermark TEXT     Centered text watermark
  --rotate N           Rotation in degrees, a multiple of 90
  --crop               Crop to the central half of each photo
  -h, --help           Show this help";

/// Edits requested on the command line, applied to every photo.
#[derive(Debug)]
struct Flags {
    config_dir: Option<PathBuf>,
    out_dir: PathBuf,
    adjustments: Vec<(AdjustmentKind, i32)>,
    filter: Option<StylisticFilter>,
    frame: Option<FrameStyle>,
    border: Option<BorderStyle>,
    border_width: Option<f32>,
    border_color: Option<Color>,
    watermark: Option<String>,
    quarter_turns: i32,
    crop: bool,
    files: Vec<PathBuf>,
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let arg_error = |e: pico_args::Error| Error::Config(e.to_string());

    let mut adjustments = Vec::new();
    for (flag, kind) in [
        ("--brightness", AdjustmentKind::Brightness),
        ("--contrast", AdjustmentKind::Contrast),
        ("--saturation", AdjustmentKind::Saturation),
    ] {
        if let Some(value) = args.opt_value_from_str(flag).map_err(arg_error)? {
            adjustments.push((kind, value));
        }
    }

    let rotate: i32 = args
        .opt_value_from_str("--rotate")
        .map_err(arg_error)?
        .unwrap_or(0);
    if rotate % 90 != 0 {
        return Err(Error::Config(format!(
            "--rotate must be a multiple of 90, got {rotate}"
        )));
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").map_err(arg_error)?,
        out_dir: args
            .opt_value_from_str("--out")
            .map_err(arg_error)?
            .unwrap_or_else(|| PathBuf::from(".")),
        adjustments,
        filter: args.opt_value_from_str("--filter").map_err(arg_error)?,
        frame: args.opt_value_from_str("--frame").map_err(arg_error)?,
        border: args.opt_value_from_str("--border").map_err(arg_error)?,
        border_width: args.opt_value_from_str("--border-width").map_err(arg_error)?,
        border_color: args.opt_value_from_str("--border-color").map_err(arg_error)?,
        watermark: args.opt_value_from_str("--watermark").map_err(arg_error)?,
        quarter_turns: (rotate / 90).rem_euclid(4),
        crop: args.contains("--crop"),
        files: args
            .finish()
            .into_iter()
            .map(PathBuf::from)
            .collect(),
    };
    if let Some(unknown) = flags
        .files
        .iter()
        .find(|path| path.to_string_lossy().starts_with("--"))
    {
        return Err(Error::Config(format!("unknown option {}", unknown.display())));
    }
    Ok(flags)
}

/// Writes each saved photo to `<id>.png` in the output directory.
struct FileHost {
    out_dir: PathBuf,
    ids: Vec<String>,
    written: Vec<PathBuf>,
}

impl FileHost {
    fn write(&self, photo_index: usize, encoded_png: &str) -> Result<PathBuf> {
        let id = self
            .ids
            .get(photo_index)
            .ok_or_else(|| Error::Save(format!("no photo at index {photo_index}")))?;
        let bytes = decode_data_url(encoded_png)?;
        let path = self.out_dir.join(format!("{id}.png"));
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

impl EditorHost for FileHost {
    fn on_save(&mut self, session: &SessionId, photo_index: usize, encoded_png: &str) {
        match self.write(photo_index, encoded_png) {
            Ok(path) => {
                log::info!("Session {session}: wrote {}", path.display());
                self.written.push(path);
            }
            Err(e) => log::error!("Session {session}: {e}"),
        }
    }

    fn on_delete_image(&mut self, _session: &SessionId, photo_index: usize) {
        if photo_index < self.ids.len() {
            self.ids.remove(photo_index);
        }
    }
}

/// Photo ids from file stems, suffixed with the position when repeated.
fn photo_ids(files: &[PathBuf]) -> Vec<String> {
    let mut seen = HashSet::new();
    files
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let stem = path
                .file_stem()
                .map_or_else(|| format!("photo-{index}"), |s| s.to_string_lossy().into_owned());
            if seen.insert(stem.clone()) {
                stem
            } else {
                format!("{stem}-{index}")
            }
        })
        .collect()
}

fn settings_path_label(dir: Option<&Path>) -> String {
    config::config_dir_with_override(dir.map(Path::to_path_buf))
        .map_or_else(|| "<none>".to_string(), |d| d.display().to_string())
}

async fn run(flags: Flags) -> Result<usize> {
    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(key) = warning {
        log::warn!(
            "{key}: using defaults instead of {}",
            settings_path_label(flags.config_dir.as_deref())
        );
    }

    std::fs::create_dir_all(&flags.out_dir)?;
    let ids = photo_ids(&flags.files);
    let photos = flags
        .files
        .iter()
        .zip(&ids)
        .map(|(path, id)| Photo::new(id.clone(), path.to_string_lossy().as_ref()))
        .collect();
    let session = Session::new("cli", "command line", photos);

    let font = flags
        .watermark
        .as_ref()
        .and_then(|_| load_font(config.watermark.font_path.as_deref()));
    let surface = SkiaSurface::new(config.surface.size(), config.surface.background).with_font(font);
    let fetcher = LocatorFetcher::new(HttpFetcher::new(
        config.fetch.timeout(),
        config.fetch.origin.clone(),
    )?);
    let host = FileHost {
        out_dir: flags.out_dir.clone(),
        ids,
        written: Vec::new(),
    };

    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut editor = Editor::new(
        session,
        surface,
        fetcher,
        host,
        EditorSettings::from(&config),
    )
    .with_diagnostics(collector.handle());

    for index in 0..editor.session().len() {
        if editor.select_photo(index).await != Some(LoadDisposition::Applied) {
            editor.notifications_mut().clear();
            continue;
        }
        apply_edits(&mut editor, &flags);
        if let Err(e) = editor.save() {
            log::error!("Photo {}: {e}", index + 1);
        }
        collector.process_pending();
        // Failures already went to the log and diagnostics.
        editor.notifications_mut().clear();
    }

    let host = editor.close();
    collector.process_pending();
    log::debug!("Diagnostics: {}", collector.summary());
    Ok(host.written.len())
}

fn apply_edits<S, F, H>(editor: &mut Editor<S, F, H>, flags: &Flags)
where
    S: studio_lens::application::port::Surface,
    F: studio_lens::application::port::ImageFetcher,
    H: EditorHost,
{
    for (kind, value) in &flags.adjustments {
        editor.set_adjustment(*kind, *value);
    }
    if let Some(filter) = flags.filter {
        editor.set_stylistic_filter(filter);
    }
    if let Some(frame) = flags.frame {
        editor.set_frame(frame);
    }
    if let Some(width) = flags.border_width {
        editor.set_border_width(width);
    }
    if let Some(color) = flags.border_color {
        editor.set_border_color(color);
    }
    if let Some(border) = flags.border {
        editor.set_border(border);
    }
    for _ in 0..flags.quarter_turns {
        editor.rotate_right();
    }
    if let Some(text) = &flags.watermark {
        editor.add_default_text_watermark(text);
    }
    if flags.crop {
        editor.enable_cropping();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if flags.files.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    let total = flags.files.len();
    match run(flags).await {
        Ok(saved) => {
            println!("Saved {saved} of {total} photos");
            if saved == total {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
