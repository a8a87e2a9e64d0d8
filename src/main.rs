// src/main.rs
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ecgview::record::JsonDirSource;
use ecgview::render::{render_scene_png, PlotStyle, Scene};
use ecgview::{LeadsViewer, RenderOutcome, ViewConfig, ViewEvent};
#[derive(Parser)]
#[command(name = "ecgview")]
#[command(about = "Render ECG leads on calibrated paper grids")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}
#[derive(Subcommand)]
enum Commands {
    /// Print the patient header, intervals and lead list of a record
    Info {
        #[arg(long, short)]
        record: PathBuf,
    },
    /// Render windowed lead cards to PNG files
    Render {
        #[arg(long, short)]
        record: PathBuf,
        #[arg(long, short)]
        out_dir: PathBuf,
        /// Only render this lead
        #[arg(long)]
        lead: Option<String>,
        /// Container width in pixels
        #[arg(long)]
        width: Option<f64>,
        /// Window start in seconds
        #[arg(long, default_value = "0")]
        start: f64,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render the whole recording of one lead at full-trace scale
    ///
    /// At 400 px/s a PNG holds at most about 82 s; longer leads are reported
    /// and skipped.
    Full {
        #[arg(long, short)]
        record: PathBuf,
        #[arg(long)]
        lead: String,
        #[arg(long, short)]
        out: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
fn main() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { record } => info(&record),
        Commands::Render {
            record,
            out_dir,
            lead,
            width,
            start,
            config,
        } => render(&record, &out_dir, lead.as_deref(), width, start, config.as_deref()),
        Commands::Full {
            record,
            lead,
            out,
            config,
        } => full(&record, &lead, &out, config.as_deref()),
    }
}
fn load_config(path: Option<&Path>) -> Result<ViewConfig> {
    match path {
        Some(path) => ViewConfig::load(path),
        None => Ok(ViewConfig::default()),
    }
}
fn load_viewer(record: &Path, config: Option<&Path>) -> Result<LeadsViewer> {
    let config = load_config(config)?;
    let record = JsonDirSource::load_file(record)
        .with_context(|| format!("failed to load record {}", record.display()))?;
    log::info!(
        "loaded {} leads at {} Hz",
        record.signal.leads().len(),
        record.signal.fs
    );
    Ok(LeadsViewer::new(record, config)?)
}
fn info(path: &Path) -> Result<()> {
    let record = JsonDirSource::load_file(path)
        .with_context(|| format!("failed to load record {}", path.display()))?;
    for line in record.summary_lines() {
        println!("{line}");
    }
    println!("Sampling rate: {} Hz", record.signal.fs);
    for lead in record.signal.leads() {
        println!(
            "  {:<6} {:>7} samples  {:>7.2} s",
            lead.name,
            lead.len(),
            lead.duration_seconds(record.signal.fs)
        );
    }
    Ok(())
}
fn render(
    record: &Path,
    out_dir: &Path,
    only: Option<&str>,
    width: Option<f64>,
    start: f64,
    config: Option<&Path>,
) -> Result<()> {
    let mut viewer = load_viewer(record, config)?;
    if let Some(name) = only {
        if viewer.record().signal.lead(name).is_none() {
            bail!("record has no lead named {name}");
        }
    }
    if let Some(width_px) = width {
        viewer.handle(ViewEvent::Resized { width_px });
    }
    viewer.handle(ViewEvent::Seek { start_sec: start });
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let style = PlotStyle::default();
    let mut written = 0;
    for panel in viewer.panels() {
        if only.is_some_and(|name| name != panel.lead) {
            continue;
        }
        match panel.outcome {
            RenderOutcome::Ready(scene) => {
                let Some(png) = paint(&scene, &panel.lead, &style) else {
                    continue;
                };
                let path = out_dir.join(format!("lead_{}.png", file_stem(&panel.lead)));
                fs::write(&path, png)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                log::debug!("wrote {}", path.display());
                written += 1;
            }
            RenderOutcome::Fallback(fallback) => log::warn!("{}", fallback.message()),
        }
    }
    log::info!(
        "rendered {written} lead(s) at {} px into {}",
        viewer.container_width(),
        out_dir.display()
    );
    Ok(())
}
fn full(record: &Path, lead: &str, out: &Path, config: Option<&Path>) -> Result<()> {
    let mut viewer = load_viewer(record, config)?;
    viewer.handle(ViewEvent::OpenModal {
        lead: lead.to_string(),
    });
    let Some(modal) = viewer.modal() else {
        bail!("record has no lead named {lead}");
    };
    match modal.content() {
        RenderOutcome::Ready(scene) => {
            let Some(png) = paint(scene, lead, &PlotStyle::default()) else {
                return Ok(());
            };
            fs::write(out, png).with_context(|| format!("failed to write {}", out.display()))?;
            log::info!(
                "wrote full trace of {lead} ({} px wide) to {}",
                modal.content_width(),
                out.display()
            );
        }
        RenderOutcome::Fallback(fallback) => log::warn!("{}", fallback.message()),
    }
    Ok(())
}
/// Encodes a scene, reporting painter failures (such as an oversized canvas)
/// the same way as any other per-lead fallback.
fn paint(scene: &Scene, lead: &str, style: &PlotStyle) -> Option<Vec<u8>> {
    match RenderOutcome::from_result(lead, render_scene_png(scene, style)) {
        RenderOutcome::Ready(png) => Some(png),
        RenderOutcome::Fallback(fallback) => {
            log::warn!("{}: {}", fallback.message(), fallback.error);
            None
        }
    }
}
/// Lead names like "aVR" or "V1" are safe; anything else is mapped to `_`.
fn file_stem(lead: &str) -> String {
    lead.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
