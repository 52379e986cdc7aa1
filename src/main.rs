//! Manual ROI (Kommandozeile).
//!
//! Spielt eine aufgezeichnete Klickfolge gegen ein Bild ab und speichert
//! Maske und optional Umriss als PNG.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use manual_roi::{
    mask_to_image, outline_to_image, AnnotationController, AnnotationOptions, CaptureEvent,
    GridSize, LoggingObserver, OutlineOutcome, ScriptedEvents,
};

/// Erzeugt eine ROI-Maske aus einer aufgezeichneten Klickfolge
#[derive(Parser, Debug)]
#[command(name = "manual-roi")]
#[command(about = "Manuelle ROI-Erfassung: Klickfolge -> Maske und Umriss", long_about = None)]
struct Args {
    /// Bilddatei (liefert die Zielauflösung)
    #[arg(short, long)]
    image: PathBuf,

    /// JSON-Datei mit Ereignissen, z.B. `[{"add_point": [0, 0]}, "finish"]`
    #[arg(short, long)]
    events: PathBuf,

    /// Optionen-Datei (Standard: manual_roi.toml neben der Binary)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ausgabe-Präfix (ohne Endung)
    #[arg(short, long, default_value = "roi")]
    output: String,

    /// Umriss zusätzlich speichern
    #[arg(long)]
    outline: bool,

    /// Arbeitsauflösung überschreiben (`native` oder maximale Kantenlänge)
    #[arg(short = 'w', long)]
    working_resolution: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Manual ROI v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(AnnotationOptions::config_path);
    let mut options = AnnotationOptions::load_from_file(&config_path)
        .with_context(|| format!("Optionen nicht lesbar: {}", config_path.display()))?;
    if let Some(resolution) = &args.working_resolution {
        options.working_resolution = resolution.clone();
    }
    options.save_outline |= args.outline;

    let target = GridSize::from_image_file(&args.image)
        .with_context(|| format!("Bild nicht lesbar: {}", args.image.display()))?;
    let controller = AnnotationController::new(&options, target)?;

    let events = load_events(&args.events)?;
    log::info!("{} Ereignisse geladen aus {}", events.len(), args.events.display());

    let mut source = ScriptedEvents::from(events);
    let Some(annotation) = controller.run(&mut source, &mut LoggingObserver)? else {
        log::warn!("Ereignisfolge endet ohne geschlossene Region, nichts gespeichert");
        return Ok(());
    };

    let mask_path = format!("{}_mask.png", args.output);
    mask_to_image(&annotation.mask, options.image_mode)
        .save(&mask_path)
        .with_context(|| format!("Maske nicht speicherbar: {}", mask_path))?;
    log::info!("Maske gespeichert: {}", mask_path);

    if let Some(centroid) = annotation.mask.centroid() {
        log::info!(
            "Fläche {} Pixel, Schwerpunkt ({:.1}, {:.1})",
            annotation.mask.area(),
            centroid.x,
            centroid.y
        );
    }

    match annotation.outline {
        OutlineOutcome::NotRequested => {}
        OutlineOutcome::Extracted(outline) => {
            let outline_path = format!("{}_outline.png", args.output);
            outline_to_image(&outline)
                .save(&outline_path)
                .with_context(|| format!("Umriss nicht speicherbar: {}", outline_path))?;
            log::info!("Umriss gespeichert: {} ({} Pixel)", outline_path, outline.len());
        }
        OutlineOutcome::Failed(e) => {
            return Err(e).context("Umriss angefordert, aber nicht berechenbar");
        }
    }

    Ok(())
}

/// Liest eine JSON-Ereignisfolge.
fn load_events(path: &std::path::Path) -> Result<Vec<CaptureEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Ereignisdatei nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Ereignisdatei fehlerhaft: {}", path.display()))
}
