mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::{Parser, Subcommand};

use pagecue_core::formatting::display::{file_name, format_seconds};
use pagecue_core::pipeline::playback_logger::LogPlaybackLogger;
use pagecue_core::pipeline::track_playback_use_case::TrackPlaybackUseCase;
use pagecue_core::playback::domain::playback_clock::PlaybackClock;
use pagecue_core::playback::domain::region_locator::{locate, sort_by_start};
use pagecue_core::playback::domain::segment_plan::plan_segments;
use pagecue_core::playback::domain::tick_timer::TickTimer;
use pagecue_core::playback::infrastructure::manual_clock::ManualClock;
use pagecue_core::playback::infrastructure::threaded_tick_timer::ThreadedTickTimer;
use pagecue_core::regions::domain::geometry::clamp_region;
use pagecue_core::regions::domain::region_factory::RegionFactory;
use pagecue_core::shared::file_filter::{AUDIO_FILTER, IMAGE_FILTER, PDF_FILTER};
use pagecue_core::shared::region::Region;

use settings::Settings;

/// Inspect page/audio annotation regions.
#[derive(Parser)]
#[command(name = "pagecue")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the region active at a playback time.
    Locate {
        /// JSON file holding an array of regions.
        regions: PathBuf,
        /// Playback time in seconds.
        time: f64,
    },

    /// Split a track into per-region segments.
    Plan {
        regions: PathBuf,
        /// Page image or PDF, in page order (repeatable).
        #[arg(long = "page", required = true)]
        pages: Vec<PathBuf>,
        /// Audio track the regions are timed against.
        #[arg(long)]
        audio: Option<PathBuf>,
        /// Track length in seconds.
        #[arg(long)]
        duration: f64,
    },

    /// Print a new region with default geometry as JSON.
    NewRegion {
        /// Zero-based page index.
        page: u32,
        /// Sequence number within the page.
        seq: u32,
        /// Display color (defaults to the configured region color).
        #[arg(long)]
        color: Option<String>,
    },

    /// Print the regions with their geometry clamped to the page.
    Clamp { regions: PathBuf },

    /// Simulate playback and log each change of active region.
    Watch {
        regions: PathBuf,
        /// Track length in seconds.
        #[arg(long)]
        duration: f64,
        /// Playback speed multiplier.
        #[arg(long)]
        speed: Option<f64>,
        /// Tick interval in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Show or update saved settings.
    Config {
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        interval_ms: Option<u64>,
        #[arg(long)]
        speed: Option<f64>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Command::Locate { regions, time } => run_locate(&regions, time),
        Command::Plan {
            regions,
            pages,
            audio,
            duration,
        } => run_plan(&regions, &pages, audio.as_deref(), duration),
        Command::NewRegion { page, seq, color } => {
            let color = color.unwrap_or(settings.region_color);
            let region = RegionFactory::default().create(page, seq, &color);
            println!("{}", serde_json::to_string_pretty(&region)?);
            Ok(())
        }
        Command::Clamp { regions } => {
            let clamped: Vec<Region> = load_regions(&regions)?.iter().map(clamp_region).collect();
            println!("{}", serde_json::to_string_pretty(&clamped)?);
            Ok(())
        }
        Command::Watch {
            regions,
            duration,
            speed,
            interval_ms,
        } => run_watch(
            &regions,
            duration,
            speed.unwrap_or(settings.speed),
            interval_ms.unwrap_or(settings.tick_interval_ms),
        ),
        Command::Config {
            color,
            interval_ms,
            speed,
        } => run_config(settings, color, interval_ms, speed),
    }
}

fn load_regions(path: &Path) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let regions: Vec<Region> = serde_json::from_str(&json)?;
    log::debug!("Loaded {} regions from {}", regions.len(), path.display());
    Ok(regions)
}

fn run_locate(path: &Path, time: f64) -> Result<(), Box<dyn std::error::Error>> {
    let mut regions = load_regions(path)?;
    sort_by_start(&mut regions);

    match locate(&regions, time) {
        Some(region) => println!(
            "{}  {}  page {}  starts {}",
            format_seconds(Some(time)),
            region.label,
            region.page_index + 1,
            format_seconds(region.start)
        ),
        None => println!("{}  no regions", format_seconds(Some(time))),
    }
    Ok(())
}

fn run_plan(
    path: &Path,
    pages: &[PathBuf],
    audio: Option<&Path>,
    duration: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(page) = pages
        .iter()
        .find(|p| !IMAGE_FILTER.matches(p) && !PDF_FILTER.matches(p))
    {
        return Err(format!("unsupported page file: {}", page.display()).into());
    }
    if let Some(audio) = audio {
        if !AUDIO_FILTER.matches(audio) {
            return Err(format!("unsupported audio file: {}", audio.display()).into());
        }
        println!("Audio: {}", file_name(&audio.to_string_lossy()));
    }

    let regions = load_regions(path)?;
    for segment in plan_segments(&regions, pages.len(), duration)? {
        let page = pages[segment.page_index as usize].to_string_lossy();
        println!(
            "{} - {}  ({:.3}s)  {}  region {}",
            format_seconds(Some(segment.start)),
            format_seconds(Some(segment.end)),
            segment.duration(),
            file_name(&page),
            segment.region_id
        );
    }
    Ok(())
}

fn run_watch(
    path: &Path,
    duration: f64,
    speed: f64,
    interval_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(duration.is_finite() && duration > 0.0) {
        return Err("--duration must be a positive number of seconds".into());
    }
    if !(speed.is_finite() && speed > 0.0) {
        return Err("--speed must be positive".into());
    }

    let regions = load_regions(path)?;
    let clock = Arc::new(ManualClock::new(0.0));
    let tracker = Arc::new(Mutex::new(TrackPlaybackUseCase::new(
        regions,
        clock.clone(),
        Box::new(LogPlaybackLogger::new()),
    )));

    let interval = Duration::from_millis(interval_ms.max(1));
    let step = interval.as_secs_f64() * speed;
    let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(1);

    let tick_clock = clock.clone();
    let tick_tracker = tracker.clone();
    let mut timer = ThreadedTickTimer::new();
    timer.start(
        Box::new(move || {
            let time = tick_clock.advance(step);
            if let Ok(mut t) = tick_tracker.lock() {
                if let Some(change) = t.tick() {
                    let label = change
                        .current
                        .as_deref()
                        .and_then(|id| t.regions().iter().find(|r| r.id == id))
                        .map_or("-", |r| r.label.as_str());
                    println!("{}  {label}", format_seconds(Some(change.time)));
                }
            }
            if time >= duration {
                let _ = done_tx.try_send(());
            }
        }),
        interval,
    );

    done_rx.recv()?;
    timer.stop();

    log::info!("Stopped at {}", format_seconds(Some(clock.current_time())));
    if let Ok(t) = tracker.lock() {
        t.finish();
    }
    Ok(())
}

fn run_config(
    mut settings: Settings,
    color: Option<String>,
    interval_ms: Option<u64>,
    speed: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = color.is_some() || interval_ms.is_some() || speed.is_some();
    if let Some(color) = color {
        settings.region_color = color;
    }
    if let Some(ms) = interval_ms {
        settings.tick_interval_ms = ms;
    }
    if let Some(speed) = speed {
        settings.speed = speed;
    }
    if changed {
        settings.save();
    }

    println!("{}", serde_json::to_string_pretty(&settings)?);
    println!(
        "Supported inputs: {}",
        [IMAGE_FILTER, PDF_FILTER, AUDIO_FILTER]
            .iter()
            .map(|f| format!("{} ({})", f.name, f.extensions.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    );
    Ok(())
}
