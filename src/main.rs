//! Coursepilot - screen-driven video lesson automation.
//!
//! Watches a configured video region for playback to go static, tells a
//! finished lesson apart from a quiz popup via a close-button snapshot, and
//! drives a human-like mouse to advance through lessons unattended.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coursepilot_automaton::{AutomationConfig, LessonAutomaton};
use coursepilot_config::RegionLoader;
use coursepilot_core::CancelToken;
use coursepilot_input::{EnigoPointer, HumanMotion, StdPacer};
use coursepilot_vision::ScreenSampler;

/// Coursepilot CLI.
#[derive(Parser)]
#[command(name = "coursepilot")]
#[command(about = "Screen-driven video lesson automation")]
#[command(version)]
struct Cli {
    /// Region file written by the interactive region selector
    #[arg(short, long, default_value = "rois.json")]
    regions: PathBuf,

    /// Base seconds between video-region polls
    #[arg(long, default_value_t = 2.0)]
    poll_interval: f64,

    /// Frame-difference MSE below which a poll counts as static
    #[arg(long, default_value_t = 1.0)]
    static_threshold: f64,

    /// Consecutive static polls required before checking for completion
    #[arg(long, default_value_t = 3)]
    static_polls: u32,

    /// Close-region MSE above which the video is judged finished
    #[arg(long, default_value_t = 100.0)]
    close_threshold: f64,

    /// Fix the randomness seed (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

/// Get the .coursepilot directory path.
fn coursepilot_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".coursepilot"))
        .unwrap_or_else(|| PathBuf::from(".coursepilot"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.coursepilot/debug/ with daily rotation.
fn init_tracing() -> anyhow::Result<()> {
    let log_dir = coursepilot_dir().join("debug");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("coursepilot")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer guard alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(_guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let regions = RegionLoader::load(&cli.regions)?;
    info!("loaded screen regions from {}", cli.regions.display());

    let config = AutomationConfig {
        poll_interval: Duration::from_secs_f64(cli.poll_interval),
        static_frame_threshold: cli.static_threshold,
        required_static_polls: cli.static_polls,
        close_change_threshold: cli.close_threshold,
    };

    // Two independent streams: one for motion synthesis, one for loop timing.
    let (motion_rng, loop_rng) = match cli.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
    };

    let cancel = CancelToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping at the next loop boundary");
            signal_cancel.cancel();
        }
    });

    // The loop is deliberately blocking and sequential; run it off the
    // async runtime so signal handling stays responsive.
    let summary = tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
        let sampler = ScreenSampler::new()?;
        let pointer = EnigoPointer::new()?;
        let motion = HumanMotion::new(pointer, motion_rng, Box::new(StdPacer));
        let mut automaton = LessonAutomaton::new(
            sampler,
            motion,
            loop_rng,
            Box::new(StdPacer),
            config,
            regions,
            cancel,
        )?;
        Ok(automaton.run())
    })
    .await??;

    info!(
        "shut down cleanly; {} lesson(s) completed this run",
        summary.lessons_completed
    );
    Ok(())
}
