use clap::Parser;
use instant::Instant;

use snow_core::constants::{CHORUS_DURATION_SEC, CHORUS_STARTS_SEC, DEFAULT_SEED};
use snow_core::{
    ActivationBridge, ChorusWindows, DrawSurface, EngineConfig, ManualScheduler, PlaybackEvent,
    SnowEngine,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "snow-native", version)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_SEED, help = "RNG seed for flake spawning")]
    seed: u64,

    #[arg(long, default_value_t = 60.0, help = "Simulated frames per second")]
    fps: f64,

    #[arg(long, default_value_t = 0.0, help = "Playback position to start from (s)")]
    start: f64,

    #[arg(long, default_value_t = 240.0, help = "Playback position to stop at (s)")]
    end: f64,

    #[arg(
        long = "chorus-start",
        help = "Chorus start time in seconds; repeat for several (default: bundled track)"
    )]
    chorus_start: Vec<f64>,

    #[arg(long, default_value_t = CHORUS_DURATION_SEC, help = "Length of each chorus (s)")]
    chorus_duration: f64,

    #[arg(long, help = "Pause playback at this position (s)")]
    pause_at: Option<f64>,

    #[arg(long, default_value_t = 1280.0, help = "Canvas CSS width")]
    width: f64,

    #[arg(long, default_value_t = 720.0, help = "Canvas CSS height")]
    height: f64,

    #[arg(long, default_value_t = 1.0, help = "Device pixel ratio")]
    dpr: f64,
}

/// Surface that draws nothing and counts everything.
#[derive(Debug, Default)]
struct CountingSurface {
    css: (f64, f64),
    dpr: f64,
    backing: (u32, u32),
    resizes: u64,
    clears: u64,
    circles: u64,
    frame_circles: usize,
    frame_alpha: f64,
    active: bool,
}

impl CountingSurface {
    fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            css: (width, height),
            dpr,
            ..Self::default()
        }
    }

    fn mean_alpha(&self) -> f64 {
        if self.frame_circles == 0 {
            0.0
        } else {
            self.frame_alpha / self.frame_circles as f64
        }
    }
}

impl DrawSurface for CountingSurface {
    fn css_size(&self) -> (f64, f64) {
        self.css
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.frame_circles = 0;
        self.frame_alpha = 0.0;
    }

    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, alpha: f32) {
        self.circles += 1;
        self.frame_circles += 1;
        self.frame_alpha += alpha as f64;
    }

    fn mark_active(&mut self, active: bool) {
        self.active = active;
    }
}

type SimEngine = SnowEngine<CountingSurface, ManualScheduler>;

#[derive(Debug, Default)]
struct Summary {
    frames: u64,
    ticks: u64,
    spawned: u64,
    culled: u64,
    peak_particles: usize,
    active_secs: f64,
    drain_ticks: u64,
}

/// Fire the outstanding frame, if the engine asked for one.
fn pump(engine: &mut SimEngine, ts_ms: f64, summary: &mut Summary) -> bool {
    if engine.scheduler_mut().take_pending().is_none() {
        return false;
    }
    let report = engine.tick(ts_ms);
    if report.ran {
        summary.ticks += 1;
        summary.spawned += report.spawned as u64;
        summary.culled += report.culled as u64;
        summary.peak_particles = summary.peak_particles.max(engine.particle_count());
    }
    true
}

fn log_second(t: f64, engine: &SimEngine) {
    log::info!(
        "t={:>7.2}s target={} intensity={:.3} particles={:>3} drawn={:>3} alpha={:.3} loop={:?}",
        t,
        engine.is_active() as u8,
        engine.intensity(),
        engine.particle_count(),
        engine.surface().frame_circles,
        engine.surface().mean_alpha(),
        engine.state(),
    );
}

fn chorus_windows(args: &Args) -> anyhow::Result<ChorusWindows> {
    let starts: &[f64] = if args.chorus_start.is_empty() {
        &CHORUS_STARTS_SEC
    } else {
        &args.chorus_start
    };
    Ok(ChorusWindows::from_starts(starts, args.chorus_duration)?)
}

fn run(args: Args) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be positive (got {})", args.fps);
    }
    if !(args.start.is_finite() && args.end.is_finite()) || args.end < args.start {
        anyhow::bail!("need finite --start <= --end (got {}..{})", args.start, args.end);
    }

    let windows = chorus_windows(&args)?;
    for w in windows.iter() {
        log::info!("chorus window {:.1}s..{:.1}s", w.start(), w.end());
    }
    let bridge = ActivationBridge::new(windows);
    let config = EngineConfig::default().with_seed(args.seed);
    let surface = CountingSurface::new(args.width, args.height, args.dpr);
    let mut engine = SnowEngine::new(config, surface, ManualScheduler::new())?;

    let frame_ms = 1000.0 / args.fps;
    let frames = ((args.end - args.start) * args.fps).ceil() as u64;
    let mut summary = Summary::default();
    let mut paused = false;
    let mut last_logged_sec: Option<i64> = None;
    let wall = Instant::now();

    bridge.handle(PlaybackEvent::Started, &mut engine);
    for i in 0..=frames {
        let t = (args.start + i as f64 / args.fps).min(args.end);
        let ts_ms = i as f64 * frame_ms;

        if !paused {
            if args.pause_at.is_some_and(|p| t >= p) {
                log::info!("pause at t={:.2}s", t);
                bridge.handle(PlaybackEvent::Paused, &mut engine);
                paused = true;
            } else {
                bridge.handle(PlaybackEvent::TimeAdvanced(t), &mut engine);
            }
        }

        pump(&mut engine, ts_ms, &mut summary);
        summary.frames += 1;
        if engine.is_active() {
            summary.active_secs += 1.0 / args.fps;
        }

        let sec = t.floor() as i64;
        if last_logged_sec != Some(sec) {
            last_logged_sec = Some(sec);
            log_second(t, &engine);
        }
    }

    if !paused {
        bridge.handle(PlaybackEvent::Ended, &mut engine);
    }

    // let flakes fall out after the clock stops
    let mut ts_ms = (frames + 1) as f64 * frame_ms;
    let drain_limit = (args.fps * 60.0).ceil() as u64;
    while summary.drain_ticks < drain_limit && pump(&mut engine, ts_ms, &mut summary) {
        summary.drain_ticks += 1;
        ts_ms += frame_ms;
    }
    if engine.is_running() {
        log::warn!("engine still running after {} drain frames", summary.drain_ticks);
    }

    let surface = engine.surface();
    log::info!(
        "done: frames={} ticks={} drain={} spawned={} culled={} peak={} active={:.1}s draws={} clears={} resizes={} left={} wall={:?}",
        summary.frames,
        summary.ticks,
        summary.drain_ticks,
        summary.spawned,
        summary.culled,
        summary.peak_particles,
        summary.active_secs,
        surface.circles,
        surface.clears,
        surface.resizes,
        engine.particle_count(),
        wall.elapsed(),
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    run(Args::parse())
}
