// src/bin/profile_dump.rs - synthesize one move and dump sampled kinematics
//
// Developer utility for eyeballing profiles: loads a TOML axis configuration,
// plans a single move, and prints CSV rows of time/acceleration/velocity/
// position suitable for plotting.
use clap::Parser;
use scurve_core::{RampMode, ScurvePlanner, acceleration_at, load_config, position_at, velocity_at};

#[derive(Parser, Debug)]
#[command(about = "Synthesize a jerk-limited profile and print sampled kinematics as CSV")]
struct Args {
    /// Path to the axis configuration TOML
    #[arg(long, default_value = "axes.toml")]
    config: String,

    /// Axis to plan for
    #[arg(long, default_value = "x")]
    axis: String,

    /// Move distance (mm)
    #[arg(long, default_value_t = 100.0)]
    distance: f64,

    /// Entry velocity (mm/min)
    #[arg(long, default_value_t = 0.0)]
    entry: f64,

    /// Exit velocity (mm/min)
    #[arg(long, default_value_t = 0.0)]
    exit: f64,

    /// Sample interval (s)
    #[arg(long, default_value_t = 0.002)]
    step: f64,

    /// Use the cheap reduced-shape path where it applies
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = load_config(&args.config)?;
    let limits = config
        .axes
        .get(&args.axis)
        .copied()
        .ok_or_else(|| format!("no axis '{}' in {}", args.axis, args.config))?;

    if limits.ramp_mode() == RampMode::Trapezoidal {
        tracing::warn!("axis '{}' has jerk disabled; synthesis will refuse", args.axis);
    }

    let planner = ScurvePlanner::new(limits, config.tuning);
    if !planner.should_use_s_curve(args.distance) {
        tracing::info!("usage heuristic would skip S-curve for this move; dumping it anyway");
    }

    let profile = if args.fast {
        planner.compute_profile_fast(args.distance, args.entry, args.exit)
    } else {
        planner.compute_profile(args.distance, args.entry, args.exit)
    };
    if !profile.valid {
        return Err("synthesis failed; this move needs the trapezoidal fallback".into());
    }

    tracing::info!(
        shape = ?profile.shape,
        total_time = profile.total_time,
        cruise_velocity = profile.cruise_velocity,
        "profile ready"
    );

    println!("t,acceleration,velocity,position");
    let mut t = 0.0;
    while t <= profile.total_time {
        println!(
            "{:.4},{:.4},{:.4},{:.5}",
            t,
            acceleration_at(&profile, t),
            velocity_at(&profile, t, args.entry),
            position_at(&profile, t, args.entry)
        );
        t += args.step;
    }
    // Land exactly on the terminal state
    println!(
        "{:.4},{:.4},{:.4},{:.5}",
        profile.total_time,
        acceleration_at(&profile, profile.total_time),
        velocity_at(&profile, profile.total_time, args.entry),
        position_at(&profile, profile.total_time, args.entry)
    );

    Ok(())
}
