mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use report::{render_cables, render_summary};
use scenario::Scenario;
use ziplinex::constants::DEFAULT_TARGET_SAG_RATIO;
use ziplinex::tension::round_to_rigging_increment;
use ziplinex::{calculate_optimal_tension, design_report, CableSpec, RiderPose};

#[derive(Parser)]
#[command(name = "ziplinex")]
#[command(about = "Zipline sag, anchor load and rider speed calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the cable profile, anchor reactions and rider speed
    Curve(CurveArgs),
    /// Recommend a pre-tension for a target sag
    OptimalTension {
        /// Horizontal span in metres
        #[arg(long)]
        span: f64,
        /// Cable mass per metre in kg/m
        #[arg(long)]
        rope_mass: f64,
        /// Target sag under a 120 kg midspan rider, in percent of the span
        #[arg(long, default_value_t = DEFAULT_TARGET_SAG_RATIO * 100.0)]
        target_sag_percent: f64,
    },
    /// List the built-in cable catalog
    Cables,
}

#[derive(Clone, Copy, ValueEnum)]
enum Pose {
    Superman,
    Sitting,
    Star,
}

impl From<Pose> for RiderPose {
    fn from(value: Pose) -> Self {
        match value {
            Pose::Superman => RiderPose::Superman,
            Pose::Sitting => RiderPose::Sitting,
            Pose::Star => RiderPose::Star,
        }
    }
}

/// Flags of the `curve` command; each one overrides the scenario file.
#[derive(Args)]
struct CurveArgs {
    /// JSON scenario file providing the base configuration
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Horizontal span in metres
    #[arg(long)]
    span: Option<f64>,
    /// Start anchor elevation in metres
    #[arg(long)]
    start_height: Option<f64>,
    /// Drop between anchors in percent of the span
    #[arg(long, conflicts_with = "end_height")]
    drop_percent: Option<f64>,
    /// End anchor elevation in metres
    #[arg(long)]
    end_height: Option<f64>,
    /// Catalog cable name
    #[arg(long)]
    cable: Option<String>,
    /// Cable mass per metre in kg/m
    #[arg(long)]
    rope_mass: Option<f64>,
    /// Pre-tension in kg-force
    #[arg(long, conflicts_with = "auto_tension")]
    tension: Option<f64>,
    /// Derive the pre-tension from the target sag
    #[arg(long)]
    auto_tension: bool,
    /// Target sag for auto tension, in percent of the span
    #[arg(long)]
    target_sag_percent: Option<f64>,
    /// Rider weight in kg
    #[arg(long)]
    rider_weight: Option<f64>,
    /// Trolley and carabiner weight in kg
    #[arg(long)]
    equipment_weight: Option<f64>,
    /// Rider position as a fraction of the span
    #[arg(long)]
    load_position_ratio: Option<f64>,
    /// Rider body position
    #[arg(long, value_enum)]
    pose: Option<Pose>,
    /// Drag area in m², overriding the pose
    #[arg(long)]
    drag_area: Option<f64>,
    /// Air temperature in °C
    #[arg(long)]
    temperature: Option<f64>,
    /// Number of sample intervals along the span
    #[arg(long)]
    points: Option<usize>,
    /// Required clearance below the rider's feet in metres
    #[arg(long)]
    clearance_margin: Option<f64>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

impl CurveArgs {
    /// Load the base scenario and apply the flags on top of it.
    fn scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => Scenario::from_file(path)?,
            None => Scenario::default(),
        };
        if let Some(span) = self.span {
            scenario.span = span;
        }
        if let Some(start_height) = self.start_height {
            scenario.start_height = start_height;
        }
        if let Some(drop_percent) = self.drop_percent {
            scenario.drop_percent = drop_percent;
            scenario.end_height = None;
        }
        if self.end_height.is_some() {
            scenario.end_height = self.end_height;
        }
        if self.cable.is_some() {
            scenario.cable = self.cable.clone();
        }
        if self.rope_mass.is_some() {
            scenario.rope_mass_per_meter = self.rope_mass;
        }
        if let Some(tension) = self.tension {
            scenario.tension_kg = tension;
            scenario.auto_tension = false;
        }
        if self.auto_tension {
            scenario.auto_tension = true;
        }
        if let Some(target_sag_percent) = self.target_sag_percent {
            scenario.target_sag_percent = target_sag_percent;
        }
        if let Some(rider_weight) = self.rider_weight {
            scenario.rider_weight = rider_weight;
        }
        if let Some(equipment_weight) = self.equipment_weight {
            scenario.equipment_weight = equipment_weight;
        }
        if let Some(load_position_ratio) = self.load_position_ratio {
            scenario.load_position_ratio = load_position_ratio;
        }
        if let Some(pose) = self.pose {
            scenario.pose = pose.into();
            scenario.drag_area = None;
        }
        if self.drag_area.is_some() {
            scenario.drag_area = self.drag_area;
        }
        if let Some(temperature) = self.temperature {
            scenario.temperature = temperature;
        }
        if let Some(points) = self.points {
            scenario.points = points;
        }
        if let Some(clearance_margin) = self.clearance_margin {
            scenario.clearance_margin = clearance_margin;
        }
        Ok(scenario)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Curve(args) => cmd_curve(&args),
        Commands::OptimalTension {
            span,
            rope_mass,
            target_sag_percent,
        } => cmd_optimal_tension(span, rope_mass, target_sag_percent),
        Commands::Cables => {
            print!("{}", render_cables(&CableSpec::catalog()));
            Ok(())
        }
    }
}

fn cmd_curve(args: &CurveArgs) -> Result<()> {
    let resolved = args.scenario()?.resolve()?;
    let report = design_report(
        &resolved.parameters,
        resolved.cable.as_ref(),
        resolved.clearance_margin,
    )
    .context("solving zipline")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summary(&report, resolved.cable.as_ref()));
    }
    Ok(())
}

fn cmd_optimal_tension(span: f64, rope_mass: f64, target_sag_percent: f64) -> Result<()> {
    let tension_kg = calculate_optimal_tension(span, rope_mass, target_sag_percent / 100.0)
        .context("computing optimal tension")?;
    println!(
        "Optimal tension for {target_sag_percent}% sag: {tension_kg:.1} kg (rig at {:.0} kg)",
        round_to_rigging_increment(tension_kg)
    );
    Ok(())
}
