use std::path::PathBuf;

/// Coalition formation CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "coalesce", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Rank majority coalitions by their share of the policy space
    Analyze(AnalyzeArgs),

    /// Render policy-space, density and ranking plots as SVG
    Plot(PlotArgs),
}

/// Inputs shared by every command.
#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /// Party table CSV with header id,lr,conlib,seats
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub parties: PathBuf,

    /// TOML config (step, bounds, majority, legislature_size)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Grid spacing, overrides the config file
    #[arg(long)]
    pub step: Option<f64>,

    /// Majority threshold in seats, overrides the config file
    #[arg(long)]
    pub majority: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Write the JSON report here
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,

    /// Write the ranked coalition table CSV here
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub csv: Option<PathBuf>,

    /// Write every grid point with per-party membership CSV here
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub points: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}
