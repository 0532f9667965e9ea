use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use mbwind_engine::Sport;

#[derive(Debug, Parser)]
#[command(about = "Wind confidence for sailing and foiling sessions.")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch forecasts, tides and observations, then score the session.
    Report(ReportArgs),
    /// Score explicit conditions, without any network access.
    Score(ScoreArgs),
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Hour (0-23) to check. Defaults to the current hour.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,
    /// Day to check (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long, env = "MBWIND_SPORT", default_value_t = Sport::Laser)]
    pub sport: Sport,
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Sustained wind (kts)
    #[arg(long)]
    pub wind: Option<f64>,
    /// Wind direction (degrees); omit for calm/variable
    #[arg(long)]
    pub dir: Option<f64>,
    /// Gust speed (kts)
    #[arg(long)]
    pub gust: Option<f64>,
    /// Inland minus coastal temperature (°F)
    #[arg(long, allow_negative_numbers = true)]
    pub delta: f64,
    /// Marine layer suppression factor (0-1)
    #[arg(long, default_value_t = 0.0)]
    pub suppression: f64,
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: u32,
    #[arg(long, env = "MBWIND_SPORT", default_value_t = Sport::Laser)]
    pub sport: Sport,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}
