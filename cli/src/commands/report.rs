use crate::cli::ReportArgs;
use crate::config::config;
use crate::report::{render, Report};
use crate::sources::noaa::{self, classify_tide};
use crate::sources::open_meteo::{fetch_forecast, Location};
use crate::sources::http_client;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use mbwind_engine::{
    compute_confidence, compute_thermal_gradient, find_best_window, sport_tip, Conditions,
};
use std::fmt::Display;

/// Optional sources never fail the report.
fn optional<T, E: Display>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Skipping {}: {:#}", what, e);
            None
        }
    }
}

/// Wall clock at the spot, matching the forecast and tide station times.
fn spot_now(tz: Tz, utc: DateTime<Utc>) -> NaiveDateTime {
    utc.with_timezone(&tz).naive_local()
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse().map_err(|e| anyhow!("Invalid timezone {:?}: {}", name, e))
}

pub async fn exec(args: ReportArgs) -> Result<()> {
    let tz = parse_timezone(&config().timezone)?;
    let now = spot_now(tz, Utc::now());
    let hour = args.hour.unwrap_or_else(|| now.hour());
    let client = http_client()?;

    let (coastal, inland) = tokio::join!(
        fetch_forecast(&client, Location::Coastal, args.date),
        fetch_forecast(&client, Location::Inland, args.date),
    );
    let coastal = coastal.context("Error fetching coastal forecast")?;
    let inland = inland.context("Error fetching inland forecast")?;

    let coastal_now = coastal
        .at_hour(hour, args.date)
        .ok_or_else(|| anyhow!("Coastal forecast has no hourly data"))?;
    let inland_now = inland
        .at_hour(hour, args.date)
        .ok_or_else(|| anyhow!("Inland forecast has no hourly data"))?;

    let thermal = compute_thermal_gradient(coastal_now.temp_f, inland_now.temp_f);
    let conditions = Conditions {
        wind_kts: coastal_now.wind_kts,
        wind_dir: coastal_now.wind_dir,
        gust_kts: coastal_now.gust_kts,
        thermal_delta_f: thermal.delta_f,
        marine_layer_suppression: coastal_now.marine_layer_suppression(),
        hour,
    };
    let confidence = compute_confidence(&conditions, args.sport);

    let (level, predictions, observed, marine) = tokio::join!(
        noaa::fetch_tide_level(&client),
        noaa::fetch_tide_predictions(&client),
        noaa::fetch_wind_observation(&client),
        noaa::fetch_marine_forecast(&client),
    );
    let level = optional("tide level", level);
    let predictions = optional("tide predictions", predictions).unwrap_or_default();
    let observed_wind = optional("wind observation", observed).flatten();
    let marine_forecast = optional("marine forecast", marine).flatten();

    let tide = classify_tide(level.map(|l| l.water_level_ft), &predictions, now);

    let report = Report {
        spot: config().spot_name.clone(),
        sport: args.sport,
        hour,
        confidence,
        wind_kts: coastal_now.wind_kts,
        wind_dir: coastal_now.wind_dir,
        gust_kts: coastal_now.gust_kts,
        thermal,
        tide: tide.to_string(),
        best_window: find_best_window(&coastal, args.date),
        tip: sport_tip(coastal_now.wind_kts, coastal_now.gust_kts, args.sport).to_string(),
        observed_wind,
        marine_forecast,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!("{}", render(&report));
        println!();
    }
    Ok(())
}
