use mbwind_engine::{direction_name, BestWindow, ConfidenceResult, Sport, ThermalGradient};
use serde::Serialize;

use crate::sources::noaa::WindObservation;

const MARINE_TEXT_LIMIT: usize = 200;

/// Everything the report shows, in render order.
#[derive(Debug, Serialize)]
pub struct Report {
    pub spot: String,
    pub sport: Sport,
    pub hour: u32,
    pub confidence: ConfidenceResult,
    pub wind_kts: Option<f64>,
    pub wind_dir: Option<f64>,
    pub gust_kts: Option<f64>,
    pub thermal: ThermalGradient,
    pub tide: String,
    pub best_window: Option<BestWindow>,
    pub tip: String,
    pub observed_wind: Option<WindObservation>,
    pub marine_forecast: Option<String>,
}

/// 12-hour clock label, e.g. `1pm`.
pub fn format_hour(hour: u32) -> String {
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour >= 12 { "pm" } else { "am" };
    format!("{}{}", h12, suffix)
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

pub fn render_breakdown(result: &ConfidenceResult) -> String {
    let b = &result.breakdown;
    format!(
        "Breakdown:   wind {}/30, direction {}/20, thermal {}/20, gusts {}/15, time {}/15, marine layer -{:.1}",
        b.wind_speed, b.direction, b.thermal, b.gust_factor, b.time_of_day, b.marine_layer_penalty
    )
}

pub fn render(report: &Report) -> String {
    let c = &report.confidence;
    let mut lines = vec![
        format!(
            "{} Wind Confidence: {}/100 - {}",
            report.spot, c.score, c.recommendation
        ),
        String::new(),
    ];

    let dir = report.wind_dir.map(direction_name).unwrap_or("?");
    let gusts = match report.gust_kts {
        Some(g) if g != 0.0 => format!(" (gusts {:.0})", g),
        _ => String::new(),
    };
    lines.push(format!(
        "Wind:        {:.0} kts {}{}",
        report.wind_kts.unwrap_or(0.0),
        dir,
        gusts
    ));

    if let Some(obs) = &report.observed_wind {
        let speed = obs
            .speed_kts
            .map(|s| format!("{}", s))
            .unwrap_or_else(|| "?".to_string());
        lines.push(format!(
            "Observed:    {} kts {} (NOAA {})",
            speed, obs.direction, obs.time
        ));
    }

    let t = &report.thermal;
    lines.push(format!(
        "Thermal:     {} (coastal {:.0}°F, inland {:.0}°F, Δ{:.0}°F)",
        t.strength, t.coastal_temp_f, t.inland_temp_f, t.delta_f
    ));
    lines.push(format!("Tide:        {}", report.tide));

    if let Some(window) = &report.best_window {
        let (start, end) = window.display_interval();
        lines.push(format!(
            "Best window: {} - {}",
            format_hour(start),
            format_hour(end)
        ));
    }

    lines.push(String::new());
    lines.push(format!("{} tip: {}", report.sport.label(), report.tip));
    lines.push(String::new());
    lines.push(render_breakdown(c));

    if let Some(text) = &report.marine_forecast {
        lines.push(String::new());
        lines.push(format!(
            "Marine forecast: {}",
            truncate(text, MARINE_TEXT_LIMIT)
        ));
    }

    lines.join("\n")
}
