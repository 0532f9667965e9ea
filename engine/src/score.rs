//! Wind confidence scoring.
//!
//! Five sub-scores (wind speed, direction, thermal, gust factor, time of day)
//! add up to at most 100 points; a marine layer penalty is then subtracted.

use crate::curve::Curve;
use crate::sport::Sport;
use serde::{Deserialize, Serialize};
use std::fmt;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Thermal delta (°F) -> 0..=20.
const THERMAL: Curve<u8> = Curve::new(
    &[(3.0, 0), (6.0, 4), (12.0, 8), (18.0, 13), (25.0, 17)],
    20,
);

/// Points removed for a fully suppressed marine layer.
pub const MARINE_LAYER_WEIGHT: f64 = 15.0;

pub const GO_THRESHOLD: u8 = 65;
pub const MAYBE_THRESHOLD: u8 = 40;

/// Compass point name (16-wind rose) for a direction in degrees.
pub fn direction_name(degrees: f64) -> &'static str {
    let idx = (degrees / 22.5).round_ties_even().rem_euclid(16.0) as usize;
    COMPASS[idx % 16]
}

/// Wind speed sub-score, 0..=30.
pub fn score_wind_speed(kts: Option<f64>, sport: Sport) -> u8 {
    match kts {
        Some(kts) if kts >= 3.0 => sport.wind_curve().eval(kts),
        _ => 0,
    }
}

/// Direction sub-score, 2..=20. Bands overlap at their edges and are checked
/// from most to least favorable.
pub fn score_direction(degrees: Option<f64>) -> u8 {
    let Some(d) = degrees else {
        return 5;
    };
    if (240.0..=310.0).contains(&d) {
        20 // W/WNW thermal
    } else if (220.0..=330.0).contains(&d) {
        15
    } else if (180.0..=220.0).contains(&d) {
        10
    } else if d >= 330.0 || d <= 30.0 {
        5
    } else {
        2 // offshore / Santa Ana
    }
}

/// Thermal gradient sub-score, 0..=20.
pub fn score_thermal(delta_f: f64) -> u8 {
    THERMAL.eval(delta_f)
}

/// Gust factor sub-score, 0..=15. A missing gust reading counts as steady wind.
pub fn score_gust_factor(wind_kts: Option<f64>, gust_kts: Option<f64>, sport: Sport) -> u8 {
    let wind = match wind_kts {
        Some(w) if w >= 1.0 => w,
        _ => return 0,
    };
    let ratio = gust_kts.unwrap_or(wind) / wind;
    sport.gust_curve().eval(ratio)
}

/// Time of day sub-score, 0..=15. Thermal fill peaks 11am-3pm.
pub fn score_time_of_day(hour: u32) -> u8 {
    match hour {
        11..=15 => 15,
        10..=16 => 12,
        9..=17 => 8,
        _ => 3,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Recommendation {
    #[serde(rename = "NO-GO")]
    NoGo,
    #[serde(rename = "MAYBE")]
    Maybe,
    #[serde(rename = "GO")]
    Go,
}

impl Recommendation {
    pub fn from_score(score: u8) -> Self {
        if score >= GO_THRESHOLD {
            Recommendation::Go
        } else if score >= MAYBE_THRESHOLD {
            Recommendation::Maybe
        } else {
            Recommendation::NoGo
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Go => f.write_str("GO"),
            Recommendation::Maybe => f.write_str("MAYBE"),
            Recommendation::NoGo => f.write_str("NO-GO"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    pub wind_speed: u8,
    pub direction: u8,
    pub thermal: u8,
    pub gust_factor: u8,
    pub time_of_day: u8,
    /// Rounded to 0.1 point.
    pub marine_layer_penalty: f64,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> u32 {
        [
            self.wind_speed,
            self.direction,
            self.thermal,
            self.gust_factor,
            self.time_of_day,
        ]
        .iter()
        .map(|&s| s as u32)
        .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ConfidenceResult {
    pub score: u8,
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
}

/// Raw per-hour inputs to [`compute_confidence`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Conditions {
    pub wind_kts: Option<f64>,
    pub wind_dir: Option<f64>,
    pub gust_kts: Option<f64>,
    pub thermal_delta_f: f64,
    pub marine_layer_suppression: f64,
    pub hour: u32,
}

pub fn compute_confidence(conditions: &Conditions, sport: Sport) -> ConfidenceResult {
    let mut breakdown = ScoreBreakdown {
        wind_speed: score_wind_speed(conditions.wind_kts, sport),
        direction: score_direction(conditions.wind_dir),
        thermal: score_thermal(conditions.thermal_delta_f),
        gust_factor: score_gust_factor(conditions.wind_kts, conditions.gust_kts, sport),
        time_of_day: score_time_of_day(conditions.hour),
        marine_layer_penalty: 0.0,
    };

    let penalty = conditions.marine_layer_suppression * MARINE_LAYER_WEIGHT;
    let score = (breakdown.raw_total() as f64 - penalty)
        .round_ties_even()
        .clamp(0.0, 100.0) as u8;
    breakdown.marine_layer_penalty = (penalty * 10.0).round() / 10.0;

    let recommendation = Recommendation::from_score(score);
    log::debug!(
        "Confidence for {}: {:?} -> {} ({})",
        sport,
        breakdown,
        score,
        recommendation
    );

    ConfidenceResult {
        score,
        recommendation,
        breakdown,
    }
}
