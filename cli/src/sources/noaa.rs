//! NOAA CO-OPS tides and observed wind, plus the NWS marine zone forecast.
//!
//! Everything here is optional in the report: callers log and drop failures.

use super::get_json;
use crate::config::config;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

const NOAA_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TideLevel {
    pub water_level_ft: f64,
    pub time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TideKind {
    High,
    Low,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TidePrediction {
    pub time: NaiveDateTime,
    pub height_ft: f64,
    pub kind: TideKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindObservation {
    pub speed_kts: Option<f64>,
    pub gust_kts: Option<f64>,
    /// Compass text as reported, e.g. "WNW".
    pub direction: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct WaterLevelEntry {
    t: String,
    v: String,
}

#[derive(Debug, Deserialize)]
struct WindEntry {
    t: String,
    #[serde(default)]
    s: String,
    #[serde(default)]
    g: String,
    #[serde(default)]
    dr: String,
}

#[derive(Debug, Deserialize)]
struct PredictionsResponse {
    #[serde(default)]
    predictions: Vec<PredictionEntry>,
}

#[derive(Debug, Deserialize)]
struct PredictionEntry {
    t: String,
    v: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct ZoneForecast {
    properties: ZoneProperties,
}

#[derive(Debug, Deserialize)]
struct ZoneProperties {
    #[serde(default)]
    periods: Vec<ZonePeriod>,
}

#[derive(Debug, Deserialize)]
struct ZonePeriod {
    #[serde(default, rename = "detailedForecast")]
    detailed_forecast: String,
}

/// NOAA sends numbers as strings, empty when the sensor has no reading.
fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

fn datagetter_query(product: &str, date: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("date", date.to_string()),
        ("station", config().tide_station.clone()),
        ("product", product.to_string()),
        ("units", "english".to_string()),
        ("time_zone", "lst_ldt".to_string()),
        ("format", "json".to_string()),
        ("application", "mbwind".to_string()),
    ];
    if product != "wind" {
        query.push(("datum", "MLLW".to_string()));
    }
    query
}

fn tide_level_from(response: DataResponse<WaterLevelEntry>) -> Result<TideLevel> {
    let entry = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No water level data"))?;
    let water_level_ft =
        parse_value(&entry.v).with_context(|| format!("Invalid water level {:?}", entry.v))?;
    Ok(TideLevel {
        water_level_ft,
        time: entry.t,
    })
}

fn predictions_from(response: PredictionsResponse) -> Vec<TidePrediction> {
    response
        .predictions
        .into_iter()
        .filter_map(|p| {
            let time = NaiveDateTime::parse_from_str(&p.t, NOAA_TIME_FORMAT).ok()?;
            let kind = if p.kind == "H" {
                TideKind::High
            } else {
                TideKind::Low
            };
            Some(TidePrediction {
                time,
                height_ft: parse_value(&p.v)?,
                kind,
            })
        })
        .collect()
}

fn observation_from(response: DataResponse<WindEntry>) -> Option<WindObservation> {
    let entry = response.data.into_iter().next()?;
    Some(WindObservation {
        speed_kts: parse_value(&entry.s),
        gust_kts: parse_value(&entry.g),
        direction: entry.dr,
        time: entry.t,
    })
}

pub async fn fetch_tide_level(client: &reqwest::Client) -> Result<TideLevel> {
    let query = datagetter_query("water_level", "latest");
    let response = get_json(client, &config().noaa_url, &query).await?;
    tide_level_from(response)
}

/// Today's high/low predictions.
pub async fn fetch_tide_predictions(client: &reqwest::Client) -> Result<Vec<TidePrediction>> {
    let mut query = datagetter_query("predictions", "today");
    query.push(("interval", "hilo".to_string()));
    let response = get_json(client, &config().noaa_url, &query).await?;
    Ok(predictions_from(response))
}

pub async fn fetch_wind_observation(client: &reqwest::Client) -> Result<Option<WindObservation>> {
    let query = datagetter_query("wind", "latest");
    let response = get_json(client, &config().noaa_url, &query).await?;
    Ok(observation_from(response))
}

/// First period of the NWS marine zone forecast.
pub async fn fetch_marine_forecast(client: &reqwest::Client) -> Result<Option<String>> {
    let url = format!(
        "{}/zones/forecast/{}/forecast",
        config().nws_url,
        config().marine_zone
    );
    let forecast: ZoneForecast = get_json(client, &url, &[]).await?;
    Ok(forecast
        .properties
        .periods
        .into_iter()
        .next()
        .map(|p| p.detailed_forecast)
        .filter(|text| !text.is_empty()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TideStage {
    Low,
    Mid,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TideState {
    Unknown,
    Known {
        stage: TideStage,
        next: Option<TideKind>,
    },
}

impl fmt::Display for TideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (stage, next) = match self {
            TideState::Unknown => return f.write_str("Unknown"),
            TideState::Known { stage, next } => (stage, next),
        };
        let stage = match stage {
            TideStage::Low => "Low",
            TideStage::Mid => "Mid",
            TideStage::High => "High",
        };
        match next {
            Some(TideKind::High) => write!(f, "{}, incoming", stage),
            Some(TideKind::Low) => write!(f, "{}, outgoing", stage),
            None => f.write_str(stage),
        }
    }
}

/// Current tide stage, with direction taken from the next upcoming turn.
pub fn classify_tide(
    water_level_ft: Option<f64>,
    predictions: &[TidePrediction],
    now: NaiveDateTime,
) -> TideState {
    let Some(level) = water_level_ft else {
        return TideState::Unknown;
    };
    let stage = if level < 1.0 {
        TideStage::Low
    } else if level > 4.0 {
        TideStage::High
    } else {
        TideStage::Mid
    };
    let next = predictions.iter().find(|p| p.time > now).map(|p| p.kind);
    TideState::Known { stage, next }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn predictions() -> Vec<TidePrediction> {
        vec![
            TidePrediction {
                time: at(4, 12),
                height_ft: 0.5,
                kind: TideKind::Low,
            },
            TidePrediction {
                time: at(10, 40),
                height_ft: 4.9,
                kind: TideKind::High,
            },
            TidePrediction {
                time: at(17, 5),
                height_ft: 1.1,
                kind: TideKind::Low,
            },
        ]
    }

    // =========================================================================
    // classify_tide
    // =========================================================================

    #[test]
    fn test_classify_tide_unknown() {
        let state = classify_tide(None, &predictions(), at(9, 0));
        assert_eq!(state, TideState::Unknown);
        assert_eq!(state.to_string(), "Unknown");
    }

    #[test]
    fn test_classify_tide_stages() {
        assert_eq!(classify_tide(Some(0.4), &[], at(9, 0)).to_string(), "Low");
        assert_eq!(classify_tide(Some(1.0), &[], at(9, 0)).to_string(), "Mid");
        assert_eq!(classify_tide(Some(4.0), &[], at(9, 0)).to_string(), "Mid");
        assert_eq!(classify_tide(Some(4.5), &[], at(9, 0)).to_string(), "High");
    }

    #[test]
    fn test_classify_tide_direction() {
        let preds = predictions();
        assert_eq!(classify_tide(Some(2.5), &preds, at(9, 0)).to_string(), "Mid, incoming");
        assert_eq!(classify_tide(Some(4.2), &preds, at(12, 0)).to_string(), "High, outgoing");
        // Past the last turn of the day
        assert_eq!(classify_tide(Some(1.5), &preds, at(20, 0)).to_string(), "Mid");
    }

    // =========================================================================
    // Response parsing
    // =========================================================================

    #[test]
    fn test_tide_level_from_response() {
        let body = r#"{"metadata": {"id": "9410170"}, "data": [
            {"t": "2024-06-01 12:06", "v": "3.215", "s": "0.010", "f": "0,0,0,0", "q": "p"}
        ]}"#;
        let level = tide_level_from(serde_json::from_str(body).unwrap()).unwrap();
        assert_eq!(level.water_level_ft, 3.215);
        assert_eq!(level.time, "2024-06-01 12:06");
    }

    #[test]
    fn test_tide_level_errors() {
        let empty = r#"{"error": {"message": "No data was found."}}"#;
        assert!(tide_level_from(serde_json::from_str(empty).unwrap()).is_err());

        let blank = r#"{"data": [{"t": "2024-06-01 12:06", "v": ""}]}"#;
        assert!(tide_level_from(serde_json::from_str(blank).unwrap()).is_err());
    }

    #[test]
    fn test_predictions_from_response() {
        let body = r#"{"predictions": [
            {"t": "2024-06-01 04:12", "v": "0.512", "type": "L"},
            {"t": "2024-06-01 10:40", "v": "4.901", "type": "H"},
            {"t": "not a time", "v": "1.0", "type": "L"}
        ]}"#;
        let preds = predictions_from(serde_json::from_str(body).unwrap());
        assert_eq!(preds.len(), 2);
        assert_eq!(preds[0].kind, TideKind::Low);
        assert_eq!(preds[1].kind, TideKind::High);
        assert_eq!(preds[1].time, at(10, 40));
        assert_eq!(preds[1].height_ft, 4.901);
    }

    #[test]
    fn test_observation_from_response() {
        let body = r#"{"data": [
            {"t": "2024-06-01 12:00", "s": "9.33", "d": "278.00", "dr": "W", "g": "", "f": "0,0"}
        ]}"#;
        let obs = observation_from(serde_json::from_str(body).unwrap()).unwrap();
        assert_eq!(obs.speed_kts, Some(9.33));
        assert_eq!(obs.gust_kts, None);
        assert_eq!(obs.direction, "W");
        assert_eq!(obs.time, "2024-06-01 12:00");

        assert!(observation_from(serde_json::from_str(r#"{"data": []}"#).unwrap()).is_none());
    }

    #[test]
    fn test_zone_forecast_parsing() {
        let body = r#"{"properties": {"periods": [
            {"number": 1, "name": "Today", "detailedForecast": "W wind 5 to 10 kt."}
        ]}}"#;
        let forecast: ZoneForecast = serde_json::from_str(body).unwrap();
        assert_eq!(forecast.properties.periods[0].detailed_forecast, "W wind 5 to 10 kt.");
    }

    #[test]
    fn test_datagetter_query() {
        let query = datagetter_query("wind", "latest");
        assert!(query.contains(&("product", "wind".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "datum"));

        let query = datagetter_query("water_level", "latest");
        assert!(query.contains(&("datum", "MLLW".to_string())));
    }
}
