//! Open-Meteo hourly forecast source.

use super::get_json;
use crate::config::config;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use mbwind_engine::{ForecastSeries, HourlySample};
use serde::Deserialize;

const HOURLY_VARIABLES: &str =
    "temperature_2m,wind_speed_10m,wind_direction_10m,wind_gusts_10m,dewpoint_2m";

#[derive(Clone, Copy, Debug)]
pub enum Location {
    Coastal,
    Inland,
}

impl Location {
    fn coordinates(self) -> (f64, f64) {
        let c = config();
        match self {
            Location::Coastal => (c.coastal_lat, c.coastal_lon),
            Location::Inland => (c.inland_lat, c.inland_lon),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: Hourly,
}

/// Column-oriented hourly arrays, all indexed like `time`.
#[derive(Debug, Deserialize)]
struct Hourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    wind_speed_10m: Vec<Option<f64>>,
    wind_direction_10m: Vec<Option<f64>>,
    wind_gusts_10m: Vec<Option<f64>>,
    dewpoint_2m: Vec<Option<f64>>,
}

impl Hourly {
    fn into_series(self) -> ForecastSeries {
        let column = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

        let samples = self
            .time
            .iter()
            .enumerate()
            .filter_map(|(i, time)| {
                let time = match NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M") {
                    Ok(time) => time,
                    Err(e) => {
                        log::warn!("Skipping forecast row with bad time {:?}: {}", time, e);
                        return None;
                    }
                };
                let Some(temp_f) = column(&self.temperature_2m, i) else {
                    log::warn!("Skipping forecast row at {} without temperature", time);
                    return None;
                };
                Some(HourlySample {
                    time,
                    temp_f,
                    wind_kts: column(&self.wind_speed_10m, i),
                    wind_dir: column(&self.wind_direction_10m, i),
                    gust_kts: column(&self.wind_gusts_10m, i),
                    dewpoint_f: column(&self.dewpoint_2m, i),
                })
            })
            .collect();

        ForecastSeries::new(samples)
    }
}

/// Query parameters for one location; a target date replaces "today".
pub fn build_query(lat: f64, lon: f64, date: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("latitude", lat.to_string()),
        ("longitude", lon.to_string()),
        ("hourly", HOURLY_VARIABLES.to_string()),
        ("wind_speed_unit", "kn".to_string()),
        ("temperature_unit", "fahrenheit".to_string()),
        ("timezone", config().timezone.clone()),
    ];
    match date {
        Some(date) => {
            let day = date.format("%Y-%m-%d").to_string();
            query.push(("start_date", day.clone()));
            query.push(("end_date", day));
        }
        None => query.push(("forecast_days", "1".to_string())),
    }
    query
}

pub async fn fetch_forecast(
    client: &reqwest::Client,
    location: Location,
    date: Option<NaiveDate>,
) -> Result<ForecastSeries> {
    let (lat, lon) = location.coordinates();
    let query = build_query(lat, lon, date);
    let response: ForecastResponse = get_json(client, &config().open_meteo_url, &query).await?;
    let series = response.hourly.into_series();
    log::info!("{:?} forecast: {} hourly samples", location, series.len());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_forecast(body: &str) -> serde_json::Result<ForecastSeries> {
        serde_json::from_str::<ForecastResponse>(body).map(|r| r.hourly.into_series())
    }

    const BODY: &str = r#"{
        "latitude": 32.77,
        "longitude": -117.23,
        "hourly_units": {"time": "iso8601", "wind_speed_10m": "kn"},
        "hourly": {
            "time": ["2024-06-01T12:00", "2024-06-01T13:00", "2024-06-01T14:00", "garbage"],
            "temperature_2m": [68.5, 70.1, null, 71.0],
            "wind_speed_10m": [9.2, 11.4, 12.0, 3.0],
            "wind_direction_10m": [265, null, 280, 270],
            "wind_gusts_10m": [13.0, 15.5, null, 4.0],
            "dewpoint_2m": [60.1, 61.0, 61.2, null]
        }
    }"#;

    #[test]
    fn test_parse_forecast() {
        let series = parse_forecast(BODY).unwrap();
        // 14:00 has no temperature, the last row has no valid time
        assert_eq!(series.len(), 2);

        let first = &series.samples()[0];
        assert_eq!(first.hour(), 12);
        assert_eq!(first.temp_f, 68.5);
        assert_eq!(first.wind_kts, Some(9.2));
        assert_eq!(first.wind_dir, Some(265.0));
        assert_eq!(first.gust_kts, Some(13.0));
        assert_eq!(first.dewpoint_f, Some(60.1));

        let second = &series.samples()[1];
        assert_eq!(second.hour(), 13);
        assert_eq!(second.wind_dir, None);
    }

    #[test]
    fn test_parse_forecast_short_columns() {
        let body = r#"{"hourly": {
            "time": ["2024-06-01T09:00", "2024-06-01T10:00"],
            "temperature_2m": [64.0, 65.0],
            "wind_speed_10m": [5.0],
            "wind_direction_10m": [],
            "wind_gusts_10m": [],
            "dewpoint_2m": []
        }}"#;
        let series = parse_forecast(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[1].wind_kts, None);
    }

    #[test]
    fn test_parse_forecast_missing_hourly() {
        assert!(parse_forecast(r#"{"error": true, "reason": "bad"}"#).is_err());
    }

    #[test]
    fn test_build_query_today() {
        let query = build_query(32.77, -117.23, None);
        assert!(query.contains(&("latitude", "32.77".to_string())));
        assert!(query.contains(&("wind_speed_unit", "kn".to_string())));
        assert!(query.contains(&("forecast_days", "1".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "start_date"));
    }

    #[test]
    fn test_build_query_with_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let query = build_query(32.79, -116.96, Some(date));
        assert!(query.contains(&("start_date", "2024-07-04".to_string())));
        assert!(query.contains(&("end_date", "2024-07-04".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "forecast_days"));
    }
}
