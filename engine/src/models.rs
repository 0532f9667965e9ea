use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::thermal::marine_layer_suppression;

/// One forecast hour at one location. Speeds in knots, directions in
/// compass degrees (0 = N, clockwise), temperatures in Fahrenheit.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HourlySample {
    pub time: NaiveDateTime,
    pub temp_f: f64,
    pub wind_kts: Option<f64>,
    /// `None` means calm or variable.
    pub wind_dir: Option<f64>,
    pub gust_kts: Option<f64>,
    pub dewpoint_f: Option<f64>,
}

impl HourlySample {
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Marine layer suppression for this hour; no dew point, no suppression.
    pub fn marine_layer_suppression(&self) -> f64 {
        self.dewpoint_f
            .map(|dewpoint| marine_layer_suppression(self.temp_f, dewpoint))
            .unwrap_or(0.0)
    }
}

/// Chronological hourly samples for one location, at most one per hour.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ForecastSeries {
    samples: Vec<HourlySample>,
}

impl ForecastSeries {
    /// Sorts the samples and keeps only the first one for each (date, hour) slot.
    pub fn new(mut samples: Vec<HourlySample>) -> Self {
        samples.sort_by_key(|s| s.time);
        samples.dedup_by_key(|s| (s.date(), s.hour()));
        Self { samples }
    }

    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Sample at `hour`, optionally restricted to `date`. Falls back to the
    /// last sample of the series when nothing matches.
    pub fn at_hour(&self, hour: u32, date: Option<NaiveDate>) -> Option<&HourlySample> {
        self.samples
            .iter()
            .find(|s| s.hour() == hour && date.is_none_or(|d| s.date() == d))
            .or_else(|| {
                log::debug!("No sample at hour {}, falling back to last sample", hour);
                self.samples.last()
            })
    }
}

impl From<Vec<HourlySample>> for ForecastSeries {
    fn from(samples: Vec<HourlySample>) -> Self {
        Self::new(samples)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    pub fn sample(day: u32, hour: u32, wind_kts: Option<f64>) -> HourlySample {
        HourlySample {
            time: at(day, hour),
            temp_f: 68.0,
            wind_kts,
            wind_dir: Some(270.0),
            gust_kts: wind_kts.map(|w| w + 3.0),
            dewpoint_f: Some(58.0),
        }
    }
}
