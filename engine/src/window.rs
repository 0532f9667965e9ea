use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ForecastSeries;

/// First and last hour (inclusive) eligible for the best window.
pub const DAYTIME_START: u32 = 9;
pub const DAYTIME_END: u32 = 18;

/// Length of the displayed window after the best hour.
const WINDOW_HOURS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BestWindow {
    pub hour: u32,
    pub wind_kts: Option<f64>,
    pub wind_dir: Option<f64>,
}

impl BestWindow {
    /// `(start, end)` hours to display, capped at the end of daytime.
    pub fn display_interval(&self) -> (u32, u32) {
        (self.hour, (self.hour + WINDOW_HOURS).min(DAYTIME_END))
    }
}

/// Strongest daytime wind hour of the series. Ties go to the earliest hour.
///
/// When `date` is given only samples on that day are eligible. Falls back to
/// the first sample when no daytime hour has any wind, and returns `None` only
/// for an empty series.
pub fn find_best_window(series: &ForecastSeries, date: Option<NaiveDate>) -> Option<BestWindow> {
    let mut best_speed = 0.0;
    let mut best = None;

    for sample in series.samples() {
        if !(DAYTIME_START..=DAYTIME_END).contains(&sample.hour()) {
            continue;
        }
        if date.is_some_and(|d| sample.date() != d) {
            continue;
        }
        if let Some(speed) = sample.wind_kts {
            if speed > best_speed {
                best_speed = speed;
                best = Some(sample);
            }
        }
    }

    let sample = match best {
        Some(sample) => sample,
        None => {
            log::debug!("No daytime wind in series, using first sample");
            series.samples().first()?
        }
    };

    Some(BestWindow {
        hour: sample.hour(),
        wind_kts: sample.wind_kts,
        wind_dir: sample.wind_dir,
    })
}
