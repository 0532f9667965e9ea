//! Scoring and decision engine for Mission Bay wind sessions.
//!
//! Turns hourly forecast samples for a coastal and an inland location into a
//! 0-100 confidence score, a GO / MAYBE / NO-GO recommendation, the best
//! daytime window and a sport specific tip. Every function here is pure.

pub mod curve;
pub mod models;
pub mod score;
pub mod sport;
pub mod thermal;
pub mod tip;
pub mod window;

pub use models::{ForecastSeries, HourlySample};
pub use score::{
    compute_confidence, direction_name, Conditions, ConfidenceResult, Recommendation,
    ScoreBreakdown,
};
pub use sport::Sport;
pub use thermal::{
    compute_thermal_gradient, marine_layer_suppression, ThermalGradient, ThermalStrength,
};
pub use tip::sport_tip;
pub use window::{find_best_window, BestWindow};
