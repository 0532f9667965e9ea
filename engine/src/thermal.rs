//! Sea-breeze drivers: inland/coastal temperature gradient and marine layer.

use crate::curve::Curve;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ThermalStrength {
    None,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl fmt::Display for ThermalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThermalStrength::None => "None",
            ThermalStrength::Weak => "Weak",
            ThermalStrength::Moderate => "Moderate",
            ThermalStrength::Strong => "Strong",
            ThermalStrength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

const STRENGTH: Curve<ThermalStrength> = Curve::new(
    &[
        (6.0, ThermalStrength::None),
        (12.0, ThermalStrength::Weak),
        (18.0, ThermalStrength::Moderate),
        (25.0, ThermalStrength::Strong),
    ],
    ThermalStrength::VeryStrong,
);

/// Temperature/dew point spread -> suppression factor. A small spread means a
/// thick marine layer.
const MARINE_LAYER: Curve<f64> = Curve::new(&[(3.0, 0.7), (6.0, 0.3), (10.0, 0.1)], 0.0);

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThermalGradient {
    pub coastal_temp_f: f64,
    pub inland_temp_f: f64,
    /// Inland minus coastal, rounded to 0.1 °F.
    pub delta_f: f64,
    pub strength: ThermalStrength,
}

pub fn compute_thermal_gradient(coastal_temp_f: f64, inland_temp_f: f64) -> ThermalGradient {
    let delta = inland_temp_f - coastal_temp_f;
    ThermalGradient {
        coastal_temp_f,
        inland_temp_f,
        delta_f: (delta * 10.0).round() / 10.0,
        strength: STRENGTH.eval(delta),
    }
}

/// Marine layer suppression factor in [0, 1], 1 being full suppression.
pub fn marine_layer_suppression(temp_f: f64, dewpoint_f: f64) -> f64 {
    MARINE_LAYER.eval(temp_f - dewpoint_f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_gradient_strength_bands() {
        let cases = [
            (0.0, ThermalStrength::None),
            (5.9, ThermalStrength::None),
            (6.0, ThermalStrength::Weak),
            (11.99, ThermalStrength::Weak),
            (12.0, ThermalStrength::Moderate),
            (18.0, ThermalStrength::Strong),
            (24.99, ThermalStrength::Strong),
            (25.0, ThermalStrength::VeryStrong),
            (-8.0, ThermalStrength::None),
        ];
        for (delta, expected) in cases {
            let gradient = compute_thermal_gradient(60.0, 60.0 + delta);
            assert_eq!(gradient.strength, expected, "delta {}", delta);
        }
    }

    #[test]
    fn test_thermal_gradient_delta_rounded() {
        let gradient = compute_thermal_gradient(64.0, 82.66);
        assert_eq!(gradient.delta_f, 18.7);
        assert_eq!(gradient.coastal_temp_f, 64.0);
        assert_eq!(gradient.inland_temp_f, 82.66);
    }

    #[test]
    fn test_thermal_gradient_negative_delta() {
        let gradient = compute_thermal_gradient(70.0, 62.5);
        assert_eq!(gradient.delta_f, -7.5);
        assert_eq!(gradient.strength, ThermalStrength::None);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(ThermalStrength::VeryStrong.to_string(), "Very Strong");
        assert_eq!(ThermalStrength::None.to_string(), "None");
    }

    #[test]
    fn test_marine_layer_suppression() {
        assert_eq!(marine_layer_suppression(65.0, 64.0), 0.7);
        assert_eq!(marine_layer_suppression(65.0, 62.0), 0.3); // spread exactly 3
        assert_eq!(marine_layer_suppression(65.0, 60.0), 0.3);
        assert_eq!(marine_layer_suppression(65.0, 59.0), 0.1);
        assert_eq!(marine_layer_suppression(65.0, 56.0), 0.1);
        assert_eq!(marine_layer_suppression(65.0, 55.0), 0.0);
    }

    #[test]
    fn test_marine_layer_is_non_increasing() {
        let mut last = f64::MAX;
        for tenths in 0..200 {
            let factor = marine_layer_suppression(60.0 + tenths as f64 / 10.0, 60.0);
            assert!(factor <= last);
            last = factor;
        }
    }
}
