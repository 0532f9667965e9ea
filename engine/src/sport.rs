use crate::curve::Curve;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Laser: ideal 8-12 kts, falls off quickly once overpowered.
const LASER_WIND: Curve<u8> = Curve::new(
    &[
        (6.0, 10),
        (8.0, 18),
        (12.0, 30),
        (16.0, 25),
        (20.0, 18),
        (25.0, 10),
    ],
    5,
);

/// Wingfoil: ideal 15-22 kts, 35+ is dangerous.
const WINGFOIL_WIND: Curve<u8> = Curve::new(
    &[
        (8.0, 5),
        (12.0, 12),
        (15.0, 22),
        (22.0, 30),
        (28.0, 22),
        (35.0, 12),
    ],
    3,
);

const LASER_GUST: Curve<u8> = Curve::new(&[(1.3, 15), (1.5, 12), (1.8, 8), (2.2, 4)], 1);

const WINGFOIL_GUST: Curve<u8> = Curve::new(&[(1.4, 15), (1.7, 12), (2.0, 8), (2.5, 4)], 1);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Laser,
    Wingfoil,
}

impl Sport {
    pub const ALL: [Sport; 2] = [Sport::Laser, Sport::Wingfoil];

    /// Wind speed curve (kts -> 0..=30), only consulted at or above 3 kts.
    pub fn wind_curve(self) -> &'static Curve<u8> {
        match self {
            Sport::Laser => &LASER_WIND,
            Sport::Wingfoil => &WINGFOIL_WIND,
        }
    }

    /// Gust factor curve (gust/wind ratio -> 0..=15).
    pub fn gust_curve(self) -> &'static Curve<u8> {
        match self {
            Sport::Laser => &LASER_GUST,
            Sport::Wingfoil => &WINGFOIL_GUST,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sport::Laser => "Laser",
            Sport::Wingfoil => "Wingfoil",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Laser => write!(f, "laser"),
            Sport::Wingfoil => write!(f, "wingfoil"),
        }
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Sport, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "laser" => Ok(Sport::Laser),
            "wingfoil" => Ok(Sport::Wingfoil),
            other => Err(format!(
                "unknown sport '{}', expected one of: laser, wingfoil",
                other
            )),
        }
    }
}
