use crate::sport::Sport;

/// Short advice for the session from sustained wind and gusts.
pub fn sport_tip(wind_kts: Option<f64>, gust_kts: Option<f64>, sport: Sport) -> &'static str {
    match sport {
        Sport::Wingfoil => wingfoil_tip(wind_kts),
        Sport::Laser => laser_tip(wind_kts, gust_kts),
    }
}

fn wingfoil_tip(wind_kts: Option<f64>) -> &'static str {
    let wind = wind_kts.unwrap_or(0.0);
    if wind < 8.0 {
        "Too light for foiling - try prone or SUP instead"
    } else if wind < 12.0 {
        "Marginal - big wing (6m+) and pumping required"
    } else if wind < 15.0 {
        "Rideable with a mid-size wing (5-6m)"
    } else if wind < 22.0 {
        "Sweet spot - great foiling conditions"
    } else if wind < 28.0 {
        "Powered up - small wing (3-4m), watch for chop"
    } else {
        "Nuking - experienced riders only, small wing"
    }
}

fn laser_tip(wind_kts: Option<f64>, gust_kts: Option<f64>) -> &'static str {
    let wind = match wind_kts {
        Some(w) if w >= 5.0 => w,
        _ => return "Light air - focus on kinetics and sail trim",
    };
    if wind < 10.0 {
        // A zero gust reading counts as missing
        let gust = gust_kts.filter(|g| *g != 0.0).unwrap_or(wind);
        if gust > 14.0 {
            return "Shifty/gusty - stay ready to hike, keep weight forward in lulls";
        }
        "Pleasant conditions, good for technique work"
    } else if wind < 15.0 {
        "Good hiking conditions, reef if overpowered in gusts"
    } else if wind < 20.0 {
        "Full hike, consider reefing. Watch for gusts on the bay"
    } else {
        "Heavy air - reef recommended, watch for capsizes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laser_tip() {
        assert!(sport_tip(Some(3.0), Some(4.0), Sport::Laser).contains("Light air"));
        assert!(sport_tip(None, None, Sport::Laser).contains("Light air"));
        assert!(sport_tip(Some(12.0), Some(15.0), Sport::Laser)
            .to_lowercase()
            .contains("hiking"));
        assert!(sport_tip(Some(17.0), None, Sport::Laser).contains("Full hike"));
        assert!(sport_tip(Some(24.0), None, Sport::Laser).contains("Heavy air"));
    }

    #[test]
    fn test_laser_tip_gusty_light_wind() {
        assert!(sport_tip(Some(8.0), Some(16.0), Sport::Laser).contains("Shifty"));
        assert!(sport_tip(Some(8.0), Some(12.0), Sport::Laser).contains("Pleasant"));
        assert!(sport_tip(Some(8.0), None, Sport::Laser).contains("Pleasant"));
        assert!(sport_tip(Some(8.0), Some(0.0), Sport::Laser).contains("Pleasant"));
    }

    #[test]
    fn test_wingfoil_tip() {
        let tip = |kts| sport_tip(kts, None, Sport::Wingfoil);
        assert!(tip(None).contains("Too light"));
        assert!(tip(Some(7.9)).contains("Too light"));
        assert!(tip(Some(10.0)).contains("Marginal"));
        assert!(tip(Some(13.0)).contains("mid-size"));
        assert!(tip(Some(18.0)).contains("Sweet spot"));
        assert!(tip(Some(25.0)).contains("Powered up"));
        assert!(tip(Some(30.0)).contains("Nuking"));
    }

    #[test]
    fn test_wingfoil_ignores_gusts() {
        assert_eq!(
            sport_tip(Some(18.0), Some(40.0), Sport::Wingfoil),
            sport_tip(Some(18.0), None, Sport::Wingfoil)
        );
    }
}
