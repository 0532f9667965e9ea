use once_cell::sync::Lazy;
use serde::Deserialize;

/// Runtime settings, read from `MBWIND_*` environment variables.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_spot_name")]
    pub spot_name: String,
    #[serde(default = "default_coastal_lat")]
    pub coastal_lat: f64,
    #[serde(default = "default_coastal_lon")]
    pub coastal_lon: f64,
    #[serde(default = "default_inland_lat")]
    pub inland_lat: f64,
    #[serde(default = "default_inland_lon")]
    pub inland_lon: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_tide_station")]
    pub tide_station: String,
    #[serde(default = "default_marine_zone")]
    pub marine_zone: String,
    #[serde(default = "default_open_meteo_url")]
    pub open_meteo_url: String,
    #[serde(default = "default_noaa_url")]
    pub noaa_url: String,
    #[serde(default = "default_nws_url")]
    pub nws_url: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

// Mission Bay, San Diego
fn default_spot_name() -> String {
    "Mission Bay".to_string()
}
fn default_coastal_lat() -> f64 {
    32.77
}
fn default_coastal_lon() -> f64 {
    -117.23
}
// El Cajon, inland reference
fn default_inland_lat() -> f64 {
    32.79
}
fn default_inland_lon() -> f64 {
    -116.96
}
fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}
// San Diego Bay
fn default_tide_station() -> String {
    "9410170".to_string()
}
// Coastal waters San Diego
fn default_marine_zone() -> String {
    "PZZ775".to_string()
}
fn default_open_meteo_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}
fn default_noaa_url() -> String {
    "https://api.tidesandcurrents.noaa.gov/api/prod/datagetter".to_string()
}
fn default_nws_url() -> String {
    "https://api.weather.gov".to_string()
}
fn default_http_timeout_secs() -> u64 {
    10
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    envy::prefixed("MBWIND_")
        .from_env::<Config>()
        .expect("Invalid MBWIND_* config, check numeric values (e.g. MBWIND_COASTAL_LAT)")
});

pub fn config() -> &'static Config {
    &CONFIG
}
