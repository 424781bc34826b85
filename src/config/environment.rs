//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen valor por defecto; un valor mal formado es un error.

use reqwest::Url;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::errors::ConfigError;
use crate::views::map_view::MapViewport;

pub const DEFAULT_API_URL: &str = "https://ofc-test-01.tspb.su/test-task/vehicles";
pub const DEFAULT_ERROR_DISPLAY_SECS: u64 = 5;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// Endpoint de la colección (`.../vehicles`)
    pub api_url: Url,
    /// Tiempo que el banner de error permanece visible
    pub error_display: Duration,
    pub map_viewport: MapViewport,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración con una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MapViewport::default();

        let raw_url = lookup("VEHICLES_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim()).map_err(|_| ConfigError::InvalidValue {
            name: "VEHICLES_API_URL",
            value: raw_url.clone(),
        })?;
        let error_display_secs: u64 =
            parse_var(&lookup, "ERROR_DISPLAY_SECS", || DEFAULT_ERROR_DISPLAY_SECS)?;
        let center_lat: f64 = parse_var(&lookup, "MAP_CENTER_LAT", || defaults.center.0)?;
        let center_lon: f64 = parse_var(&lookup, "MAP_CENTER_LON", || defaults.center.1)?;
        let zoom: u8 = parse_var(&lookup, "MAP_ZOOM", || defaults.zoom)?;

        Ok(Self {
            api_url,
            error_display: Duration::from_secs(error_display_secs),
            map_viewport: MapViewport {
                center: (center_lat, center_lon),
                zoom,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        _ => Ok(default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<EnvironmentConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.error_display, Duration::from_secs(5));
        assert_eq!(config.map_viewport, MapViewport::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VEHICLES_API_URL", "http://localhost:8080/vehicles"),
            ("ERROR_DISPLAY_SECS", "10"),
            ("MAP_ZOOM", "9"),
        ])
        .unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8080/vehicles");
        assert_eq!(config.error_display, Duration::from_secs(10));
        assert_eq!(config.map_viewport.zoom, 9);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = config_from(&[("ERROR_DISPLAY_SECS", "five")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for ERROR_DISPLAY_SECS: 'five'");
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = config_from(&[("MAP_CENTER_LAT", "  ")]).unwrap();
        assert_eq!(config.map_viewport.center.0, 55.75);
    }
}
