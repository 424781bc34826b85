//! Marcadores del mapa
//! 
//! Convierte la lista ordenada en la entrada del componente de mapa:
//! `(latitude, longitude, label, popup_html)` más el viewport inicial.

use maud::html;
use serde::Serialize;

use crate::models::vehicle::VehicleRecord;

/// Centro y zoom iniciales del mapa
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapViewport {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: (55.75, 37.62), // Moscú
            zoom: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub popup_html: String,
}

/// Marcadores para los vehículos con ambas coordenadas, en el orden de la vista
pub fn map_markers(view: &[&VehicleRecord]) -> Vec<MapMarker> {
    view.iter()
        .filter_map(|vehicle| {
            let (latitude, longitude) = vehicle.coordinates()?;
            Some(MapMarker {
                latitude,
                longitude,
                label: format!("{} {}", vehicle.name, vehicle.model),
                popup_html: popup_html(vehicle, latitude, longitude),
            })
        })
        .collect()
}

fn popup_html(vehicle: &VehicleRecord, latitude: f64, longitude: f64) -> String {
    html! {
        div style="font-family: Arial; font-size: 14px;" {
            strong { (vehicle.name) " " (vehicle.model) }
            br;
            "Year: " (vehicle.year)
            br;
            "Price: $" (vehicle.price.to_string())
            br;
            "Color: " (vehicle.color)
            br;
            "Coordinates: " (format!("{:.4}, {:.4}", latitude, longitude))
        }
    }
    .into_string()
}
