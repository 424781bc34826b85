use colored::*;
use serde_json::json;

use crate::models::vehicle::VehicleRecord;
use crate::store::ViewState;
use crate::views::map_view::{MapMarker, MapViewport};

/// Banner, indicador de carga, formularios abiertos y tabla
pub fn print_view(state: &ViewState, vehicles: &[VehicleRecord]) {
    println!();
    if let Some(message) = state.status.error_message() {
        println!("{}", format!("❌ {}", message).bright_red().bold());
    }
    if state.status.is_loading() {
        println!("{}", "⏳ Loading...".bright_yellow());
    }
    if state.is_create_form_open() {
        println!("{}", "📝 Create form open (option 2 to continue)".bright_blue());
    }
    if let Some(draft) = &state.edit_draft {
        println!(
            "{}",
            format!("📝 Editing vehicle {} (option 3 to continue)", draft.id).bright_blue()
        );
    }

    println!(
        "{}",
        format!("🚗 VEHICLES (sorted by {} {})", state.sort.field, state.sort.direction)
            .bright_green()
            .bold()
    );
    if vehicles.is_empty() {
        println!("{}", "No vehicles to display".bright_yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<8} {:<16} {:<16} {:>6} {:>12} {:<10}",
            "ID", "Brand", "Model", "Year", "Price", "Color"
        )
        .bold()
    );
    for vehicle in vehicles {
        println!(
            "{:<8} {:<16} {:<16} {:>6} {:>12} {:<10}",
            vehicle.id.to_string(),
            vehicle.name,
            vehicle.model,
            vehicle.year,
            vehicle.price,
            vehicle.color
        );
    }
}

/// Entrada del componente de mapa en JSON
pub fn print_markers(viewport: &MapViewport, markers: &[MapMarker]) -> serde_json::Result<()> {
    println!("{}", format!("🗺️ MAP MARKERS: {}", markers.len()).bright_green().bold());
    let payload = json!({
        "center": [viewport.center.0, viewport.center.1],
        "zoom": viewport.zoom,
        "markers": markers,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
