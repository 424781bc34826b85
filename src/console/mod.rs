//! Consola interactiva
//! 
//! Superficie de terminal sobre el store: formularios, confirmación,
//! tabla ordenada y lista de marcadores para el mapa.

pub mod prompt;
pub mod render;

use anyhow::Result;
use colored::*;

use crate::models::sort::{SortConfig, SortDirection, SortField};
use crate::models::vehicle::{CreateField, EditField, VehicleId};
use crate::store::{CommandOutcome, VehicleStore};
use crate::views::map_view::MapViewport;

pub use prompt::StdinConfirm;

/// Bucle principal del menú
pub async fn run(store: &VehicleStore, viewport: &MapViewport) -> Result<()> {
    println!("{}", "🚗 Vehicle Console".bright_blue().bold());
    println!("{}", "==================".bright_blue());

    store.refresh().await;

    loop {
        render::print_view(&store.state(), &store.visible_vehicles());

        println!();
        println!("{}", "📋 MENU".bright_green().bold());
        println!("1. 🔄 Refresh list");
        println!("2. ➕ Add vehicle");
        println!("3. ✏️  Edit vehicle (name / price)");
        println!("4. 🗑️  Delete vehicle");
        println!("5. ↕️  Sorting");
        println!("6. 🗺️  Map markers");
        println!("7. ✖️  Discard open forms");
        println!("8. 🚪 Exit");

        let choice = prompt::read_line("Choose an option (1-8): ")?;
        match choice.as_str() {
            "1" => report(store.refresh().await),
            "2" => create_vehicle(store).await?,
            "3" => edit_vehicle(store).await?,
            "4" => delete_vehicle(store).await?,
            "5" => change_sort(store)?,
            "6" => render::print_markers(viewport, &store.map_markers())?,
            "7" => {
                store.close_create_form();
                store.cancel_edit();
            }
            "8" | "q" => {
                println!("{}", "👋 Bye!".bright_green());
                break;
            }
            _ => println!("{}", "❌ Invalid option, try again.".bright_red()),
        }
    }

    Ok(())
}

fn report(outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Succeeded => println!("{}", "✅ Done".bright_green()),
        CommandOutcome::Failed => {}
        CommandOutcome::Declined => println!("{}", "↩️  Cancelled".bright_yellow()),
        CommandOutcome::Skipped => println!("{}", "⚠️ Nothing to submit".bright_yellow()),
    }
}

/// Buscar un id escrito por el usuario en la lista visible
fn resolve_id(store: &VehicleStore, input: &str) -> Option<VehicleId> {
    store
        .visible_vehicles()
        .into_iter()
        .map(|vehicle| vehicle.id)
        .find(|id| id.to_string() == input)
}

async fn create_vehicle(store: &VehicleStore) -> Result<()> {
    store.open_create_form();
    println!("{}", "➕ NEW VEHICLE (Enter keeps the current value)".bright_cyan().bold());

    for field in CreateField::ALL {
        let current = store
            .state()
            .create_draft
            .map(|draft| draft.field(field).to_string())
            .unwrap_or_default();
        let value = prompt::read_with_default(field.label(), &current)?;
        store.set_create_field(field, value);
    }

    report(store.submit_create().await);
    Ok(())
}

async fn edit_vehicle(store: &VehicleStore) -> Result<()> {
    let input = prompt::read_line("Vehicle ID to edit: ")?;
    let Some(id) = resolve_id(store, &input) else {
        println!("{}", format!("❌ No vehicle with ID {}", input).bright_red());
        return Ok(());
    };

    store.begin_edit(&id);
    let Some(draft) = store.state().edit_draft else {
        return Ok(());
    };
    println!("{}", format!("✏️  EDIT VEHICLE (ID: {})", draft.id).bright_cyan().bold());

    let name = prompt::read_with_default("Brand", &draft.name)?;
    store.set_edit_field(EditField::Name, name);
    let price = prompt::read_with_default("Price", &draft.price)?;
    store.set_edit_field(EditField::Price, price);

    report(store.submit_edit().await);
    Ok(())
}

async fn delete_vehicle(store: &VehicleStore) -> Result<()> {
    let input = prompt::read_line("Vehicle ID to delete: ")?;
    match resolve_id(store, &input) {
        Some(id) => report(store.submit_delete(&id).await),
        None => println!("{}", format!("❌ No vehicle with ID {}", input).bright_red()),
    }
    Ok(())
}

fn change_sort(store: &VehicleStore) -> Result<()> {
    let current = store.state().sort;

    let field = prompt::read_with_default("Sort by (year/price)", &current.field.to_string())?;
    let direction = prompt::read_with_default("Order (asc/desc)", &current.direction.to_string())?;

    let field = match field.parse::<SortField>() {
        Ok(field) => field,
        Err(never) => match never {},
    };
    match direction.parse::<SortDirection>() {
        Ok(direction) => store.set_sort(SortConfig::new(field, direction)),
        Err(e) => println!("{}", format!("❌ {}", e).bright_red()),
    }
    Ok(())
}
