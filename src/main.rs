use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_console::clients::HttpVehicleClient;
use vehicle_console::config::EnvironmentConfig;
use vehicle_console::console::{self, StdinConfirm};
use vehicle_console::store::VehicleStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (stderr, para no mezclarse con la consola)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };
    info!("🌐 Colección de vehículos: {}", config.api_url);

    let client = HttpVehicleClient::new(config.api_url.clone())?;
    let store = VehicleStore::new(Arc::new(client), Arc::new(StdinConfirm), config.error_display);

    console::run(&store, &config.map_viewport).await?;

    info!("👋 Consola terminada");
    Ok(())
}
