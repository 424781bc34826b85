//! Vehicle Console
//! 
//! Cliente de la colección remota de vehículos: store del estado de la
//! vista, vistas derivadas (lista ordenada y marcadores del mapa) y una
//! consola de terminal que hace de superficie.

pub mod clients;
pub mod config;
pub mod console;
pub mod dto;
pub mod models;
pub mod store;
pub mod utils;
pub mod views;
