//! Modelos del sistema
//! 
//! Registros de vehículos tal como llegan de la colección remota, los
//! borradores de los formularios y la configuración de ordenación.

pub mod sort;
pub mod vehicle;

pub use sort::{SortConfig, SortDirection, SortField};
pub use vehicle::{CreateDraft, CreateField, EditDraft, EditField, VehicleId, VehicleRecord};
