//! DTOs de la API remota
//! 
//! Cuerpos JSON que se envían a la colección de vehículos.

pub mod vehicle_dto;
