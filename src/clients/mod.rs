//! Clients - HTTP Clients for External APIs
//! 
//! This module contains the client for the remote vehicles collection.

pub mod vehicle_client;

pub use vehicle_client::{HttpVehicleClient, VehicleResource};
