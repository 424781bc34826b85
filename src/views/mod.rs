//! Vistas derivadas
//! 
//! Funciones puras sobre el snapshot: la lista ordenada para la tabla y los
//! marcadores que consume el mapa.

pub mod list_view;
pub mod map_view;

pub use list_view::sorted_view;
pub use map_view::{map_markers, MapMarker, MapViewport};
