use std::cmp::Ordering;

use crate::models::sort::{SortConfig, SortDirection, SortField};
use crate::models::vehicle::VehicleRecord;

/// Ordenar el snapshot para mostrarlo.
///
/// Devuelve referencias en un vector nuevo; el snapshot no se toca. La
/// ordenación es estable, así que los empates conservan el orden original,
/// y un campo no soportado deja la lista tal cual.
pub fn sorted_view<'a>(vehicles: &'a [VehicleRecord], sort: &SortConfig) -> Vec<&'a VehicleRecord> {
    let mut view: Vec<&VehicleRecord> = vehicles.iter().collect();

    let compare: fn(&VehicleRecord, &VehicleRecord) -> Ordering = match sort.field {
        SortField::Year => |a, b| a.year.cmp(&b.year),
        SortField::Price => |a, b| a.price.total_cmp(&b.price),
        SortField::Unsupported(_) => return view,
    };

    match sort.direction {
        SortDirection::Ascending => view.sort_by(|a, b| compare(a, b)),
        SortDirection::Descending => view.sort_by(|a, b| compare(b, a)),
    }
    view
}
