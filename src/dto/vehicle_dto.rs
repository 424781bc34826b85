use serde::Serialize;
use validator::Validate;

use crate::models::vehicle::{CreateDraft, EditDraft};
use crate::utils::errors::{validation_error, AppResult, StoreError};
use crate::utils::validation::{parse_integer_input, parse_number_input};

// Request para crear un vehículo (POST /vehicles)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateVehicleRequest {
    pub name: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

// Request para editar un vehículo (PATCH /vehicles/{id}), solo name y price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateVehicleRequest {
    pub name: String,
    pub price: f64,
}

impl TryFrom<&CreateDraft> for CreateVehicleRequest {
    type Error = StoreError;

    fn try_from(draft: &CreateDraft) -> AppResult<Self> {
        draft.validate()?;

        Ok(Self {
            name: draft.name.trim().to_string(),
            model: draft.model.trim().to_string(),
            year: parse_integer_input(&draft.year)
                .ok_or_else(|| validation_error("year", "year must be an integer"))?,
            color: draft.color.trim().to_string(),
            price: parse_number_input(&draft.price)
                .ok_or_else(|| validation_error("price", "price must be a number"))?,
        })
    }
}

impl TryFrom<&EditDraft> for UpdateVehicleRequest {
    type Error = StoreError;

    fn try_from(draft: &EditDraft) -> AppResult<Self> {
        draft.validate()?;

        Ok(Self {
            name: draft.name.trim().to_string(),
            price: parse_number_input(&draft.price)
                .ok_or_else(|| validation_error("price", "price must be a number"))?,
        })
    }
}
