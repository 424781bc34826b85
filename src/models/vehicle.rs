//! Modelo de Vehicle
//! 
//! Este módulo contiene el registro de vehículo de la API remota y los
//! borradores de creación y edición que solo viven en el estado de la vista.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::utils::validation::{validate_integer_input, validate_not_empty, validate_number_input};

/// Identificador opaco asignado por el servidor.
///
/// La API devuelve ids numéricos, pero se aceptan también strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleId::Number(id) => write!(f, "{}", id),
            VehicleId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        VehicleId::Number(id)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        VehicleId::Text(id.to_string())
    }
}

/// Vehicle tal como lo devuelve `GET /vehicles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub name: String,
    pub model: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i32,
    pub color: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl VehicleRecord {
    /// Coordenadas `(latitude, longitude)` si el registro tiene ambas
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            _ => None,
        }
    }
}

// Registros creados con el formulario antiguo guardaban year/price como texto
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(number) => number
            .as_i64()
            .or_else(|| {
                // 2020.0 también es un año válido
                number
                    .as_f64()
                    .filter(|year| year.fract() == 0.0 && year.abs() <= i32::MAX as f64)
                    .map(|year| year as i64)
            })
            .and_then(|year| i32::try_from(year).ok())
            .ok_or_else(|| de::Error::custom(format!("year out of range: {}", number))),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("year is not an integer: '{}'", text))),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(number) => number
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("price out of range: {}", number))),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| de::Error::custom(format!("price is not a number: '{}'", text))),
    }
}

/// Campos del formulario de creación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateField {
    Name,
    Model,
    Year,
    Color,
    Price,
}

impl CreateField {
    pub const ALL: [CreateField; 5] = [
        CreateField::Name,
        CreateField::Model,
        CreateField::Year,
        CreateField::Color,
        CreateField::Price,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CreateField::Name => "Brand",
            CreateField::Model => "Model",
            CreateField::Year => "Year",
            CreateField::Color => "Color",
            CreateField::Price => "Price",
        }
    }
}

impl FromStr for CreateField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(CreateField::Name),
            "model" => Ok(CreateField::Model),
            "year" => Ok(CreateField::Year),
            "color" => Ok(CreateField::Color),
            "price" => Ok(CreateField::Price),
            other => Err(format!("unknown create field '{}'", other)),
        }
    }
}

/// Borrador del formulario de creación.
///
/// Todos los campos son obligatorios; `year` y `price` se guardan como el
/// texto que escribió el usuario y se convierten al enviar.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CreateDraft {
    #[validate(custom = "validate_not_empty")]
    pub name: String,

    #[validate(custom = "validate_not_empty")]
    pub model: String,

    #[validate(custom = "validate_integer_input")]
    pub year: String,

    #[validate(custom = "validate_not_empty")]
    pub color: String,

    #[validate(custom = "validate_number_input")]
    pub price: String,
}

impl CreateDraft {
    pub fn field(&self, field: CreateField) -> &str {
        match field {
            CreateField::Name => &self.name,
            CreateField::Model => &self.model,
            CreateField::Year => &self.year,
            CreateField::Color => &self.color,
            CreateField::Price => &self.price,
        }
    }

    pub fn set_field(&mut self, field: CreateField, value: String) {
        match field {
            CreateField::Name => self.name = value,
            CreateField::Model => self.model = value,
            CreateField::Year => self.year = value,
            CreateField::Color => self.color = value,
            CreateField::Price => self.price = value,
        }
    }
}

/// Campos editables de un vehículo existente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Price,
}

impl FromStr for EditField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(EditField::Name),
            "price" => Ok(EditField::Price),
            other => Err(format!("field '{}' cannot be edited", other)),
        }
    }
}

/// Copia editable de `name` y `price` de un único registro
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EditDraft {
    pub id: VehicleId,

    #[validate(custom = "validate_not_empty")]
    pub name: String,

    #[validate(custom = "validate_number_input")]
    pub price: String,
}

impl EditDraft {
    pub fn from_record(record: &VehicleRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            price: record.price.to_string(),
        }
    }

    pub fn set_field(&mut self, field: EditField, value: String) {
        match field {
            EditField::Name => self.name = value,
            EditField::Price => self.price = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_with_numeric_id_and_coordinates() {
        let record: VehicleRecord = serde_json::from_value(json!({
            "id": 7,
            "name": "Toyota",
            "model": "Camry",
            "year": 2021,
            "color": "red",
            "price": 21000,
            "latitude": 55.7558,
            "longitude": 37.6173
        }))
        .unwrap();

        assert_eq!(record.id, VehicleId::Number(7));
        assert_eq!(record.price, 21000.0);
        assert_eq!(record.coordinates(), Some((55.7558, 37.6173)));
    }

    fn record_with(year: serde_json::Value, price: serde_json::Value) -> serde_json::Result<VehicleRecord> {
        serde_json::from_value(json!({
            "id": 1,
            "name": "Kia",
            "model": "Rio",
            "year": year,
            "color": "blue",
            "price": price
        }))
    }

    #[test]
    fn test_record_rejects_non_finite_price() {
        for price in ["NaN", "inf", "-infinity"] {
            assert!(record_with(json!(2015), json!(price)).is_err(), "{}", price);
        }
    }

    #[test]
    fn test_record_accepts_integral_float_year() {
        let record = record_with(json!(2020.0), json!(9000)).unwrap();
        assert_eq!(record.year, 2020);

        assert!(record_with(json!(2020.5), json!(9000)).is_err());
    }

    #[test]
    fn test_record_accepts_text_numbers_and_missing_coordinates() {
        let record: VehicleRecord = serde_json::from_value(json!({
            "id": "abc-1",
            "name": "Lada",
            "model": "Vesta",
            "year": "2019",
            "color": "white",
            "price": "950000.5",
            "latitude": null
        }))
        .unwrap();

        assert_eq!(record.id.to_string(), "abc-1");
        assert_eq!(record.year, 2019);
        assert_eq!(record.price, 950000.5);
        assert_eq!(record.coordinates(), None);
    }

    #[test]
    fn test_record_rejects_non_numeric_year() {
        let result = serde_json::from_value::<VehicleRecord>(json!({
            "id": 1,
            "name": "Lada",
            "model": "Niva",
            "year": "old",
            "color": "green",
            "price": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_only_one_coordinate_is_not_mappable() {
        let record: VehicleRecord = serde_json::from_value(json!({
            "id": 1, "name": "Kia", "model": "Rio", "year": 2018,
            "color": "blue", "price": 10, "latitude": 59.93
        }))
        .unwrap();
        assert_eq!(record.coordinates(), None);
    }

    #[test]
    fn test_create_draft_validation() {
        let mut draft = CreateDraft::default();
        assert!(draft.validate().is_err());

        draft.set_field(CreateField::Name, "BMW".into());
        draft.set_field(CreateField::Model, "X5".into());
        draft.set_field(CreateField::Year, "2020".into());
        draft.set_field(CreateField::Color, "black".into());
        draft.set_field(CreateField::Price, "55000".into());
        assert!(draft.validate().is_ok());

        draft.set_field(CreateField::Year, "twenty".into());
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_edit_draft_from_record_formats_price() {
        let record = VehicleRecord {
            id: VehicleId::Number(3),
            name: "Audi".into(),
            model: "A4".into(),
            year: 2017,
            color: "grey".into(),
            price: 25000.0,
            latitude: None,
            longitude: None,
        };
        let draft = EditDraft::from_record(&record);
        assert_eq!(draft.price, "25000");
        assert_eq!(draft.id, VehicleId::Number(3));
    }
}
