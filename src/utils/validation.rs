//! Utilidades de validación
//! 
//! Validadores usados por los borradores de los formularios, donde los
//! campos numéricos se guardan como texto hasta el envío.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Convertir el texto de un campo entero
pub fn parse_integer_input(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Convertir el texto de un campo numérico (acepta coma decimal)
pub fn parse_number_input(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Validar que el texto sea un entero
pub fn validate_integer_input(value: &str) -> Result<(), ValidationError> {
    if parse_integer_input(value).is_none() {
        let mut error = ValidationError::new("integer");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el texto sea un número finito
pub fn validate_number_input(value: &str) -> Result<(), ValidationError> {
    if parse_number_input(value).is_none() {
        let mut error = ValidationError::new("number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
