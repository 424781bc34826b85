//! Sistema de manejo de errores
//! 
//! Este módulo define los errores del cliente remoto, del store y de la
//! configuración, y el texto que se muestra al usuario para cada uno.

use thiserror::Error;
use validator::ValidationErrors;

/// Operación sobre la colección remota de vehículos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOperation {
    List,
    Create,
    Update,
    Delete,
}

impl ResourceOperation {
    /// Verbo HTTP que usa la operación
    pub fn method(&self) -> &'static str {
        match self {
            ResourceOperation::List => "GET",
            ResourceOperation::Create => "POST",
            ResourceOperation::Update => "PATCH",
            ResourceOperation::Delete => "DELETE",
        }
    }

    fn action(&self) -> &'static str {
        match self {
            ResourceOperation::List => "load vehicles",
            ResourceOperation::Create => "create vehicle",
            ResourceOperation::Update => "edit vehicle",
            ResourceOperation::Delete => "delete vehicle",
        }
    }

    fn blocked_feature(&self) -> &'static str {
        match self {
            ResourceOperation::List => "The vehicles API is unavailable",
            ResourceOperation::Create => "Vehicle creation is unavailable",
            ResourceOperation::Update => "Vehicle editing is unavailable",
            ResourceOperation::Delete => "Vehicle deletion is unavailable",
        }
    }
}

impl std::fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.action())
    }
}

/// Errores del cliente de la colección remota
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// No se recibió respuesta (conexión, DNS, cuerpo cortado)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Status 405: la funcionalidad está deshabilitada en el servidor
    #[error("Method blocked (405)")]
    MethodBlocked,

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Errores que un comando del store convierte en mensaje para el usuario
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to {operation}: {source}")]
    Resource {
        operation: ResourceOperation,
        #[source]
        source: ResourceError,
    },

    #[error("Invalid draft: {0}")]
    InvalidDraft(#[from] ValidationErrors),
}

impl StoreError {
    pub fn resource(operation: ResourceOperation, source: ResourceError) -> Self {
        StoreError::Resource { operation, source }
    }

    /// Texto del banner de error
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Resource { operation, source } => match source {
                ResourceError::MethodBlocked => format!(
                    "{} request blocked (405). {}.",
                    operation.method(),
                    operation.blocked_feature()
                ),
                ResourceError::Http { status } => {
                    format!("Failed to {}: {}", operation, status)
                }
                ResourceError::Transport(msg) => {
                    format!("Network error, could not {}: {}", operation, msg)
                }
                ResourceError::Decode(msg) => {
                    format!("Malformed response, could not {}: {}", operation, msg)
                }
            },
            StoreError::InvalidDraft(errors) => {
                let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                fields.sort_unstable();
                format!("Invalid form data: {}", fields.join(", "))
            }
        }
    }
}

/// Errores al leer la configuración del entorno
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Resultado tipado para operaciones del store
pub type AppResult<T> = Result<T, StoreError>;

/// Función helper para crear errores de validación de un borrador
pub fn validation_error(field: &'static str, message: &'static str) -> StoreError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    StoreError::InvalidDraft(errors)
}
