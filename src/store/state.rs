//! Estado de la vista y reducer
//! 
//! Todas las transiciones son `reduce(state, event) -> state`, sin efectos.
//! El snapshot solo cambia con `VehiclesLoaded`, es decir, con una lectura
//! completa de la colección.

use crate::models::sort::SortConfig;
use crate::models::vehicle::{CreateDraft, CreateField, EditDraft, EditField, VehicleId, VehicleRecord};

/// Mensaje de error visible, identificado para su expiración
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBanner {
    pub message: String,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiStatus {
    /// Comandos de red en curso
    pub in_flight: usize,
    pub error: Option<ErrorBanner>,
}

impl UiStatus {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|banner| banner.message.as_str())
    }
}

/// Estado completo de la vista
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Snapshot: resultado del último `list()` exitoso
    pub vehicles: Vec<VehicleRecord>,
    /// `Some` mientras el formulario de creación está abierto
    pub create_draft: Option<CreateDraft>,
    /// `Some` mientras se edita un registro
    pub edit_draft: Option<EditDraft>,
    pub sort: SortConfig,
    pub status: UiStatus,
}

impl ViewState {
    pub fn is_create_form_open(&self) -> bool {
        self.create_draft.is_some()
    }

    pub fn find_vehicle(&self, id: &VehicleId) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Empieza un comando de red: sube el contador y limpia el error
    RequestStarted,
    /// Termina un comando de red, con éxito o no
    RequestFinished,
    VehiclesLoaded(Vec<VehicleRecord>),
    CommandFailed { message: String, seq: u64 },
    /// Expira el banner `seq`; si ya fue reemplazado no hace nada
    ErrorExpired { seq: u64 },

    CreateFormOpened,
    CreateFormClosed,
    CreateFieldChanged { field: CreateField, value: String },
    CreateSucceeded,

    EditRequested { id: VehicleId },
    EditFieldChanged { field: EditField, value: String },
    EditCancelled,
    EditSucceeded { id: VehicleId },

    SortChanged(SortConfig),
}

pub fn reduce(mut state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::RequestStarted => {
            state.status.in_flight += 1;
            state.status.error = None;
        }
        ViewEvent::RequestFinished => {
            state.status.in_flight = state.status.in_flight.saturating_sub(1);
        }
        ViewEvent::VehiclesLoaded(vehicles) => {
            state.vehicles = vehicles;
        }
        ViewEvent::CommandFailed { message, seq } => {
            state.status.error = Some(ErrorBanner { message, seq });
        }
        ViewEvent::ErrorExpired { seq } => {
            if state.status.error.as_ref().map(|banner| banner.seq) == Some(seq) {
                state.status.error = None;
            }
        }

        ViewEvent::CreateFormOpened => {
            if state.create_draft.is_none() {
                state.create_draft = Some(CreateDraft::default());
            }
        }
        ViewEvent::CreateFormClosed | ViewEvent::CreateSucceeded => {
            state.create_draft = None;
        }
        ViewEvent::CreateFieldChanged { field, value } => {
            if let Some(draft) = state.create_draft.as_mut() {
                draft.set_field(field, value);
            }
        }

        ViewEvent::EditRequested { id } => {
            // Editar otro registro descarta el borrador anterior
            if let Some(draft) = state.find_vehicle(&id).map(EditDraft::from_record) {
                state.edit_draft = Some(draft);
            }
        }
        ViewEvent::EditFieldChanged { field, value } => {
            if let Some(draft) = state.edit_draft.as_mut() {
                draft.set_field(field, value);
            }
        }
        ViewEvent::EditCancelled => {
            state.edit_draft = None;
        }
        ViewEvent::EditSucceeded { id } => {
            if state.edit_draft.as_ref().map(|draft| &draft.id) == Some(&id) {
                state.edit_draft = None;
            }
        }

        ViewEvent::SortChanged(sort) => {
            state.sort = sort;
        }
    }
    state
}
