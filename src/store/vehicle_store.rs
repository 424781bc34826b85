//! Store de vehículos
//!
//! Dueño único del snapshot y de los flags de la vista. Cada comando de red
//! sigue el mismo protocolo: marca `loading` y limpia el error, llama al
//! cliente, y si tiene éxito vuelve a leer la colección completa en lugar de
//! mezclar el resultado local. Los fallos se convierten en un banner que
//! expira solo y nunca tocan el snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::vehicle_client::VehicleResource;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::sort::SortConfig;
use crate::models::vehicle::{CreateField, EditField, VehicleId, VehicleRecord};
use crate::store::state::{reduce, ViewEvent, ViewState};
use crate::utils::errors::{ResourceOperation, StoreError};
use crate::views::{map_markers, sorted_view, MapMarker};

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this vehicle?";

/// Confirmación que el store pide a la superficie que lo aloja
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Resultado de un comando, para que la superficie sepa qué pasó
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Succeeded,
    /// El error ya está en el banner. En una mutación también cubre el caso
    /// en que el servidor aplicó el cambio pero la relectura falló.
    Failed,
    /// El usuario no confirmó; no se hizo nada
    Declined,
    /// No había borrador que enviar
    Skipped,
}

#[derive(Clone)]
pub struct VehicleStore {
    resource: Arc<dyn VehicleResource>,
    confirm: Arc<dyn ConfirmPrompt>,
    state: Arc<RwLock<ViewState>>,
    error_expiry: Arc<Mutex<Option<JoinHandle<()>>>>,
    error_seq: Arc<AtomicU64>,
    error_display: Duration,
}

fn apply_event(state: &RwLock<ViewState>, event: ViewEvent) {
    let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
    let current = std::mem::take(&mut *guard);
    *guard = reduce(current, event);
}

/// Baja `loading` al salir del comando, haya ido bien o mal
struct InFlight {
    state: Arc<RwLock<ViewState>>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        apply_event(&self.state, ViewEvent::RequestFinished);
    }
}

impl VehicleStore {
    pub fn new(
        resource: Arc<dyn VehicleResource>,
        confirm: Arc<dyn ConfirmPrompt>,
        error_display: Duration,
    ) -> Self {
        Self {
            resource,
            confirm,
            state: Arc::new(RwLock::new(ViewState::default())),
            error_expiry: Arc::new(Mutex::new(None)),
            error_seq: Arc::new(AtomicU64::new(0)),
            error_display,
        }
    }

    fn apply(&self, event: ViewEvent) {
        apply_event(&self.state, event);
    }

    fn read<T>(&self, f: impl FnOnce(&ViewState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Copia del estado actual
    pub fn state(&self) -> ViewState {
        self.read(ViewState::clone)
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| state.status.is_loading())
    }

    pub fn error_message(&self) -> Option<String> {
        self.read(|state| state.status.error_message().map(str::to_string))
    }

    /// Lista ordenada según la configuración actual
    pub fn visible_vehicles(&self) -> Vec<VehicleRecord> {
        self.read(|state| {
            sorted_view(&state.vehicles, &state.sort)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Entrada del componente de mapa, en el orden de la lista
    pub fn map_markers(&self) -> Vec<MapMarker> {
        self.read(|state| map_markers(&sorted_view(&state.vehicles, &state.sort)))
    }

    fn begin(&self) -> InFlight {
        self.cancel_error_expiry();
        self.apply(ViewEvent::RequestStarted);
        InFlight {
            state: Arc::clone(&self.state),
        }
    }

    fn fail(&self, err: StoreError) -> CommandOutcome {
        error!("❌ {}", err);

        let seq = self.error_seq.fetch_add(1, Ordering::Relaxed) + 1;
        self.apply(ViewEvent::CommandFailed {
            message: err.user_message(),
            seq,
        });
        self.schedule_error_expiry(seq);
        CommandOutcome::Failed
    }

    fn schedule_error_expiry(&self, seq: u64) {
        let state = Arc::clone(&self.state);
        let window = self.error_display;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            apply_event(&state, ViewEvent::ErrorExpired { seq });
        });

        let mut pending = self.error_expiry.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    fn cancel_error_expiry(&self) {
        let mut pending = self.error_expiry.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// Leer la colección completa y reemplazar el snapshot
    pub async fn refresh(&self) -> CommandOutcome {
        let _in_flight = self.begin();

        match self.resource.list().await {
            Ok(vehicles) => {
                info!("🔄 Snapshot actualizado: {} vehículos", vehicles.len());
                self.apply(ViewEvent::VehiclesLoaded(vehicles));
                CommandOutcome::Succeeded
            }
            Err(source) => self.fail(StoreError::resource(ResourceOperation::List, source)),
        }
    }

    pub fn open_create_form(&self) {
        self.apply(ViewEvent::CreateFormOpened);
    }

    /// Cerrar el formulario descarta el borrador
    pub fn close_create_form(&self) {
        self.apply(ViewEvent::CreateFormClosed);
    }

    pub fn toggle_create_form(&self) {
        if self.read(ViewState::is_create_form_open) {
            self.close_create_form();
        } else {
            self.open_create_form();
        }
    }

    /// Sin formulario abierto no hace nada
    pub fn set_create_field(&self, field: CreateField, value: impl Into<String>) {
        self.apply(ViewEvent::CreateFieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Enviar el borrador de creación.
    ///
    /// Si falla (validación o red) el formulario sigue abierto con lo escrito
    /// y no se vuelve a leer la colección.
    pub async fn submit_create(&self) -> CommandOutcome {
        let Some(draft) = self.read(|state| state.create_draft.clone()) else {
            return CommandOutcome::Skipped;
        };
        let request = match CreateVehicleRequest::try_from(&draft) {
            Ok(request) => request,
            Err(err) => return self.fail(err),
        };

        let _in_flight = self.begin();
        match self.resource.create(&request).await {
            Ok(()) => {
                info!("✅ Vehículo creado: {} {}", request.name, request.model);
                self.apply(ViewEvent::CreateSucceeded);
                self.refresh().await
            }
            Err(source) => self.fail(StoreError::resource(ResourceOperation::Create, source)),
        }
    }

    /// Empezar a editar `id`; devuelve `false` si no está en el snapshot
    pub fn begin_edit(&self, id: &VehicleId) -> bool {
        self.apply(ViewEvent::EditRequested { id: id.clone() });
        self.read(|state| state.edit_draft.as_ref().map(|draft| &draft.id) == Some(id))
    }

    pub fn set_edit_field(&self, field: EditField, value: impl Into<String>) {
        self.apply(ViewEvent::EditFieldChanged {
            field,
            value: value.into(),
        });
    }

    pub fn cancel_edit(&self) {
        self.apply(ViewEvent::EditCancelled);
    }

    /// Enviar `name` y `price` del borrador de edición
    pub async fn submit_edit(&self) -> CommandOutcome {
        let Some(draft) = self.read(|state| state.edit_draft.clone()) else {
            return CommandOutcome::Skipped;
        };
        let request = match UpdateVehicleRequest::try_from(&draft) {
            Ok(request) => request,
            Err(err) => return self.fail(err),
        };

        let _in_flight = self.begin();
        match self.resource.update(&draft.id, &request).await {
            Ok(()) => {
                info!("✅ Vehículo {} actualizado", draft.id);
                self.apply(ViewEvent::EditSucceeded { id: draft.id });
                self.refresh().await
            }
            Err(source) => self.fail(StoreError::resource(ResourceOperation::Update, source)),
        }
    }

    /// Eliminar tras confirmación; si el usuario no confirma no hay llamada
    pub async fn submit_delete(&self, id: &VehicleId) -> CommandOutcome {
        if !self.confirm.confirm(DELETE_CONFIRM_PROMPT) {
            info!("🚫 Eliminación del vehículo {} cancelada", id);
            return CommandOutcome::Declined;
        }

        let _in_flight = self.begin();
        match self.resource.delete(id).await {
            Ok(()) => {
                info!("🗑️ Vehículo {} eliminado", id);
                self.refresh().await
            }
            Err(source) => self.fail(StoreError::resource(ResourceOperation::Delete, source)),
        }
    }

    pub fn set_sort(&self, sort: SortConfig) {
        self.apply(ViewEvent::SortChanged(sort));
    }
}
