//! Store del estado de la vista
//! 
//! `state` contiene el estado y el reducer puro; `vehicle_store` es la
//! frontera de efectos que llama al cliente remoto y despacha eventos.

pub mod state;
pub mod vehicle_store;

pub use state::{reduce, ErrorBanner, UiStatus, ViewEvent, ViewState};
pub use vehicle_store::{CommandOutcome, ConfirmPrompt, VehicleStore, DELETE_CONFIRM_PROMPT};
