//! Mock de la colección de vehículos sobre axum
//! 
//! Guarda los registros en memoria, asigna id y coordenadas al crear, y
//! registra cada petición recibida para poder contar llamadas.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use reqwest::Url;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct MockApi {
    pub vehicles: Mutex<Vec<Value>>,
    next_id: Mutex<i64>,
    requests: Mutex<Vec<RecordedRequest>>,
    blocked: Mutex<Vec<&'static str>>,
    forced_status: Mutex<Option<u16>>,
    raw_list_body: Mutex<Option<String>>,
}

impl MockApi {
    pub fn seeded(vehicles: Vec<Value>) -> Arc<Self> {
        let api = Self::default();
        *api.next_id.lock().unwrap() = vehicles.len() as i64 + 1;
        *api.vehicles.lock().unwrap() = vehicles;
        Arc::new(api)
    }

    /// Responder 405 a todas las peticiones con ese método
    pub fn block(&self, method: &'static str) {
        self.blocked.lock().unwrap().push(method);
    }

    pub fn force_status(&self, status: u16) {
        *self.forced_status.lock().unwrap() = Some(status);
    }

    pub fn serve_raw_list(&self, body: &str) {
        *self.raw_list_body.lock().unwrap() = Some(body.to_string());
    }

    pub fn count(&self, method: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|r| r.method == method).count()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Value> {
        self.vehicles.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest { method, path, body });
    }

    fn rejection(&self, method: &'static str) -> Option<Response> {
        if self.blocked.lock().unwrap().contains(&method) {
            return Some(StatusCode::METHOD_NOT_ALLOWED.into_response());
        }
        let forced = *self.forced_status.lock().unwrap();
        forced.map(|status| {
            StatusCode::from_u16(status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        })
    }
}

pub fn vehicle_json(id: i64, name: &str, model: &str, year: i32, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "model": model,
        "year": year,
        "color": "black",
        "price": price
    })
}

fn id_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

async fn list_vehicles(State(api): State<Arc<MockApi>>) -> Response {
    api.record("GET", "/vehicles".into(), None);
    if let Some(rejection) = api.rejection("GET") {
        return rejection;
    }
    if let Some(body) = api.raw_list_body.lock().unwrap().clone() {
        return (StatusCode::OK, body).into_response();
    }
    Json(Value::Array(api.stored())).into_response()
}

async fn create_vehicle(State(api): State<Arc<MockApi>>, Json(body): Json<Value>) -> Response {
    api.record("POST", "/vehicles".into(), Some(body.clone()));
    if let Some(rejection) = api.rejection("POST") {
        return rejection;
    }

    let id = {
        let mut next_id = api.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        id
    };
    let mut created = body;
    if let Some(object) = created.as_object_mut() {
        object.insert("id".into(), json!(id));
        // Coordenadas asignadas por el servidor
        object.insert("latitude".into(), json!(55.0 + id as f64 / 100.0));
        object.insert("longitude".into(), json!(37.5));
    }
    api.vehicles.lock().unwrap().push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_vehicle(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    api.record("PATCH", format!("/vehicles/{}", id), Some(body.clone()));
    if let Some(rejection) = api.rejection("PATCH") {
        return rejection;
    }

    let mut vehicles = api.vehicles.lock().unwrap();
    let Some(vehicle) = vehicles.iter_mut().find(|v| id_text(&v["id"]) == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if let (Some(target), Some(changes)) = (vehicle.as_object_mut(), body.as_object()) {
        for (key, value) in changes {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(vehicle.clone()).into_response()
}

async fn delete_vehicle(State(api): State<Arc<MockApi>>, Path(id): Path<String>) -> Response {
    api.record("DELETE", format!("/vehicles/{}", id), None);
    if let Some(rejection) = api.rejection("DELETE") {
        return rejection;
    }

    let mut vehicles = api.vehicles.lock().unwrap();
    let before = vehicles.len();
    vehicles.retain(|v| id_text(&v["id"]) != id);
    if vehicles.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    StatusCode::OK.into_response()
}

/// Levantar el mock en un puerto libre y devolver la URL de la colección
pub async fn start(api: Arc<MockApi>) -> Url {
    let app = Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/:id", patch(update_vehicle).delete(delete_vehicle))
        .with_state(api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/vehicles", addr)).unwrap()
}

/// URL de un puerto donde no escucha nadie
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/vehicles", addr)).unwrap()
}
