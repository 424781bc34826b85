//! Cliente HTTP para la colección de vehículos
//! 
//! Envuelve GET/POST/PATCH/DELETE contra un único endpoint REST y normaliza
//! los fallos de transporte y de status en `ResourceError`. No reintenta y no
//! configura timeout propio.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, info, warn};

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::{VehicleId, VehicleRecord};
use crate::utils::errors::ResourceError;

/// Operaciones sobre la colección remota que necesita el store
#[async_trait]
pub trait VehicleResource: Send + Sync {
    async fn list(&self) -> Result<Vec<VehicleRecord>, ResourceError>;

    async fn create(&self, request: &CreateVehicleRequest) -> Result<(), ResourceError>;

    async fn update(
        &self,
        id: &VehicleId,
        request: &UpdateVehicleRequest,
    ) -> Result<(), ResourceError>;

    async fn delete(&self, id: &VehicleId) -> Result<(), ResourceError>;
}

/// Cliente HTTP para la API de vehículos
pub struct HttpVehicleClient {
    client: Client,
    collection_url: Url,
}

impl HttpVehicleClient {
    /// Crear nuevo cliente para la URL de la colección (`.../vehicles`)
    pub fn new(collection_url: Url) -> Result<Self, ResourceError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ResourceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// URL de un elemento: `{collection}/{id}`, con el id escapado
    fn item_url(&self, id: &VehicleId) -> Result<Url, ResourceError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ResourceError::Transport(format!(
                    "collection URL cannot have path segments: {}",
                    self.collection_url
                ))
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

/// Mapear el status de la respuesta a la taxonomía de errores
fn ensure_success(response: Response) -> Result<Response, ResourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!("⚠️ {} -> {}", response.url(), status);
    if status == StatusCode::METHOD_NOT_ALLOWED {
        Err(ResourceError::MethodBlocked)
    } else {
        Err(ResourceError::Http {
            status: status.as_u16(),
        })
    }
}

fn transport_error(error: reqwest::Error) -> ResourceError {
    ResourceError::Transport(error.to_string())
}

#[async_trait]
impl VehicleResource for HttpVehicleClient {
    async fn list(&self) -> Result<Vec<VehicleRecord>, ResourceError> {
        debug!("🌐 GET {}", self.collection_url);

        let response = self
            .client
            .get(self.collection_url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response)?;

        let body = response.text().await.map_err(transport_error)?;
        let vehicles: Vec<VehicleRecord> = serde_json::from_str(&body)
            .map_err(|e| ResourceError::Decode(e.to_string()))?;

        info!("🚗 {} vehículos recibidos", vehicles.len());
        Ok(vehicles)
    }

    async fn create(&self, request: &CreateVehicleRequest) -> Result<(), ResourceError> {
        debug!("🌐 POST {} ({} {})", self.collection_url, request.name, request.model);

        let response = self
            .client
            .post(self.collection_url.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response)?;

        // El cuerpo de la respuesta se descarta: el store vuelve a leer la colección
        Ok(())
    }

    async fn update(
        &self,
        id: &VehicleId,
        request: &UpdateVehicleRequest,
    ) -> Result<(), ResourceError> {
        let url = self.item_url(id)?;
        debug!("🌐 PATCH {}", url);

        let response = self
            .client
            .patch(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete(&self, id: &VehicleId) -> Result<(), ResourceError> {
        let url = self.item_url(id)?;
        debug!("🌐 DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> HttpVehicleClient {
        HttpVehicleClient::new(Url::parse(url).unwrap()).unwrap()
    }

    #[test]
    fn test_item_url_appends_id() {
        let client = client("https://example.com/test-task/vehicles");
        let url = client.item_url(&VehicleId::Number(12)).unwrap();
        assert_eq!(url.as_str(), "https://example.com/test-task/vehicles/12");
    }

    #[test]
    fn test_item_url_with_trailing_slash_and_text_id() {
        let client = client("https://example.com/vehicles/");
        let url = client.item_url(&VehicleId::from("a b/c")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/vehicles/a%20b%2Fc");
    }
}
