use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;

use crate::config::ServiceConfig;
use crate::pack::PackId;
use crate::service::error::ServiceError;
use crate::service::types::{CardRecord, CreatePackRequest, CreatePackResponse, OpenPackRequest};
use crate::service::PackService;

pub const CREATE_PACK_PATH: &str = "/api/packs/create-pack";
pub const OPEN_PACK_PATH: &str = "/api/packs/open";

/// Longest error body excerpt kept in a [`ServiceError::Status`].
const MAX_ERROR_BODY: usize = 256;

/// HTTP client for the pack service.
pub struct HttpPackService {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpPackService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(ServiceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        match timeout(self.request_timeout, self.do_post(&url, body)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_post<B, T>(&self, url: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ServiceError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            let mut message = String::from_utf8_lossy(&bytes).into_owned();
            if message.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| message.is_char_boundary(i))
                    .unwrap_or(0);
                message.truncate(cut);
            }
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PackService for HttpPackService {
    async fn create_pack(&self, name: &str) -> Result<PackId, ServiceError> {
        let response: CreatePackResponse = self
            .post_json(CREATE_PACK_PATH, &CreatePackRequest { name })
            .await?;

        if response.pack.id.trim().is_empty() {
            return Err(ServiceError::MissingPackId);
        }

        tracing::debug!(pack_id = %response.pack.id, pack = name, "Pack created");
        Ok(PackId::new(response.pack.id))
    }

    async fn open_pack(&self, pack_id: &PackId) -> Result<Vec<CardRecord>, ServiceError> {
        let records: Vec<CardRecord> = self
            .post_json(
                OPEN_PACK_PATH,
                &OpenPackRequest {
                    pack_id: pack_id.as_str(),
                },
            )
            .await?;

        tracing::debug!(pack_id = %pack_id, cards = records.len(), "Pack opened");
        Ok(records
            .into_iter()
            .map(|mut record| {
                record.image_url = resolve_image_url(&self.base_url, &record.image_url);
                record
            })
            .collect())
    }
}

/// Resolve a card image path against the service base URL.
///
/// The service hands out host-relative paths such as `/images/op01-001.png`;
/// absolute URLs are returned unchanged.
pub fn resolve_image_url(base_url: &str, image_url: &str) -> String {
    if image_url.starts_with("http://") || image_url.starts_with("https://") {
        return image_url.to_string();
    }
    if image_url.is_empty() {
        return String::new();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        image_url.trim_start_matches('/')
    )
}
