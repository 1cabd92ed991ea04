//! Remote pack service.
//!
//! The service is consumed as a black box through [`PackService`]: "create
//! pack" hands out a pack id, "open pack" returns the ordered card records of
//! that pack. [`HttpPackService`] speaks the reference HTTP/JSON API.

mod client;
mod error;
mod types;

use async_trait::async_trait;

use crate::pack::PackId;

pub use client::{resolve_image_url, HttpPackService, CREATE_PACK_PATH, OPEN_PACK_PATH};
pub use error::ServiceError;
pub use types::CardRecord;

/// Collaborator that creates and opens packs.
///
/// Implementations must not retry on their own; the lifecycle controller
/// decides what a failure means.
#[async_trait]
pub trait PackService: Send + Sync {
    /// Create a new pack of the given type and return its id.
    async fn create_pack(&self, name: &str) -> Result<PackId, ServiceError>;

    /// Open a previously created pack, returning its cards in reveal order.
    async fn open_pack(&self, pack_id: &PackId) -> Result<Vec<CardRecord>, ServiceError>;
}
