//! Wire types for the pack service API.

use serde::{Deserialize, Serialize};

/// Raw card data as returned by "open pack".
///
/// The reference service is document-store backed and names the identifier
/// `_id`; plain `id` is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePackRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePackResponse {
    pub pack: PackDocument,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PackDocument {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenPackRequest<'a> {
    #[serde(rename = "packId")]
    pub pack_id: &'a str,
}
