//! Remote pack and vocabulary item records.
//!
//! Field names follow the backend JSON (`pack_id`, `image_url`).

use serde::{Deserialize, Serialize};

/// Subject pack as served by the packs endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One vocabulary entry inside a pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub id: String,
    pub pack_id: String,
    pub label: String,
    #[serde(default)]
    pub say: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ascending sort key within the owning pack.
    #[serde(default)]
    pub order: i64,
}
