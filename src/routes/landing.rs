use serde::{Deserialize, Serialize};

use crate::api::TempleId;

/// Temple information shown on the portal landing/directory pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempleInfo {
    pub id: TempleId,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

pub const LIST_TEMPLES: &str = "list_temples";

impl From<crate::api::TempleRef> for TempleInfo {
    fn from(temple: crate::api::TempleRef) -> Self {
        Self {
            id: temple.id,
            name: temple.name,
            kind: temple.kind,
            district: temple.district,
        }
    }
}
