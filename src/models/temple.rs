//! Temple domain types and category resolution.
//!
//! The hosted backend is the source of truth for the temple roster; this
//! module defines the value types the engine consumes plus the static
//! id-to-category mapping used when a roster row carries no declared type.

use serde::{Deserialize, Serialize};

use crate::api::TempleId;

/// Fallback category for temples with no declared or mapped type.
pub const FALLBACK_TEMPLE_TYPE: &str = "Local Temple";

/// A temple roster entry as the engine consumes it.
///
/// Matches the `{id, name, type?}` shape the analytics entry point receives
/// from the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempleRef {
    pub id: TempleId,
    pub name: String,
    /// Declared temple category ("Jyotirlinga", "Devi Temple", ...).
    /// When absent the category is resolved from the static id mapping.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

impl TempleRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TempleId::new(id),
            name: name.into(),
            kind: None,
            district: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }
}

/// Static mapping of known temple ids to their categories.
///
/// Covers the reference data set of Madhya Pradesh temples. Ids not listed
/// here resolve to [`FALLBACK_TEMPLE_TYPE`].
const TEMPLE_TYPE_MAP: [(&str, &str); 10] = [
    ("mahakaleshwar", "Jyotirlinga"),
    ("omkareshwar", "Jyotirlinga"),
    ("kalbhairav", "Shiva Temple"),
    ("maihar", "Devi Temple"),
    ("salkanpur", "Devi Temple"),
    ("khajrana", "Ganesh Temple"),
    ("chintaman-ganesh", "Ganesh Temple"),
    ("bhojpur", "Shiva Temple"),
    ("jatashankar", "Shiva Temple"),
    ("kaal-bhairav-dhar", "Shiva Temple"),
];

/// Resolve the category for a temple.
///
/// A non-empty declared type always wins; otherwise the static id mapping is
/// consulted; otherwise the generic [`FALLBACK_TEMPLE_TYPE`] applies. Never
/// fails.
pub fn resolve_temple_type(temple_id: &str, declared_type: Option<&str>) -> String {
    if let Some(declared) = declared_type {
        if !declared.is_empty() {
            return declared.to_string();
        }
    }

    TEMPLE_TYPE_MAP
        .iter()
        .find(|(id, _)| *id == temple_id)
        .map(|(_, kind)| kind.to_string())
        .unwrap_or_else(|| FALLBACK_TEMPLE_TYPE.to_string())
}

/// Built-in roster of the six temples the public portal lists.
///
/// Used to seed the local repository when no external roster is configured.
pub fn seed_roster() -> Vec<TempleRef> {
    vec![
        TempleRef::new("mahakaleshwar", "Mahakaleshwar Temple")
            .with_kind("Jyotirlinga")
            .with_district("Ujjain"),
        TempleRef::new("omkareshwar", "Omkareshwar Temple")
            .with_kind("Jyotirlinga")
            .with_district("Khandwa"),
        TempleRef::new("kalbhairav", "Kal Bhairav Temple")
            .with_kind("Shiva Temple")
            .with_district("Ujjain"),
        TempleRef::new("maihar", "Maihar Temple (Maa Sharda Devi)")
            .with_kind("Devi Temple")
            .with_district("Satna"),
        TempleRef::new("salkanpur", "Salkanpur Temple")
            .with_kind("Devi Temple")
            .with_district("Sehore"),
        TempleRef::new("khajrana", "Khajrana Ganesh Temple")
            .with_kind("Ganesh Temple")
            .with_district("Indore"),
    ]
}
