use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::body::CelestialBody;

/// Extended facts fetched per body for the info panel. Every field is
/// optional; missing values stay `None` and the consuming UI shows a
/// placeholder, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyDetail {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_gravity_ms2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_temp_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_velocity_kms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moons: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interesting_facts: Option<Vec<String>>,
}

impl BodyDetail {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Per-session cache of fetched details, keyed by body id. Kept apart
/// from the immutable catalog so a catalog reload never drops it.
#[derive(Debug, Default)]
pub struct DetailStore {
    details: HashMap<String, BodyDetail>,
}

impl DetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache a detail record under its own id, replacing any previous one.
    pub fn insert(&mut self, detail: BodyDetail) {
        self.details.insert(detail.id.clone(), detail);
    }

    pub fn get(&self, id: &str) -> Option<&BodyDetail> {
        self.details.get(id)
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

/// The payload of a selection event: the static record merged with any
/// cached detail, serialized flat the way the info panel expects.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedBody {
    #[serde(flatten)]
    pub body: CelestialBody,
    #[serde(flatten)]
    pub detail: BodyDetail,
}

impl SelectedBody {
    pub fn merge(body: &CelestialBody, detail: Option<&BodyDetail>) -> Self {
        Self {
            body: body.clone(),
            detail: detail.cloned().unwrap_or_default(),
        }
    }
}
