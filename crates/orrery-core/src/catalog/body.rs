use serde::{Deserialize, Serialize};

use crate::color::Color;

/// What a catalog entry is. Closed set: unknown kinds never reach
/// runtime code, they fail at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// The central body. Drawn at the (panned) canvas center, no orbit.
    Star,
    /// Orbits the star on a circular guide.
    Planet,
}

/// A validated catalog entry.
///
/// For the star, `semi_major_axis_au` and `orbital_period_days` are 0 and
/// never fed to the orbital model; validation guarantees both are
/// strictly positive for every planet.
#[derive(Debug, Clone, Serialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    pub kind: BodyKind,
    pub radius_km: f64,
    pub semi_major_axis_au: f64,
    pub orbital_period_days: f64,
    pub color: Color,
    /// Position from the star, 1-based. Display-only.
    pub order: u32,
    /// Free-form classification ("terrestrial", "gas_giant", ...) carried
    /// through for the host UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl CelestialBody {
    pub fn star(id: &str, name: &str, radius_km: f64, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: BodyKind::Star,
            radius_km,
            semi_major_axis_au: 0.0,
            orbital_period_days: 0.0,
            color,
            order: 0,
            class: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn planet(
        id: &str,
        name: &str,
        order: u32,
        radius_km: f64,
        semi_major_axis_au: f64,
        orbital_period_days: f64,
        color: Color,
        class: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: BodyKind::Planet,
            radius_km,
            semi_major_axis_au,
            orbital_period_days,
            color,
            order,
            class: Some(class.into()),
        }
    }
}

/// Wire format of a catalog document, as served by the backend and as
/// embedded in the fallback table: one sun record plus a planet array.
#[derive(Debug, Deserialize)]
pub struct CatalogDoc {
    pub sun: SunRecord,
    pub planets: Vec<PlanetRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SunRecord {
    pub id: String,
    pub name: String,
    pub radius_km: f64,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanetRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: u32,
    pub radius_km: f64,
    pub semi_major_axis_au: f64,
    pub orbital_period_days: f64,
    pub color: String,
    #[serde(rename = "type", default)]
    pub class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_deserializes_lowercase() {
        let kind: BodyKind = serde_json::from_str("\"planet\"").unwrap();
        assert_eq!(kind, BodyKind::Planet);
        assert!(serde_json::from_str::<BodyKind>("\"comet\"").is_err());
    }

    #[test]
    fn planet_record_accepts_backend_shape() {
        let json = r##"{
            "id": "earth", "name": "Earth", "order": 3, "radius_km": 6371,
            "semi_major_axis_au": 1.0, "orbital_period_days": 365.25,
            "color": "#4169E1", "type": "terrestrial"
        }"##;
        let rec: PlanetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, "earth");
        assert_eq!(rec.class.as_deref(), Some("terrestrial"));
    }
}
