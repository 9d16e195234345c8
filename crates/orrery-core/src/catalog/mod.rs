pub mod body;
pub mod detail;

pub use body::{BodyKind, CelestialBody};
pub use detail::{BodyDetail, DetailStore, SelectedBody};

use thiserror::Error;

use crate::color::Color;
use body::{CatalogDoc, PlanetRecord};

/// Load-time failures that make a catalog document unusable. Callers fall
/// back to the previous catalog or to [`Catalog::builtin`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no usable planets")]
    Empty,
}

/// A per-entry data-integrity problem. The entry is dropped, not fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogWarning {
    pub id: String,
    pub reason: String,
}

/// The immutable set of bodies for one session: exactly one star plus the
/// planets in catalog order. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Catalog {
    star: CelestialBody,
    planets: Vec<CelestialBody>,
}

impl Catalog {
    /// Parse and validate a catalog document. Entries violating the data
    /// model (non-positive orbit parameters, negative radius, bad color)
    /// are dropped with a warning; a document that yields no planets at
    /// all is an error.
    pub fn from_json(json: &str) -> Result<(Self, Vec<CatalogWarning>), CatalogError> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        let mut warnings = Vec::new();

        let star_color = Color::from_hex(&doc.sun.color).unwrap_or_else(|| {
            warnings.push(CatalogWarning {
                id: doc.sun.id.clone(),
                reason: format!("unparseable color {:?}, using gray", doc.sun.color),
            });
            Color::GRAY
        });
        let star = CelestialBody::star(&doc.sun.id, &doc.sun.name, doc.sun.radius_km, star_color);

        let mut planets = Vec::with_capacity(doc.planets.len());
        for record in doc.planets {
            match validate_planet(record) {
                Ok(planet) => planets.push(planet),
                Err(warning) => warnings.push(warning),
            }
        }
        if planets.is_empty() {
            return Err(CatalogError::Empty);
        }

        for warning in &warnings {
            log::warn!("catalog entry {:?}: {}", warning.id, warning.reason);
        }
        Ok((Self { star, planets }, warnings))
    }

    /// The hardcoded sun-plus-eight-planets table used whenever no live
    /// catalog is available. Always renderable.
    pub fn builtin() -> Self {
        let p = |id, name, order, radius_km, au, days, hex: &str, class| {
            CelestialBody::planet(
                id,
                name,
                order,
                radius_km,
                au,
                days,
                Color::from_hex(hex).unwrap_or(Color::GRAY),
                class,
            )
        };
        Self {
            star: CelestialBody::star(
                "sun",
                "Sun",
                696_000.0,
                Color::from_hex("#FDB813").unwrap_or(Color::GRAY),
            ),
            planets: vec![
                p("mercury", "Mercury", 1, 2439.7, 0.387, 87.97, "#8C7853", "terrestrial"),
                p("venus", "Venus", 2, 6051.8, 0.723, 224.7, "#FFC649", "terrestrial"),
                p("earth", "Earth", 3, 6371.0, 1.0, 365.25, "#4169E1", "terrestrial"),
                p("mars", "Mars", 4, 3389.5, 1.524, 686.98, "#CD5C5C", "terrestrial"),
                p("jupiter", "Jupiter", 5, 69911.0, 5.204, 4332.59, "#DAA520", "gas_giant"),
                p("saturn", "Saturn", 6, 58232.0, 9.582, 10759.22, "#F4A460", "gas_giant"),
                p("uranus", "Uranus", 7, 25362.0, 19.19, 30688.5, "#4FD0E0", "ice_giant"),
                p("neptune", "Neptune", 8, 24622.0, 30.07, 60182.0, "#4169E1", "ice_giant"),
            ],
        }
    }

    pub fn star(&self) -> &CelestialBody {
        &self.star
    }

    /// Planets in catalog order (innermost first in the builtin table).
    pub fn planets(&self) -> &[CelestialBody] {
        &self.planets
    }

    /// Look up any body (star included) by id. Stale ids resolve to None.
    pub fn get(&self, id: &str) -> Option<&CelestialBody> {
        if self.star.id == id {
            return Some(&self.star);
        }
        self.planets.iter().find(|p| p.id == id)
    }

    /// Total body count, star included.
    pub fn len(&self) -> usize {
        self.planets.len() + 1
    }

    /// Never empty: a catalog always holds at least the star.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn validate_planet(record: PlanetRecord) -> Result<CelestialBody, CatalogWarning> {
    let warn = |record: &PlanetRecord, reason: String| CatalogWarning {
        id: record.id.clone(),
        reason,
    };
    // NaN fails both checks below, so it is rejected rather than let
    // through into per-frame math.
    if record.orbital_period_days.is_nan() || record.orbital_period_days <= 0.0 {
        return Err(warn(
            &record,
            format!("orbital_period_days = {} must be positive", record.orbital_period_days),
        ));
    }
    if record.semi_major_axis_au.is_nan() || record.semi_major_axis_au <= 0.0 {
        return Err(warn(
            &record,
            format!("semi_major_axis_au = {} must be positive", record.semi_major_axis_au),
        ));
    }
    if record.radius_km < 0.0 {
        return Err(warn(&record, format!("radius_km = {} is negative", record.radius_km)));
    }
    let color = match Color::from_hex(&record.color) {
        Some(color) => color,
        None => return Err(warn(&record, format!("unparseable color {:?}", record.color))),
    };
    Ok(CelestialBody {
        id: record.id,
        name: record.name,
        kind: BodyKind::Planet,
        radius_km: record.radius_km,
        semi_major_axis_au: record.semi_major_axis_au,
        orbital_period_days: record.orbital_period_days,
        color,
        order: record.order,
        class: record.class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_one_star_plus_eight_planets() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.star().kind, BodyKind::Star);
        assert_eq!(catalog.planets().len(), 8);
        let earth = catalog.get("earth").unwrap();
        assert_eq!(earth.semi_major_axis_au, 1.0);
        assert_eq!(earth.orbital_period_days, 365.25);
    }

    #[test]
    fn builtin_planets_are_ordered_outward() {
        let catalog = Catalog::builtin();
        for pair in catalog.planets().windows(2) {
            assert!(pair[0].semi_major_axis_au < pair[1].semi_major_axis_au);
        }
    }

    #[test]
    fn loads_valid_document() {
        let json = r##"{
            "sun": { "id": "sol", "name": "Sol", "radius_km": 696000, "color": "#FDB813" },
            "planets": [
                { "id": "earth", "name": "Earth", "order": 1, "radius_km": 6371,
                  "semi_major_axis_au": 1.0, "orbital_period_days": 365.25,
                  "color": "#4169E1", "type": "terrestrial" }
            ]
        }"##;
        let (catalog, warnings) = Catalog::from_json(json).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(catalog.star().id, "sol");
        assert_eq!(catalog.planets().len(), 1);
    }

    #[test]
    fn drops_entries_with_bad_orbit_data() {
        let json = r##"{
            "sun": { "id": "sun", "name": "Sun", "radius_km": 696000, "color": "#FDB813" },
            "planets": [
                { "id": "ok", "name": "Ok", "radius_km": 1000,
                  "semi_major_axis_au": 1.0, "orbital_period_days": 100.0, "color": "#FFFFFF" },
                { "id": "frozen", "name": "Frozen", "radius_km": 1000,
                  "semi_major_axis_au": 2.0, "orbital_period_days": 0.0, "color": "#FFFFFF" },
                { "id": "inside-out", "name": "InsideOut", "radius_km": 1000,
                  "semi_major_axis_au": -1.0, "orbital_period_days": 50.0, "color": "#FFFFFF" },
                { "id": "unpainted", "name": "Unpainted", "radius_km": 1000,
                  "semi_major_axis_au": 3.0, "orbital_period_days": 200.0, "color": "grue" }
            ]
        }"##;
        let (catalog, warnings) = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.planets().len(), 1);
        assert_eq!(warnings.len(), 3);
        let dropped: Vec<&str> = warnings.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(dropped, ["frozen", "inside-out", "unpainted"]);
    }

    #[test]
    fn all_planets_dropped_is_an_error() {
        let json = r##"{
            "sun": { "id": "sun", "name": "Sun", "radius_km": 696000, "color": "#FDB813" },
            "planets": [
                { "id": "bad", "name": "Bad", "radius_km": 1000,
                  "semi_major_axis_au": 1.0, "orbital_period_days": -5.0, "color": "#FFFFFF" }
            ]
        }"##;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Empty)));
    }

    #[test]
    fn empty_planet_array_is_an_error() {
        let json = r##"{
            "sun": { "id": "sun", "name": "Sun", "radius_km": 696000, "color": "#FDB813" },
            "planets": []
        }"##;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Empty)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn stale_id_lookup_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("pluto").is_none());
    }
}
