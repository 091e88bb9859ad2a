//! Street network data structures and GeoJSON parsing.

use super::GeoBoundingBox;
use crate::error::LoadError;
use geo_types::Coord;
use geojson::{Feature, Geometry, Value};

/// Ordered vertices of one connected line, x = longitude, y = latitude.
pub type Polyline = Vec<Coord<f64>>;

/// Property holding the street name in the road centerline data.
const NAME_PROPERTY: &str = "RDNAME";

/// Line geometry as it appears in the source data.
#[derive(Debug, Clone, PartialEq)]
pub enum StreetGeometry {
    /// A single line (GeoJSON `LineString`)
    Single(Polyline),
    /// Several disjoint lines (GeoJSON `MultiLineString`)
    Multi(Vec<Polyline>),
}

impl StreetGeometry {
    /// Converts a GeoJSON geometry. Non-line geometry types yield `None`.
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        match &geometry.value {
            Value::LineString(coords) => Some(Self::Single(to_polyline(coords))),
            Value::MultiLineString(lines) => Some(Self::Multi(
                lines.iter().map(|line| to_polyline(line)).collect(),
            )),
            _ => None,
        }
    }

    /// Normalizes into the uniform list-of-paths form.
    pub fn into_paths(self) -> Vec<Polyline> {
        match self {
            Self::Single(line) => vec![line],
            Self::Multi(lines) => lines,
        }
    }
}

/// A named street made of one or more polylines.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetFeature {
    pub name: String,
    pub paths: Vec<Polyline>,
}

impl StreetFeature {
    pub fn new(name: impl Into<String>, geometry: StreetGeometry) -> Self {
        Self {
            name: name.into(),
            paths: geometry.into_paths(),
        }
    }

    /// Number of drawable segments (consecutive vertex pairs) across all paths.
    pub fn segment_count(&self) -> usize {
        self.paths
            .iter()
            .map(|path| path.len().saturating_sub(1))
            .sum()
    }

    /// Returns true if any vertex or segment of the street touches `bounds`.
    pub fn intersects(&self, bounds: &GeoBoundingBox) -> bool {
        self.paths.iter().any(|path| match path.as_slice() {
            [single] => bounds.contains(*single),
            _ => path
                .windows(2)
                .any(|pair| bounds.intersects_segment(pair[0], pair[1])),
        })
    }
}

/// Parses a GeoJSON document into streets.
///
/// Only `LineString` and `MultiLineString` features are kept; anything else,
/// including features that fail to decode, is skipped without error.
pub fn parse_streets(geojson_str: &str) -> Result<Vec<StreetFeature>, LoadError> {
    let document: serde_json::Value = serde_json::from_str(geojson_str)?;

    let kind = document
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("unknown")
        .to_string();

    let raw_features = match kind.as_str() {
        "FeatureCollection" => match document {
            serde_json::Value::Object(mut object) => match object.remove("features") {
                Some(serde_json::Value::Array(features)) => features,
                _ => return Err(LoadError::NotAFeatureCollection(kind)),
            },
            _ => return Err(LoadError::NotAFeatureCollection(kind)),
        },
        "Feature" => vec![document],
        _ => return Err(LoadError::NotAFeatureCollection(kind)),
    };

    let total = raw_features.len();
    let streets: Vec<StreetFeature> = raw_features
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match Feature::from_json_value(value) {
            Ok(feature) => convert_feature(&feature),
            Err(e) => {
                log::debug!("Skipping malformed feature #{}: {}", idx, e);
                None
            }
        })
        .collect();

    if streets.len() < total {
        log::debug!(
            "Skipped {} of {} features without line geometry",
            total - streets.len(),
            total
        );
    }

    Ok(streets)
}

/// Keeps only streets that intersect `bounds`.
pub fn crop_to_bounds(streets: Vec<StreetFeature>, bounds: &GeoBoundingBox) -> Vec<StreetFeature> {
    streets
        .into_iter()
        .filter(|street| street.intersects(bounds))
        .collect()
}

fn convert_feature(feature: &Feature) -> Option<StreetFeature> {
    let name = feature
        .properties
        .as_ref()
        .and_then(|p| p.get(NAME_PROPERTY))
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    feature
        .geometry
        .as_ref()
        .and_then(StreetGeometry::from_geometry)
        .map(|geometry| StreetFeature::new(name, geometry))
}

fn to_polyline(positions: &[Vec<f64>]) -> Polyline {
    positions
        .iter()
        .filter_map(|p| match p.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            _ => None,
        })
        .collect()
}
