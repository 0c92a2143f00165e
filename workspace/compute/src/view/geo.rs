use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use model::RegionCoordinate;

/// A point feature at `coordinate` carrying `properties`.
pub(crate) fn point_feature(coordinate: RegionCoordinate, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        // GeoJSON positions are (longitude, latitude).
        geometry: Some(Geometry::new(Value::Point(vec![
            coordinate.longitude,
            coordinate.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub(crate) fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
