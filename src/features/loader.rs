use std::collections::BTreeMap;

use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;

/// Interprets a decoded WFS response as a GeoJSON feature collection.
pub fn feature_collection_from_value(value: Value) -> Result<FeatureCollection, geojson::Error> {
    let geojson = GeoJson::from_json_value(value)?;
    FeatureCollection::try_from(geojson)
}

/// Counts of what a feature collection holds, as printed by the CLI.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub features: usize,
    /// `numberMatched` as reported by GeoServer, when present.
    pub number_matched: Option<u64>,
    pub timestamp: Option<String>,
    pub geometries: BTreeMap<&'static str, usize>,
}

pub fn summarize(collection: &FeatureCollection) -> FeatureSummary {
    let mut summary = FeatureSummary {
        features: collection.features.len(),
        ..Default::default()
    };

    if let Some(members) = &collection.foreign_members {
        summary.number_matched = members
            .get("numberMatched")
            .or_else(|| members.get("totalFeatures"))
            .and_then(Value::as_u64);
        summary.timestamp = members
            .get("timeStamp")
            .and_then(Value::as_str)
            .map(str::to_string);
    }

    for feature in &collection.features {
        let name = match &feature.geometry {
            Some(geometry) => geometry_name(&geometry.value),
            None => "None",
        };
        *summary.geometries.entry(name).or_default() += 1;
    }
    summary
}

fn geometry_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_collection_is_accepted() {
        let collection =
            feature_collection_from_value(json!({"type": "FeatureCollection", "features": []}))
                .unwrap();
        assert!(collection.features.is_empty());
        assert_eq!(summarize(&collection).features, 0);
    }

    #[test]
    fn non_collection_is_rejected() {
        let point = json!({"type": "Point", "coordinates": [7.1, 50.7]});
        assert!(feature_collection_from_value(point).is_err());
        assert!(feature_collection_from_value(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn summary_reads_geoserver_members() {
        let collection = feature_collection_from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "Warnungen_Gemeinden.1",
                    "geometry": {"type": "Point", "coordinates": [7.1, 50.7]},
                    "properties": {"WARNCELLID": 807055017}
                },
                {
                    "type": "Feature",
                    "id": "Warnungen_Gemeinden.2",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[7.0, 50.0], [7.1, 50.0], [7.1, 50.1], [7.0, 50.0]]]
                    },
                    "properties": {}
                },
                {
                    "type": "Feature",
                    "geometry": null,
                    "properties": null
                }
            ],
            "numberMatched": 3,
            "numberReturned": 3,
            "timeStamp": "2026-10-16T08:00:00.000Z"
        }))
        .unwrap();

        let summary = summarize(&collection);
        assert_eq!(summary.features, 3);
        assert_eq!(summary.number_matched, Some(3));
        assert_eq!(summary.timestamp.as_deref(), Some("2026-10-16T08:00:00.000Z"));
        assert_eq!(summary.geometries.get("Point"), Some(&1));
        assert_eq!(summary.geometries.get("Polygon"), Some(&1));
        assert_eq!(summary.geometries.get("None"), Some(&1));
    }
}
