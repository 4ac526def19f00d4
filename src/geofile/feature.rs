use crate::sheet::table::PropertyMap;

/// A point feature whose attributes are the raw string cells of one spreadsheet row.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: geo::Point,
    pub attributes: PropertyMap,
}

impl From<&Feature> for geojson::Feature {
    fn from(feature: &Feature) -> Self {
        let properties: geojson::JsonObject = feature
            .attributes
            .iter()
            .map(|(key, value)| (key.to_owned(), serde_json::Value::String(value.to_owned())))
            .collect();
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(
                &feature.geometry,
            ))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sheet::table::PropertyMap;

    use super::Feature;

    #[test]
    fn test_feature_to_geojson() {
        let attributes: PropertyMap = [("lng", "1.5"), ("lat", "-2"), ("name", "somewhere")]
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        let feature = Feature {
            geometry: geo::Point::new(1.5, -2.0),
            attributes,
        };

        let geojson_feature = geojson::Feature::from(&feature);

        let geometry = geojson_feature.geometry.unwrap();
        assert_eq!(geojson::Value::Point(vec![1.5, -2.0]), geometry.value);
        let properties = geojson_feature.properties.unwrap();
        let keys: Vec<&str> = properties.keys().map(|key| key.as_str()).collect();
        assert_eq!(vec!["lng", "lat", "name"], keys);
        assert_eq!(Some(&serde_json::json!("-2")), properties.get("lat"));
    }
}
