use std::{fs, io, path::Path};

use super::feature::Feature;

pub fn features_to_feature_collection(features: &[Feature]) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: features.iter().map(geojson::Feature::from).collect(),
        foreign_members: None,
    }
}

/// Compact GeoJSON text. Member and property order are stable, so equal input gives byte-identical output.
pub fn feature_collection_to_string(feature_collection: geojson::FeatureCollection) -> String {
    geojson::GeoJson::from(feature_collection).to_string()
}

pub fn write_geojson_to_file(geojson_contents: &str, output_filepath: &Path) -> io::Result<()> {
    fs::write(output_filepath, geojson_contents)
}
