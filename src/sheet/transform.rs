use crate::geofile::{
    feature::Feature,
    geojson::{feature_collection_to_string, features_to_feature_collection},
};

use super::{
    cell_feed::parse_cell_feed,
    coordinates::{has_coordinate_headers, point_from_properties, CoordinateMode},
    error::{SheetError, SheetResult},
    table::SheetTable,
};

/// Turn a raw cell feed body into one point feature per data row, in ascending row order.
///
/// Fails with `SheetError::InvalidSchema` when the header row lacks a longitude or a latitude column, and
/// with `SheetError::MalformedFeed` when the body is not a readable cell feed.
pub fn cell_feed_to_features(body: &str, mode: CoordinateMode) -> SheetResult<Vec<Feature>> {
    let cells = parse_cell_feed(body)?;
    let table = SheetTable::from_cells(cells);
    if !has_coordinate_headers(&table.headers) {
        log::info!(
            "Header row {:?} has no longitude/latitude column pair",
            table.headers.values().collect::<Vec<_>>()
        );
        return Err(SheetError::InvalidSchema);
    }

    Ok(table
        .rows
        .into_values()
        .map(|attributes| Feature {
            geometry: point_from_properties(&attributes, mode),
            attributes,
        })
        .collect())
}

pub fn cell_feed_to_geojson(body: &str, mode: CoordinateMode) -> SheetResult<String> {
    let features = cell_feed_to_features(body, mode)?;
    log::debug!("Converted cell feed to {} features", features.len());
    Ok(feature_collection_to_string(features_to_feature_collection(
        &features,
    )))
}

#[cfg(test)]
pub(crate) const NATIONAL_PARKS_FEED: &str = include_str!("../../fixtures/national-parks.json");
