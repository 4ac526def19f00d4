use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::table::{HeaderMap, PropertyMap};

pub const LONGITUDE_LABELS: [&str; 10] = [
    "longitude", "LONGITUDE", "long", "LONG", "lng", "LNG", "lon", "LON", "x", "X",
];
pub const LATITUDE_LABELS: [&str; 6] = ["latitude", "LATITUDE", "lat", "LAT", "y", "Y"];

static NUMBER_PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").unwrap());

/// How longitude columns feed the point coordinates.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// A longitude column sets x and also overwrites y, until a later latitude column sets y again.
    /// Published sheets rely on this, so it stays the default.
    #[default]
    Legacy,
    /// Longitude columns only ever set x.
    Strict,
}

pub fn is_longitude_label(label: &str) -> bool {
    LONGITUDE_LABELS.contains(&label)
}

pub fn is_latitude_label(label: &str) -> bool {
    LATITUDE_LABELS.contains(&label)
}

/// True when the header row names at least one longitude column and at least one latitude column.
pub fn has_coordinate_headers(headers: &HeaderMap) -> bool {
    let has_longitude = headers.values().any(|header| is_longitude_label(header));
    let has_latitude = headers.values().any(|header| is_latitude_label(header));
    has_longitude && has_latitude
}

/// Read a coordinate from free cell text.
///
/// Leading whitespace is skipped and the longest leading decimal number is used, ignoring whatever follows
/// it ("12.5 deg" reads as 12.5). Empty text, text without a leading number and out of range values all
/// read as 0.
pub fn parse_coordinate(value: &str) -> f64 {
    NUMBER_PREFIX_PATTERN
        .find(value.trim_start())
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

/// Derive the point for one row from its properties, visited in insertion order.
pub fn point_from_properties(properties: &PropertyMap, mode: CoordinateMode) -> geo::Point {
    let mut x = 0.0;
    let mut y = 0.0;
    for (name, value) in properties {
        if is_longitude_label(name) {
            x = parse_coordinate(value);
            if mode == CoordinateMode::Legacy {
                y = x;
            }
        } else if is_latitude_label(name) {
            y = parse_coordinate(value);
        }
    }
    geo::Point::new(x, y)
}
