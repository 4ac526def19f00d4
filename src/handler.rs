use serde_json::json;

use crate::sheet::{
    coordinates::CoordinateMode,
    error::{SheetError, SheetResult},
    fetch::CellFeedSource,
    transform::cell_feed_to_geojson,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Attach permissive CORS headers to every response.
    pub cors: bool,
    pub coordinate_mode: CoordinateMode,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            cors: true,
            coordinate_mode: CoordinateMode::default(),
        }
    }
}

/// Transport independent response: a status code, headers and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    fn new(status_code: u16, body: String, options: &HandlerOptions) -> Self {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if options.cors {
            headers.push(("Access-Control-Allow-Origin".to_string(), "*".to_string()));
            headers.push((
                "Access-Control-Allow-Credentials".to_string(),
                "true".to_string(),
            ));
        }
        Self {
            status_code,
            headers,
            body,
        }
    }

    fn from_error(error: &SheetError, options: &HandlerOptions) -> Self {
        let body = json!({ "message": error.to_string() }).to_string();
        Self::new(error.status_code(), body, options)
    }
}

/// Fetch the spreadsheet with the given id and convert it to GeoJSON text.
pub fn convert_spreadsheet(
    id: Option<&str>,
    source: &dyn CellFeedSource,
    coordinate_mode: CoordinateMode,
) -> SheetResult<String> {
    let id = id.filter(|id| !id.is_empty()).ok_or(SheetError::MissingId)?;
    let body = source.fetch_cell_feed(id)?;
    cell_feed_to_geojson(&body, coordinate_mode)
}

/// Serve one request. Never fails: every error becomes a `{"message": ...}` response.
pub fn handle(id: Option<&str>, source: &dyn CellFeedSource, options: &HandlerOptions) -> Response {
    match convert_spreadsheet(id, source, options.coordinate_mode) {
        Ok(geojson) => Response::new(200, geojson, options),
        Err(error) => {
            log::warn!(
                "Request for spreadsheet {:?} failed with status {}: {}",
                id,
                error.status_code(),
                error
            );
            Response::from_error(&error, options)
        }
    }
}
