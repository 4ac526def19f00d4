use super::error::{SheetError, SheetResult};

pub const DEFAULT_FEED_URL_TEMPLATE: &str =
    "https://spreadsheets.google.com/feeds/cells/{id}/od6/public/basic?alt=json";
pub const DEFAULT_USER_AGENT: &str = "sheet2geojson";

/// Anything able to produce the raw cell feed body for a spreadsheet id.
pub trait CellFeedSource {
    fn fetch_cell_feed(&self, id: &str) -> SheetResult<String>;
}

pub fn get_cell_feed_url(url_template: &str, id: &str) -> String {
    url_template.replace("{id}", id)
}

/// Fetches the public cell feed over HTTP. A fresh client is built for every request and exactly one
/// GET is issued, without retries.
#[derive(Debug, Clone)]
pub struct HttpCellFeedSource {
    pub url_template: String,
    pub user_agent: String,
}

impl Default for HttpCellFeedSource {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_FEED_URL_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CellFeedSource for HttpCellFeedSource {
    fn fetch_cell_feed(&self, id: &str) -> SheetResult<String> {
        let url = get_cell_feed_url(&self.url_template, id);
        log::info!("Fetching cell feed from {}", url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()?;
        let response = client.get(&url).send()?;
        if response.status() != reqwest::StatusCode::OK {
            log::warn!(
                "Cell feed request for {} returned status {}",
                id,
                response.status()
            );
            return Err(SheetError::NotFound(id.to_string()));
        }
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{get_cell_feed_url, HttpCellFeedSource, DEFAULT_FEED_URL_TEMPLATE};

    #[rstest]
    #[case(
        "invalid-id-123",
        "https://spreadsheets.google.com/feeds/cells/invalid-id-123/od6/public/basic?alt=json"
    )]
    #[case(
        "test-id",
        "https://spreadsheets.google.com/feeds/cells/test-id/od6/public/basic?alt=json"
    )]
    fn test_get_cell_feed_url(#[case] id: &str, #[case] expected_url: &str) {
        assert_eq!(expected_url, get_cell_feed_url(DEFAULT_FEED_URL_TEMPLATE, id));
    }

    #[test]
    fn test_default_source_uses_google_template() {
        let source = HttpCellFeedSource::default();
        assert_eq!(DEFAULT_FEED_URL_TEMPLATE, source.url_template);
    }
}
