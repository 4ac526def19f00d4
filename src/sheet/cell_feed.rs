use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::error::{SheetError, SheetResult};

static ROW_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static COLUMN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

#[derive(Deserialize, Debug)]
pub struct CellFeedDocument {
    pub feed: CellFeed,
}

#[derive(Deserialize, Debug)]
pub struct CellFeed {
    #[serde(default)]
    pub entry: Vec<CellEntry>,
}

#[derive(Deserialize, Debug)]
pub struct CellEntry {
    pub title: TextNode,
    #[serde(default)]
    pub content: TextNode,
}

/// The feed wraps every string value in an object like `{"$t": "..."}`.
#[derive(Deserialize, Debug, Default)]
pub struct TextNode {
    #[serde(rename = "$t", default)]
    pub text: String,
}

/// A single addressed cell, e.g. title "B3" becomes row 3, column "B".
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub column: String,
    pub content: String,
}

impl TryFrom<CellEntry> for Cell {
    type Error = SheetError;

    fn try_from(entry: CellEntry) -> SheetResult<Self> {
        let label = entry.title.text;
        let row = ROW_PATTERN
            .find(&label)
            .ok_or_else(|| {
                SheetError::MalformedFeed(format!("No row number in cell label '{}'", label))
            })?
            .as_str()
            .parse::<u32>()
            .map_err(|err| {
                SheetError::MalformedFeed(format!(
                    "Invalid row number in cell label '{}': {}",
                    label, err
                ))
            })?;
        let column = COLUMN_PATTERN
            .find(&label)
            .ok_or_else(|| {
                SheetError::MalformedFeed(format!("No column letters in cell label '{}'", label))
            })?
            .as_str()
            .to_string();
        Ok(Self {
            row,
            column,
            content: entry.content.text,
        })
    }
}

/// Parse a raw cell feed body into cells, in feed order.
pub fn parse_cell_feed(body: &str) -> SheetResult<Vec<Cell>> {
    let document: CellFeedDocument = serde_json::from_str(body)?;
    log::debug!("Cell feed has {} entries", document.feed.entry.len());
    document
        .feed
        .entry
        .into_iter()
        .map(Cell::try_from)
        .collect()
}
