use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::cell_feed::Cell;

/// Column letters to header names, taken from row 1.
pub type HeaderMap = IndexMap<String, String>;

/// Header name to cell content for one row, in the order the cells were seen.
pub type PropertyMap = IndexMap<String, String>;

/// Row number to its properties, iterated in ascending row order.
pub type RowMap = BTreeMap<u32, PropertyMap>;

#[derive(Debug, Default)]
pub struct SheetTable {
    pub headers: HeaderMap,
    pub rows: RowMap,
}

impl SheetTable {
    /// Rebuild the table from individually addressed cells in a single pass.
    ///
    /// Row 1 holds the headers. A data cell is keyed by the header of its column as known when the cell is
    /// reached, and is dropped if that column has no header. Its row is still created, so a row made only
    /// of headerless cells becomes an empty property map.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        let mut table = SheetTable::default();
        for cell in cells {
            match cell.row {
                0 => log::debug!("Dropping cell {} with row 0", cell.column),
                1 => {
                    table.headers.insert(cell.column, cell.content);
                }
                row => {
                    let properties = table.rows.entry(row).or_default();
                    match table.headers.get(&cell.column) {
                        Some(header) => {
                            properties.insert(header.clone(), cell.content);
                        }
                        None => log::debug!(
                            "Dropping cell {}{} because its column has no header",
                            cell.column,
                            row
                        ),
                    }
                }
            }
        }
        log::debug!(
            "Rebuilt table with {} headers and {} rows",
            table.headers.len(),
            table.rows.len()
        );
        table
    }
}
