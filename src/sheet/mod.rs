pub mod cell_feed;
pub mod coordinates;
pub mod error;
pub mod fetch;
pub mod table;
pub mod transform;
