//! Building records and JSON portfolio loading

mod data;
pub mod loader;

pub use data::{BuildingRecord, RangeWarning};
pub use loader::{load_buildings, load_buildings_from_reader, load_default_data, DEFAULT_DATA_PATH};
