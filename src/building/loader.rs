//! Load buildings from a portfolio JSON file

use super::{BuildingRecord, RangeWarning};
use crate::error::{LossError, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default portfolio data file, read from the working directory
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Raw JSON object as it appears in the data file.
///
/// Every field is optional here so an absent key is reported by name
/// instead of as a generic deserialization failure.
#[derive(Debug, serde::Deserialize)]
struct RawBuilding {
    #[serde(rename = "buildingId")]
    building_id: Option<String>,
    floor_area: Option<f64>,
    construction_cost: Option<f64>,
    hazard_probability: Option<f64>,
    inflation_rate: Option<f64>,
}

impl RawBuilding {
    fn into_record(self, index: usize) -> Result<BuildingRecord> {
        let building_id = self.building_id.ok_or_else(|| LossError::MissingField {
            index,
            building_id: format!("#{}", index),
            field: "buildingId",
        })?;

        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or_else(|| LossError::MissingField {
                index,
                building_id: building_id.clone(),
                field,
            })
        };

        let floor_area = require(self.floor_area, "floor_area")?;
        let construction_cost = require(self.construction_cost, "construction_cost")?;
        let hazard_probability = require(self.hazard_probability, "hazard_probability")?;
        let inflation_rate = require(self.inflation_rate, "inflation_rate")?;

        Ok(BuildingRecord {
            building_id,
            floor_area,
            construction_cost,
            hazard_probability,
            inflation_rate,
        })
    }
}

fn log_range_warnings(building: &BuildingRecord) {
    for warning in building.range_warnings() {
        match warning {
            RangeWarning::HazardProbability(p) => warn!(
                "Building {}: hazard probability {} is outside [0, 1]",
                building.building_id, p
            ),
            RangeWarning::InflationRate(r) => warn!(
                "Building {}: negative inflation rate {}",
                building.building_id, r
            ),
            RangeWarning::FloorArea(a) => warn!(
                "Building {}: non-positive floor area {}",
                building.building_id, a
            ),
            RangeWarning::ConstructionCost(c) => warn!(
                "Building {}: non-positive construction cost {}",
                building.building_id, c
            ),
        }
    }
}

/// Load buildings from any reader (e.g., string buffer, open file).
///
/// Input order is preserved. Fails on the first malformed or incomplete record.
pub fn load_buildings_from_reader<R: Read>(reader: R) -> Result<Vec<BuildingRecord>> {
    let raw: Vec<RawBuilding> = serde_json::from_reader(reader)?;
    let mut buildings = Vec::with_capacity(raw.len());

    for (index, row) in raw.into_iter().enumerate() {
        let building = row.into_record(index)?;
        log_range_warnings(&building);
        buildings.push(building);
    }

    Ok(buildings)
}

/// Load all buildings from a JSON file
pub fn load_buildings<P: AsRef<Path>>(path: P) -> Result<Vec<BuildingRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LossError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let buildings = load_buildings_from_reader(BufReader::new(file))?;
    info!("Loaded {} buildings from {}", buildings.len(), path.display());
    Ok(buildings)
}

/// Load buildings from the default data.json location
pub fn load_default_data() -> Result<Vec<BuildingRecord>> {
    load_buildings(DEFAULT_DATA_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"buildingId": "B1", "floor_area": 1000, "construction_cost": 100000,
         "hazard_probability": 0.1, "inflation_rate": 0.02},
        {"buildingId": "B2", "floor_area": 2500.5, "construction_cost": 350000.0,
         "hazard_probability": 0.05, "inflation_rate": 0.03}
    ]"#;

    #[test]
    fn test_load_preserves_order_and_values() {
        let buildings = load_buildings_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(buildings.len(), 2);

        assert_eq!(buildings[0], BuildingRecord::new("B1", 1000.0, 100_000.0, 0.1, 0.02));
        assert_eq!(buildings[1].building_id, "B2");
        assert_eq!(buildings[1].floor_area, 2500.5);
    }

    #[test]
    fn test_empty_array_loads_nothing() {
        let buildings = load_buildings_from_reader("[]".as_bytes()).unwrap();
        assert!(buildings.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = load_buildings_from_reader(r#"[{"buildingId": "B1","#.as_bytes()).unwrap_err();
        assert!(matches!(err, LossError::Parse(_)));
    }

    #[test]
    fn test_non_array_is_parse_error() {
        let err = load_buildings_from_reader(r#"{"buildingId": "B1"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LossError::Parse(_)));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let json = r#"[{"buildingId": "B1", "floor_area": "big", "construction_cost": 1,
                        "hazard_probability": 0.1, "inflation_rate": 0.02}]"#;
        let err = load_buildings_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, LossError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_named() {
        let json = r#"[
            {"buildingId": "B1", "floor_area": 1000, "construction_cost": 100000,
             "hazard_probability": 0.1, "inflation_rate": 0.02},
            {"buildingId": "B2", "floor_area": 1000, "construction_cost": 100000,
             "inflation_rate": 0.02}
        ]"#;

        match load_buildings_from_reader(json.as_bytes()).unwrap_err() {
            LossError::MissingField { index, building_id, field } => {
                assert_eq!(index, 1);
                assert_eq!(building_id, "B2");
                assert_eq!(field, "hazard_probability");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_building_id_is_named() {
        let json = r#"[{"floor_area": 1000, "construction_cost": 100000,
                        "hazard_probability": 0.1, "inflation_rate": 0.02}]"#;

        match load_buildings_from_reader(json.as_bytes()).unwrap_err() {
            LossError::MissingField { index, field, .. } => {
                assert_eq!(index, 0);
                assert_eq!(field, "buildingId");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let json = r#"[{"buildingId": "B1", "floor_area": 1000, "construction_cost": 100000,
                        "hazard_probability": 1.4, "inflation_rate": -0.02}]"#;
        let buildings = load_buildings_from_reader(json.as_bytes()).unwrap();
        assert_eq!(buildings[0].hazard_probability, 1.4);
        assert_eq!(buildings[0].inflation_rate, -0.02);
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let err = load_buildings("definitely/not/here/data.json").unwrap_err();
        assert!(matches!(err, LossError::InputNotFound { .. }));
    }
}
