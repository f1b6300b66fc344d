//! Building data structures matching the portfolio JSON format

/// A single building from the portfolio data file
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRecord {
    /// Identifier, expected to be unique within a dataset
    pub building_id: String,

    /// Floor area in square meters
    pub floor_area: f64,

    /// Current construction cost in currency units
    pub construction_cost: f64,

    /// Annual probability of a damaging hazard event
    pub hazard_probability: f64,

    /// Annual fractional rate of cost increase
    pub inflation_rate: f64,
}

/// Input values that fall outside their expected range.
///
/// These are reported, never rejected: the formulas accept any real input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeWarning {
    /// Hazard probability outside [0, 1]
    HazardProbability(f64),
    /// Negative inflation rate
    InflationRate(f64),
    /// Non-positive floor area
    FloorArea(f64),
    /// Non-positive construction cost
    ConstructionCost(f64),
}

impl BuildingRecord {
    pub fn new(
        building_id: impl Into<String>,
        floor_area: f64,
        construction_cost: f64,
        hazard_probability: f64,
        inflation_rate: f64,
    ) -> Self {
        Self {
            building_id: building_id.into(),
            floor_area,
            construction_cost,
            hazard_probability,
            inflation_rate,
        }
    }

    /// Check inputs against their documented ranges
    pub fn range_warnings(&self) -> Vec<RangeWarning> {
        let mut warnings = Vec::new();

        if !(0.0..=1.0).contains(&self.hazard_probability) {
            warnings.push(RangeWarning::HazardProbability(self.hazard_probability));
        }
        if self.inflation_rate < 0.0 {
            warnings.push(RangeWarning::InflationRate(self.inflation_rate));
        }
        if self.floor_area <= 0.0 {
            warnings.push(RangeWarning::FloorArea(self.floor_area));
        }
        if self.construction_cost <= 0.0 {
            warnings.push(RangeWarning::ConstructionCost(self.construction_cost));
        }

        warnings
    }
}
