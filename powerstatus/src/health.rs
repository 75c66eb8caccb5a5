use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BatteryHealth {
	/// Capacity the battery was designed for, in mWh.
	pub design_capacity: Option<u64>,
	/// Capacity the battery currently holds when full, in mWh.
	pub full_charge_capacity: Option<u64>,
	pub cycle_count: Option<u32>,
	/// Full charge capacity as a percentage of design capacity.
	pub battery_health: Option<f64>,
	pub battery_condition: BatteryCondition,
}

impl BatteryHealth {
	/// Returns the reported health percentage, or derives it from the
	/// capacities when the endpoint left it out.
	pub fn percentage(&self) -> Option<f64> {
		if let Some(health) = self.battery_health {
			return Some(health);
		}
		match (self.design_capacity, self.full_charge_capacity) {
			(Some(design), Some(full)) if design > 0 => {
				let health = full as f64 / design as f64 * 100.0;
				Some((health * 10.0).round() / 10.0)
			}
			_ => None,
		}
	}

	/// Returns the reported condition, falling back to one derived from the
	/// health percentage.
	pub fn condition(&self) -> BatteryCondition {
		match (self.battery_condition, self.percentage()) {
			(BatteryCondition::Unknown, Some(health)) => BatteryCondition::from_percentage(health),
			(condition, _) => condition,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum BatteryCondition {
	Excellent,
	Good,
	Fair,
	Poor,
	#[serde(rename = "Replace Soon")]
	ReplaceSoon,
	#[default]
	Unknown,
}

impl BatteryCondition {
	pub fn from_percentage(health: f64) -> Self {
		if health >= 90.0 {
			Self::Excellent
		} else if health >= 70.0 {
			Self::Good
		} else if health >= 50.0 {
			Self::Fair
		} else if health >= 30.0 {
			Self::Poor
		} else {
			Self::ReplaceSoon
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Excellent => "Excellent",
			Self::Good => "Good",
			Self::Fair => "Fair",
			Self::Poor => "Poor",
			Self::ReplaceSoon => "Replace Soon",
			Self::Unknown => "Unknown",
		}
	}
}

impl fmt::Display for BatteryCondition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
