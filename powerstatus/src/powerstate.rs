use serde::{Deserialize, Serialize};
use std::fmt;

/// Power state inferred by the endpoint from recent charge readings.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
	Charging,
	ChargingStable,
	TrickleCharge,
	AcDirect,
	BatteryCare,
	HeavyLoad,
	Discharging,
	BatteryStable,
}

impl PowerState {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Charging => "charging",
			Self::ChargingStable => "charging_stable",
			Self::TrickleCharge => "trickle_charge",
			Self::AcDirect => "ac_direct",
			Self::BatteryCare => "battery_care",
			Self::HeavyLoad => "heavy_load",
			Self::Discharging => "discharging",
			Self::BatteryStable => "battery_stable",
		}
	}

	fn from_literal(value: &str) -> Option<Self> {
		let state = match value.to_ascii_lowercase().as_str() {
			"charging" => Self::Charging,
			"charging_stable" => Self::ChargingStable,
			"trickle_charge" => Self::TrickleCharge,
			"ac_direct" => Self::AcDirect,
			"battery_care" => Self::BatteryCare,
			"heavy_load" => Self::HeavyLoad,
			"discharging" => Self::Discharging,
			"battery_stable" => Self::BatteryStable,
			_ => return None,
		};
		Some(state)
	}
}

impl fmt::Display for PowerState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A `powerState` literal outside the known set.
#[derive(Debug)]
pub struct UnknownPowerStateLiteral(String);

impl UnknownPowerStateLiteral {
	pub fn literal(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for UnknownPowerStateLiteral {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Self(literal) = self;
		write!(f, "Unknown literal for PowerState: {literal}")
	}
}

impl std::error::Error for UnknownPowerStateLiteral {}

impl TryFrom<String> for PowerState {
	type Error = UnknownPowerStateLiteral;
	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_literal(&value).ok_or(UnknownPowerStateLiteral(value))
	}
}

#[cfg(test)]
mod tests {
	use super::PowerState;

	#[test]
	fn parses_literals_case_insensitively() {
		assert_eq!(
			PowerState::try_from(String::from("ac_direct")).ok(),
			Some(PowerState::AcDirect)
		);
		assert_eq!(
			PowerState::try_from(String::from("HEAVY_LOAD")).ok(),
			Some(PowerState::HeavyLoad)
		);
	}

	#[test]
	fn rejects_unknown_literal() {
		let error = PowerState::try_from(String::from("hibernating")).unwrap_err();
		assert_eq!(error.literal(), "hibernating");
		assert_eq!(
			error.to_string(),
			"Unknown literal for PowerState: hibernating"
		);
	}

	#[test]
	fn deserializes_snake_case() {
		let state: PowerState = serde_json::from_str("\"battery_stable\"").unwrap();
		assert_eq!(state, PowerState::BatteryStable);
		assert_eq!(state.to_string(), "battery_stable");
	}
}
