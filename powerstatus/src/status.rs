use crate::{BatteryHealth, PowerState, UNAVAILABLE_MESSAGE};
use serde::{Deserialize, Deserializer, Serialize};

/// A snapshot of the device's power state as served by the endpoint.
///
/// Every field may be missing on the wire: the endpoint's error payload is
/// just `{"error": "...", "hasBattery": false}`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerStatus {
	pub has_battery: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,

	/// AC adapter connected.
	pub power_plugged: bool,
	/// Human readable label for the power source, e.g. "AC Adapter".
	pub power_source: String,
	/// Human readable charge status, e.g. "Charging".
	pub status: String,
	/// Charge level between 0 and 100.
	pub battery_percent: f64,
	/// Pre-formatted duration such as "1h 2m".
	pub time_remaining: Option<String>,
	pub is_charging: bool,

	/// Incoming wattage.
	pub power_input_watts: f64,
	/// System draw in Watts.
	pub power_consumption_watts: f64,

	/// Voltage in Volts on the active side.
	pub voltage: Option<f64>,
	/// Current in Amps on the active side.
	pub current: Option<f64>,
	pub ac_voltage: Option<f64>,
	pub ac_current: Option<f64>,
	pub battery_voltage: Option<f64>,
	pub battery_current: Option<f64>,

	/// Unknown literals are read as absent.
	#[serde(deserialize_with = "lenient_power_state")]
	pub power_state: Option<PowerState>,
	/// Label for the power state detail badge.
	pub power_state_text: Option<String>,
	pub battery_in_use: bool,
	pub battery_charging: bool,
	pub battery_bypassed: bool,

	pub power_flow: Option<PowerFlow>,
	pub battery_health: Option<BatteryHealth>,
}

/// Wattage flowing between AC input, battery and system.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerFlow {
	pub ac_input: f64,
	/// Positive while charging, negative while the battery drains.
	pub to_battery: f64,
	pub to_system: f64,
	pub from_battery: f64,
}

impl PowerStatus {
	/// Creates the error state used in place of a snapshot that could not be
	/// fetched.
	pub fn from_error(message: impl Into<String>) -> Self {
		Self {
			error: Some(message.into()),
			..Default::default()
		}
	}

	/// Returns why the snapshot cannot be displayed, if it cannot.
	///
	/// An empty error string counts as no error.
	pub fn unavailable_reason(&self) -> Option<&str> {
		match self.error.as_deref() {
			Some(error) if !error.is_empty() => Some(error),
			_ if !self.has_battery => Some(UNAVAILABLE_MESSAGE),
			_ => None,
		}
	}

	pub fn bypassed(&self) -> bool {
		self.battery_bypassed
	}

	pub fn charging(&self) -> bool {
		self.battery_charging
	}

	pub fn in_use(&self) -> bool {
		self.battery_in_use
	}
}

fn lenient_power_state<'de, D>(deserializer: D) -> Result<Option<PowerState>, D::Error>
where
	D: Deserializer<'de>,
{
	let literal = Option::<String>::deserialize(deserializer)?;
	Ok(literal.and_then(|literal| PowerState::try_from(literal).ok()))
}

#[cfg(test)]
mod tests {
	use super::*;

	// Captured from the endpoint while charging on AC.
	const CHARGING: &str = r#"{
		"hasBattery": true,
		"batteryPercent": 82.6,
		"powerPlugged": true,
		"powerSource": "AC Adapter",
		"powerInputWatts": 65,
		"powerConsumptionWatts": 52.0,
		"timeRemaining": null,
		"isCharging": true,
		"status": "Charging",
		"voltage": 19.0,
		"current": 3.42,
		"acVoltage": 19.0,
		"acCurrent": 3.42,
		"batteryVoltage": 11.1,
		"batteryCurrent": 0,
		"powerState": "charging",
		"powerStateText": "Charging (Using AC + Charging Battery)",
		"batteryInUse": false,
		"batteryCharging": true,
		"batteryBypassed": false,
		"powerFlow": {"acInput": 65, "toBattery": 19.5, "toSystem": 45.5, "fromBattery": 0},
		"batteryHealth": {"designCapacity": 57000, "fullChargeCapacity": 51300, "cycleCount": 87, "batteryHealth": 90.0, "batteryCondition": "Excellent"}
	}"#;

	#[test]
	fn parses_charging_snapshot() {
		let status: PowerStatus = serde_json::from_str(CHARGING).unwrap();
		assert!(status.has_battery);
		assert_eq!(status.unavailable_reason(), None);
		assert_eq!(status.battery_percent, 82.6);
		assert_eq!(status.time_remaining, None);
		assert_eq!(status.power_state, Some(PowerState::Charging));
		assert_eq!(
			status.power_flow,
			Some(PowerFlow {
				ac_input: 65.0,
				to_battery: 19.5,
				to_system: 45.5,
				from_battery: 0.0,
			})
		);
		assert!(status.charging());
		assert!(!status.bypassed());
	}

	#[test]
	fn parses_error_payload() {
		let status: PowerStatus =
			serde_json::from_str(r#"{"error": "sensor offline", "hasBattery": false}"#).unwrap();
		assert_eq!(status.unavailable_reason(), Some("sensor offline"));
	}

	#[test]
	fn missing_battery_uses_default_reason() {
		let status: PowerStatus = serde_json::from_str(r#"{"hasBattery": false}"#).unwrap();
		assert_eq!(status.unavailable_reason(), Some(UNAVAILABLE_MESSAGE));
	}

	#[test]
	fn empty_error_is_ignored() {
		let status = PowerStatus {
			has_battery: true,
			error: Some(String::new()),
			..Default::default()
		};
		assert_eq!(status.unavailable_reason(), None);
	}

	#[test]
	fn synthesized_error_state() {
		let status = PowerStatus::from_error("boom");
		assert!(!status.has_battery);
		assert_eq!(status.unavailable_reason(), Some("boom"));
	}

	#[test]
	fn unknown_power_state_is_read_as_absent() {
		let payload = CHARGING.replace(r#""powerState": "charging""#, r#""powerState": "fast_charge""#);
		assert_ne!(payload, CHARGING);
		let status: PowerStatus = serde_json::from_str(&payload).unwrap();
		assert_eq!(status.power_state, None);
		assert_eq!(status.unavailable_reason(), None);
		assert!(status.charging());

		let status: PowerStatus =
			serde_json::from_str(r#"{"hasBattery": true, "powerState": null}"#).unwrap();
		assert_eq!(status.power_state, None);
	}

	#[test]
	fn flags_follow_the_booleans_alone() {
		let status = PowerStatus {
			has_battery: true,
			power_state: Some(PowerState::HeavyLoad),
			battery_charging: true,
			..Default::default()
		};
		assert!(status.charging());
		assert!(!status.in_use());
		assert!(!status.bypassed());
	}
}
