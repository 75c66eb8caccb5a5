use super::{
	flow::{Accent, FlowDiagram},
	gauge::Gauge,
};
use crate::util::{fixed, round_half_up};
use powerstatus::{PowerState, PowerStatus};

/// Shown in place of a value that is not known.
pub const PLACEHOLDER: &str = "--";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
	Connected,
	Disconnected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
	Ac,
	Battery,
	Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBadge {
	pub text: String,
	pub kind: SourceKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailBadge {
	pub text: String,
	pub accent: Option<Accent>,
	/// Machine-readable state behind `text`, when the endpoint names one.
	pub state: Option<PowerState>,
}

/// Metrics that pulse when their displayed value changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
	PowerInput,
	PowerConsumption,
	Voltage,
	Current,
}

impl Metric {
	pub const ALL: [Metric; 4] = [
		Metric::PowerInput,
		Metric::PowerConsumption,
		Metric::Voltage,
		Metric::Current,
	];
}

/// Every display region of the dashboard, as produced by one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
	pub connection: Connection,
	pub status_text: String,
	pub source: SourceBadge,
	pub charging_status: String,
	pub detail: Option<DetailBadge>,
	pub flow: Option<FlowDiagram>,
	pub percentage: String,
	pub gauge: Option<Gauge>,
	pub time_remaining: String,
	pub power_input: String,
	pub power_consumption: String,
	pub voltage: String,
	pub current: String,
	pub health: String,
	pub last_update: Option<String>,
}

impl Panel {
	/// Maps a status snapshot onto the display regions.
	///
	/// `stamp` becomes the last-update time when the snapshot is displayable;
	/// the error branch leaves `last_update` empty.
	pub fn from_status(status: &PowerStatus, stamp: String) -> Self {
		if let Some(reason) = status.unavailable_reason() {
			return Self::unavailable(reason);
		}

		let source = if status.power_plugged {
			SourceBadge {
				text: format!("🔌 {}", status.power_source),
				kind: SourceKind::Ac,
			}
		} else {
			SourceBadge {
				text: format!("🔋 {}", status.power_source),
				kind: SourceKind::Battery,
			}
		};

		let detail = status
			.power_state_text
			.as_deref()
			.filter(|text| !text.is_empty())
			.map(|text| DetailBadge {
				text: text.to_string(),
				accent: Accent::for_flags(status),
				state: status.power_state,
			});

		let health = status
			.battery_health
			.as_ref()
			.and_then(|health| {
				let percentage = health.percentage()?;
				Some(format!("{percentage:.1}% ({})", health.condition()))
			})
			.unwrap_or_else(|| String::from("N/A"));

		Self {
			connection: Connection::Connected,
			status_text: String::from("Connected"),
			source,
			charging_status: status.status.clone(),
			detail,
			flow: status
				.power_flow
				.as_ref()
				.map(|flow| FlowDiagram::new(status, flow)),
			percentage: format!("{}%", round_half_up(status.battery_percent)),
			gauge: Some(Gauge::new(status.battery_percent)),
			time_remaining: time_remaining(status.power_plugged, status.time_remaining.as_deref()),
			power_input: round_half_up(status.power_input_watts).to_string(),
			power_consumption: round_half_up(status.power_consumption_watts).to_string(),
			voltage: status
				.voltage
				.map(|voltage| fixed(voltage, 1))
				.unwrap_or_else(|| PLACEHOLDER.to_string()),
			current: status
				.current
				.map(|current| fixed(current, 2))
				.unwrap_or_else(|| PLACEHOLDER.to_string()),
			health,
			last_update: Some(stamp),
		}
	}

	/// The error display state.
	pub fn unavailable(reason: &str) -> Self {
		Self {
			connection: Connection::Disconnected,
			status_text: format!("Error: {reason}"),
			source: SourceBadge {
				text: String::from("Unknown"),
				kind: SourceKind::Unknown,
			},
			charging_status: String::from("Unable to detect"),
			detail: None,
			flow: None,
			percentage: PLACEHOLDER.to_string(),
			gauge: None,
			time_remaining: String::from("N/A"),
			power_input: PLACEHOLDER.to_string(),
			power_consumption: PLACEHOLDER.to_string(),
			voltage: PLACEHOLDER.to_string(),
			current: PLACEHOLDER.to_string(),
			health: String::from("N/A"),
			last_update: None,
		}
	}

	pub fn metric(&self, metric: Metric) -> &str {
		match metric {
			Metric::PowerInput => &self.power_input,
			Metric::PowerConsumption => &self.power_consumption,
			Metric::Voltage => &self.voltage,
			Metric::Current => &self.current,
		}
	}
}

fn time_remaining(plugged: bool, remaining: Option<&str>) -> String {
	match (plugged, remaining.filter(|text| !text.is_empty())) {
		(true, Some(remaining)) => format!("Charging • {remaining} to full"),
		(true, None) => String::from("Fully charged"),
		(false, Some(remaining)) => format!("{remaining} remaining"),
		(false, None) => String::from("Calculating..."),
	}
}
