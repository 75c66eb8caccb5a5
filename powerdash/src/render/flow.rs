use crate::util::watts;
use powerstatus::{PowerFlow, PowerStatus};

/// Colour accents shared by the detail badge and the flow status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
	Success,
	Primary,
	Warning,
	Muted,
}

impl Accent {
	/// Picks the accent for the battery state flags, in priority order
	/// bypassed, charging, in use.
	pub fn for_flags(status: &PowerStatus) -> Option<Self> {
		if status.bypassed() {
			Some(Self::Success)
		} else if status.charging() {
			Some(Self::Primary)
		} else if status.in_use() {
			Some(Self::Warning)
		} else {
			None
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryArrow {
	/// Active, charging the battery.
	Charging,
	Bypassed,
	/// Active, reversed: the battery feeds the system.
	Discharging,
	Idle,
}

impl BatteryArrow {
	pub fn new(status: &PowerStatus, flow: &PowerFlow) -> Self {
		if status.charging() && flow.to_battery > 0.0 {
			Self::Charging
		} else if status.bypassed() {
			Self::Bypassed
		} else if flow.from_battery > 0.0 {
			Self::Discharging
		} else {
			Self::Idle
		}
	}

	pub fn active(&self) -> bool {
		matches!(self, Self::Charging | Self::Discharging)
	}

	/// Label next to the battery arrow, which names the flow direction.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Discharging => "From Battery",
			_ => "To Battery",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStatus {
	Bypassed,
	Charging,
	InUse,
	Idle,
}

impl FlowStatus {
	pub fn new(status: &PowerStatus) -> Self {
		match Accent::for_flags(status) {
			Some(Accent::Success) => Self::Bypassed,
			Some(Accent::Primary) => Self::Charging,
			Some(Accent::Warning) => Self::InUse,
			_ => Self::Idle,
		}
	}

	pub fn text(&self) -> &'static str {
		match self {
			Self::Bypassed => "Bypassed",
			Self::Charging => "Charging",
			Self::InUse => "In Use",
			Self::Idle => "Idle",
		}
	}

	pub fn accent(&self) -> Accent {
		match self {
			Self::Bypassed => Accent::Success,
			Self::Charging => Accent::Primary,
			Self::InUse => Accent::Warning,
			Self::Idle => Accent::Muted,
		}
	}
}

/// The AC → battery / system flow diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowDiagram {
	pub ac_input: String,
	pub to_battery: String,
	pub to_system: String,
	pub battery_arrow: BatteryArrow,
	pub system_arrow_active: bool,
	pub status: FlowStatus,
}

impl FlowDiagram {
	pub fn new(status: &PowerStatus, flow: &PowerFlow) -> Self {
		Self {
			ac_input: watts(flow.ac_input),
			to_battery: watts(flow.to_battery.abs()),
			to_system: watts(flow.to_system),
			battery_arrow: BatteryArrow::new(status, flow),
			system_arrow_active: status.power_plugged || status.in_use(),
			status: FlowStatus::new(status),
		}
	}
}
