/// Circumference of the gauge arc (2π × 85).
pub const GAUGE_CIRCUMFERENCE: f64 = 534.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeColor {
	Green,
	Orange,
	Red,
}

impl GaugeColor {
	/// Above 50% is green, above 20% orange, anything lower red.
	pub fn for_percent(percent: f64) -> Self {
		if percent > 50.0 {
			Self::Green
		} else if percent > 20.0 {
			Self::Orange
		} else {
			Self::Red
		}
	}

	pub fn hex(&self) -> &'static str {
		match self {
			Self::Green => "#10b981",
			Self::Orange => "#f59e0b",
			Self::Red => "#ef4444",
		}
	}
}

/// Battery charge gauge. The arc sweeps a full circle from 0 to 100%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
	pub percent: f64,
	pub color: GaugeColor,
}

impl Gauge {
	pub fn new(percent: f64) -> Self {
		Self {
			percent,
			color: GaugeColor::for_percent(percent),
		}
	}

	/// Filled fraction of the arc, between 0 and 1.
	pub fn fill(&self) -> f64 {
		self.percent.clamp(0.0, 100.0) / 100.0
	}

	pub fn sweep_degrees(&self) -> f64 {
		self.fill() * 360.0
	}

	/// Stroke dash offset that leaves `fill` of the arc drawn.
	pub fn dash_offset(&self) -> f64 {
		GAUGE_CIRCUMFERENCE - self.fill() * GAUGE_CIRCUMFERENCE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colour_thresholds() {
		assert_eq!(GaugeColor::for_percent(75.0), GaugeColor::Green);
		assert_eq!(GaugeColor::for_percent(35.0), GaugeColor::Orange);
		assert_eq!(GaugeColor::for_percent(10.0), GaugeColor::Red);
		// Both thresholds are exclusive.
		assert_eq!(GaugeColor::for_percent(50.0), GaugeColor::Orange);
		assert_eq!(GaugeColor::for_percent(20.0), GaugeColor::Red);
		assert_eq!(GaugeColor::for_percent(50.1), GaugeColor::Green);
	}

	#[test]
	fn arc_is_linear_in_percent() {
		assert_eq!(Gauge::new(0.0).sweep_degrees(), 0.0);
		assert_eq!(Gauge::new(25.0).sweep_degrees(), 90.0);
		assert_eq!(Gauge::new(100.0).sweep_degrees(), 360.0);
		assert_eq!(Gauge::new(50.0).dash_offset(), 267.0);
		assert_eq!(Gauge::new(100.0).dash_offset(), 0.0);
	}

	#[test]
	fn out_of_range_percent_is_clamped() {
		assert_eq!(Gauge::new(130.0).sweep_degrees(), 360.0);
		assert_eq!(Gauge::new(-5.0).dash_offset(), GAUGE_CIRCUMFERENCE);
	}
}
