use time::OffsetDateTime;

/// Rounds to the nearest integer, sending halves towards positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
	(value + 0.5).floor()
}

/// Formats `value` with `places` decimals, rounding ties away from zero.
pub fn fixed(value: f64, places: usize) -> String {
	let scale = 10f64.powi(places as i32);
	let magnitude = round_half_up(value.abs() * scale) / scale;
	let rounded = if value < 0.0 && magnitude != 0.0 { -magnitude } else { magnitude };
	format!("{rounded:.places$}")
}

/// Current time in the local timezone, or UTC if the offset is unknown.
pub fn local_now() -> OffsetDateTime {
	OffsetDateTime::now_local().unwrap_or_else(|error| {
		tracing::warn!("local offset unavailable, using UTC: {error}");
		OffsetDateTime::now_utc()
	})
}

/// Formats the wall-clock part of `dt` as `HH:MM:SS`.
pub fn clock_stamp(dt: OffsetDateTime) -> String {
	format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
}

/// Formats a wattage with as many digits as it needs, e.g. `65W`, `19.5W`.
pub fn watts(value: f64) -> String {
	// Negative zero would otherwise print as "-0".
	let value = if value == 0.0 { 0.0 } else { value };
	format!("{value}W")
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::macros::datetime;

	#[test]
	fn rounds_halves_up() {
		assert_eq!(round_half_up(82.6), 83.0);
		assert_eq!(round_half_up(82.5), 83.0);
		assert_eq!(round_half_up(82.4), 82.0);
		assert_eq!(round_half_up(-2.5), -2.0);
	}

	#[test]
	fn fixed_rounds_ties_away_from_zero() {
		assert_eq!(fixed(11.25, 1), "11.3");
		assert_eq!(fixed(0.125, 2), "0.13");
		assert_eq!(fixed(-1.25, 1), "-1.3");
		assert_eq!(fixed(2.252, 2), "2.25");
		assert_eq!(fixed(19.0, 1), "19.0");
		assert_eq!(fixed(-0.001, 2), "0.00");
	}

	#[test]
	fn stamps_are_zero_padded() {
		assert_eq!(clock_stamp(datetime!(2024-05-01 09:04:05 UTC)), "09:04:05");
	}

	#[test]
	fn watts_print_shortest_form() {
		assert_eq!(watts(65.0), "65W");
		assert_eq!(watts(19.5), "19.5W");
		assert_eq!(watts(-0.0), "0W");
	}
}
