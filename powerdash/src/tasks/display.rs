use powerdash::{
	render::{Accent, BatteryArrow, Connection, GaugeColor, Metric, Panel, PLACEHOLDER},
	view::View,
};
use std::{
	io::{self, Write},
	mem,
	time::Duration,
};
use tokio::{
	sync::{mpsc, watch},
	task::JoinHandle,
	time::{sleep_until, Instant},
};

/// How long a changed metric stays emphasised.
const PULSE_DURATION: Duration = Duration::from_millis(150);

const GAUGE_WIDTH: usize = 30;
const FRAME_CHANNEL_LEN: usize = 8;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Debug)]
pub struct Frame {
	panel: Panel,
	pulsed: Vec<Metric>,
}

/// Forwards rendered panels to the display task.
#[derive(Debug)]
pub struct TerminalView {
	frames: mpsc::Sender<Frame>,
	pulsed: Vec<Metric>,
}

impl TerminalView {
	fn new(frames: mpsc::Sender<Frame>) -> Self {
		Self {
			frames,
			pulsed: Vec::new(),
		}
	}
}

impl View for TerminalView {
	fn show(&mut self, panel: &Panel) {
		let frame = Frame {
			panel: panel.clone(),
			pulsed: mem::take(&mut self.pulsed),
		};
		if let Err(error) = self.frames.try_send(frame) {
			tracing::warn!("dropping display frame: {error}");
		}
	}

	fn pulse(&mut self, metric: Metric) {
		self.pulsed.push(metric);
	}
}

#[derive(Debug, PartialEq)]
struct Page {
	lines: Vec<String>,
}

impl Page {
	fn new(panel: &Panel, pulsed: &[Metric]) -> Self {
		let metric = |metric: Metric| {
			let value = panel.metric(metric);
			if pulsed.contains(&metric) {
				format!("{BOLD}{value}{RESET}")
			} else {
				value.to_string()
			}
		};

		let indicator = match panel.connection {
			Connection::Connected => "\x1b[32m●\x1b[0m",
			Connection::Disconnected => "\x1b[31m○\x1b[0m",
		};

		let mut lines = vec![
			format!(
				"{indicator} {}    updated {}",
				panel.status_text,
				panel.last_update.as_deref().unwrap_or(PLACEHOLDER)
			),
			format!("Source   {}  {}", panel.source.text, panel.charging_status),
		];

		if let Some(detail) = &panel.detail {
			let text = paint(&detail.text, detail.accent.map(accent_code));
			lines.push(match detail.state {
				Some(state) => format!("State    {text} [{state}]"),
				None => format!("State    {text}"),
			});
		}

		let bar = match &panel.gauge {
			Some(gauge) => {
				let filled = (gauge.fill() * GAUGE_WIDTH as f64).round() as usize;
				let bar = format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled));
				paint(&bar, Some(gauge_code(gauge.color)))
			}
			None => "░".repeat(GAUGE_WIDTH),
		};
		lines.push(format!("Battery  {bar} {:>4}", panel.percentage));
		lines.push(format!("         {}", panel.time_remaining));

		lines.push(match &panel.flow {
			Some(flow) => {
				let battery = match flow.battery_arrow {
					BatteryArrow::Charging => "▶",
					BatteryArrow::Discharging => "◀",
					BatteryArrow::Bypassed => "╳",
					BatteryArrow::Idle => "·",
				};
				let system = if flow.system_arrow_active { "▶" } else { "·" };
				format!(
					"Flow     AC {}  {system} System {}  {battery} {} {}  {}",
					flow.ac_input,
					flow.to_system,
					flow.battery_arrow.label(),
					flow.to_battery,
					paint(flow.status.text(), Some(accent_code(flow.status.accent())))
				)
			}
			None => format!("Flow     {PLACEHOLDER}"),
		});

		lines.push(format!(
			"Input    {} W    Consumption {} W",
			metric(Metric::PowerInput),
			metric(Metric::PowerConsumption)
		));
		lines.push(format!(
			"Voltage  {} V    Current {} A",
			metric(Metric::Voltage),
			metric(Metric::Current)
		));
		lines.push(format!("Health   {}", panel.health));

		Self { lines }
	}

	fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
		out.write_all(CLEAR.as_bytes())?;
		for line in &self.lines {
			writeln!(out, "{line}")?;
		}
		out.flush()
	}
}

fn paint(text: &str, code: Option<&str>) -> String {
	match code {
		Some(code) => format!("\x1b[{code}m{text}{RESET}"),
		None => text.to_string(),
	}
}

fn accent_code(accent: Accent) -> &'static str {
	match accent {
		Accent::Success => "32",
		Accent::Primary => "36",
		Accent::Warning => "33",
		Accent::Muted => "2",
	}
}

fn gauge_code(color: GaugeColor) -> &'static str {
	match color {
		GaugeColor::Green => "32",
		GaugeColor::Orange => "33",
		GaugeColor::Red => "31",
	}
}

fn draw(page: &Page) -> io::Result<()> {
	tracing::trace!("drawing page: {page:?}");
	let mut stdout = io::stdout().lock();
	page.write_to(&mut stdout)
}

pub fn create_task(
	shutdown: watch::Receiver<bool>,
) -> (TerminalView, JoinHandle<anyhow::Result<()>>) {
	tracing::info!("starting terminal display task");
	let (tx, rx) = mpsc::channel(FRAME_CHANNEL_LEN);
	let handle = tokio::spawn(start_task(rx, shutdown));
	(TerminalView::new(tx), handle)
}

pub async fn start_task(
	mut frames: mpsc::Receiver<Frame>,
	mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
	let mut current: Option<Panel> = None;
	let mut pulse_deadline: Option<Instant> = None;

	loop {
		tokio::select! {
			frame = frames.recv() => {
				let Some(Frame { panel, pulsed }) = frame else {
					tracing::debug!("display channel closed");
					break;
				};
				draw(&Page::new(&panel, &pulsed))?;
				pulse_deadline = (!pulsed.is_empty()).then(|| Instant::now() + PULSE_DURATION);
				current = Some(panel);
			}
			_ = sleep_until(pulse_deadline.unwrap_or_else(Instant::now)), if pulse_deadline.is_some() => {
				pulse_deadline = None;
				if let Some(panel) = &current {
					draw(&Page::new(panel, &[]))?;
				}
			}
			_ = shutdown.changed() => {
				tracing::info!("shutting down display task");
				break;
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use powerstatus::{PowerFlow, PowerState, PowerStatus};

	fn panel() -> Panel {
		let status = PowerStatus {
			has_battery: true,
			power_plugged: true,
			power_source: String::from("AC Adapter"),
			status: String::from("Charging"),
			battery_percent: 50.0,
			power_input_watts: 65.0,
			power_consumption_watts: 52.0,
			battery_charging: true,
			power_flow: Some(PowerFlow {
				ac_input: 65.0,
				to_battery: 19.5,
				to_system: 45.5,
				from_battery: 0.0,
			}),
			..Default::default()
		};
		Panel::from_status(&status, String::from("13:04:05"))
	}

	#[test]
	fn page_lays_out_every_region() {
		let page = Page::new(&panel(), &[]);

		assert!(page.lines[0].contains("Connected"));
		assert!(page.lines[0].ends_with("updated 13:04:05"));
		assert_eq!(page.lines[1], "Source   🔌 AC Adapter  Charging");
		assert!(page.lines[2].starts_with("Battery  "));
		assert!(page.lines[2].ends_with(" 50%"));
		assert_eq!(page.lines[3], "         Fully charged");
		assert!(page.lines[4].contains("AC 65W"));
		assert!(page.lines[4].contains("▶ To Battery 19.5W"));
		assert_eq!(page.lines[5], "Input    65 W    Consumption 52 W");
		assert_eq!(page.lines[6], "Voltage  -- V    Current -- A");
		assert_eq!(page.lines[7], "Health   N/A");
	}

	#[test]
	fn pulsed_metrics_are_bold() {
		let page = Page::new(&panel(), &[Metric::PowerInput]);
		assert_eq!(
			page.lines[5],
			format!("Input    {BOLD}65{RESET} W    Consumption 52 W")
		);
	}

	#[test]
	fn state_line_names_the_power_state() {
		let status = PowerStatus {
			has_battery: true,
			power_state_text: Some(String::from("AC Direct")),
			power_state: Some(PowerState::AcDirect),
			..Default::default()
		};
		let page = Page::new(&Panel::from_status(&status, String::new()), &[]);
		assert_eq!(page.lines[2], "State    AC Direct [ac_direct]");
	}

	#[test]
	fn error_page() {
		let page = Page::new(&Panel::unavailable("boom"), &[]);
		assert!(page.lines[0].contains("Error: boom"));
		assert!(page.lines[0].ends_with("updated --"));
		assert_eq!(page.lines[4], "Flow     --");
	}

	#[test]
	fn writes_clear_then_lines() {
		let page = Page {
			lines: vec![String::from("a"), String::from("b")],
		};
		let mut out = Vec::new();
		page.write_to(&mut out).unwrap();
		assert_eq!(out, format!("{CLEAR}a\nb\n").into_bytes());
	}

	#[test]
	fn view_sends_frames_with_pending_pulses() {
		let (tx, mut rx) = mpsc::channel(FRAME_CHANNEL_LEN);
		let mut view = TerminalView::new(tx);

		view.pulse(Metric::Voltage);
		view.show(&panel());
		view.show(&panel());

		let first = rx.try_recv().unwrap();
		assert_eq!(first.pulsed, vec![Metric::Voltage]);
		let second = rx.try_recv().unwrap();
		assert!(second.pulsed.is_empty());
		assert_eq!(second.panel, panel());
	}

	#[tokio::test(start_paused = true)]
	async fn task_stops_when_channel_closes() {
		let (_shutdown_tx, shutdown_rx) = watch::channel(false);
		let (view, handle) = create_task(shutdown_rx);
		drop(view);
		handle.await.unwrap().unwrap();
	}
}
