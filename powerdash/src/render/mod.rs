pub mod flow;
pub mod gauge;
pub mod panel;

pub use flow::{Accent, BatteryArrow, FlowDiagram, FlowStatus};
pub use gauge::{Gauge, GaugeColor};
pub use panel::{Connection, DetailBadge, Metric, Panel, SourceBadge, SourceKind, PLACEHOLDER};

use crate::{
	util::{clock_stamp, local_now},
	view::View,
};
use powerstatus::PowerStatus;
use time::OffsetDateTime;

pub type Clock = Box<dyn Fn() -> OffsetDateTime + Send + Sync>;

/// Maps power-status snapshots onto a [`View`].
pub struct Renderer<V> {
	view: V,
	clock: Clock,
	previous: Option<Panel>,
}

impl<V: View> Renderer<V> {
	pub fn new(view: V) -> Self {
		Self::with_clock(view, Box::new(local_now))
	}

	pub fn with_clock(view: V, clock: Clock) -> Self {
		Self {
			view,
			clock,
			previous: None,
		}
	}

	/// Renders `status`, replacing everything the previous render showed.
	///
	/// The last-update stamp survives error renders so the panel still shows
	/// when data was last good.
	pub fn render(&mut self, status: &PowerStatus) {
		let mut panel = Panel::from_status(status, clock_stamp((self.clock)()));
		if panel.last_update.is_none() {
			panel.last_update = self
				.previous
				.as_ref()
				.and_then(|previous| previous.last_update.clone());
		}

		for metric in Metric::ALL {
			let changed = self
				.previous
				.as_ref()
				.map_or(true, |previous| previous.metric(metric) != panel.metric(metric));
			if changed {
				self.view.pulse(metric);
			}
		}

		tracing::trace!("rendering panel: {panel:?}");
		self.view.show(&panel);
		self.previous = Some(panel);
	}

	/// Returns the panel shown by the latest render.
	pub fn panel(&self) -> Option<&Panel> {
		self.previous.as_ref()
	}

	pub fn view(&self) -> &V {
		&self.view
	}
}
