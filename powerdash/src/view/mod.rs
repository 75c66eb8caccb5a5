use crate::render::{Metric, Panel};

/// A surface the renderer draws the dashboard onto.
pub trait View {
	/// Replaces everything on the surface with `panel`.
	fn show(&mut self, panel: &Panel);

	/// Briefly emphasises `metric` because its value is about to change.
	fn pulse(&mut self, metric: Metric);
}
