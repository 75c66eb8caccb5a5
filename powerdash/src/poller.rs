use crate::{render::Renderer, view::View};
use async_trait::async_trait;
use powerapi::FetchError;
use powerstatus::PowerStatus;
use std::{
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc,
	},
	time::Duration,
};
use tokio::{
	sync::{watch, Mutex},
	task::JoinHandle,
	time::{interval, MissedTickBehavior},
};

/// Time between two polls unless configured otherwise.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Somewhere power-status snapshots can be fetched from.
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
	async fn fetch(&self) -> Result<PowerStatus, FetchError>;
}

#[async_trait]
impl StatusSource for powerapi::Client {
	async fn fetch(&self) -> Result<PowerStatus, FetchError> {
		powerapi::Client::fetch(self).await
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
	Visible,
	Hidden,
}

#[derive(Debug)]
struct Schedule {
	active: Arc<AtomicBool>,
	handle: JoinHandle<()>,
}

/// Periodically fetches the power status and renders it.
pub struct Poller<S, V> {
	source: Arc<S>,
	renderer: Arc<Mutex<Renderer<V>>>,
	interval: Duration,
	schedule: Option<Schedule>,
}

impl<S, V> Poller<S, V> {
	/// Cancels the repeating schedule. Does nothing if already stopped.
	///
	/// A fetch that is still in flight is dropped without rendering.
	pub fn stop(&mut self) {
		if let Some(schedule) = self.schedule.take() {
			schedule.active.store(false, Ordering::Release);
			schedule.handle.abort();
			tracing::info!("stopped polling");
		}
	}

	pub fn is_running(&self) -> bool {
		self.schedule.is_some()
	}

	pub fn renderer(&self) -> Arc<Mutex<Renderer<V>>> {
		Arc::clone(&self.renderer)
	}
}

impl<S, V> Poller<S, V>
where
	S: StatusSource,
	V: View + Send + 'static,
{
	/// Creates a stopped poller. `interval` must be non-zero.
	pub fn new(source: S, renderer: Renderer<V>, interval: Duration) -> Self {
		Self {
			source: Arc::new(source),
			renderer: Arc::new(Mutex::new(renderer)),
			interval,
			schedule: None,
		}
	}

	/// Fetches immediately, then once every interval until stopped.
	///
	/// Any schedule that is already running is stopped first.
	pub fn start(&mut self) {
		self.stop();

		let active = Arc::new(AtomicBool::new(true));
		let handle = tokio::spawn(run_schedule(
			Arc::clone(&self.source),
			Arc::clone(&self.renderer),
			self.interval,
			Arc::clone(&active),
		));
		tracing::info!("polling every {}ms", self.interval.as_millis());

		self.schedule = Some(Schedule { active, handle });
	}

	/// Suspends polling while hidden; becoming visible polls right away.
	pub fn set_visibility(&mut self, visibility: Visibility) {
		tracing::info!("visibility changed to {visibility:?}");
		match visibility {
			Visibility::Visible => self.start(),
			Visibility::Hidden => self.stop(),
		}
	}
}

impl<S, V> Drop for Poller<S, V> {
	fn drop(&mut self) {
		self.stop();
	}
}

async fn run_schedule<S, V>(
	source: Arc<S>,
	renderer: Arc<Mutex<Renderer<V>>>,
	period: Duration,
	active: Arc<AtomicBool>,
) where
	S: StatusSource,
	V: View + Send + 'static,
{
	let mut ticks = interval(period);
	ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

	loop {
		ticks.tick().await;
		tracing::debug!("polling power status");

		let status = match source.fetch().await {
			Ok(status) => status,
			Err(error) => {
				tracing::error!("failed to fetch power status: {error}");
				PowerStatus::from_error(error.message())
			}
		};

		if !active.load(Ordering::Acquire) {
			break;
		}
		renderer.lock().await.render(&status);
	}
}

/// Drives `poller` from visibility changes until shutdown is signalled.
pub async fn supervise<S, V>(
	mut poller: Poller<S, V>,
	mut visibility: watch::Receiver<Visibility>,
	mut shutdown: watch::Receiver<bool>,
) where
	S: StatusSource,
	V: View + Send + 'static,
{
	let initial = *visibility.borrow_and_update();
	poller.set_visibility(initial);

	loop {
		tokio::select! {
			biased;

			_ = shutdown.changed() => break,
			changed = visibility.changed() => {
				if changed.is_err() {
					// Nothing will change visibility any more.
					let _ = shutdown.changed().await;
					break;
				}
				let current = *visibility.borrow_and_update();
				poller.set_visibility(current);
			}
		}
	}

	tracing::info!("shutting down poller");
	poller.stop();
}
