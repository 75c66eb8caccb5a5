use powerdash::poller::Visibility;
use tokio::{sync::watch, task::JoinHandle};

/// Publishes `visibility` unless it is already current.
fn publish(sender: &watch::Sender<Visibility>, visibility: Visibility) {
	let changed = sender.send_if_modified(|current| {
		if *current == visibility {
			return false;
		}
		*current = visibility;
		true
	});
	if !changed {
		tracing::debug!("already {visibility:?}, ignoring");
	}
}

/// Maps SIGUSR1 to hiding the dashboard and SIGUSR2 to showing it again.
#[cfg(unix)]
pub fn create_task(
	sender: watch::Sender<Visibility>,
	mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<anyhow::Result<()>> {
	use tokio::signal::unix::{signal, SignalKind};

	tokio::spawn(async move {
		let mut hide = signal(SignalKind::user_defined1())?;
		let mut show = signal(SignalKind::user_defined2())?;
		tracing::info!("send SIGUSR1 to pause polling, SIGUSR2 to resume");

		loop {
			tokio::select! {
				Some(()) = hide.recv() => publish(&sender, Visibility::Hidden),
				Some(()) = show.recv() => publish(&sender, Visibility::Visible),
				_ = shutdown.changed() => break,
				else => break,
			}
		}
		Ok(())
	})
}

#[cfg(not(unix))]
pub fn create_task(
	sender: watch::Sender<Visibility>,
	mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<anyhow::Result<()>> {
	tokio::spawn(async move {
		// No visibility source here; stay visible until shutdown.
		let _ = shutdown.changed().await;
		drop(sender);
		Ok(())
	})
}
