pub mod display;
pub mod visibility;

use std::{future::Future, io};
use tokio::task::JoinHandle;

/// Why the dashboard is closing.
#[derive(Debug)]
pub enum Exit {
	Signal,
	/// The watched task finished on its own, with its result.
	TaskExited(anyhow::Result<()>),
}

/// Waits for `signal`, or for `task` to finish first.
pub async fn wait_for_exit<F>(
	signal: F,
	task: &mut JoinHandle<anyhow::Result<()>>,
) -> anyhow::Result<Exit>
where
	F: Future<Output = io::Result<()>>,
{
	tokio::select! {
		signal = signal => {
			signal?;
			tracing::debug!("received ctrl-c, closing");
			Ok(Exit::Signal)
		}
		result = task => {
			tracing::error!("display task exited early, closing");
			Ok(Exit::TaskExited(result?))
		}
	}
}
