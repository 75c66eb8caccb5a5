mod config;
mod tasks;

use clap::Parser;
use powerapi::Client;
use powerdash::{
	poller::{supervise, Poller, Visibility},
	render::Renderer,
};
use std::path::PathBuf;
use tasks::Exit;
use time::util::local_offset::Soundness;
use tokio::sync::watch;
use url::Url;

#[derive(Parser)]
pub struct Arguments {
	/// YAML or JSON configuration file.
	#[clap(env = "POWERDASH_CONFIG_PATH")]
	config: Option<PathBuf>,

	/// Power-status endpoint, overriding the configuration file.
	#[clap(long, env = "POWERDASH_ENDPOINT")]
	endpoint: Option<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt::init();

	// SAFETY: We do not modify our own environment so this is OK.
	unsafe {
		time::util::local_offset::set_soundness(Soundness::Unsound);
	}

	let arguments = Arguments::parse();
	let (shutdown_tx, shutdown_rx) = watch::channel(false);

	// Read the configuration file
	let mut config = config::load_config(arguments.config.as_deref())?;
	if let Some(endpoint) = arguments.endpoint {
		config.endpoint = Some(endpoint);
	}

	let client = Client::new(config.endpoint(), config.timeout())?;
	tracing::info!("power dashboard initialized");
	tracing::info!("connecting to API: {}", client.endpoint());
	tracing::info!("update interval: {}ms", config.interval_ms);

	// Spawn a task to drive the terminal panel
	//
	let (view, mut display_task) = tasks::display::create_task(shutdown_rx.clone());

	// Poll while visible, until shutdown
	//
	let poller = Poller::new(client, Renderer::new(view), config.interval());
	let (visibility_tx, visibility_rx) = watch::channel(Visibility::Visible);
	let visibility_task = tasks::visibility::create_task(visibility_tx, shutdown_rx.clone());
	let poller_task = tokio::spawn(supervise(poller, visibility_rx, shutdown_rx));

	let exit = tasks::wait_for_exit(tokio::signal::ctrl_c(), &mut display_task).await?;
	shutdown_tx.send(true)?;

	poller_task.await?;
	visibility_task.await??;
	match exit {
		Exit::Signal => display_task.await??,
		Exit::TaskExited(result) => result?,
	}

	Ok(())
}
