use crate::FetchError;
use powerstatus::PowerStatus;
use reqwest::{
	header::{HeaderMap, HeaderValue, ACCEPT},
	ClientBuilder, IntoUrl,
};
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug)]
pub struct Client {
	client: reqwest::Client,
	endpoint: Url,
}

impl Client {
	/// Creates a new power-status client.
	///
	/// # Arguments
	/// * `endpoint` - The URL of the power-status endpoint.
	/// * `timeout` - Upper bound on a single request, connection included.
	///
	/// # Errors
	/// Returns an error if the URL is invalid, or the HTTP client cannot be
	/// built.
	///
	pub fn new(endpoint: impl IntoUrl, timeout: Duration) -> reqwest::Result<Self> {
		let endpoint = endpoint.into_url()?;

		let mut default_headers = HeaderMap::new();
		default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

		// Build the HTTP client. This will be reused for every tick.
		//
		let client = ClientBuilder::new()
			.gzip(true)
			.default_headers(default_headers)
			.timeout(timeout)
			.build()?;

		Ok(Self { client, endpoint })
	}

	/// Requests the current power status.
	///
	/// Network failures, non-success responses and bodies that are not a
	/// status snapshot all come back as a [`FetchError`].
	pub async fn fetch(&self) -> Result<PowerStatus, FetchError> {
		let response = self
			.client
			.get(self.endpoint.clone())
			.send()
			.await
			.map_err(FetchError::network)?;

		let status = response.status();
		if !status.is_success() {
			tracing::debug!("power-status endpoint responded with {status}");
			return Err(FetchError::status(status));
		}

		let body = response.bytes().await.map_err(FetchError::network)?;
		let snapshot = serde_json::from_slice(&body).map_err(FetchError::body)?;

		Ok(snapshot)
	}

	/// Returns the URL of the power-status endpoint.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}
