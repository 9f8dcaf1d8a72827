// Daemon client implementation
//
// HTTP client that talks to a wallet daemon's sync endpoint. One
// reqwest::Client is built up front and shared by every call.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::config::DaemonSettings;

use super::error::DaemonError;
use super::types::{SyncRequest, WalletSyncData};

const SYNC_DATA_PATH: &str = "/getwalletsyncdata";
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// HTTP client for communicating with a wallet daemon
#[derive(Debug, Clone)]
pub struct DaemonClient {
    client: Client,
    sync_url: Url,
}

impl DaemonClient {
    /// Create a client for the daemon described by `settings`.
    ///
    /// Fails if the HTTP client cannot be built or the daemon address
    /// does not form a valid URL.
    pub fn new(settings: &DaemonSettings) -> Result<Self, DaemonError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| DaemonError::Request(e.to_string()))?;

        let sync_url = Url::parse(&format!("{}{}", settings.base_url(), SYNC_DATA_PATH))
            .map_err(|e| DaemonError::Request(e.to_string()))?;

        Ok(Self { client, sync_url })
    }

    /// Probe the daemon with a minimal sync request.
    ///
    /// Returns the raw response body on any 2xx status (empty string if
    /// the daemon sent no body). The body is not inspected; a daemon
    /// that answers at all counts as reachable.
    pub async fn ping(&self) -> Result<String, DaemonError> {
        self.send_raw(&SyncRequest::ping()).await
    }

    /// Fetch a batch of wallet sync data and decode it.
    pub async fn wallet_sync_data(
        &self,
        request: &SyncRequest,
    ) -> Result<WalletSyncData, DaemonError> {
        let body = self.send_raw(request).await?;
        serde_json::from_str(&body).map_err(|e| DaemonError::Request(e.to_string()))
    }

    /// POST a sync request and return the raw response body.
    async fn send_raw(&self, request: &SyncRequest) -> Result<String, DaemonError> {
        let body =
            serde_json::to_vec(request).map_err(|e| DaemonError::Request(e.to_string()))?;

        debug!(url = %self.sync_url, block_count = request.block_count, "Sending sync data request");

        let response = self
            .client
            .post(self.sync_url.clone())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .map_err(DaemonError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DaemonError::Http(status.as_u16()));
        }

        response.text().await.map_err(DaemonError::Transport)
    }

    /// Full URL of the sync endpoint this client targets
    pub fn sync_url(&self) -> &str {
        self.sync_url.as_str()
    }
}
