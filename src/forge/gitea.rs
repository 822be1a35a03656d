//! Implements the ReleaseListFetcher trait for Gitea
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::ReleaseListFetcher,
    },
    release::ReleasePayload,
};

/// Gitea forge implementation using reqwest for API interactions with
/// self-hosted instances.
pub struct Gitea {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
}

impl Gitea {
    /// Create Gitea client with optional token authentication and API base
    /// URL configuration for self-hosted instances.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = config.token.as_ref() {
            let token_value = HeaderValue::from_str(
                format!("token {}", token.expose_secret()).as_str(),
            )?;
            headers.append("Authorization", token_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(&format!(
            "{}/api/v1/repos/{}/",
            config.authority(),
            config.path()
        ))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    pub fn releases_url(&self) -> Result<Url> {
        Ok(self.base_url.join("releases")?)
    }
}

#[async_trait]
impl ReleaseListFetcher for Gitea {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_releases(&self) -> Result<Vec<ReleasePayload>> {
        let releases_url = self.releases_url()?;

        info!("listing releases: {releases_url}");

        let request = self
            .client
            .get(releases_url)
            .query(&[("limit", DEFAULT_PAGE_SIZE)])
            .build()?;
        let response = self.client.execute(request).await?;
        let result = response.error_for_status()?;
        let releases: Vec<ReleasePayload> = result.json().await?;

        Ok(releases)
    }
}
