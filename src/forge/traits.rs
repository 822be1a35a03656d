//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{Result, forge::config::RemoteConfig, release::ReleasePayload};

/// Reads the release listing of a single repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseListFetcher {
    fn remote_config(&self) -> RemoteConfig;

    /// Releases in the order the forge reports them (newest first on
    /// GitHub and Gitea).
    async fn list_releases(&self) -> Result<Vec<ReleasePayload>>;
}
