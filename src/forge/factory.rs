//! Factory for creating forge implementations based on configuration.

use crate::{
    Result,
    forge::{
        config::{Remote, RemoteConfig},
        gitea::Gitea,
        github::Github,
        traits::ReleaseListFetcher,
    },
};

/// Factory for creating forge implementations.
pub struct ForgeFactory;

impl ForgeFactory {
    /// Create a release fetcher for the platform named by the Remote.
    pub fn create(remote: &Remote) -> Result<Box<dyn ReleaseListFetcher>> {
        match remote {
            Remote::Github(config) => Self::create_github(config),
            Remote::Gitea(config) => Self::create_gitea(config),
        }
    }

    fn create_github(
        config: &RemoteConfig,
    ) -> Result<Box<dyn ReleaseListFetcher>> {
        Ok(Box::new(Github::new(config.clone())?))
    }

    fn create_gitea(
        config: &RemoteConfig,
    ) -> Result<Box<dyn ReleaseListFetcher>> {
        Ok(Box::new(Gitea::new(config.clone())?))
    }
}
