//! Implements the ReleaseListFetcher trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use serde::Serialize;

use crate::{
    Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, GITHUB_HOST, RemoteConfig},
        traits::ReleaseListFetcher,
    },
    release::ReleasePayload,
};

#[derive(Debug, Serialize)]
struct ListReleasesParams {
    per_page: u8,
}

/// Returns the REST API root for a GitHub host. github.com is served from
/// the `api.` subdomain, Enterprise instances from `/api/v3`.
pub fn api_base_uri(config: &RemoteConfig) -> String {
    if config.host == GITHUB_HOST {
        format!("{}://api.{}", config.scheme, config.host)
    } else {
        format!("{}/api/v3", config.authority())
    }
}

/// GitHub forge implementation using Octocrab for API interactions.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = api_base_uri(&config);

        debug!("using github api base: {base_uri}");

        let mut builder = Octocrab::builder().base_uri(base_uri)?;

        if let Some(token) = config.token.clone() {
            builder = builder.personal_token(token);
        }

        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl ReleaseListFetcher for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_releases(&self) -> Result<Vec<ReleasePayload>> {
        let route =
            format!("/repos/{}/{}/releases", self.config.owner, self.config.repo);

        info!("listing releases: {route}");

        let params = ListReleasesParams {
            per_page: DEFAULT_PAGE_SIZE,
        };

        let releases: Vec<ReleasePayload> =
            self.instance.get(route, Some(&params)).await?;

        Ok(releases)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::{
        TagFinderError,
        test_helpers::{RELEASES_BODY, serve_once},
    };

    fn config(host: &str) -> RemoteConfig {
        RemoteConfig {
            host: host.into(),
            scheme: "https".into(),
            owner: "swagger-api".into(),
            repo: "swagger-parser".into(),
            ..RemoteConfig::default()
        }
    }

    #[test]
    fn public_github_uses_api_subdomain() {
        assert_eq!(api_base_uri(&config("github.com")), "https://api.github.com");
    }

    #[test]
    fn enterprise_uses_api_v3_path() {
        let mut config = config("git.example.com");
        assert_eq!(api_base_uri(&config), "https://git.example.com/api/v3");

        config.port = Some(8443);
        assert_eq!(
            api_base_uri(&config),
            "https://git.example.com:8443/api/v3"
        );
    }

    fn local_config(port: u16, token: Option<&str>) -> RemoteConfig {
        RemoteConfig {
            host: "127.0.0.1".into(),
            port: Some(port),
            scheme: "http".into(),
            owner: "swagger-api".into(),
            repo: "swagger-parser".into(),
            token: token.map(|t| SecretString::from(t.to_string())),
        }
    }

    #[tokio::test]
    #[test_log::test]
    async fn list_releases_reads_a_single_page() {
        let (port, server) = serve_once(200, RELEASES_BODY).await;

        let github = Github::new(local_config(port, Some("gh-token"))).unwrap();
        let releases = github.list_releases().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with(
            "get /api/v3/repos/swagger-api/swagger-parser/releases?per_page=100 "
        ));
        assert!(request.contains("authorization: bearer gh-token"));
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[1], ReleasePayload::new(false, "v1.0.31"));
    }

    #[tokio::test]
    #[test_log::test]
    async fn list_releases_maps_unauthorized_to_authentication_error() {
        let body = r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#;
        let (port, server) = serve_once(401, body).await;

        let github = Github::new(local_config(port, Some("expired"))).unwrap();
        let err = github.list_releases().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(
            err,
            TagFinderError::AuthenticationError(msg) if msg == "Bad credentials"
        ));
    }

    #[tokio::test]
    async fn new_builds_client_without_token() {
        let github = Github::new(config("github.com")).unwrap();
        assert_eq!(github.remote_config().repo, "swagger-parser");
    }
}
