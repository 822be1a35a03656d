//! Configuration for Git forge platform connections.
use secrecy::SecretString;

/// Number of releases requested in the single listing read.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Host of the public GitHub instance.
pub const GITHUB_HOST: &str = "github.com";

/// Remote repository connection configuration for reading release listings
/// from forge platforms.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// Remote forge port for self-hosted instances.
    pub port: Option<u16>,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Optional access token. Public repositories can be read without one.
    pub token: Option<SecretString>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            port: None,
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: None,
        }
    }
}

impl RemoteConfig {
    /// Repository path in `owner/repo` form.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Scheme, host and optional port, without a trailing slash.
    pub fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }
}

#[derive(Debug, Clone)]
/// Supported Git forge platforms.
pub enum Remote {
    Github(RemoteConfig),
    Gitea(RemoteConfig),
}
