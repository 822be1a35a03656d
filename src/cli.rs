//! CLI argument parsing and forge platform configuration.
use clap::Parser;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{
    Result, TagFinderError,
    forge::config::{Remote, RemoteConfig},
    release::DEFAULT_TAG_PREFIX,
};

/// Repository queried when no repository flag is given.
pub const DEFAULT_GITHUB_REPO: &str =
    "https://github.com/swagger-api/swagger-parser";

/// Prints the version of the latest published release whose tag starts with
/// a prefix.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// GitHub repository URL (https://github.com/owner/repo). Defaults to
    /// swagger-api/swagger-parser when no repository is configured.
    pub github_repo: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = "")]
    /// Gitea repository URL for self-hosted instances.
    pub gitea_repo: String,

    #[arg(long, default_value = "")]
    /// Gitea access token. Falls back to GITEA_TOKEN env var.
    pub gitea_token: String,

    #[arg(long, default_value = DEFAULT_TAG_PREFIX)]
    /// Only releases whose tag starts with this prefix are considered.
    pub prefix: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<Remote> {
        if !self.github_repo.is_empty() && !self.gitea_repo.is_empty() {
            return Err(TagFinderError::invalid_args(
                "only one of --github-repo and --gitea-repo may be set",
            ));
        }

        if !self.gitea_repo.is_empty() {
            let config = get_remote_config(
                &self.gitea_repo,
                &self.gitea_token,
                "GITEA_TOKEN",
            )?;
            return Ok(Remote::Gitea(config));
        }

        let github_repo = if self.github_repo.is_empty() {
            DEFAULT_GITHUB_REPO
        } else {
            &self.github_repo
        };

        let config =
            get_remote_config(github_repo, &self.github_token, "GITHUB_TOKEN")?;

        Ok(Remote::Github(config))
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(TagFinderError::invalid_args(
            "only http and https schemes are supported for repo urls",
        )),
    }
}

/// Picks the first non-empty token from the flag, the URL, then the
/// environment.
fn resolve_token(
    flag_token: &str,
    url_token: Option<String>,
    env_var: &str,
) -> Option<SecretString> {
    let mut token = flag_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = url_token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var(env_var)
    {
        token = env_var_token;
    }

    if token.is_empty() {
        None
    } else {
        Some(SecretString::from(token))
    }
}

/// Build remote configuration from a repository URL with token resolution.
fn get_remote_config(
    repo_url: &str,
    flag_token: &str,
    token_env_var: &str,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(repo_url)?;

    validate_scheme(parsed.scheme)?;

    let host = parsed.host.clone().ok_or_else(|| {
        TagFinderError::invalid_args(format!(
            "unable to parse host from repo: {repo_url}"
        ))
    })?;

    let owner = parsed.owner.clone().ok_or_else(|| {
        TagFinderError::invalid_args(format!(
            "unable to parse owner from repo: {repo_url}"
        ))
    })?;

    Ok(RemoteConfig {
        host,
        port: parsed.port,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name.clone(),
        token: resolve_token(flag_token, parsed.token.clone(), token_env_var),
    })
}
