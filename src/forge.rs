//! Release listing clients for Git forge platforms (GitHub, Gitea).
//!
//! Provides optional token-based authentication and a common trait for
//! reading a repository's releases.

/// Configuration and authentication for forge platforms.
pub mod config;

/// Factory for building a release fetcher from a configured remote.
pub mod factory;

/// Gitea and Forgejo API client implementation.
pub mod gitea;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Common traits for forge platform abstraction.
pub mod traits;
