//! Latest release tag discovery command.
use log::*;

use crate::{
    Result, forge::traits::ReleaseListFetcher,
    release::select_latest_stable_tag,
};

/// Reads the release listing once and returns the version of the newest
/// published release whose tag starts with `prefix`.
pub async fn find_latest_tag(
    fetcher: &dyn ReleaseListFetcher,
    prefix: &str,
) -> Result<Option<String>> {
    let remote = fetcher.remote_config();

    info!(
        "looking for latest release: repo: {}, tag_prefix: {}",
        remote.path(),
        prefix
    );

    let releases = fetcher.list_releases().await?;

    debug!("received {} release records", releases.len());

    let version = select_latest_stable_tag(&releases, prefix);

    match version.as_ref() {
        Some(version) => info!("found latest release version: {version}"),
        None => warn!("no published release found with prefix: {prefix}"),
    }

    Ok(version)
}
