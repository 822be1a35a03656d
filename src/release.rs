//! Release records as reported by a forge and selection of the latest
//! published tag for a version family.
use log::*;
use serde::Deserialize;
use serde_json::Value;

use crate::error::TagFinderError;

/// Default tag prefix used to select the `1.x` release family.
pub const DEFAULT_TAG_PREFIX: &str = "v1";

/// A single release entry exactly as it arrived from the forge API.
///
/// Both fields are optional and left untyped: some sources report `draft` as
/// a string, and a single odd entry must not fail the whole listing. Use
/// [`ReleaseRecord::try_from`] to obtain a validated record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleasePayload {
    #[serde(default)]
    pub draft: Option<Value>,
    #[serde(default)]
    pub tag_name: Option<Value>,
}

impl ReleasePayload {
    pub fn new(draft: impl Into<Value>, tag_name: impl Into<String>) -> Self {
        Self {
            draft: Some(draft.into()),
            tag_name: Some(Value::String(tag_name.into())),
        }
    }
}

/// Validated release entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub draft: bool,
    pub tag_name: String,
}

impl ReleaseRecord {
    /// Whether this release is published and belongs to the family named by
    /// `prefix`. The check is a plain `starts_with`, so `v10.2` matches `v1`.
    pub fn qualifies(&self, prefix: &str) -> bool {
        !self.draft && self.tag_name.starts_with(prefix)
    }

    /// Tag name without its leading version marker (`v1.5` -> `1.5`).
    pub fn version(&self) -> &str {
        let mut chars = self.tag_name.chars();
        chars.next();
        chars.as_str()
    }
}

impl TryFrom<&ReleasePayload> for ReleaseRecord {
    type Error = TagFinderError;

    fn try_from(payload: &ReleasePayload) -> Result<Self, Self::Error> {
        let draft = payload
            .draft
            .as_ref()
            .filter(|v| !v.is_null())
            .ok_or_else(|| TagFinderError::malformed_record("draft"))?;

        let tag_name = payload
            .tag_name
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| TagFinderError::malformed_record("tag_name"))?;

        Ok(Self {
            draft: is_truthy(draft),
            tag_name: tag_name.to_string(),
        })
    }
}

/// Coerces a draft flag to a boolean. Only JSON `true` and the string
/// `"true"` (any ASCII case, surrounding whitespace ignored) count as true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Returns the version of the first non-draft release, in the given order,
/// whose tag starts with `prefix`. Malformed entries are skipped.
pub fn select_latest_stable_tag(
    records: &[ReleasePayload],
    prefix: &str,
) -> Option<String> {
    for (index, payload) in records.iter().enumerate() {
        let record = match ReleaseRecord::try_from(payload) {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping release at position {index}: {err}");
                continue;
            }
        };

        if record.qualifies(prefix) {
            debug!("selected release tag: {}", record.tag_name);
            return Some(record.version().to_string());
        }

        debug!(
            "ignoring release tag: {}, draft: {}",
            record.tag_name, record.draft
        );
    }

    None
}
