//! Stored resource types.
//!
//! This module defines the [`StoredResource`] type, which pairs the stored
//! JSON document with the typed envelope fields the store relies on.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ResourceType;

/// A resource with its versioning envelope.
///
/// The `content` is the full JSON document handed back to callers; it always
/// carries `resourceType`, `id`, `meta.versionId` and `meta.lastUpdated`
/// consistent with the typed fields here. Instances are produced by
/// [`envelope::stamp`](crate::envelope::stamp) and are never mutated in place.
///
/// # Examples
///
/// ```
/// use onecare_persistence::envelope;
/// use onecare_persistence::types::ResourceType;
/// use serde_json::json;
///
/// let stored = envelope::stamp(
///     ResourceType::Patient,
///     json!({"resourceType": "Patient", "id": "p1"}),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(stored.id(), "p1");
/// assert_eq!(stored.version_id(), "1");
/// assert_eq!(stored.url(), "Patient/p1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResource {
    resource_type: ResourceType,
    id: String,
    version: u64,
    last_updated: DateTime<Utc>,
    content: Value,
}

impl StoredResource {
    pub(crate) fn from_parts(
        resource_type: ResourceType,
        id: String,
        version: u64,
        last_updated: DateTime<Utc>,
        content: Value,
    ) -> Self {
        Self {
            resource_type,
            id,
            version,
            last_updated,
            content,
        }
    }

    /// Returns the resource type.
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Returns the resource's logical ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the numeric version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the version ID as it appears in `meta.versionId`.
    pub fn version_id(&self) -> String {
        self.version.to_string()
    }

    /// Returns when this version was written.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns the resource content as JSON.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Consumes self and returns the content.
    pub fn into_content(self) -> Value {
        self.content
    }

    /// Returns the weak ETag for this version.
    pub fn etag(&self) -> String {
        format!("W/\"{}\"", self.version)
    }

    /// Returns the relative URL, which is also the literal reference form
    /// (e.g. `"Patient/123"`).
    pub fn url(&self) -> String {
        self.resource_type.reference(&self.id)
    }

    /// Returns `subject.reference`, if present.
    pub fn subject_reference(&self) -> Option<&str> {
        self.content
            .get("subject")
            .and_then(|s| s.get("reference"))
            .and_then(Value::as_str)
    }
}

/// Formats an instant as an RFC 3339 UTC timestamp with millisecond precision.
pub(crate) fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
