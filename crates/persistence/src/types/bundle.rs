//! Bundle assembly.
//!
//! A [`Bundle`] is the list-result envelope returned by search, by
//! `$everything` and (on request) around a single read. Assembly copies the
//! resource content into entries; the stored records are never touched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Page, StoredResource};

/// Bundle types produced by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    /// Search results (also used for `$everything`).
    Searchset,
}

/// How a bundle entry matched the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEntryMode {
    /// This is a match to the search parameters.
    Match,
    /// This was added alongside the matches.
    Include,
}

/// A FHIR Bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Always `"Bundle"`.
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    /// The bundle type.
    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    /// Number of resources in the full result set (before pagination).
    pub total: usize,

    /// Navigation links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    /// The entries, in result order.
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

/// A link in a Bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleLink {
    /// The relation type (self, next, previous).
    pub relation: String,

    /// The URL.
    pub url: String,
}

/// An entry in a Bundle, holding exactly one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleEntry {
    /// The absolute URL of the resource, when a base URL is known.
    #[serde(rename = "fullUrl", skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// The resource.
    pub resource: Value,

    /// Search information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BundleEntrySearch>,
}

/// Search information for a bundle entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEntrySearch {
    /// How this entry matched.
    pub mode: SearchEntryMode,
}

impl Bundle {
    /// Creates an empty searchset bundle.
    pub fn searchset() -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            bundle_type: BundleType::Searchset,
            total: 0,
            link: Vec::new(),
            entry: Vec::new(),
        }
    }

    /// Wraps one page of search results; `total` is the page's pre-pagination total.
    pub fn from_page(page: &Page<StoredResource>) -> Self {
        let mut bundle = Self::searchset().with_total(page.total);
        bundle.entry = page.items.iter().map(BundleEntry::matched).collect();
        bundle
    }

    /// Wraps a single resource.
    pub fn single(resource: &StoredResource) -> Self {
        let mut bundle = Self::searchset().with_total(1);
        bundle.entry.push(BundleEntry::matched(resource));
        bundle
    }

    /// Sets the total count.
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    /// Appends an entry.
    pub fn with_entry(mut self, entry: BundleEntry) -> Self {
        self.entry.push(entry);
        self
    }

    /// Adds a link.
    pub fn with_link(mut self, relation: impl Into<String>, url: impl Into<String>) -> Self {
        self.link.push(BundleLink {
            relation: relation.into(),
            url: url.into(),
        });
        self
    }

    /// Fills in `fullUrl` on every entry as `{base_url}/{Type}/{id}`.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        for entry in &mut self.entry {
            let resource_type = entry.resource.get("resourceType").and_then(Value::as_str);
            let id = entry.resource.get("id").and_then(Value::as_str);
            if let (Some(resource_type), Some(id)) = (resource_type, id) {
                entry.full_url = Some(format!("{}/{}/{}", base_url, resource_type, id));
            }
        }
        self
    }

    /// Returns the resources in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &Value> {
        self.entry.iter().map(|e| &e.resource)
    }

    /// Serialises the bundle to FHIR JSON.
    pub fn to_json(&self) -> Value {
        // Every field is plain data, so serialisation cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl BundleEntry {
    /// Creates a match entry from a stored resource.
    pub fn matched(resource: &StoredResource) -> Self {
        Self::with_mode(resource, SearchEntryMode::Match)
    }

    /// Creates an include entry from a stored resource.
    pub fn included(resource: &StoredResource) -> Self {
        Self::with_mode(resource, SearchEntryMode::Include)
    }

    fn with_mode(resource: &StoredResource, mode: SearchEntryMode) -> Self {
        Self {
            full_url: None,
            resource: resource.content().clone(),
            search: Some(BundleEntrySearch { mode }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope;
    use crate::types::{Pagination, ResourceType};
    use serde_json::json;

    fn patient(id: &str) -> StoredResource {
        envelope::stamp(
            ResourceType::Patient,
            json!({"resourceType": "Patient", "id": id}),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_from_page_keeps_total_and_order() {
        let resources = vec![patient("a"), patient("b"), patient("c")];
        let page = Pagination::new(2, 1).paginate(resources);
        let bundle = Bundle::from_page(&page);

        assert_eq!(bundle.total, 3);
        assert_eq!(bundle.entry.len(), 2);
        let ids: Vec<_> = bundle.resources().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!("b"), json!("c")]);
    }

    #[test]
    fn test_single() {
        let bundle = Bundle::single(&patient("p1"));
        assert_eq!(bundle.total, 1);
        assert_eq!(bundle.entry[0].resource["id"], "p1");
        assert_eq!(
            bundle.entry[0].search.unwrap().mode,
            SearchEntryMode::Match
        );
    }

    #[test]
    fn test_json_shape() {
        let bundle = Bundle::single(&patient("p1")).with_base_url("http://localhost/fhir/");
        let json = bundle.to_json();

        assert_eq!(json["resourceType"], "Bundle");
        assert_eq!(json["type"], "searchset");
        assert_eq!(json["total"], 1);
        assert_eq!(json["entry"][0]["fullUrl"], "http://localhost/fhir/Patient/p1");
        assert_eq!(json["entry"][0]["search"]["mode"], "match");
        assert!(json.get("link").is_none());
    }

    #[test]
    fn test_empty_bundle() {
        let page: Page<StoredResource> = Pagination::default().paginate(Vec::new());
        let json = Bundle::from_page(&page).to_json();
        assert_eq!(json["total"], 0);
        assert_eq!(json["entry"], json!([]));
    }

    #[test]
    fn test_assembly_does_not_mutate_source() {
        let stored = patient("p1");
        let before = stored.clone();
        let _ = Bundle::single(&stored).with_base_url("http://x");
        assert_eq!(stored, before);
    }
}
