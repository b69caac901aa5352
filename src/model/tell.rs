//! Tell wrapper
//!
//! A wrapper around Tell data coming back from Tellus to abstract away the
//! underlying payload format. Construction never mutates the payload; all
//! derived accessors are pure reads.

use serde_json::Value;

/// Raw Tell payload as served by `/t/<alias>` and (in reduced form) by the
/// `q/<query>` list endpoints. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct TellData {
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub go_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default, rename = "read-only")]
    pub read_only: bool,
    /// Data blocks keyed by source id; only ids in the display table are
    /// rendered (see `wiring::display_data_blocks`).
    #[serde(default)]
    pub data: serde_json::Map<String, Value>,
    /// Diagnostics attached by the server (e.g. a link that is not active).
    #[serde(default, rename = "tellus-info")]
    pub tellus_info: Option<Value>,
    #[serde(default, rename = "z-audit-info")]
    pub audit: Option<AuditInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct AuditInfo {
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub last_modified_by: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tell {
    alias: String,
    data: TellData,
}

impl Tell {
    pub fn new(alias: impl Into<String>, data: TellData) -> Self {
        Self {
            alias: alias.into(),
            data,
        }
    }

    /// Build a Tell from one entry of an alias-keyed query response. Query
    /// responses historically mapped aliases straight to go URL strings, so a
    /// bare string is taken as the go URL; anything else unparseable degrades
    /// to an empty Tell rather than failing the whole list.
    pub fn from_value(alias: &str, value: &Value) -> Self {
        let data = match value {
            Value::String(go_url) => TellData {
                go_url: Some(go_url.clone()),
                ..TellData::default()
            },
            other => serde_json::from_value(other.clone()).unwrap_or_default(),
        };
        Self::new(alias, data)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn go_url(&self) -> Option<&str> {
        self.data.go_url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    /// The description, falling back to the alias for Tells without one.
    pub fn always_description(&self) -> &str {
        self.description().unwrap_or(&self.alias)
    }

    pub fn tags(&self) -> &[String] {
        &self.data.tags
    }

    pub fn categories(&self) -> &[String] {
        &self.data.categories
    }

    pub fn groups(&self) -> &[String] {
        &self.data.groups
    }

    pub fn read_only(&self) -> bool {
        self.data.read_only
    }

    pub fn data_blocks(&self) -> &serde_json::Map<String, Value> {
        &self.data.data
    }

    pub fn audit(&self) -> Option<&AuditInfo> {
        self.data.audit.as_ref()
    }

    /// Serialized diagnostic blob, or None when the server attached nothing.
    pub fn tell_errors(&self) -> Option<String> {
        self.data.tellus_info.as_ref().map(|info| info.to_string())
    }

    /// Tooltip text: the description, highlighting any server diagnostics.
    pub fn tooltip(&self) -> String {
        match self.tell_errors() {
            Some(errors) => format!("{}\n\nTellus Says:\n{}", self.always_description(), errors),
            None => self.always_description().to_string(),
        }
    }
}

/// Standard Go URL for a Tell on the current instance: the short redirect
/// the server serves at `/{alias}`.
pub fn tellus_go_url(origin: &str, alias: &str) -> String {
    format!("{}/{}", origin, alias)
}

/// URL of the Tell page itself (as opposed to the Go URL, which redirects).
pub fn tellus_tell_url(alias: &str) -> String {
    format!("/#t.{}", alias)
}

/// Where a Tell row links: the Go URL when the Tell has one, otherwise the
/// Tell page itself.
pub fn tell_link_href(tell: &Tell, origin: &str) -> String {
    if tell.go_url().is_some() {
        tellus_go_url(origin, tell.alias())
    } else {
        tellus_tell_url(tell.alias())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tell(payload: Value) -> Tell {
        Tell::from_value("dray", &payload)
    }

    #[test]
    fn always_description_falls_back_to_alias() {
        let with_description = tell(json!({"description": "Dray's page"}));
        assert_eq!(with_description.always_description(), "Dray's page");

        let without = tell(json!({}));
        assert_eq!(without.always_description(), "dray");
    }

    #[test]
    fn bare_string_entry_is_taken_as_go_url() {
        let legacy = tell(json!("http://dray.github.com"));
        assert_eq!(legacy.go_url(), Some("http://dray.github.com"));
    }

    #[test]
    fn tell_errors_serializes_diagnostics() {
        let clean = tell(json!({"go_url": "http://example.org"}));
        assert_eq!(clean.tell_errors(), None);

        let broken = tell(json!({"tellus-info": {"link": "not active"}}));
        let errors = broken.tell_errors().unwrap();
        assert!(errors.contains("not active"));
        assert!(broken.tooltip().contains("Tellus Says:"));
    }

    #[test]
    fn unparseable_entry_degrades_to_empty_tell() {
        let odd = tell(json!(42));
        assert_eq!(odd.go_url(), None);
        assert_eq!(odd.always_description(), "dray");
    }

    #[test]
    fn full_payload_round_trips_typed_fields() {
        let full = tell(json!({
            "alias": "dray",
            "go_url": "http://dray.github.com",
            "description": "a person",
            "tags": ["coffee-bot"],
            "categories": ["tellus-aquanaut"],
            "groups": ["people"],
            "read-only": true,
            "data": {"user-info": {"Phone": "x1234"}},
            "z-audit-info": {"created": "2023-01-01T00:00:00", "created_by": "tellus"}
        }));
        assert!(full.read_only());
        assert_eq!(full.tags(), ["coffee-bot"]);
        assert_eq!(full.groups(), ["people"]);
        assert!(full.data_blocks().contains_key("user-info"));
        assert_eq!(full.audit().unwrap().created_by.as_deref(), Some("tellus"));
    }

    #[test]
    fn link_href_prefers_go_url() {
        let origin = "http://tellus.example.com";
        let with_go = tell(json!({"go_url": "http://wiki.example.com/dray"}));
        assert_eq!(
            tell_link_href(&with_go, origin),
            "http://tellus.example.com/dray"
        );

        let without = tell(json!({"description": "no link yet"}));
        assert_eq!(tell_link_href(&without, origin), "/#t.dray");
    }

    #[test]
    fn go_and_tell_urls() {
        assert_eq!(
            tellus_go_url("http://tellus.example.com", "vfh"),
            "http://tellus.example.com/vfh"
        );
        assert_eq!(tellus_tell_url("vfh"), "/#t.vfh");
    }
}
