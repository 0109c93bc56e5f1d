//! Input contact model, as the frontend store sends it.
//!
//! Only the fields the layout reads are deserialized; everything else the
//! store keeps per contact (name, company, avatar, ...) is ignored here.

use serde::Deserialize;

/// A contact to lay out. The first entry of `category_tags` is the primary
/// tag and decides which cluster the contact belongs to; the rest of the
/// tag list never affects layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub category_tags: Vec<String>,
}

impl Contact {
    /// Primary tag, if the contact has any tags at all.
    pub fn primary_tag(&self) -> Option<&str> {
        self.category_tags.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let c: Contact =
            serde_json::from_str(r#"{"id":"c1","categoryTags":["Work","Tech"]}"#).unwrap();
        assert_eq!(c.id, "c1");
        assert_eq!(c.category_tags, vec!["Work", "Tech"]);
        assert_eq!(c.primary_tag(), Some("Work"));
    }

    #[test]
    fn test_missing_tags_defaults_to_empty() {
        let c: Contact = serde_json::from_str(r#"{"id":"c2"}"#).unwrap();
        assert!(c.category_tags.is_empty());
        assert_eq!(c.primary_tag(), None);
    }

    #[test]
    fn test_extra_store_fields_are_ignored() {
        // The store sends whole contact rows; unknown fields must not break parsing.
        let c: Contact = serde_json::from_str(
            r#"{"id":"c3","name":"Ada","categoryTags":[],"relationshipStrength":3}"#,
        )
        .unwrap();
        assert_eq!(c.id, "c3");
        assert_eq!(c.primary_tag(), None);
    }
}
