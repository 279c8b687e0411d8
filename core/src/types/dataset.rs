use crate::types::tag::Tag;
use std::collections::BTreeMap;

/// A tag-keyed dataset, as exchanged with API layers
///
/// Keys are attribute tags; the `BTreeMap` keeps entries in tag order so
/// serialized output is deterministic.
pub type TagMap = BTreeMap<Tag, TagValue>;

/// Value held by one attribute in a [`TagMap`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum TagValue {
    /// Plain text value
    Text(String),
    /// Sequence value: nested item datasets
    Items(Vec<TagMap>),
}

impl TagValue {
    /// Returns the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            TagValue::Items(_) => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}
