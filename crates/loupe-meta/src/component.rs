//! Component-level metadata: examples, wrappers, and the per-component record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prop::PropMeta;

/// One labeled preset extracted from a JSDoc `@example` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Label from the tag body; assembly backfills an ordinal "Ex N" when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Literal JSX attribute values of the component element
    pub props: BTreeMap<String, Value>,

    /// Outer element data when the example nests the component in a wrapper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<ExampleWrapper>,
}

/// Wrapper data for a single example: the enclosing element and its literal
/// attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleWrapper {
    pub name: String,
    pub props: BTreeMap<String, Value>,
}

/// An outer JSX element promoted to a component-level wrapper.
///
/// Only emitted when every example for the component nests it inside the
/// same outer element; defaults merge first-write-wins across examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperComponent {
    pub name: String,
    pub defaults: BTreeMap<String, Value>,
}

/// Extracted metadata for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Display name; unique key within a run after deduplication
    pub name: String,

    /// Source file path, relative to the project root
    pub file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub props: BTreeMap<String, PropMeta>,

    /// Whether the component declares a children slot
    pub accepts_children: bool,

    pub examples: Vec<Example>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<WrapperComponent>,

    /// How often the component appears in the rest of the discovered set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<usize>,
}

impl ComponentMeta {
    /// Create an empty record for a display name and source file.
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            description: None,
            props: BTreeMap::new(),
            accepts_children: false,
            examples: Vec::new(),
            wrapper: None,
            usage_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::PropKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_camel_case_keys() {
        let mut meta = ComponentMeta::new("Button", "src/components/button.tsx");
        meta.accepts_children = true;

        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["name"], "Button");
        assert_eq!(json["acceptsChildren"], true);
        assert!(json.get("wrapper").is_none());
        assert!(json.get("usageCount").is_none());
    }

    #[test]
    fn empty_example_list_is_serialized_not_omitted() {
        let meta = ComponentMeta::new("Badge", "src/components/badge.tsx");
        let json = serde_json::to_value(&meta).unwrap();

        assert!(json["examples"].as_array().unwrap().is_empty());
    }

    #[test]
    fn props_map_is_ordered_by_name() {
        let mut meta = ComponentMeta::new("Card", "src/components/card.tsx");
        for name in ["zeta", "alpha", "mid"] {
            meta.props.insert(
                name.to_string(),
                PropMeta {
                    name: name.to_string(),
                    kind: PropKind::String,
                    type_text: "string".into(),
                    required: false,
                    default: None,
                    description: None,
                },
            );
        }

        let json = serde_json::to_string(&meta).unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        let mid = json.find("\"mid\"").unwrap();
        let zeta = json.find("\"zeta\"").unwrap();

        assert!(alpha < mid && mid < zeta);
    }
}
