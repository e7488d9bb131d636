//! Prop classification model.

use serde::{Deserialize, Serialize};

/// Sub-kind of a component-slot prop.
///
/// A slot holds a renderable unit rather than data; the renderer resolves
/// its value externally, so slots never carry a statically computed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// An icon-component constructor (e.g. a `LucideIcon` alias)
    Icon,
    /// A concrete JSX element value
    Element,
    /// Generic renderable content
    Node,
}

/// Classified shape of a prop's declared type.
///
/// The classification is finite and JSON-safe: anything that does not fit
/// one of the editable shapes degrades to `Opaque` and is passed through
/// untouched rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropKind {
    String,
    Number,
    Boolean,

    /// A union of string literals, in declaration order without duplicates
    Enum { values: Vec<String> },

    /// `T[]` or `Array<T>`; the item carries its own classification
    Array { item: Box<PropKind> },

    /// An inline or named object type, expanded into named fields
    Object { fields: Vec<FieldMeta> },

    /// A string-to-primitive indexed or mapped type
    Map,

    /// A component-slot prop (icon, element, or node)
    Slot { slot: SlotKind },

    /// Unclassifiable: function types, unknown generics, cyclic references
    Opaque,
}

impl PropKind {
    /// Whether a renderer can offer an editable control for this shape.
    pub fn is_editable(&self) -> bool {
        !matches!(self, PropKind::Opaque | PropKind::Slot { .. })
    }

    /// Whether this prop holds renderable content rather than data.
    pub fn is_slot(&self) -> bool {
        matches!(self, PropKind::Slot { .. })
    }
}

/// One named, typed member of an expanded object or array-item type.
///
/// Fields are classified by the same rules as top-level props, so an object
/// field can itself be an array of objects containing slots, to arbitrary
/// depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMeta {
    pub name: String,
    #[serde(flatten)]
    pub kind: PropKind,
    pub required: bool,
}

/// Extracted metadata for a single prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropMeta {
    pub name: String,

    #[serde(flatten)]
    pub kind: PropKind,

    /// Raw declared type text, kept for plugin matching
    pub type_text: String,

    pub required: bool,

    /// Default value when the parameter destructuring supplies a literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// JSDoc description attached to the member
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
