//! The top-level output document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::component::ComponentMeta;

/// The metadata document consumed by the preview renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDocument {
    /// ISO timestamp of the run that produced this document
    pub generated_at: String,

    /// The component glob the run was scoped to
    pub component_dir: String,

    pub components: Vec<ComponentMeta>,

    /// Resolved path-alias map (alias prefix -> real path prefix)
    pub path_alias: BTreeMap<String, String>,
}
