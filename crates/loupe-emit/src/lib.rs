//! Run orchestration and artifact output.
//!
//! Drives a full extraction run (discover, extract, dedupe, assemble) and
//! writes the two output artifacts: the metadata document and the registry
//! import-map module.

pub mod builder;
pub mod registry;
pub mod usage;
pub mod writer;

pub use builder::{BuildError, MetaBuilder, RunResult};
pub use registry::{import_ref, registry_module};
pub use writer::{write_outputs, EmitError, WrittenArtifacts};
