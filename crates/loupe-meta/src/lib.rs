//! Serializable component metadata model.
//!
//! This crate defines the JSON-safe document shape produced by an extraction
//! run: components, their classified props, extracted examples, and the
//! warnings accumulated along the way. It performs no I/O.

pub mod component;
pub mod document;
pub mod prop;
pub mod warning;

pub use component::{ComponentMeta, Example, ExampleWrapper, WrapperComponent};
pub use document::MetaDocument;
pub use prop::{FieldMeta, PropKind, PropMeta, SlotKind};
pub use warning::{ExtractionWarning, Severity};
