//! Component metadata extraction engine.
//!
//! This crate turns a set of TSX/JSX source files into serializable component
//! metadata: it resolves the run configuration, discovers files, locates
//! exported component declarations, classifies each prop's type into a
//! finite JSON-safe shape, interprets JSDoc `@example` snippets, and
//! deduplicates repeated display names.

pub mod config;
pub mod dedupe;
pub mod discover;
pub mod examples;
pub mod jsdoc;
pub mod jsx;
pub mod react;
pub mod traits;

pub use config::{detect_path_alias, ConfigError, ExtractOptions, ResolvedConfig};
pub use dedupe::dedupe;
pub use discover::{discover, DiscoverError, Discovery};
pub use examples::detect_examples;
pub use jsdoc::{parse_jsdoc, JsDoc, JsDocTag};
pub use jsx::{parse_snippet, AttrValue, JsxSnippet};
pub use react::ReactExtractor;
pub use traits::{ExtractContext, ExtractError, ExtractionOutput, Extractor};
