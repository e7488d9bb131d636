//! The extractor plugin seam.
//!
//! File discovery and configuration are fixed stages; the type-resolution
//! strategy is swappable behind this trait so a different source language's
//! AST can be substituted without touching the rest of the pipeline.

use std::path::{Path, PathBuf};

use loupe_meta::{ComponentMeta, ExtractionWarning};

use crate::config::ResolvedConfig;

/// Inputs handed to an extractor for one run.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub project_root: &'a Path,
    pub config: &'a ResolvedConfig,

    /// Pre-discovered files, already sorted and exclusion-filtered
    pub files: &'a [PathBuf],
}

/// What an extractor returns for one run.
#[derive(Debug, Default)]
pub struct ExtractionOutput {
    pub components: Vec<ComponentMeta>,
    pub warnings: Vec<ExtractionWarning>,

    /// Files that contributed zero components
    pub files_skipped: usize,
}

/// Errors that abort an extractor outright.
///
/// Per-file and per-prop problems are never errors; they surface as
/// [`ExtractionWarning`]s in the output instead.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("extractor failure: {0}")]
    Failed(String),
}

/// A pluggable extraction strategy.
pub trait Extractor: Send + Sync {
    /// Strategy identifier (e.g. "react")
    fn name(&self) -> &'static str;

    /// File extensions this extractor handles
    fn extensions(&self) -> &[&'static str];

    /// Extract component metadata from the pre-discovered file set.
    fn extract(&self, ctx: &ExtractContext) -> Result<ExtractionOutput, ExtractError>;
}
