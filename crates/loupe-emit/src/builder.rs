//! Extraction run orchestration.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};

use loupe_extract::{
    dedupe, discover, DiscoverError, ExtractContext, ExtractError, Extractor, ReactExtractor,
    ResolvedConfig,
};
use loupe_meta::{ExtractionWarning, MetaDocument};

use crate::usage::apply_usage_counts;

/// Drives one extraction run: discover, extract, dedupe, assemble.
pub struct MetaBuilder {
    project_root: PathBuf,
    config: ResolvedConfig,
    extractor: Box<dyn Extractor>,
}

/// Result of a completed run. Warnings are surfaced here, never thrown.
#[derive(Debug)]
pub struct RunResult {
    pub document: MetaDocument,
    pub warnings: Vec<ExtractionWarning>,
    pub files_skipped: usize,
    pub duration_ms: u64,
}

/// Errors that abort a run before a document is assembled.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl MetaBuilder {
    /// Create a builder with the default React extraction strategy.
    pub fn new(project_root: impl Into<PathBuf>, config: ResolvedConfig) -> Self {
        Self {
            project_root: project_root.into(),
            config,
            extractor: Box::new(ReactExtractor::new()),
        }
    }

    /// Substitute the extraction strategy.
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run the full pipeline and assemble the output document.
    pub fn run(&self) -> Result<RunResult, BuildError> {
        let start = Instant::now();

        let discovery = discover(
            &self.project_root,
            &self.config.component_glob,
            &self.config.exclude_files,
        )?;
        tracing::info!(
            "discovered {} component files for {}",
            discovery.files.len(),
            self.config.component_glob
        );

        let mut warnings = discovery.warnings;

        let ctx = ExtractContext {
            project_root: &self.project_root,
            config: &self.config,
            files: &discovery.files,
        };
        let output = self.extractor.extract(&ctx)?;
        warnings.extend(output.warnings);

        let (mut components, dedupe_warnings) = dedupe(output.components);
        warnings.extend(dedupe_warnings);

        // ordinal fallback labels for unlabeled examples
        for component in &mut components {
            for (i, example) in component.examples.iter_mut().enumerate() {
                if example.label.is_none() {
                    example.label = Some(format!("Ex {}", i + 1));
                }
            }
        }

        apply_usage_counts(&discovery.files, &self.project_root, &mut components);

        components.sort_by(|a, b| a.name.cmp(&b.name));

        let document = MetaDocument {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            component_dir: self.config.component_glob.clone(),
            components,
            path_alias: self.config.path_alias.clone(),
        };

        Ok(RunResult {
            document,
            warnings,
            files_skipped: output.files_skipped,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
