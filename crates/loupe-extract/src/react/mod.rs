//! React/TSX extraction strategy.

mod classify;
mod declaration;
mod props;
mod scan;

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use loupe_meta::{ComponentMeta, ExtractionWarning};

use crate::examples::detect_examples;
use crate::jsdoc::parse_jsdoc;
use crate::traits::{ExtractContext, ExtractError, ExtractionOutput, Extractor};
use declaration::{classify_exports, Classification, TypeTable};
use props::resolve_props;

/// Extracts component metadata from TSX/JSX sources by scanning exported
/// declarations and resolving their props types.
#[derive(Debug, Default)]
pub struct ReactExtractor;

impl ReactExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_file(&self, ctx: &ExtractContext, path: &Path) -> FileOutcome {
        let rel = relative_path(ctx.project_root, path);
        let mut outcome = FileOutcome::default();

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !self.extensions().contains(&ext) {
            tracing::debug!("{}: unhandled extension, skipping", rel);
            return outcome;
        }

        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                outcome
                    .warnings
                    .push(ExtractionWarning::error(&rel, format!("failed to read: {}", e)));
                return outcome;
            }
        };

        let types = TypeTable::parse(&source);

        for classification in classify_exports(&source) {
            match classification {
                Classification::Component(decl) => {
                    if ctx.config.is_component_excluded(&decl.name) {
                        tracing::debug!("{}: component {} is excluded", rel, decl.name);
                        continue;
                    }

                    match resolve_props(&decl, &types, ctx.config) {
                        Ok(resolved) => {
                            let mut meta = ComponentMeta::new(&decl.name, &rel);

                            let doc = decl.doc.as_deref().map(parse_jsdoc).unwrap_or_default();
                            let (examples, wrapper) = detect_examples(&decl.name, &doc);

                            meta.description = doc.description;
                            meta.props = resolved.props;
                            meta.accepts_children = resolved.accepts_children;
                            meta.examples = examples;
                            meta.wrapper = wrapper;

                            outcome.components.push(meta);
                        }
                        Err(message) => {
                            outcome.warnings.push(ExtractionWarning::warn(&rel, message));
                        }
                    }
                }
                Classification::NotAComponent { name, reason } => {
                    tracing::debug!("{}: skipping {}: {}", rel, name, reason);
                }
            }
        }

        outcome
    }
}

#[derive(Debug, Default)]
struct FileOutcome {
    components: Vec<ComponentMeta>,
    warnings: Vec<ExtractionWarning>,
}

impl Extractor for ReactExtractor {
    fn name(&self) -> &'static str {
        "react"
    }

    fn extensions(&self) -> &[&'static str] {
        &["tsx", "jsx"]
    }

    fn extract(&self, ctx: &ExtractContext) -> Result<ExtractionOutput, ExtractError> {
        // per-file extraction is independent; collection preserves the
        // discovery order so downstream tie-breaks stay deterministic
        let outcomes: Vec<FileOutcome> = ctx
            .files
            .par_iter()
            .map(|path| self.extract_file(ctx, path))
            .collect();

        let mut output = ExtractionOutput::default();
        for outcome in outcomes {
            if outcome.components.is_empty() {
                output.files_skipped += 1;
            }
            output.components.extend(outcome.components);
            output.warnings.extend(outcome.warnings);
        }

        Ok(output)
    }
}

fn relative_path(project_root: &Path, path: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
