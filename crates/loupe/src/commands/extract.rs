//! Metadata extraction command.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use loupe_emit::{write_outputs, MetaBuilder};
use loupe_extract::{detect_path_alias, ExtractOptions, ResolvedConfig};

/// Configuration file structure (loupe.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    components: ComponentsSection,
    #[serde(default)]
    props: PropsSection,
    #[serde(default)]
    output: OutputSection,
    #[serde(default)]
    alias: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize, Default)]
struct ComponentsSection {
    /// Glob for component source files
    glob: Option<String>,
    /// File basenames to skip during discovery
    #[serde(default)]
    exclude_files: Vec<String>,
    /// Component display names to skip
    #[serde(default)]
    exclude: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PropsSection {
    /// Prop names dropped from the metadata
    #[serde(default)]
    filtered: Vec<String>,
    /// Prop-name regex patterns dropped from the metadata
    #[serde(default)]
    filtered_patterns: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct OutputSection {
    dir: Option<String>,
}

/// Load configuration from loupe.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(config_path: &Path) -> Result<ConfigFile> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        tracing::info!("Loaded config from {}", config_path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the extract command.
pub fn run(config_path: &Path, root: &Path, output: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let options = ExtractOptions {
        component_glob: file_config.components.glob,
        exclude_files: file_config.components.exclude_files,
        exclude_components: file_config.components.exclude,
        filtered_props: file_config.props.filtered,
        filtered_prop_patterns: file_config.props.filtered_patterns,
        output_dir: output.or(file_config.output.dir.map(PathBuf::from)),
        path_alias: file_config.alias,
    };

    let detected_alias = detect_path_alias(root);
    let config = ResolvedConfig::resolve(options, detected_alias).context("Invalid configuration")?;
    let output_dir = root.join(&config.output_dir);

    let result = MetaBuilder::new(root, config).run()?;

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    let written = write_outputs(&output_dir, &result.document)?;

    tracing::info!(
        "Extracted {} components in {}ms ({} files skipped, {} warnings)",
        result.document.components.len(),
        result.duration_ms,
        result.files_skipped,
        result.warnings.len()
    );
    tracing::info!("Wrote {}", written.document_path.display());
    tracing::info!("Wrote {}", written.registry_path.display());

    Ok(())
}
