//! Initialize a loupe configuration in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    let config_path = Path::new("loupe.toml");

    if config_path.exists() && !yes {
        tracing::warn!("loupe.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG).context("Failed to write loupe.toml")?;
    tracing::info!("Created loupe.toml");
    tracing::info!("Run 'loupe extract' to generate component metadata.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Loupe Configuration

[components]
# Glob for component source files
glob = "src/components/**/*.tsx"

# File basenames to skip (merged with the built-in exclusions)
exclude_files = []

# Component display names to skip
exclude = []

[props]
# Prop names to drop from the metadata (merged with the built-ins)
filtered = []

# Prop-name regex patterns to drop (merged with the built-ins)
filtered_patterns = []

[output]
# Directory for components.json and registry.ts
dir = "loupe-meta"

# Path aliases for registry imports; detected from tsconfig.json when
# omitted.
# [alias]
# "@/" = "src/"
"#;
