//! Extraction configuration: user options, defaults, and the merge rules.
//!
//! List options are union-merged: the resolved value is always defaults plus
//! user entries, deduplicated. A user can add to the built-in exclusions but
//! can never silently drop one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

/// Default glob scoping extraction to the conventional UI source directory.
pub const DEFAULT_COMPONENT_GLOB: &str = "src/components/**/*.tsx";

/// Default output directory for the emitted artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "loupe-meta";

const DEFAULT_EXCLUDE_FILES: &[&str] = &["index.ts", "index.tsx"];
const DEFAULT_EXCLUDE_COMPONENTS: &[&str] = &[];
const DEFAULT_FILTERED_PROPS: &[&str] = &["className", "style", "key", "ref"];
const DEFAULT_FILTERED_PROP_PATTERNS: &[&str] = &["^on[A-Z]", "^aria-", "^data-"];

fn default_path_alias() -> BTreeMap<String, String> {
    BTreeMap::from([("@/".to_string(), "src/".to_string())])
}

/// User-supplied options, all optional.
///
/// Deserialized from `loupe.toml` or built programmatically.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub component_glob: Option<String>,
    pub exclude_files: Vec<String>,
    pub exclude_components: Vec<String>,
    pub filtered_props: Vec<String>,
    pub filtered_prop_patterns: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub path_alias: Option<BTreeMap<String, String>>,
}

/// Fully resolved configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub component_glob: String,
    pub exclude_files: Vec<String>,
    pub exclude_components: Vec<String>,
    pub filtered_props: Vec<String>,
    pub filtered_prop_patterns: Vec<String>,
    pub output_dir: PathBuf,
    pub path_alias: BTreeMap<String, String>,

    compiled_patterns: Vec<Regex>,
}

/// Errors that make a configuration unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid filtered prop pattern `{pattern}`: {message}")]
    BadPropPattern { pattern: String, message: String },
}

impl ResolvedConfig {
    /// Merge user options with defaults.
    ///
    /// Pure given its inputs: scalar options take the user value when
    /// present, list options are the union of defaults and user values, and
    /// the path alias falls back from explicit to detected to default.
    pub fn resolve(
        options: ExtractOptions,
        detected_alias: Option<BTreeMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let filtered_prop_patterns = union_merge(
            DEFAULT_FILTERED_PROP_PATTERNS,
            &options.filtered_prop_patterns,
        );

        let compiled_patterns = filtered_prop_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::BadPropPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let path_alias = options
            .path_alias
            .or(detected_alias)
            .unwrap_or_else(default_path_alias);

        Ok(Self {
            component_glob: options
                .component_glob
                .unwrap_or_else(|| DEFAULT_COMPONENT_GLOB.to_string()),
            exclude_files: union_merge(DEFAULT_EXCLUDE_FILES, &options.exclude_files),
            exclude_components: union_merge(
                DEFAULT_EXCLUDE_COMPONENTS,
                &options.exclude_components,
            ),
            filtered_props: union_merge(DEFAULT_FILTERED_PROPS, &options.filtered_props),
            filtered_prop_patterns,
            output_dir: options
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            path_alias,
            compiled_patterns,
        })
    }

    /// Whether a prop must be dropped from the metadata entirely.
    pub fn is_prop_filtered(&self, name: &str) -> bool {
        self.filtered_props.iter().any(|p| p == name)
            || self.compiled_patterns.iter().any(|re| re.is_match(name))
    }

    /// Whether a component display name is excluded from the run.
    pub fn is_component_excluded(&self, name: &str) -> bool {
        self.exclude_components.iter().any(|c| c == name)
    }
}

/// Combine defaults and user entries: defaults first, then unseen user
/// entries in their given order, deduplicated.
pub fn union_merge(defaults: &[&str], user: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
    for entry in user {
        if !merged.iter().any(|m| m == entry) {
            merged.push(entry.clone());
        }
    }
    merged
}

/// Probe the project for a path-alias configuration.
///
/// Reads `tsconfig.json` and converts `compilerOptions.paths` entries like
/// `"@/*": ["./src/*"]` into `{"@/": "src/"}`. Any failure degrades to
/// "no alias detected" -- detection is never fatal.
pub fn detect_path_alias(project_root: &Path) -> Option<BTreeMap<String, String>> {
    let raw = std::fs::read_to_string(project_root.join("tsconfig.json")).ok()?;

    let json: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("tsconfig.json did not parse cleanly: {}", e);
            return None;
        }
    };

    let paths = json.get("compilerOptions")?.get("paths")?.as_object()?;

    let mut alias = BTreeMap::new();
    for (key, targets) in paths {
        let Some(first) = targets
            .as_array()
            .and_then(|a| a.first())
            .and_then(|v| v.as_str())
        else {
            continue;
        };

        let alias_prefix = key.strip_suffix('*').unwrap_or(key);
        let real_prefix = first.strip_suffix('*').unwrap_or(first);
        let real_prefix = real_prefix.strip_prefix("./").unwrap_or(real_prefix);

        if alias_prefix.is_empty() || real_prefix.is_empty() {
            continue;
        }
        alias.insert(alias_prefix.to_string(), real_prefix.to_string());
    }

    if alias.is_empty() {
        None
    } else {
        Some(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn union_merge_keeps_defaults_and_appends_user_entries() {
        let merged = union_merge(&["a", "b"], &strings(&["c", "b", "d", "c"]));
        assert_eq!(merged, strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn user_lists_can_only_add_to_defaults() {
        let options = ExtractOptions {
            exclude_files: strings(&["legacy.tsx"]),
            ..Default::default()
        };
        let config = ResolvedConfig::resolve(options, None).unwrap();

        // every default survives
        for default in DEFAULT_EXCLUDE_FILES {
            assert!(config.exclude_files.iter().any(|f| f == default));
        }
        assert!(config.exclude_files.iter().any(|f| f == "legacy.tsx"));
    }

    #[test]
    fn scalar_options_override_defaults() {
        let options = ExtractOptions {
            component_glob: Some("ui/**/*.tsx".to_string()),
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        let config = ResolvedConfig::resolve(options, None).unwrap();

        assert_eq!(config.component_glob, "ui/**/*.tsx");
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn explicit_alias_beats_detected_beats_default() {
        let explicit = BTreeMap::from([("#/".to_string(), "app/".to_string())]);
        let detected = BTreeMap::from([("~/".to_string(), "lib/".to_string())]);

        let with_explicit = ResolvedConfig::resolve(
            ExtractOptions {
                path_alias: Some(explicit.clone()),
                ..Default::default()
            },
            Some(detected.clone()),
        )
        .unwrap();
        assert_eq!(with_explicit.path_alias, explicit);

        let with_detected =
            ResolvedConfig::resolve(ExtractOptions::default(), Some(detected.clone())).unwrap();
        assert_eq!(with_detected.path_alias, detected);

        let with_default = ResolvedConfig::resolve(ExtractOptions::default(), None).unwrap();
        assert_eq!(with_default.path_alias, default_path_alias());
    }

    #[test]
    fn bad_filter_pattern_is_fatal() {
        let options = ExtractOptions {
            filtered_prop_patterns: strings(&["("]),
            ..Default::default()
        };

        let result = ResolvedConfig::resolve(options, None);
        assert!(matches!(result, Err(ConfigError::BadPropPattern { .. })));
    }

    #[test]
    fn prop_filtering_matches_names_and_patterns() {
        let config = ResolvedConfig::resolve(ExtractOptions::default(), None).unwrap();

        assert!(config.is_prop_filtered("className"));
        assert!(config.is_prop_filtered("onClick"));
        assert!(config.is_prop_filtered("aria-label"));
        assert!(config.is_prop_filtered("data-testid"));
        assert!(!config.is_prop_filtered("variant"));
        assert!(!config.is_prop_filtered("once")); // "on" not followed by uppercase
    }

    #[test]
    fn filtering_is_idempotent() {
        let config = ResolvedConfig::resolve(ExtractOptions::default(), None).unwrap();
        let raw = strings(&["variant", "onClick", "size", "className", "aria-label"]);

        let once: Vec<String> = raw
            .iter()
            .filter(|n| !config.is_prop_filtered(n))
            .cloned()
            .collect();
        let twice: Vec<String> = once
            .iter()
            .filter(|n| !config.is_prop_filtered(n))
            .cloned()
            .collect();

        assert_eq!(once, twice);
        assert_eq!(once, strings(&["variant", "size"]));
    }

    #[test]
    fn detects_alias_from_tsconfig_paths() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("tsconfig.json"),
            r##"{ "compilerOptions": { "paths": { "@/*": ["./src/*"], "#ui/*": ["./src/ui/*"] } } }"##,
        )
        .unwrap();

        let alias = detect_path_alias(temp.path()).unwrap();
        assert_eq!(alias.get("@/"), Some(&"src/".to_string()));
        assert_eq!(alias.get("#ui/"), Some(&"src/ui/".to_string()));
    }

    #[test]
    fn alias_detection_degrades_to_none() {
        let temp = tempdir().unwrap();

        // no tsconfig at all
        assert!(detect_path_alias(temp.path()).is_none());

        // malformed json
        fs::write(temp.path().join("tsconfig.json"), "{ not json").unwrap();
        assert!(detect_path_alias(temp.path()).is_none());

        // no paths section
        fs::write(temp.path().join("tsconfig.json"), r#"{"compilerOptions":{}}"#).unwrap();
        assert!(detect_path_alias(temp.path()).is_none());
    }
}
