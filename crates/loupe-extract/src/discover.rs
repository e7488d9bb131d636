//! File discovery: glob expansion with basename exclusions.

use std::path::{Path, PathBuf};

use loupe_meta::ExtractionWarning;

/// Result of expanding the component glob.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Matched files, lexicographically sorted
    pub files: Vec<PathBuf>,

    /// Entries that matched but could not be read during expansion
    pub warnings: Vec<ExtractionWarning>,
}

/// Errors that abort discovery before any file is visited.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("invalid component glob `{pattern}`: {message}")]
    BadPattern { pattern: String, message: String },
}

/// Expand a glob against the project root, dropping excluded basenames.
///
/// Output order is lexicographic so downstream deduplication tie-breaks are
/// reproducible across runs on an unchanged file set.
pub fn discover(
    project_root: &Path,
    pattern: &str,
    exclude_basenames: &[String],
) -> Result<Discovery, DiscoverError> {
    let full_pattern = project_root.join(pattern).to_string_lossy().into_owned();

    let entries = glob::glob(&full_pattern).map_err(|e| DiscoverError::BadPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut discovery = Discovery::default();

    for entry in entries {
        match entry {
            Ok(path) => {
                if !path.is_file() {
                    continue;
                }
                let basename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if exclude_basenames.iter().any(|e| e == basename) {
                    continue;
                }
                discovery.files.push(path);
            }
            Err(e) => {
                discovery.warnings.push(ExtractionWarning::warn(
                    e.path().display().to_string(),
                    format!("unreadable during discovery: {}", e),
                ));
            }
        }
    }

    discovery.files.sort();

    Ok(discovery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {};").unwrap();
    }

    #[test]
    fn discovers_sorted_matches() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "src/components/zebra.tsx");
        touch(temp.path(), "src/components/alert.tsx");
        touch(temp.path(), "src/components/nested/menu.tsx");
        touch(temp.path(), "src/components/readme.md");

        let discovery = discover(temp.path(), "src/components/**/*.tsx", &[]).unwrap();

        let names: Vec<String> = discovery
            .files
            .iter()
            .map(|p| {
                p.strip_prefix(temp.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();

        assert_eq!(
            names,
            vec![
                "src/components/alert.tsx",
                "src/components/nested/menu.tsx",
                "src/components/zebra.tsx",
            ]
        );
    }

    #[test]
    fn excludes_exact_basenames() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "src/components/button.tsx");
        touch(temp.path(), "src/components/index.tsx");
        touch(temp.path(), "src/components/menu/index.tsx");

        let discovery = discover(
            temp.path(),
            "src/components/**/*.tsx",
            &["index.tsx".to_string()],
        )
        .unwrap();

        assert_eq!(discovery.files.len(), 1);
        assert!(discovery.files[0].ends_with("button.tsx"));
    }

    #[test]
    fn bad_pattern_is_fatal() {
        let temp = tempdir().unwrap();

        let result = discover(temp.path(), "src/[", &[]);
        assert!(matches!(result, Err(DiscoverError::BadPattern { .. })));
    }

    #[test]
    fn empty_match_is_not_an_error() {
        let temp = tempdir().unwrap();

        let discovery = discover(temp.path(), "src/components/**/*.tsx", &[]).unwrap();
        assert!(discovery.files.is_empty());
        assert!(discovery.warnings.is_empty());
    }
}
