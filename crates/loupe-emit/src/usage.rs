//! Usage-count statistics.
//!
//! Counts how often each component appears as a JSX element across the
//! discovered file set, excluding its own defining file.

use std::fs;
use std::path::{Path, PathBuf};

use loupe_meta::ComponentMeta;

/// Fill in `usage_count` for every component.
pub fn apply_usage_counts(
    files: &[PathBuf],
    project_root: &Path,
    components: &mut [ComponentMeta],
) {
    let sources: Vec<(String, String)> = files
        .iter()
        .filter_map(|path| {
            let rel = path
                .strip_prefix(project_root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            fs::read_to_string(path).ok().map(|source| (rel, source))
        })
        .collect();

    for component in components.iter_mut() {
        let count: usize = sources
            .iter()
            .filter(|(rel, _)| rel != &component.file)
            .map(|(_, source)| count_element_uses(source, &component.name))
            .sum();
        component.usage_count = Some(count);
    }
}

/// Count `<Name` occurrences followed by a tag-name boundary.
fn count_element_uses(source: &str, name: &str) -> usize {
    let needle = format!("<{}", name);
    let mut count = 0;
    let mut pos = 0;

    while let Some(i) = source[pos..].find(&needle) {
        let at = pos + i;
        let after = source[at + needle.len()..].chars().next();
        if after.map_or(true, |c| !c.is_alphanumeric() && c != '_' && c != '.') {
            count += 1;
        }
        pos = at + needle.len();
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn counts_uses_outside_the_defining_file() {
        let temp = tempdir().unwrap();
        let button = temp.path().join("button.tsx");
        let page = temp.path().join("page.tsx");
        fs::write(
            &button,
            "export function Button(p: P) { return <Button.Inner />; }",
        )
        .unwrap();
        fs::write(
            &page,
            "export function Page(p: Q) { return <><Button /><Button size=\"sm\">x</Button><ButtonGroup /></>; }",
        )
        .unwrap();

        let mut components = vec![ComponentMeta::new("Button", "button.tsx")];
        apply_usage_counts(
            &[button, page],
            temp.path(),
            &mut components,
        );

        // two real uses in page.tsx; ButtonGroup and the defining file do
        // not count
        assert_eq!(components[0].usage_count, Some(2));
    }

    #[test]
    fn boundary_check_rejects_name_prefixes() {
        assert_eq!(count_element_uses("<Button /> <ButtonGroup />", "Button"), 1);
        assert_eq!(count_element_uses("<Button> and <Button>", "Button"), 2);
        assert_eq!(count_element_uses("no jsx here", "Button"), 0);
    }
}
