//! Registry module emission.
//!
//! Maps each component's display name to a lazy import reference, with the
//! source path rewritten through the longest-matching path-alias prefix.

use std::collections::BTreeMap;

use loupe_meta::ComponentMeta;

const SOURCE_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Render the registry module for a component list.
pub fn registry_module(
    components: &[ComponentMeta],
    path_alias: &BTreeMap<String, String>,
) -> String {
    let mut out = String::from("// Generated by loupe. Do not edit.\nexport const registry = {\n");

    for component in components {
        out.push_str(&format!(
            "  \"{}\": () => import(\"{}\"),\n",
            component.name,
            import_ref(&component.file, path_alias)
        ));
    }

    out.push_str("};\n");
    out
}

/// Rewrite a source file path into an import reference.
///
/// The longest alias whose real prefix matches wins; without a match the
/// path stays project-relative.
pub fn import_ref(file: &str, path_alias: &BTreeMap<String, String>) -> String {
    let mut stripped = file;
    for ext in SOURCE_EXTENSIONS {
        if let Some(s) = stripped.strip_suffix(ext) {
            stripped = s;
            break;
        }
    }

    let best = path_alias
        .iter()
        .filter(|(_, real)| stripped.starts_with(real.as_str()))
        .max_by_key(|(_, real)| real.len());

    match best {
        Some((alias, real)) => format!("{}{}", alias, &stripped[real.len()..]),
        None => format!("./{}", stripped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alias(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(a, r)| (a.to_string(), r.to_string()))
            .collect()
    }

    #[test]
    fn rewrites_through_alias_and_strips_extension() {
        let aliases = alias(&[("@/", "src/")]);

        assert_eq!(
            import_ref("src/components/button.tsx", &aliases),
            "@/components/button"
        );
    }

    #[test]
    fn longest_matching_alias_wins() {
        let aliases = alias(&[("@/", "src/"), ("@ui/", "src/components/ui/")]);

        assert_eq!(
            import_ref("src/components/ui/button.tsx", &aliases),
            "@ui/button"
        );
        assert_eq!(import_ref("src/lib/util.ts", &aliases), "@/lib/util");
    }

    #[test]
    fn unaliased_paths_stay_relative() {
        let aliases = alias(&[("@/", "src/")]);

        assert_eq!(
            import_ref("packages/ui/badge.tsx", &aliases),
            "./packages/ui/badge"
        );
    }

    #[test]
    fn renders_a_module_entry_per_component() {
        let components = vec![
            ComponentMeta::new("Badge", "src/components/badge.tsx"),
            ComponentMeta::new("Button", "src/components/button.tsx"),
        ];
        let module = registry_module(&components, &alias(&[("@/", "src/")]));

        assert!(module.starts_with("// Generated by loupe."));
        assert!(module.contains(r#""Badge": () => import("@/components/badge"),"#));
        assert!(module.contains(r#""Button": () => import("@/components/button"),"#));
        assert!(module.trim_end().ends_with("};"));
    }
}
