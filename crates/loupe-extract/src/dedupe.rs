//! Display-name deduplication.
//!
//! Re-exports and aliasing can surface the same display name more than
//! once. The richer definition (by prop count) wins; a tie keeps the
//! first-encountered entry, which is deterministic because discovery order
//! is lexicographic.

use std::collections::HashMap;

use loupe_meta::{ComponentMeta, ExtractionWarning};

/// Collapse repeated display names, reporting each discard.
pub fn dedupe(components: Vec<ComponentMeta>) -> (Vec<ComponentMeta>, Vec<ExtractionWarning>) {
    let mut kept: Vec<ComponentMeta> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut warnings = Vec::new();

    for candidate in components {
        match index.get(&candidate.name) {
            None => {
                index.insert(candidate.name.clone(), kept.len());
                kept.push(candidate);
            }
            Some(&i) => {
                let existing = &kept[i];
                let candidate_wins = candidate.props.len() > existing.props.len();

                let discarded_file = if candidate_wins {
                    existing.file.clone()
                } else {
                    candidate.file.clone()
                };
                warnings.push(ExtractionWarning::warn(
                    discarded_file,
                    format!(
                        "duplicate component `{}`: kept the richer definition",
                        candidate.name
                    ),
                ));

                if candidate_wins {
                    kept[i] = candidate;
                }
            }
        }
    }

    (kept, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loupe_meta::{PropKind, PropMeta};

    fn component(name: &str, file: &str, prop_names: &[&str]) -> ComponentMeta {
        let mut meta = ComponentMeta::new(name, file);
        for prop in prop_names {
            meta.props.insert(
                prop.to_string(),
                PropMeta {
                    name: prop.to_string(),
                    kind: PropKind::String,
                    type_text: "string".into(),
                    required: false,
                    default: None,
                    description: None,
                },
            );
        }
        meta
    }

    #[test]
    fn richer_definition_wins() {
        let (kept, warnings) = dedupe(vec![
            component("Button", "a.tsx", &["variant", "size", "disabled"]),
            component("Button", "b.tsx", &["variant", "size", "disabled", "loading", "icon"]),
        ]);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].file, "b.tsx");
        assert_eq!(kept[0].props.len(), 5);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].file, "a.tsx");
    }

    #[test]
    fn equal_prop_counts_keep_the_first_encountered() {
        let (kept, warnings) = dedupe(vec![
            component("Button", "a.tsx", &["variant"]),
            component("Button", "b.tsx", &["size"]),
        ]);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].file, "a.tsx");
        assert_eq!(warnings[0].file, "b.tsx");
    }

    #[test]
    fn distinct_names_pass_through_in_order() {
        let (kept, warnings) = dedupe(vec![
            component("Button", "a.tsx", &["variant"]),
            component("Badge", "b.tsx", &["tone"]),
        ]);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "Button");
        assert_eq!(kept[1].name, "Badge");
        assert!(warnings.is_empty());
    }
}
