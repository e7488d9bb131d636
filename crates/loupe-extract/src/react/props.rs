//! Prop record resolution.
//!
//! Turns a component's props type into classified prop descriptors, reading
//! optionality from `?` and implicit-undefined members, defaults from the
//! parameter destructuring, and descriptions from member doc comments.

use std::collections::BTreeMap;

use loupe_meta::{PropKind, PropMeta};
use serde_json::Value;

use super::classify::{classify, strip_undefined};
use super::declaration::{ComponentDecl, TypeTable};
use super::scan::{parse_literal, split_members, split_name_type, split_top_level};
use crate::config::ResolvedConfig;

/// Resolved props plus the children flag.
#[derive(Debug, Default)]
pub(crate) struct ResolvedProps {
    pub props: BTreeMap<String, PropMeta>,
    pub accepts_children: bool,
}

/// Resolve a component's props; an unresolvable props type is reported as a
/// message for the per-file warning list.
pub(crate) fn resolve_props(
    decl: &ComponentDecl,
    types: &TypeTable,
    config: &ResolvedConfig,
) -> Result<ResolvedProps, String> {
    let body = props_body(&decl.props_type, types)
        .ok_or_else(|| format!("cannot resolve props type `{}`", decl.props_type))?;

    let defaults = decl
        .destructure
        .as_deref()
        .map(destructure_defaults)
        .unwrap_or_default();

    let mut resolved = ResolvedProps::default();

    for member in split_members(&body) {
        let Some((name_part, type_part)) = split_name_type(&member.text) else {
            continue;
        };

        // method members stay opaque but keep their place in the prop map
        if let Some(paren) = name_part.find('(') {
            let name = name_part[..paren].trim().trim_end_matches('?').to_string();
            add_prop(
                &mut resolved,
                config,
                PropMeta {
                    name: name.clone(),
                    kind: PropKind::Opaque,
                    type_text: member.text.clone(),
                    required: false,
                    default: None,
                    description: member.doc.clone(),
                },
            );
            continue;
        }

        let name = name_part.trim_start_matches("readonly ").trim();
        let optional_mark = name.ends_with('?');
        let name = name
            .trim_end_matches('?')
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_string();
        if name.is_empty() {
            continue;
        }

        let (stripped, had_undefined) = strip_undefined(type_part);
        let kind = classify(&stripped, types);

        // slots are resolved by the renderer, never defaulted statically
        let default = if kind.is_slot() {
            None
        } else {
            defaults.get(&name).cloned()
        };
        let required = !optional_mark && !had_undefined && default.is_none();

        add_prop(
            &mut resolved,
            config,
            PropMeta {
                name,
                kind,
                type_text: type_part.to_string(),
                required,
                default,
                description: member.doc.clone(),
            },
        );
    }

    Ok(resolved)
}

/// Route one resolved member: children sets the flag, filtered names are
/// dropped, everything else lands in the prop map.
fn add_prop(resolved: &mut ResolvedProps, config: &ResolvedConfig, prop: PropMeta) {
    if prop.name == "children" {
        resolved.accepts_children = true;
        return;
    }
    if config.is_prop_filtered(&prop.name) {
        return;
    }
    resolved.props.insert(prop.name.clone(), prop);
}

/// The member body of a props type: an inline object, a named interface or
/// alias, or an intersection of those. Unresolvable intersection parts
/// (library attribute types) are skipped.
fn props_body(type_text: &str, types: &TypeTable) -> Option<String> {
    let parts = split_top_level(type_text, &['&']);

    let bodies: Vec<String> = parts
        .iter()
        .filter_map(|part| single_body(part, types, 0))
        .collect();

    if bodies.is_empty() {
        None
    } else {
        Some(bodies.join(";\n"))
    }
}

fn single_body(type_text: &str, types: &TypeTable, depth: usize) -> Option<String> {
    if depth > 8 {
        return None;
    }

    let t = type_text.trim();

    if t.starts_with('{') && t.ends_with('}') {
        return Some(t[1..t.len() - 1].to_string());
    }
    if let Some(body) = types.interface_body(t) {
        return Some(body.to_string());
    }

    let rhs = types.alias(t)?;
    let bodies: Vec<String> = split_top_level(rhs, &['&'])
        .iter()
        .filter_map(|part| single_body(part, types, depth + 1))
        .collect();
    if bodies.is_empty() {
        None
    } else {
        Some(bodies.join(";\n"))
    }
}

/// Literal defaults from a destructuring pattern like
/// `{ variant = 'primary', size }`.
fn destructure_defaults(pattern: &str) -> BTreeMap<String, Value> {
    let mut defaults = BTreeMap::new();

    for entry in split_top_level(pattern, &[',']) {
        if entry.starts_with("...") {
            continue;
        }
        let Some((lhs, rhs)) = split_default(&entry) else {
            continue;
        };
        let name = lhs.split(':').next().unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        if let Some(value) = parse_literal(rhs) {
            defaults.insert(name.to_string(), value);
        }
    }

    defaults
}

/// Split a destructuring entry at its `=`, ignoring `=>` in arrow defaults.
fn split_default(entry: &str) -> Option<(&str, &str)> {
    let mut depth = 0i32;
    let mut prev = '\0';
    for (i, c) in entry.char_indices() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth -= 1,
            '=' if depth == 0 && prev != '=' && !entry[i + 1..].starts_with(['=', '>']) => {
                return Some((entry[..i].trim(), entry[i + 1..].trim()));
            }
            _ => {}
        }
        prev = c;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractOptions;
    use crate::react::declaration::{classify_exports, Classification};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolve(source: &str) -> ResolvedProps {
        let config = ResolvedConfig::resolve(ExtractOptions::default(), None).unwrap();
        let types = TypeTable::parse(source);
        let decl = classify_exports(source)
            .into_iter()
            .find_map(|c| match c {
                Classification::Component(decl) => Some(decl),
                _ => None,
            })
            .expect("component declaration");
        resolve_props(&decl, &types, &config).unwrap()
    }

    #[test]
    fn resolves_inline_record_with_optionality() {
        let resolved = resolve(
            "export function Button({ variant, size, disabled }: { variant: 'primary' | 'secondary'; size?: 'sm' | 'md'; disabled?: boolean }) { return null; }",
        );

        assert!(!resolved.accepts_children);
        assert_eq!(resolved.props.len(), 3);

        let variant = &resolved.props["variant"];
        assert!(variant.required);
        assert_eq!(
            variant.kind,
            PropKind::Enum {
                values: vec!["primary".into(), "secondary".into()],
            }
        );

        let size = &resolved.props["size"];
        assert!(!size.required);

        let disabled = &resolved.props["disabled"];
        assert!(!disabled.required);
        assert_eq!(disabled.kind, PropKind::Boolean);
    }

    #[test]
    fn captures_destructuring_defaults() {
        let resolved = resolve(
            "export function Badge({ tone = 'info', count = 0 }: { tone: 'info' | 'warn'; count: number }) { return null; }",
        );

        let tone = &resolved.props["tone"];
        assert_eq!(tone.default, Some(json!("info")));
        // a defaulted prop is not required even without `?`
        assert!(!tone.required);

        assert_eq!(resolved.props["count"].default, Some(json!(0.0)));
    }

    #[test]
    fn children_sets_the_flag_instead_of_a_prop() {
        let resolved = resolve(
            "export function Card({ title, children }: { title: string; children?: ReactNode }) { return null; }",
        );

        assert!(resolved.accepts_children);
        assert!(!resolved.props.contains_key("children"));
        assert!(resolved.props.contains_key("title"));
    }

    #[test]
    fn filtered_names_and_patterns_are_dropped() {
        let resolved = resolve(
            "export function Chip({ label, className, onSelect }: { label: string; className?: string; onSelect?: (v: string) => void }) { return null; }",
        );

        assert_eq!(resolved.props.len(), 1);
        assert!(resolved.props.contains_key("label"));
    }

    #[test]
    fn named_interface_resolves_like_inline() {
        let resolved = resolve(
            "interface ToggleProps { on: boolean; label?: string }\nexport function Toggle(props: ToggleProps) { return null; }",
        );

        assert_eq!(resolved.props.len(), 2);
        assert!(resolved.props["on"].required);
        assert!(!resolved.props["label"].required);
    }

    #[test]
    fn intersection_keeps_resolvable_parts() {
        let resolved = resolve(
            "interface OwnProps { label: string }\nexport function Field(props: OwnProps & React.InputHTMLAttributes<HTMLInputElement>) { return null; }",
        );

        assert_eq!(resolved.props.len(), 1);
        assert!(resolved.props.contains_key("label"));
    }

    #[test]
    fn member_docs_become_descriptions() {
        let resolved = resolve(
            "export function Alert({ tone }: { /** Visual tone of the alert */ tone: 'info' | 'error' }) { return null; }",
        );

        assert_eq!(
            resolved.props["tone"].description,
            Some("Visual tone of the alert".to_string())
        );
    }

    #[test]
    fn slot_props_never_receive_defaults() {
        let resolved = resolve(
            "export function Empty({ icon = 'inbox' }: { icon?: LucideIcon }) { return null; }",
        );

        let icon = &resolved.props["icon"];
        assert!(icon.kind.is_slot());
        assert_eq!(icon.default, None);
    }

    #[test]
    fn unresolvable_props_type_is_an_error_message() {
        let config = ResolvedConfig::resolve(ExtractOptions::default(), None).unwrap();
        let source = "export function Ghost(props: VanishedProps) { return null; }";
        let types = TypeTable::parse(source);
        let decl = classify_exports(source)
            .into_iter()
            .find_map(|c| match c {
                Classification::Component(decl) => Some(decl),
                _ => None,
            })
            .unwrap();

        let err = resolve_props(&decl, &types, &config).unwrap_err();
        assert!(err.contains("VanishedProps"));
    }
}
