//! Prop type classification.
//!
//! Maps a declared TypeScript type expression onto the finite [`PropKind`]
//! shape. Rule order: component-slot, enum, array, structured object, map,
//! primitive; anything else degrades to opaque rather than erroring, since
//! failing to classify one prop must never drop the whole component.

use std::collections::HashSet;

use loupe_meta::{FieldMeta, PropKind, SlotKind};

use super::declaration::TypeTable;
use super::scan::{split_members, split_name_type, split_top_level};

/// Recognized icon-component aliases.
const ICON_TYPES: &[&str] = &[
    "LucideIcon",
    "IconType",
    "IconComponent",
    "ElementType",
    "React.ElementType",
];

/// Generic component-constructor heads treated as icon slots.
const ICON_GENERIC_HEADS: &[&str] = &["ComponentType", "React.ComponentType", "FC", "React.FC"];

/// Concrete JSX element types.
const ELEMENT_TYPES: &[&str] = &["ReactElement", "React.ReactElement", "JSX.Element"];

/// Generic renderable-content types.
const NODE_TYPES: &[&str] = &["ReactNode", "React.ReactNode"];

/// Classify one declared type.
pub(crate) fn classify(type_text: &str, types: &TypeTable) -> PropKind {
    let mut visited = HashSet::new();
    classify_with(type_text, types, &mut visited)
}

/// Strip top-level `undefined`/`null` union members, reporting whether any
/// were present (implicit optionality).
pub(crate) fn strip_undefined(type_text: &str) -> (String, bool) {
    let members = split_top_level(type_text, &['|']);
    let total = members.len();

    let kept: Vec<String> = members
        .into_iter()
        .filter(|m| m != "undefined" && m != "null" && m != "void")
        .collect();

    let had_undefined = kept.len() != total;
    (kept.join(" | "), had_undefined)
}

fn classify_with(type_text: &str, types: &TypeTable, visited: &mut HashSet<String>) -> PropKind {
    let t = normalize(type_text);
    if t.is_empty() {
        return PropKind::Opaque;
    }

    let members = split_top_level(&t, &['|']);
    if members.len() > 1 {
        return classify_union(&members, types, visited);
    }
    let t = members.into_iter().next().unwrap_or(t);

    // component-slots come first; they never get further expansion
    if let Some(slot) = slot_kind(&t) {
        return PropKind::Slot { slot };
    }

    // single string literal behaves as a one-value enum
    if let Some(value) = string_literal(&t) {
        return PropKind::Enum {
            values: vec![value],
        };
    }

    if let Some(item) = array_item(&t) {
        return PropKind::Array {
            item: Box::new(classify_with(&item, types, visited)),
        };
    }

    if let Some(args) = generic_inner(&t, &["Record"]) {
        let parts = split_top_level(&args, &[',']);
        if parts.len() == 2 && parts[0] == "string" && is_primitive(&parts[1]) {
            return PropKind::Map;
        }
        return PropKind::Opaque;
    }

    if t.starts_with('{') && t.ends_with('}') {
        return classify_object_body(&t[1..t.len() - 1], types, visited);
    }

    match t.as_str() {
        "string" => return PropKind::String,
        "number" => return PropKind::Number,
        "boolean" | "true" | "false" => return PropKind::Boolean,
        _ => {}
    }

    // named type resolution, bounded by the visited set along this path
    if is_identifier(&t) {
        if !visited.insert(t.clone()) {
            return PropKind::Opaque;
        }
        let kind = if let Some(body) = types.interface_body(&t) {
            classify_object_body(body, types, visited)
        } else if let Some(rhs) = types.alias(&t) {
            let rhs = rhs.to_string();
            classify_with(&rhs, types, visited)
        } else {
            PropKind::Opaque
        };
        visited.remove(&t);
        return kind;
    }

    PropKind::Opaque
}

fn classify_union(
    members: &[String],
    types: &TypeTable,
    visited: &mut HashSet<String>,
) -> PropKind {
    let kept: Vec<&String> = members
        .iter()
        .filter(|m| m.as_str() != "undefined" && m.as_str() != "null")
        .collect();

    match kept.len() {
        0 => return PropKind::Opaque,
        1 => return classify_with(kept[0], types, visited),
        _ => {}
    }

    // the literal-boolean union normalizes to the primitive
    if kept.len() == 2
        && kept.iter().any(|m| m.as_str() == "true")
        && kept.iter().any(|m| m.as_str() == "false")
    {
        return PropKind::Boolean;
    }

    let mut values = Vec::new();
    for member in &kept {
        let Some(value) = string_literal(member) else {
            return PropKind::Opaque;
        };
        if !values.contains(&value) {
            values.push(value);
        }
    }

    PropKind::Enum { values }
}

/// Expand an object body into fields; an index-signature-only body is a
/// key-value map.
fn classify_object_body(
    body: &str,
    types: &TypeTable,
    visited: &mut HashSet<String>,
) -> PropKind {
    let members = split_members(body);

    if members.len() == 1 && members[0].text.starts_with('[') {
        if let Some((_, value)) = split_name_type(&members[0].text) {
            if is_primitive(value) {
                return PropKind::Map;
            }
        }
        return PropKind::Opaque;
    }

    let mut fields = Vec::new();
    for member in members {
        let Some((name_part, type_part)) = split_name_type(&member.text) else {
            continue;
        };

        // method members stay opaque
        if let Some(paren) = name_part.find('(') {
            let name = name_part[..paren].trim().trim_end_matches('?');
            fields.push(FieldMeta {
                name: name.to_string(),
                kind: PropKind::Opaque,
                required: false,
            });
            continue;
        }

        let name = name_part.trim_start_matches("readonly ").trim();
        let optional = name.ends_with('?');
        let name = name.trim_end_matches('?').trim();

        let (stripped, had_undefined) = strip_undefined(type_part);
        let kind = classify_with(&stripped, types, visited);

        fields.push(FieldMeta {
            name: name.to_string(),
            kind,
            required: !optional && !had_undefined,
        });
    }

    PropKind::Object { fields }
}

/// Trim wrapping parens, a leading `|`, and a `readonly` modifier.
fn normalize(type_text: &str) -> String {
    let mut t = type_text.trim();

    loop {
        if let Some(rest) = t.strip_prefix('|') {
            t = rest.trim_start();
            continue;
        }
        if let Some(rest) = t.strip_prefix("readonly ") {
            t = rest.trim_start();
            continue;
        }
        if t.starts_with('(') {
            if let Some(close) = matching_paren_local(t) {
                if close == t.len() - 1 {
                    t = t[1..close].trim();
                    continue;
                }
            }
        }
        break;
    }

    t.to_string()
}

fn matching_paren_local(t: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;
    for (i, c) in t.char_indices() {
        if let Some(q) = in_quote {
            if c == q {
                in_quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => in_quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn slot_kind(t: &str) -> Option<SlotKind> {
    if NODE_TYPES.contains(&t) {
        return Some(SlotKind::Node);
    }

    let head = t.split('<').next().unwrap_or(t);
    if ELEMENT_TYPES.contains(&head) {
        return Some(SlotKind::Element);
    }
    if ICON_TYPES.contains(&t) || (t.contains('<') && ICON_GENERIC_HEADS.contains(&head)) {
        return Some(SlotKind::Icon);
    }

    None
}

fn string_literal(t: &str) -> Option<String> {
    let quoted = t.len() >= 2
        && ((t.starts_with('\'') && t.ends_with('\''))
            || (t.starts_with('"') && t.ends_with('"')));
    if quoted {
        Some(t[1..t.len() - 1].to_string())
    } else {
        None
    }
}

/// The item type of `T[]`, `Array<T>`, or `ReadonlyArray<T>`.
fn array_item(t: &str) -> Option<String> {
    if let Some(prefix) = t.strip_suffix("[]") {
        let prefix = prefix.trim_end();
        if !prefix.is_empty() {
            return Some(prefix.to_string());
        }
    }
    generic_inner(t, &["Array", "ReadonlyArray"])
}

/// The argument list of `Head<...>` for any of the given heads.
fn generic_inner(t: &str, heads: &[&str]) -> Option<String> {
    for head in heads {
        if let Some(rest) = t.strip_prefix(head) {
            let rest = rest.trim();
            if let Some(inner) = rest.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
                return Some(inner.trim().to_string());
            }
        }
    }
    None
}

fn is_primitive(t: &str) -> bool {
    matches!(t.trim(), "string" | "number" | "boolean")
}

fn is_identifier(t: &str) -> bool {
    !t.is_empty()
        && t.chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !t.chars().next().unwrap().is_numeric()
}
