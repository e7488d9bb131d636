//! Depth-aware text scanning shared by the declaration, prop, and type
//! modules.
//!
//! TypeScript type expressions nest braces, brackets, parens, and generics;
//! every split here tracks that nesting plus quote state so separators inside
//! a nested position never split a member.

use serde_json::Value;

/// A member of an interface body or inline object type, with any doc
/// comment that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Member {
    pub doc: Option<String>,
    pub text: String,
}

/// Split text on separators that sit at nesting depth zero.
///
/// Block comments are consumed atomically. The `>` of `=>` does not close a
/// generic.
pub(crate) fn split_top_level(text: &str, separators: &[char]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;
    let mut prev = '\0';

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(q) = in_quote {
            current.push(c);
            if c == q && prev != '\\' {
                in_quote = None;
            }
            prev = c;
            continue;
        }

        // consume comments atomically
        if c == '/' && chars.peek() == Some(&'*') {
            current.push(c);
            let mut last = '\0';
            for cc in chars.by_ref() {
                current.push(cc);
                if last == '*' && cc == '/' {
                    break;
                }
                last = cc;
            }
            prev = '/';
            continue;
        }
        if c == '/' && chars.peek() == Some(&'/') {
            current.push(c);
            for cc in chars.by_ref() {
                if cc == '\n' {
                    break;
                }
                current.push(cc);
            }
            prev = '\n';
            continue;
        }

        match c {
            '\'' | '"' | '`' => {
                in_quote = Some(c);
                current.push(c);
            }
            '(' | '{' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | '}' | ']' => {
                depth -= 1;
                current.push(c);
            }
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                if prev != '=' {
                    depth -= 1;
                }
                current.push(c);
            }
            _ if depth == 0 && separators.contains(&c) => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
        prev = c;
    }
    parts.push(current);

    parts
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split an interface or inline-object body into members, attaching doc
/// comments and re-joining members whose type wrapped onto following lines.
pub(crate) fn split_members(body: &str) -> Vec<Member> {
    let fragments = split_top_level(body, &[';', ',', '\n']);

    let mut members: Vec<Member> = Vec::new();
    let mut pending_doc: Option<String> = None;

    for frag in fragments {
        if frag.starts_with("//") {
            continue;
        }

        // peel off a leading block comment, whether or not the member
        // follows on the same line
        let frag = if frag.starts_with("/*") {
            match frag.find("*/") {
                Some(end) => {
                    pending_doc = crate::jsdoc::parse_jsdoc(&frag[..end + 2]).description;
                    frag[end + 2..].trim().to_string()
                }
                None => frag,
            }
        } else {
            frag
        };
        if frag.is_empty() {
            continue;
        }

        // a fragment continuing the previous member's wrapped type
        let continues = frag.starts_with('|') || frag.starts_with('&');
        let prev_open = members.last().map_or(false, |m: &Member| {
            matches!(
                m.text.chars().last(),
                Some('|' | '&' | ':' | '<' | '(' | '=')
            )
        });
        if (continues || prev_open) && !members.is_empty() {
            let last = members.last_mut().unwrap();
            last.text.push(' ');
            last.text.push_str(&frag);
            continue;
        }

        members.push(Member {
            doc: pending_doc.take(),
            text: frag,
        });
    }

    members
}

/// Split a member into its name part and type part at the first top-level
/// colon.
pub(crate) fn split_name_type(member: &str) -> Option<(&str, &str)> {
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;
    let mut prev = '\0';

    for (i, c) in member.char_indices() {
        if let Some(q) = in_quote {
            if c == q && prev != '\\' {
                in_quote = None;
            }
            prev = c;
            continue;
        }
        match c {
            '\'' | '"' | '`' => in_quote = Some(c),
            '(' | '{' | '[' | '<' => depth += 1,
            ')' | '}' | ']' => depth -= 1,
            '>' => {
                if prev != '=' {
                    depth -= 1;
                }
            }
            ':' if depth == 0 => {
                return Some((member[..i].trim(), member[i + 1..].trim()));
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Find the `}` matching the `{` at `open`.
pub(crate) fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;
    let mut prev = '\0';

    for (i, c) in text[open..].char_indices() {
        if let Some(q) = in_quote {
            if c == q && prev != '\\' {
                in_quote = None;
            }
            prev = c;
            continue;
        }
        match c {
            '\'' | '"' | '`' => in_quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Parse a statically known literal into a JSON value.
pub(crate) fn parse_literal(text: &str) -> Option<Value> {
    let t = text.trim();

    match t {
        "true" => return Some(Value::Bool(true)),
        "false" => return Some(Value::Bool(false)),
        "null" => return Some(Value::Null),
        _ => {}
    }

    let quoted = t.len() >= 2
        && ((t.starts_with('\'') && t.ends_with('\''))
            || (t.starts_with('"') && t.ends_with('"')));
    if quoted {
        return Some(Value::String(t[1..t.len() - 1].to_string()));
    }

    if let Ok(n) = t.parse::<f64>() {
        return serde_json::Number::from_f64(n).map(Value::Number);
    }

    None
}
