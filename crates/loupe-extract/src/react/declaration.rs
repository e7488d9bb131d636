//! Exported component declaration scanning.
//!
//! Finds exported function/const declarations and classifies each into a
//! tagged variant: either a component with its props parameter, or not a
//! component with the reason. The heuristic lives here and nowhere else.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::scan::{matching_brace, split_name_type, split_top_level};

/// Named `interface` and `type` declarations of one file, used to resolve
/// props types and to expand structured fields.
#[derive(Debug, Default)]
pub(crate) struct TypeTable {
    interfaces: HashMap<String, String>,
    aliases: HashMap<String, String>,
}

static INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:export\s+)?interface\s+([A-Za-z_$][A-Za-z0-9_$]*)[^{]*\{")
        .expect("interface regex")
});

static ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:export\s+)?type\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*")
        .expect("type alias regex")
});

impl TypeTable {
    pub fn parse(source: &str) -> Self {
        let mut table = Self::default();

        for caps in INTERFACE_RE.captures_iter(source) {
            let name = caps.get(1).unwrap().as_str().to_string();
            let brace = caps.get(0).unwrap().end() - 1;
            if let Some(close) = matching_brace(source, brace) {
                table
                    .interfaces
                    .insert(name, source[brace + 1..close].to_string());
            }
        }

        for caps in ALIAS_RE.captures_iter(source) {
            let name = caps.get(1).unwrap().as_str().to_string();
            let rhs = alias_rhs(source, caps.get(0).unwrap().end());
            if !rhs.is_empty() {
                table.aliases.insert(name, rhs);
            }
        }

        table
    }

    /// Body of a named interface, without the outer braces.
    pub fn interface_body(&self, name: &str) -> Option<&str> {
        self.interfaces.get(name).map(|s| s.as_str())
    }

    /// Right-hand side of a named type alias.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| s.as_str())
    }
}

/// Scan a type alias right-hand side up to its terminating `;` or the end
/// of the statement.
fn alias_rhs(source: &str, start: usize) -> String {
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;
    let mut prev = '\0';
    let mut end = source.len();

    for (i, c) in source[start..].char_indices() {
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
            ';' if depth == 0 => {
                end = start + i;
                break;
            }
            '\n' if depth == 0 => {
                // stop at a statement boundary unless the union continues
                let so_far = source[start..start + i].trim_end();
                let next = source[start + i + 1..].trim_start();
                if !so_far.is_empty()
                    && !so_far.ends_with(['|', '&', '='])
                    && !next.starts_with(['|', '&'])
                {
                    end = start + i;
                    break;
                }
            }
            _ => {}
        }
        prev = c;
    }

    source[start..end].trim().to_string()
}

/// An exported declaration recognized as a component.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ComponentDecl {
    pub name: String,

    /// Inner text of the props destructuring pattern, when present
    pub destructure: Option<String>,

    /// Declared type text of the props parameter
    pub props_type: String,

    /// Raw JSDoc block immediately preceding the declaration
    pub doc: Option<String>,
}

/// Outcome of classifying one exported declaration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Classification {
    Component(ComponentDecl),
    NotAComponent {
        name: String,
        reason: &'static str,
    },
}

static FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*export\s+(?:default\s+)?function\s+([A-Za-z_$][A-Za-z0-9_$]*)")
        .expect("function decl regex")
});

static CONST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*export\s+const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*(?::\s*([^=\n]+?))?\s*=\s*")
        .expect("const decl regex")
});

/// Classify every exported function/const declaration in a file, in source
/// order.
pub(crate) fn classify_exports(source: &str) -> Vec<Classification> {
    let mut found: Vec<(usize, Classification)> = Vec::new();

    for caps in FUNC_RE.captures_iter(source) {
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str().to_string();
        let classification =
            classify_candidate(source, whole.start(), &name, whole.end(), false, None);
        found.push((whole.start(), classification));
    }

    for caps in CONST_RE.captures_iter(source) {
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str().to_string();
        let annotation = caps.get(2).map(|m| m.as_str());
        let classification = classify_const(source, whole.start(), &name, annotation, whole.end());
        found.push((whole.start(), classification));
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, c)| c).collect()
}

/// Classify a declaration whose function value starts at `value_start`.
fn classify_candidate(
    source: &str,
    decl_start: usize,
    name: &str,
    value_start: usize,
    allow_ref_param: bool,
    fallback_type: Option<String>,
) -> Classification {
    if !name.chars().next().is_some_and(|c| c.is_uppercase()) {
        return not_a_component(name, "name is not PascalCase");
    }

    let Some(params) = function_params(source, value_start) else {
        return not_a_component(name, "no parameter list");
    };

    match props_param(&params, allow_ref_param) {
        Ok((destructure, declared)) => match declared.or(fallback_type) {
            Some(props_type) => Classification::Component(ComponentDecl {
                name: name.to_string(),
                destructure,
                props_type,
                doc: jsdoc_before(source, decl_start),
            }),
            None => not_a_component(name, "untyped props parameter"),
        },
        Err(reason) => not_a_component(name, reason),
    }
}

/// Classify an `export const Name = ...` declaration by the shape of its
/// right-hand side.
fn classify_const(
    source: &str,
    decl_start: usize,
    name: &str,
    annotation: Option<&str>,
    rhs_start: usize,
) -> Classification {
    if !name.chars().next().is_some_and(|c| c.is_uppercase()) {
        return not_a_component(name, "name is not PascalCase");
    }

    let rest = &source[rhs_start..];

    for wrapper in ["React.forwardRef", "forwardRef", "React.memo", "memo"] {
        if rest.starts_with(wrapper)
            && !rest[wrapper.len()..]
                .starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '$')
        {
            let mut i = rhs_start + wrapper.len();
            i = skip_ws(source, i);
            let mut generic_props = None;
            if source[i..].starts_with('<') {
                let Some(close) = skip_angle(source, i) else {
                    return not_a_component(name, "unparsable wrapper generics");
                };
                // forwardRef<Ref, Props> carries the props type second
                if wrapper.ends_with("forwardRef") {
                    let args = split_top_level(&source[i + 1..close], &[',']);
                    generic_props = args.get(1).cloned();
                }
                i = skip_ws(source, close + 1);
            }
            if !source[i..].starts_with('(') {
                return not_a_component(name, "wrapper is not called");
            }
            let allow_ref = wrapper.ends_with("forwardRef");
            return classify_candidate(source, decl_start, name, i + 1, allow_ref, generic_props);
        }
    }

    if rest.starts_with('(') || rest.starts_with('<') || rest.starts_with("function") {
        // `const Button: FC<ButtonProps> = ...` carries the props type in
        // the annotation
        let fallback = annotation.and_then(fc_props_type);
        return classify_candidate(source, decl_start, name, rhs_start, false, fallback);
    }

    not_a_component(name, "not a function value")
}

/// The props type argument of an `FC`-style annotation.
fn fc_props_type(annotation: &str) -> Option<String> {
    let t = annotation.trim();
    let rest = ["React.FunctionComponent", "FunctionComponent", "React.FC", "FC"]
        .iter()
        .find_map(|prefix| t.strip_prefix(prefix))?;
    let rest = rest.trim();
    let inner = rest.strip_prefix('<')?.strip_suffix('>')?;
    Some(inner.trim().to_string())
}

fn not_a_component(name: &str, reason: &'static str) -> Classification {
    Classification::NotAComponent {
        name: name.to_string(),
        reason,
    }
}

/// Interpret a parameter list as a component's props parameter.
///
/// Returns the destructuring pattern and the declared type, either of which
/// may be absent; the caller decides whether an annotation elsewhere (an
/// `FC<..>` or `forwardRef<..>` argument) can stand in for a missing type.
fn props_param(
    params: &str,
    allow_ref_param: bool,
) -> Result<(Option<String>, Option<String>), &'static str> {
    let parts = split_top_level(params, &[',']);

    let max = if allow_ref_param { 2 } else { 1 };
    if parts.is_empty() {
        return Err("no typed props parameter");
    }
    if parts.len() > max {
        return Err("more than one parameter");
    }

    let first = parts[0].trim();

    if first.starts_with('{') {
        let close = matching_brace(first, 0).ok_or("unbalanced destructuring pattern")?;
        let destructure = first[1..close].trim().to_string();
        let declared = first[close + 1..]
            .trim()
            .strip_prefix(':')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        return Ok((Some(destructure), declared));
    }

    let declared = split_name_type(first).map(|(_, t)| t.to_string());
    Ok((None, declared))
}

/// Find the parameter list of the function value starting at `start`,
/// skipping an optional `function` keyword, name, and generics.
fn function_params(source: &str, start: usize) -> Option<String> {
    let mut i = skip_ws(source, start);

    if source[i..].starts_with("function") {
        i += "function".len();
        i = skip_ws(source, i);
        while source[i..].starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '$') {
            i += source[i..].chars().next().unwrap().len_utf8();
        }
        i = skip_ws(source, i);
    }

    if source[i..].starts_with('<') {
        i = skip_ws(source, skip_angle(source, i)? + 1);
    }

    if !source[i..].starts_with('(') {
        return None;
    }
    let close = matching_paren(source, i)?;
    Some(source[i + 1..close].to_string())
}

fn skip_ws(source: &str, mut i: usize) -> usize {
    while let Some(c) = source[i..].chars().next() {
        if !c.is_whitespace() {
            break;
        }
        i += c.len_utf8();
    }
    i
}

/// Find the `>` closing the `<` at `open`.
fn skip_angle(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut prev = '\0';
    for (i, c) in source[open..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                if prev != '=' {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + i);
                    }
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Find the `)` matching the `(` at `open`.
fn matching_paren(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;
    let mut prev = '\0';
    for (i, c) in source[open..].char_indices() {
        if let Some(q) = in_quote {
            if c == q && prev != '\\' {
                in_quote = None;
            }
            prev = c;
            continue;
        }
        match c {
            '\'' | '"' | '`' => in_quote = Some(c),
            '(' => depth += 1,
            ')' => {
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

/// The JSDoc block whose closing `*/` immediately precedes `decl_start`.
fn jsdoc_before(source: &str, decl_start: usize) -> Option<String> {
    let before = source[..decl_start].trim_end();
    if !before.ends_with("*/") {
        return None;
    }
    let open = before.rfind("/**")?;
    let block = &before[open..];
    // reject when the span covers more than one comment
    if block[..block.len() - 2].contains("*/") {
        return None;
    }
    Some(block.to_string())
}
