//! JSX snippet parser for `@example` bodies.
//!
//! Parses one snippet's outermost element into its tag name, literal
//! attributes, and children. Only statically known attribute values are
//! folded to literals; everything else stays an expression and is ignored
//! downstream.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// A parsed JSX element.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxSnippet {
    /// Tag name (e.g. "Button", "Accordion", "div")
    pub element: String,

    /// Attributes in declaration order
    pub attrs: Vec<(String, AttrValue)>,

    /// Raw children text, if any
    pub children: Option<String>,

    pub self_closing: bool,
}

/// An attribute value from JSX.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String literal: `variant="primary"`
    String(String),

    /// Boolean: bare attribute presence, or `{true}` / `{false}`
    Bool(bool),

    /// Numeric literal expression: `{3}`
    Number(f64),

    /// Any other expression; never captured as a value
    Expression(String),
}

impl AttrValue {
    /// The JSON value for a statically known attribute, `None` for
    /// expressions.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            AttrValue::String(s) => Some(Value::String(s.clone())),
            AttrValue::Bool(b) => Some(Value::Bool(*b)),
            AttrValue::Number(n) => serde_json::Number::from_f64(*n).map(Value::Number),
            AttrValue::Expression(_) => None,
        }
    }
}

impl JsxSnippet {
    /// Literal attribute values as a JSON map; expressions are dropped and
    /// a repeated attribute keeps its first value.
    pub fn literal_props(&self) -> BTreeMap<String, Value> {
        let mut props = BTreeMap::new();
        for (name, value) in &self.attrs {
            if let Some(json) = value.to_json() {
                props.entry(name.clone()).or_insert(json);
            }
        }
        props
    }

    /// Find a direct child element by tag name.
    pub fn find_child_element(&self, name: &str) -> Option<JsxSnippet> {
        let mut rest = self.children.as_deref()?;
        loop {
            let lt = rest.find('<')?;
            match parse_element_at(&rest[lt..]) {
                Some((element, consumed)) => {
                    if element.element == name {
                        return Some(element);
                    }
                    rest = &rest[lt + consumed..];
                }
                None => {
                    rest = &rest[lt + 1..];
                }
            }
        }
    }
}

/// Parse the outermost JSX element of a snippet.
pub fn parse_snippet(source: &str) -> Option<JsxSnippet> {
    parse_element_at(source.trim()).map(|(snippet, _)| snippet)
}

/// Parse a JSX element starting at the beginning of `source`, returning the
/// element and the number of bytes it spans.
fn parse_element_at(source: &str) -> Option<(JsxSnippet, usize)> {
    static NAME_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^<([A-Za-z][A-Za-z0-9_.]*)").expect("tag name regex"));

    let caps = NAME_RE.captures(source)?;
    let element = caps.get(1)?.as_str().to_string();
    let name_end = caps.get(0)?.end();

    let (tag_end, self_closing) = find_tag_end(source, 0)?;

    let mut attrs_text = &source[name_end..tag_end - 1];
    if self_closing {
        attrs_text = attrs_text
            .trim_end()
            .strip_suffix('/')
            .unwrap_or(attrs_text);
    }
    let attrs = parse_attrs(attrs_text);

    if self_closing {
        return Some((
            JsxSnippet {
                element,
                attrs,
                children: None,
                self_closing: true,
            },
            tag_end,
        ));
    }

    let close = find_matching_close(source, &element, tag_end)?;
    let element_len = element.len();
    let children_text = source[tag_end..close].trim();
    let children = if children_text.is_empty() {
        None
    } else {
        Some(children_text.to_string())
    };

    Some((
        JsxSnippet {
            element,
            attrs,
            children,
            self_closing: false,
        },
        close + element_len + 3,
    ))
}

/// Find the end of the tag that starts at `start`, skipping `>` inside
/// quotes and brace expressions. Returns the index past `>` and whether the
/// tag was self-closing.
fn find_tag_end(source: &str, start: usize) -> Option<(usize, bool)> {
    let mut in_quote: Option<char> = None;
    let mut brace_depth = 0usize;
    let mut prev_char = ' ';

    for (i, c) in source[start..].char_indices() {
        match in_quote {
            Some(q) => {
                if c == q {
                    in_quote = None;
                }
            }
            None => match c {
                '"' | '\'' => in_quote = Some(c),
                '{' => brace_depth += 1,
                '}' => brace_depth = brace_depth.saturating_sub(1),
                '>' if brace_depth == 0 => {
                    return Some((start + i + 1, prev_char == '/'));
                }
                _ => {}
            },
        }
        if !c.is_whitespace() {
            prev_char = c;
        }
    }

    None
}

/// Find the matching `</name>` for an element opened before `from`,
/// handling nested same-name elements.
fn find_matching_close(source: &str, name: &str, from: usize) -> Option<usize> {
    let open = format!("<{}", name);
    let close = format!("</{}>", name);
    let mut depth = 1usize;
    let mut pos = from;

    while pos < source.len() {
        let lt = pos + source[pos..].find('<')?;

        if source[lt..].starts_with(&close) {
            depth -= 1;
            if depth == 0 {
                return Some(lt);
            }
            pos = lt + close.len();
        } else if source[lt..].starts_with(&open) && at_name_boundary(source, lt + open.len()) {
            let (end, self_closing) = find_tag_end(source, lt)?;
            if !self_closing {
                depth += 1;
            }
            pos = end;
        } else {
            pos = lt + 1;
        }
    }

    None
}

/// Whether the character at `idx` terminates a tag name, so `<Accordion`
/// does not match inside `<AccordionItem`.
fn at_name_boundary(source: &str, idx: usize) -> bool {
    match source[idx..].chars().next() {
        None => true,
        Some(c) => !c.is_alphanumeric() && c != '_' && c != '.',
    }
}

/// Parse attributes from the text between a tag's name and its `>`.
fn parse_attrs(attrs_text: &str) -> Vec<(String, AttrValue)> {
    static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"([A-Za-z_][\w-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|\{([^}]*)\}))?"#)
            .expect("attr regex")
    });

    let mut attrs = Vec::new();
    for caps in ATTR_RE.captures_iter(attrs_text) {
        let name = caps.get(1).unwrap().as_str().to_string();

        let value = if let Some(m) = caps.get(2) {
            AttrValue::String(m.as_str().to_string())
        } else if let Some(m) = caps.get(3) {
            AttrValue::String(m.as_str().to_string())
        } else if let Some(m) = caps.get(4) {
            fold_expression(m.as_str())
        } else {
            AttrValue::Bool(true)
        };

        attrs.push((name, value));
    }
    attrs
}

/// Fold a brace expression to a literal when it is statically known.
fn fold_expression(expr: &str) -> AttrValue {
    let expr = expr.trim();

    match expr {
        "true" => return AttrValue::Bool(true),
        "false" => return AttrValue::Bool(false),
        _ => {}
    }

    if let Ok(n) = expr.parse::<f64>() {
        return AttrValue::Number(n);
    }

    let quoted = (expr.starts_with('\'') && expr.ends_with('\'') && expr.len() >= 2)
        || (expr.starts_with('"') && expr.ends_with('"') && expr.len() >= 2);
    if quoted {
        return AttrValue::String(expr[1..expr.len() - 1].to_string());
    }

    AttrValue::Expression(expr.to_string())
}
