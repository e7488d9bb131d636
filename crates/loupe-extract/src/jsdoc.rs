//! JSDoc block parser.
//!
//! Turns a raw `/** ... */` comment into a typed sequence of tags, so that
//! "find the @example blocks" stays decoupled from "interpret one block's
//! JSX".

/// A parsed JSDoc comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsDoc {
    /// Free text before the first tag
    pub description: Option<String>,

    /// Tags in source order, each carrying its raw body
    pub tags: Vec<JsDocTag>,
}

/// One `@tag` with its body text.
#[derive(Debug, Clone, PartialEq)]
pub struct JsDocTag {
    pub name: String,
    pub body: String,
}

impl JsDoc {
    /// The bodies of all `@example` tags, in source order.
    pub fn examples(&self) -> impl Iterator<Item = &JsDocTag> {
        self.tags.iter().filter(|t| t.name == "example")
    }
}

/// Parse a raw JSDoc comment, with or without its `/**` and `*/` fences.
pub fn parse_jsdoc(raw: &str) -> JsDoc {
    let inner = strip_fences(raw);

    let mut description_lines: Vec<String> = Vec::new();
    let mut tags: Vec<JsDocTag> = Vec::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in inner.lines() {
        let line = strip_gutter(line);

        if let Some(rest) = line.strip_prefix('@') {
            if let Some((name, body)) = current.take() {
                tags.push(finish_tag(name, body));
            }

            let (name, first) = match rest.split_once(char::is_whitespace) {
                Some((name, first)) => (name.to_string(), first.to_string()),
                None => (rest.to_string(), String::new()),
            };
            current = Some((name, vec![first]));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line.to_string());
        } else {
            description_lines.push(line.to_string());
        }
    }

    if let Some((name, body)) = current.take() {
        tags.push(finish_tag(name, body));
    }

    let description = {
        let text = description_lines.join("\n").trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    };

    JsDoc { description, tags }
}

fn finish_tag(name: String, body_lines: Vec<String>) -> JsDocTag {
    JsDocTag {
        name,
        body: body_lines.join("\n").trim().to_string(),
    }
}

fn strip_fences(raw: &str) -> &str {
    let raw = raw.trim();
    let raw = raw.strip_prefix("/**").unwrap_or(raw);
    raw.strip_suffix("*/").unwrap_or(raw)
}

/// Remove the leading ` * ` gutter from a comment line.
fn strip_gutter(line: &str) -> &str {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix('*') {
        rest.strip_prefix(' ').unwrap_or(rest)
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_description_and_tags() {
        let doc = parse_jsdoc(
            r#"/**
             * A clickable button.
             * Supports variants.
             *
             * @example
             * <Button variant="primary">Go</Button>
             * @see https://example.com
             */"#,
        );

        assert_eq!(
            doc.description,
            Some("A clickable button.\nSupports variants.".to_string())
        );
        assert_eq!(doc.tags.len(), 2);
        assert_eq!(doc.tags[0].name, "example");
        assert_eq!(doc.tags[0].body, r#"<Button variant="primary">Go</Button>"#);
        assert_eq!(doc.tags[1].name, "see");
    }

    #[test]
    fn keeps_multiple_example_tags_in_order() {
        let doc = parse_jsdoc(
            r#"/**
             * @example Default
             * <Badge>New</Badge>
             * @example Outlined
             * <Badge variant="outline">New</Badge>
             */"#,
        );

        let examples: Vec<&JsDocTag> = doc.examples().collect();
        assert_eq!(examples.len(), 2);
        assert!(examples[0].body.starts_with("Default"));
        assert!(examples[1].body.starts_with("Outlined"));
    }

    #[test]
    fn multi_line_tag_bodies_are_preserved() {
        let doc = parse_jsdoc(
            r#"/**
             * @example
             * <Accordion type="single">
             *   <AccordionItem value="a" />
             * </Accordion>
             */"#,
        );

        let body = &doc.tags[0].body;
        assert!(body.contains("<Accordion type=\"single\">"));
        assert!(body.contains("<AccordionItem value=\"a\" />"));
        assert!(body.contains("</Accordion>"));
    }

    #[test]
    fn handles_empty_and_untagged_comments() {
        assert_eq!(parse_jsdoc("/** */"), JsDoc::default());

        let doc = parse_jsdoc("/** Only a description. */");
        assert_eq!(doc.description, Some("Only a description.".to_string()));
        assert!(doc.tags.is_empty());
    }
}
