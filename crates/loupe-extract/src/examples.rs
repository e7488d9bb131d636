//! `@example` interpretation and wrapper promotion.
//!
//! Each `@example` tag yields one Example, index-stable. When every example
//! nests the component inside the same outer element, that element is
//! promoted to a component-level wrapper. Disagreement or partial coverage
//! yields no wrapper at all: the policy favors false negatives over
//! inconsistent wrapper inference.

use std::collections::BTreeMap;

use loupe_meta::{Example, ExampleWrapper, WrapperComponent};

use crate::jsdoc::JsDoc;
use crate::jsx::parse_snippet;

/// Build the example list and the promoted wrapper for one component.
pub fn detect_examples(component: &str, doc: &JsDoc) -> (Vec<Example>, Option<WrapperComponent>) {
    let examples: Vec<Example> = doc
        .examples()
        .map(|tag| interpret_example(component, &tag.body))
        .collect();

    let wrapper = promote_wrapper(&examples);

    (examples, wrapper)
}

/// Interpret one `@example` body as a labeled preset.
fn interpret_example(component: &str, body: &str) -> Example {
    let (label, snippet_text) = split_label(body);

    let mut example = Example {
        label,
        props: BTreeMap::new(),
        wrapper: None,
    };

    let Some(snippet) = parse_snippet(snippet_text) else {
        return example;
    };

    if snippet.element == component {
        example.props = snippet.literal_props();
    } else if let Some(inner) = snippet.find_child_element(component) {
        example.props = inner.literal_props();
        example.wrapper = Some(ExampleWrapper {
            name: snippet.element.clone(),
            props: snippet.literal_props(),
        });
    }

    example
}

/// Split a tag body into an optional label and the JSX text.
///
/// Lines before the first JSX line are the label; a body that starts with
/// JSX has none.
fn split_label(body: &str) -> (Option<String>, &str) {
    let Some(jsx_start) = body.find('<') else {
        return (None, body);
    };

    let label = body[..jsx_start].trim();
    let label = if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    };

    (label, &body[jsx_start..])
}

/// Promote a consistent outer element to a component-level wrapper.
///
/// Requires every example to carry wrapper data naming the same element;
/// defaults merge first-write-wins across examples in order.
fn promote_wrapper(examples: &[Example]) -> Option<WrapperComponent> {
    let first = examples.first()?.wrapper.as_ref()?;

    let consistent = examples
        .iter()
        .all(|e| e.wrapper.as_ref().map(|w| w.name.as_str()) == Some(first.name.as_str()));
    if !consistent {
        return None;
    }

    let mut defaults = BTreeMap::new();
    for example in examples {
        if let Some(wrapper) = &example.wrapper {
            for (key, value) in &wrapper.props {
                defaults.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
    }

    Some(WrapperComponent {
        name: first.name.clone(),
        defaults,
    })
}
