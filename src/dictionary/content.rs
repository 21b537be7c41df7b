//! Structured-content parsing: turning a term bank's rich-text tree into
//! flat gloss strings.
//!
//! Term banks encode each definition as a nested, HTML-like tree: elements
//! with an optional tag, an optional semantic marker (`data.content`), and
//! child content that is a string, another element, or a list of either.
//! Glosses live in ordered lists marked `glosses`; everything else in the
//! tree (usage tags, example sentences, etymology, backlinks) is metadata
//! that must not leak into the extracted translations.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::collapse_whitespace;

/// Semantic markers whose subtrees contribute no gloss text.
const SKIPPED_MARKERS: [&str; 9] = [
    "tags",
    "examples",
    "example-sentence",
    "backlink",
    "extra-info",
    "details-entry-examples",
    "preamble",
    "summary-entry",
    "details-entry-Etymology",
];

/// Tags whose subtrees are skipped entirely, regardless of marker.
const SKIPPED_TAGS: [&str; 2] = ["details", "summary"];

/// One node of a structured-content tree.
///
/// Read-only parse target; never mutated after deserialization. Anything
/// that is not a string, an element object, or a list of nodes (stray
/// numbers, nulls) falls into `Other` and contributes nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text(String),
    Sequence(Vec<ContentNode>),
    Element(Box<ContentElement>),
    Other(Value),
}

/// An element node: optional tag name, optional data attributes, optional
/// child content.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentElement {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub data: Option<ElementData>,
    #[serde(default)]
    pub content: Option<ContentNode>,
}

/// The `data` attribute map. Only the `content` key (the semantic marker)
/// is meaningful here; markers that are not strings are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementData {
    #[serde(default)]
    pub content: Option<Value>,
}

impl ContentElement {
    /// The semantic marker (`data.content`), if present and a string.
    pub fn marker(&self) -> Option<&str> {
        self.data.as_ref()?.content.as_ref()?.as_str()
    }

    fn is_glosses_list(&self) -> bool {
        self.tag.as_deref() == Some("ol") && self.marker() == Some("glosses")
    }

    fn is_skipped(&self) -> bool {
        if let Some(marker) = self.marker()
            && SKIPPED_MARKERS.contains(&marker)
        {
            return true;
        }
        matches!(self.tag.as_deref(), Some(tag) if SKIPPED_TAGS.contains(&tag))
    }
}

/// View any node as a list of child nodes: sequences yield their items,
/// everything else yields itself as a single child.
fn as_list(node: &ContentNode) -> &[ContentNode] {
    match node {
        ContentNode::Sequence(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// Extract all glosses from a structured-content tree, in document order.
///
/// Glosses are the `li` children of ordered lists marked `glosses`. The
/// walk also recurses into arbitrary nested content, so glosses wrapped in
/// other containers are still found.
pub fn extract_glosses(root: &ContentNode) -> Vec<String> {
    let mut glosses = Vec::new();
    collect_glosses(root, &mut glosses);
    glosses
}

fn collect_glosses(node: &ContentNode, glosses: &mut Vec<String>) {
    match node {
        ContentNode::Text(_) | ContentNode::Other(_) => {}
        ContentNode::Sequence(items) => {
            for item in items {
                collect_glosses(item, glosses);
            }
        }
        ContentNode::Element(element) => {
            if element.is_glosses_list()
                && let Some(list_content) = &element.content
            {
                for item in as_list(list_content) {
                    if let ContentNode::Element(child) = item
                        && child.tag.as_deref() == Some("li")
                        && let Some(item_content) = &child.content
                        && let Some(gloss) = extract_gloss_text(item_content)
                    {
                        glosses.push(gloss);
                    }
                }
            }

            // Keep searching nested content for further glosses lists.
            if let Some(content) = &element.content {
                collect_glosses(content, glosses);
            }
        }
    }
}

/// Flatten one gloss subtree to text: leaf strings joined with single
/// spaces, metadata subtrees skipped, whitespace collapsed. Returns `None`
/// if nothing but metadata was found.
fn extract_gloss_text(node: &ContentNode) -> Option<String> {
    let mut fragments = Vec::new();
    collect_text(node, &mut fragments);

    let text = collapse_whitespace(&fragments.join(" "));
    if text.is_empty() { None } else { Some(text) }
}

fn collect_text(node: &ContentNode, fragments: &mut Vec<String>) {
    match node {
        ContentNode::Text(text) => fragments.push(text.clone()),
        ContentNode::Other(_) => {}
        ContentNode::Sequence(items) => {
            for item in items {
                collect_text(item, fragments);
            }
        }
        ContentNode::Element(element) => {
            if element.is_skipped() {
                return;
            }
            if let Some(content) = &element.content {
                collect_text(content, fragments);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(value: Value) -> ContentNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extracts_glosses_in_order() {
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": "glosses"},
            "content": [
                {"tag": "li", "content": "to go"},
                {"tag": "li", "content": "to walk"}
            ]
        }]));

        assert_eq!(extract_glosses(&tree), vec!["to go", "to walk"]);
    }

    #[test]
    fn test_gloss_fragments_joined_with_spaces() {
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": "glosses"},
            "content": [{
                "tag": "li",
                "content": [
                    "to go",
                    {"tag": "span", "content": "back"}
                ]
            }]
        }]));

        assert_eq!(extract_glosses(&tree), vec!["to go back"]);
    }

    #[test]
    fn test_examples_inside_gloss_contribute_nothing() {
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": "glosses"},
            "content": [{
                "tag": "li",
                "content": [
                    "house",
                    {
                        "tag": "div",
                        "data": {"content": "examples"},
                        "content": "Das Haus ist groß."
                    }
                ]
            }]
        }]));

        assert_eq!(extract_glosses(&tree), vec!["house"]);
    }

    #[test]
    fn test_details_and_summary_skipped_regardless_of_marker() {
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": "glosses"},
            "content": [{
                "tag": "li",
                "content": [
                    "door",
                    {"tag": "details", "content": "etymology text"},
                    {"tag": "summary", "content": "summary text"}
                ]
            }]
        }]));

        assert_eq!(extract_glosses(&tree), vec!["door"]);
    }

    #[test]
    fn test_glosses_found_inside_nested_containers() {
        let tree = node(json!([{
            "tag": "div",
            "content": {
                "tag": "ol",
                "data": {"content": "glosses"},
                "content": [{"tag": "li", "content": "nested gloss"}]
            }
        }]));

        assert_eq!(extract_glosses(&tree), vec!["nested gloss"]);
    }

    #[test]
    fn test_empty_glosses_discarded() {
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": "glosses"},
            "content": [
                {"tag": "li", "content": [{
                    "tag": "div",
                    "data": {"content": "tags"},
                    "content": "colloquial"
                }]},
                {"tag": "li", "content": "real gloss"}
            ]
        }]));

        assert_eq!(extract_glosses(&tree), vec!["real gloss"]);
    }

    #[test]
    fn test_unmarked_ordered_list_yields_nothing() {
        let tree = node(json!([{
            "tag": "ol",
            "content": [{"tag": "li", "content": "not a gloss"}]
        }]));

        assert_eq!(extract_glosses(&tree), Vec::<String>::new());
    }

    #[test]
    fn test_whitespace_collapsed() {
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": "glosses"},
            "content": [{"tag": "li", "content": ["  to  ", " arrive \n"]}]
        }]));

        assert_eq!(extract_glosses(&tree), vec!["to arrive"]);
    }

    #[test]
    fn test_non_string_markers_tolerated() {
        // A numeric data.content must not abort deserialization or match
        // the glosses marker.
        let tree = node(json!([{
            "tag": "ol",
            "data": {"content": 7},
            "content": [{"tag": "li", "content": "ignored"}]
        }]));

        assert_eq!(extract_glosses(&tree), Vec::<String>::new());
    }
}
