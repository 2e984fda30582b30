//! Document model - parse page HTML, locate markers, splice fragments, serialize
//!
//! Page content is parsed as a `<body>` fragment with html5ever into an
//! [`RcDom`] tree; markers are plain element handles into that tree.

use std::rc::Rc;

use html5ever::driver::ParseOpts;
use html5ever::parse_fragment;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use markup5ever::{LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use thiserror::Error;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Errors that can occur while mutating or serializing a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Element is no longer attached to the document tree
    #[error("Element <{0}> is detached from the document")]
    Detached(String),

    /// Serialization failed
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8
    #[error("Serialized document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Parsed HTML fragment that can be searched and mutated in place
pub struct HtmlDocument {
    // Dropping an rcdom node clears its whole subtree, so the dom owns the tree
    dom: RcDom,
}

/// Handle to an element inside an [`HtmlDocument`]
#[derive(Clone)]
pub struct Element {
    handle: Handle,
}

impl HtmlDocument {
    /// Parse `html` as the content of a `<body>` element
    pub fn parse(html: &str) -> Self {
        Self {
            dom: parse_fragment_dom(html),
        }
    }

    fn root(&self) -> Handle {
        fragment_root(&self.dom)
    }

    /// All `tag` elements carrying `class` as one of their class tokens, in document order
    pub fn find_by_class(&self, tag: &str, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        collect_by_class(&self.root(), tag, class, &mut found);
        found
    }

    /// Replace `target` with the nodes parsed from `html`
    pub fn replace_with_html(&self, target: &Element, html: &str) -> Result<(), DocumentError> {
        let detached = || DocumentError::Detached(target.tag_name());

        let weak_parent = target.handle.parent.take();
        let parent = weak_parent.as_ref().and_then(|weak| weak.upgrade());
        target.handle.parent.set(weak_parent);
        let parent = parent.ok_or_else(detached)?;

        let fragment = parse_fragment_dom(html);
        let nodes: Vec<Handle> =
            std::mem::take(&mut *fragment_root(&fragment).children.borrow_mut());
        for node in &nodes {
            node.parent.set(Some(Rc::downgrade(&parent)));
        }

        let mut children = parent.children.borrow_mut();
        let index = children
            .iter()
            .position(|child| Rc::ptr_eq(child, &target.handle))
            .ok_or_else(detached)?;
        let _replaced: Vec<Handle> = children.splice(index..=index, nodes).collect();
        target.handle.parent.set(None);

        Ok(())
    }

    /// Serialize the fragment back to HTML text
    pub fn to_html(&self) -> Result<String, DocumentError> {
        let mut output = Vec::new();
        let options = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        };
        serialize(
            &mut output,
            &SerializableHandle::from(self.root()),
            options,
        )?;
        Ok(String::from_utf8(output)?)
    }
}

impl Element {
    /// Value of the attribute `name`
    pub fn attribute(&self, name: &str) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| attr.name.local.as_ref() == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    /// Local tag name, e.g. `div`
    pub fn tag_name(&self) -> String {
        match &self.handle.data {
            NodeData::Element { name, .. } => name.local.to_string(),
            _ => String::new(),
        }
    }
}

fn parse_fragment_dom(html: &str) -> RcDom {
    let context = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from("body"),
    );
    parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![]).one(html)
}

/// Fragment parsing wraps the content in a synthetic `<html>` element
fn fragment_root(dom: &RcDom) -> Handle {
    let root = dom.document.children.borrow().first().cloned();
    root.unwrap_or_else(|| dom.document.clone())
}

fn collect_by_class(handle: &Handle, tag: &str, class: &str, found: &mut Vec<Element>) {
    if let NodeData::Element { name, attrs, .. } = &handle.data {
        let matches = name.local.as_ref() == tag
            && attrs.borrow().iter().any(|attr| {
                attr.name.local.as_ref() == "class"
                    && attr.value.split_whitespace().any(|token| token == class)
            });
        if matches {
            found.push(Element {
                handle: handle.clone(),
            });
        }
    }

    for child in handle.children.borrow().iter() {
        collect_by_class(child, tag, class, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize_fragment() {
        let document = HtmlDocument::parse("<p>Hello <b>world</b></p>");
        assert_eq!(document.to_html().unwrap(), "<p>Hello <b>world</b></p>");
    }

    #[test]
    fn test_find_by_class_matches_whole_tokens() {
        let document = HtmlDocument::parse(
            r#"<div class="brepository"></div><div class="brepository-item"></div><div class="wide brepository"></div><span class="brepository"></span>"#,
        );

        assert_eq!(document.find_by_class("div", "brepository").len(), 2);
        assert_eq!(document.find_by_class("div", "brepository-item").len(), 1);
    }

    #[test]
    fn test_find_by_class_in_document_order() {
        let document = HtmlDocument::parse(
            r#"<section><div class="m" data-id="1"></div></section><div class="m" data-id="2"></div>"#,
        );

        let ids: Vec<_> = document
            .find_by_class("div", "m")
            .iter()
            .filter_map(|e| e.attribute("data-id"))
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_element_attribute() {
        let document = HtmlDocument::parse(r#"<div class="m" data-set="featured"></div>"#);
        let marker = &document.find_by_class("div", "m")[0];

        assert_eq!(marker.attribute("data-set").as_deref(), Some("featured"));
        assert!(marker.attribute("data-mode").is_none());
        assert_eq!(marker.tag_name(), "div");
    }

    #[test]
    fn test_replace_with_html() {
        let document =
            HtmlDocument::parse(r#"<p>before</p><div class="m"></div><p>after</p>"#);
        let marker = &document.find_by_class("div", "m")[0];

        document
            .replace_with_html(marker, "<ul><li>one</li></ul><span>two</span>")
            .unwrap();

        assert_eq!(
            document.to_html().unwrap(),
            "<p>before</p><ul><li>one</li></ul><span>two</span><p>after</p>"
        );
    }

    #[test]
    fn test_replace_nested_marker() {
        let document = HtmlDocument::parse(r#"<article><div class="m">old</div></article>"#);
        let marker = &document.find_by_class("div", "m")[0];

        document.replace_with_html(marker, "<em>new</em>").unwrap();

        assert_eq!(
            document.to_html().unwrap(),
            "<article><em>new</em></article>"
        );
    }

    #[test]
    fn test_replace_twice_reports_detached() {
        let document = HtmlDocument::parse(r#"<div class="m"></div>"#);
        let marker = &document.find_by_class("div", "m")[0];

        document.replace_with_html(marker, "<p>first</p>").unwrap();
        assert!(matches!(
            document.replace_with_html(marker, "<p>second</p>"),
            Err(DocumentError::Detached(_))
        ));
    }

    #[test]
    fn test_failed_replace_keeps_parent_link() {
        let document = HtmlDocument::parse(r#"<div class="m"></div>"#);
        let marker = &document.find_by_class("div", "m")[0];
        let root = document.root();
        let _removed: Vec<Handle> = root.children.borrow_mut().drain(..).collect();

        assert!(matches!(
            document.replace_with_html(marker, "<p>new</p>"),
            Err(DocumentError::Detached(_))
        ));

        let parent = marker.handle.parent.take().and_then(|weak| weak.upgrade());
        assert!(parent.is_some_and(|parent| Rc::ptr_eq(&parent, &root)));
    }
}
