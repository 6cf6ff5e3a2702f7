//! Looking up rendered nodes by their text or by a CSS selector.
//!
//! `get_*` queries demand exactly one match, `query_*` queries accept none,
//! and `get_all_*` queries demand at least one.

use crate::{
    error::{HarnessError, Result},
    matcher::TextMatch,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

/// A query interface scoped to one root element.
#[derive(Debug, Clone)]
pub struct Screen {
    root: Element,
}

impl Screen {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Finds the single element whose own text matches.
    pub fn get_by_text(
        &self,
        matcher: impl Into<TextMatch>,
    ) -> Result<HtmlElement> {
        let matcher = matcher.into();
        let found = self.find_by_text(&matcher)?;
        expect_single(matcher.to_string(), found)
    }

    /// Like [`Screen::get_by_text`], but no match is `Ok(None)`.
    pub fn query_by_text(
        &self,
        matcher: impl Into<TextMatch>,
    ) -> Result<Option<HtmlElement>> {
        let matcher = matcher.into();
        let found = self.find_by_text(&matcher)?;
        expect_at_most_one(matcher.to_string(), found)
    }

    pub fn get_all_by_text(
        &self,
        matcher: impl Into<TextMatch>,
    ) -> Result<Vec<HtmlElement>> {
        let matcher = matcher.into();
        let found = self.find_by_text(&matcher)?;
        expect_some(matcher.to_string(), found)
    }

    /// Finds the single element matching a CSS selector.
    pub fn get_by_selector(&self, selector: &str) -> Result<HtmlElement> {
        let found = self.find_by_selector(selector)?;
        expect_single(format!("selector {selector:?}"), found)
    }

    pub fn query_by_selector(
        &self,
        selector: &str,
    ) -> Result<Option<HtmlElement>> {
        let found = self.find_by_selector(selector)?;
        expect_at_most_one(format!("selector {selector:?}"), found)
    }

    fn find_by_selector(&self, selector: &str) -> Result<Vec<HtmlElement>> {
        let nodes = self.root.query_selector_all(selector)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    fn find_by_text(&self, matcher: &TextMatch) -> Result<Vec<HtmlElement>> {
        Ok(self
            .find_by_selector("*")?
            .into_iter()
            .filter(|el| matcher.matches(&own_text(el)))
            .collect())
    }
}

/// Concatenates the element's direct text-node children, ignoring the text of
/// nested elements, so a match lands on the innermost element.
pub fn own_text(element: &Element) -> String {
    let children = element.child_nodes();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|node| node.node_type() == Node::TEXT_NODE)
        .filter_map(|node| node.text_content())
        .collect()
}

pub(crate) fn expect_single<T>(query: String, mut found: Vec<T>) -> Result<T> {
    match found.len() {
        0 => Err(HarnessError::NotFound { query }),
        1 => Ok(found.remove(0)),
        count => Err(HarnessError::MultipleFound { query, count }),
    }
}

pub(crate) fn expect_at_most_one<T>(
    query: String,
    found: Vec<T>,
) -> Result<Option<T>> {
    if found.is_empty() {
        Ok(None)
    } else {
        expect_single(query, found).map(Some)
    }
}

pub(crate) fn expect_some<T>(query: String, found: Vec<T>) -> Result<Vec<T>> {
    if found.is_empty() {
        Err(HarnessError::NotFound { query })
    } else {
        Ok(found)
    }
}
