use crate::{
    error::{HarnessError, Result},
    matcher::normalize,
    query::Screen,
};
use leptos::{
    leptos_dom::helpers::document, mount::mount_to, prelude::IntoView,
};
use std::any::Any;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// A component mounted into its own container under `<body>`.
///
/// Dropping the result unmounts the view, disposes its reactive owner and
/// detaches the container, so nothing rendered by one test is visible to, or
/// kept alive for, the next.
#[derive(Debug)]
pub struct RenderResult {
    container: HtmlElement,
    mount: Option<Box<dyn Any>>,
}

/// Mounts the view returned by `f` into a fresh `<div>` container.
pub fn render<F, N>(f: F) -> Result<RenderResult>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
    N::State: 'static,
{
    let document = document();
    let body = document
        .body()
        .ok_or_else(|| HarnessError::Dom("document has no <body>".into()))?;
    let container = document
        .create_element("div")?
        .unchecked_into::<HtmlElement>();
    body.append_child(&container)?;

    let handle = mount_to(container.clone(), f);
    log::debug!("mounted component into a fresh container");

    Ok(RenderResult {
        container,
        mount: Some(Box::new(handle)),
    })
}

impl RenderResult {
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// The container's text content, normalized.
    pub fn text(&self) -> String {
        normalize(&self.container.text_content().unwrap_or_default())
    }

    pub fn inner_html(&self) -> String {
        self.container.inner_html()
    }

    /// Queries scoped to this container.
    pub fn screen(&self) -> Screen {
        Screen::new(self.container.clone().into())
    }
}

impl Drop for RenderResult {
    fn drop(&mut self) {
        // unmount first so the owner and its effects go with the nodes
        drop(self.mount.take());
        self.container.remove();
    }
}

/// The normalized text of any rendered element.
pub fn text_of(element: &web_sys::Element) -> String {
    normalize(&element.text_content().unwrap_or_default())
}
