//! Document access: container lookup and the DOM-ready signal

use futures::channel::oneshot;
use trackstats_renderer::ContainerHost;
use trackstats_shared::{ChartError, ChartResult, ContainerLocator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element};

/// The page document as a container host
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window
    pub fn current() -> ChartResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::JsInterop {
                message: "No document available".to_string(),
            })?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ContainerHost for DocumentHost {
    type Element = Element;

    fn find(&self, locator: &ContainerLocator) -> Option<Element> {
        match locator {
            ContainerLocator::Id(id) => self.document.get_element_by_id(id),
            ContainerLocator::Selector(selector) => {
                match self.document.query_selector(selector) {
                    Ok(element) => element,
                    Err(e) => {
                        log::warn!("Invalid container selector {selector}: {e:?}");
                        None
                    }
                }
            }
        }
    }
}

/// Resolves once the DOM content has loaded; immediately if it already has.
pub async fn dom_content_loaded(document: &Document) {
    if document.ready_state() != "loading" {
        return;
    }

    let (sender, receiver) = oneshot::channel::<()>();
    let callback = Closure::once_into_js(move || {
        let _ = sender.send(());
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    ) {
        log::error!("Failed to listen for DOMContentLoaded: {e:?}");
        return;
    }

    // A dropped sender means the listener is gone; render with what we have.
    let _ = receiver.await;
}
