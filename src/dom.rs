//! Browser bindings: read field values from `<input>`, `<textarea>` and
//! `<select>` controls whose `id` is the field name, and flag rejected
//! fields by toggling a class on the control's parent element.

use crate::{FeedbackSink, FormConfig, InputSource, Notifier, SubmitEvent};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
};

/// A form in a DOM document.
#[derive(Debug, Clone)]
pub struct DomForm {
    document: Document,
    error_class: String,
}

impl DomForm {
    /// Create a new `DomForm` that flags rejected fields with the
    /// [error_class](FormConfig::error_class) of `config`.
    pub fn new(document: Document, config: &FormConfig) -> Self {
        Self {
            document,
            error_class: config.error_class.clone(),
        }
    }

    /// A `DomForm` over the current window's document, if there is one.
    pub fn current(config: &FormConfig) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, config))
    }

    fn container(&self, field: &str) -> Option<Element> {
        self.document.get_element_by_id(field)?.parent_element()
    }
}

impl InputSource for DomForm {
    fn raw_value(&self, field: &str) -> Option<String> {
        let element = self.document.get_element_by_id(field)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Some(text_area.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else {
            tracing::warn!(field, tag = %element.tag_name(), "element is not a form control");
            None
        }
    }
}

impl FeedbackSink for DomForm {
    fn mark_invalid(&mut self, field: &str) {
        if let Some(container) = self.container(field) {
            if let Err(err) = container.class_list().add_1(&self.error_class) {
                tracing::warn!(field, ?err, "could not mark field invalid");
            }
        }
    }

    fn clear_invalid(&mut self, field: &str) {
        if let Some(container) = self.container(field) {
            if let Err(err) = container.class_list().remove_1(&self.error_class) {
                tracing::warn!(field, ?err, "could not clear field mark");
            }
        }
    }
}

impl SubmitEvent for Event {
    fn prevent_default(&mut self) {
        Event::prevent_default(self)
    }
}

/// Shows notifications with `window.alert`.
#[derive(Debug, Clone)]
pub struct WindowAlert {
    window: Window,
}

impl WindowAlert {
    /// Create a new `WindowAlert` showing alerts in `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// A `WindowAlert` for the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window().map(Self::new)
    }
}

impl Notifier for WindowAlert {
    fn notify(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(?err, "could not show alert");
        }
    }
}
