use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use super::error_slot_id;
use super::mailto::MailDraft;
use super::submit::FormHost;
use super::validate::{FieldError, FieldInput, FieldKind};
use crate::controller::elements::classes;

const ERROR_BORDER: &str = "var(--color-error)";

/// `(name, type, value)` of an input, textarea or select.
pub fn read_control(element: &Element) -> Option<(String, String, String)> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.type_(), input.value()));
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), "textarea".to_string(), area.value()));
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), "select".to_string(), select.value()));
    }
    None
}

/// A `<form>` already in the page, plus its success banner.
pub struct DomForm {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    success: Option<Element>,
    submit_button: Option<HtmlButtonElement>,
}

impl DomForm {
    pub fn new(
        window: Window,
        document: Document,
        form: HtmlFormElement,
        success: Option<Element>,
    ) -> Self {
        let submit_button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
        Self {
            window,
            document,
            form,
            success,
            submit_button,
        }
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn control(&self, name: &str) -> Option<Element> {
        self.form
            .query_selector(&format!("[name=\"{}\"]", name))
            .ok()
            .flatten()
    }
}

impl FormHost for DomForm {
    fn required_fields(&self) -> Vec<FieldInput> {
        let Ok(list) = self.form.query_selector_all("[required]") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|el| read_control(&el))
            .map(|(name, kind, value)| FieldInput::new(name, FieldKind::from_input_type(&kind), value))
            .collect()
    }

    fn value(&self, name: &str) -> String {
        self.control(name)
            .and_then(|el| read_control(&el))
            .map(|(_, _, value)| value)
            .unwrap_or_default()
    }

    fn show_field_error(&self, name: &str, error: Option<FieldError>) {
        if let Some(field) = self.control(name).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            let style = field.style();
            let _ = match error {
                Some(_) => style.set_property("border-color", ERROR_BORDER),
                None => style.remove_property("border-color").map(|_| ()),
            };
        }
        if let Some(slot) = self.document.get_element_by_id(&error_slot_id(name)) {
            let message = error.map(|e| e.to_string()).unwrap_or_default();
            slot.set_text_content(Some(&message));
        }
    }

    fn set_loading(&self, loading: bool) {
        if let Some(button) = &self.submit_button {
            let _ = button.class_list().toggle_with_force(classes::LOADING, loading);
            button.set_disabled(loading);
        }
    }

    fn set_success_visible(&self, visible: bool) {
        if let Some(success) = &self.success {
            let _ = success.class_list().toggle_with_force(classes::VISIBLE, visible);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn open_mail(&self, draft: &MailDraft) {
        if let Err(e) = self.window.open_with_url_and_target(&draft.to_uri(), "_blank") {
            log::warn!("could not open mail client: {:?}", e);
        }
    }
}
