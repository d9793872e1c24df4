use std::cell::Cell;

use web_sys::{Element, HtmlElement, Node};

use super::elements::classes;

/// Open/closed flag of a collapsible panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// A panel whose state lives in an `is-open` class on `root`, mirrored into
/// `aria-expanded` on the control that toggles it.
pub struct Panel {
    root: Element,
    control: Option<Element>,
    scroll_lock: Option<HtmlElement>,
    state: Cell<PanelState>,
}

impl Panel {
    pub fn new(root: Element, control: Option<Element>) -> Self {
        let open = root.class_list().contains(classes::OPEN);
        Self {
            root,
            control,
            scroll_lock: None,
            state: Cell::new(PanelState { open }),
        }
    }

    /// Freeze page scrolling on `body` while the panel is open.
    pub fn with_scroll_lock(mut self, body: Option<HtmlElement>) -> Self {
        self.scroll_lock = body;
        self
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn contains(&self, node: Option<&Node>) -> bool {
        self.root.contains(node)
    }

    pub fn toggle(&self) -> bool {
        self.apply(self.state.get().toggled());
        self.is_open()
    }

    /// Safe to call whether or not the panel is open.
    pub fn close(&self) {
        self.apply(self.state.get().closed());
    }

    fn apply(&self, next: PanelState) {
        self.state.set(next);
        if let Err(e) = self.root.class_list().toggle_with_force(classes::OPEN, next.is_open()) {
            log::warn!("panel class update failed: {:?}", e);
        }
        if let Some(control) = &self.control {
            let _ = control.set_attribute("aria-expanded", next.aria_expanded());
        }
        if let Some(body) = &self.scroll_lock {
            let style = body.style();
            let result = if next.is_open() {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
            if let Err(e) = result {
                log::warn!("body overflow update failed: {:?}", e);
            }
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn mobile_menu_round_trip_restores_class_and_aria() {
        let document = web_sys::window().unwrap().document().unwrap();
        let menu = document.create_element("div").unwrap();
        let toggle = document.create_element("button").unwrap();
        toggle.set_attribute("aria-expanded", "false").unwrap();
        let panel = Panel::new(menu.clone(), Some(toggle.clone())).with_scroll_lock(document.body());

        assert!(panel.toggle());
        assert!(menu.class_list().contains(classes::OPEN));
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

        assert!(!panel.toggle());
        assert!(!menu.class_list().contains(classes::OPEN));
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert_eq!(document.body().unwrap().style().get_property_value("overflow").unwrap(), "");
    }
}
