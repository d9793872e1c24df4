use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::elements::{classes, Elements};
use super::panel::Panel;
use crate::config;

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section under `scroll_y` plus the look-ahead. When sections overlap
/// the last one in document order wins.
pub fn active_section(sections: &[SectionBox], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + config::NAV_LOOKAHEAD_PX;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// `None` for anything that is not an in-page anchor, including a bare `#`.
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct Navigation {
    window: Window,
    document: Document,
    header: Option<HtmlElement>,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    menu: Option<Panel>,
}

impl Navigation {
    pub fn new(window: Window, document: Document, elements: &Elements) -> Self {
        let menu = elements.nav_menu.clone().map(|root| {
            Panel::new(root, elements.nav_toggle.clone()).with_scroll_lock(document.body())
        });
        if menu.is_none() {
            log::debug!("no mobile menu on this page");
        }
        Self {
            window,
            document,
            header: elements.header.clone(),
            links: elements.nav_links.clone(),
            sections: elements.sections.clone(),
            menu,
        }
    }

    pub fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// The header keeps its solid style for the whole page view, scrolled or
    /// not.
    pub fn mark_header_solid(&self) {
        if let Some(header) = &self.header {
            let _ = header.class_list().add_1(classes::SCROLLED);
        }
    }

    pub fn update_active_link(&self, scroll_y: f64) {
        let boxes: Vec<SectionBox> = self
            .sections
            .iter()
            .map(|section| SectionBox {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect();

        let Some(id) = active_section(&boxes, scroll_y) else {
            return;
        };
        let href = format!("#{}", id);
        for link in &self.links {
            let _ = link.class_list().remove_1(classes::ACTIVE);
        }
        if let Some(link) = self
            .links
            .iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
        {
            let _ = link.class_list().add_1(classes::ACTIVE);
        }
    }

    pub fn toggle_menu(&self) {
        if let Some(menu) = &self.menu {
            let open = menu.toggle();
            log::debug!("mobile menu open: {}", open);
        }
    }

    pub fn close_menu(&self) {
        if let Some(menu) = &self.menu {
            menu.close();
        }
    }

    /// Scrolls so the element with `id` sits right under the fixed header.
    pub fn smooth_scroll_to(&self, id: &str) {
        let Some(target) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let header_height = self.header.as_ref().map_or(0, |h| h.offset_height());

        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top() - header_height));
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    pub fn handle_anchor_click(&self, event: &Event) {
        let Some(anchor) = event
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if let Some(id) = in_page_target(&href) {
            event.prevent_default();
            self.smooth_scroll_to(id);
            self.close_menu();
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::controller::fixture::Page;

    const SECTIONS: &str = r##"
        <a id="stale" class="nav-link active" href="#elsewhere">Elsewhere</a>
        <a id="first-link" class="nav-link" href="#first-section">First</a>
        <a id="second-link" class="nav-link" href="#second-section">Second</a>
        <section id="first-section" style="height: 400px"></section>
        <section id="second-section" style="height: 400px"></section>
    "##;

    fn active(page: &Page) -> Vec<bool> {
        ["stale", "first-link", "second-link"]
            .iter()
            .map(|id| page.get(id).class_list().contains(classes::ACTIVE))
            .collect()
    }

    #[wasm_bindgen_test]
    fn exactly_the_matching_link_is_marked_and_misses_change_nothing() {
        let page = Page::mount(SECTIONS);
        let window = web_sys::window().unwrap();
        let nav = Navigation::new(
            window,
            page.document().clone(),
            &Elements::collect(page.document()),
        );

        let second_top = f64::from(page.get("second-section").offset_top());
        nav.update_active_link(second_top - config::NAV_LOOKAHEAD_PX + 10.0);
        assert_eq!(active(&page), vec![false, false, true]);

        nav.update_active_link(1.0e7);
        assert_eq!(active(&page), vec![false, false, true]);

        let first_top = f64::from(page.get("first-section").offset_top());
        nav.update_active_link(first_top - config::NAV_LOOKAHEAD_PX);
        assert_eq!(active(&page), vec![false, true, false]);
    }
}
