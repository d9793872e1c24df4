//! One-shot lookup of every node the controller touches.
//!
//! The same controller runs on every page, and no page has all of these
//! nodes. Anything missing is simply `None` or an empty list, and the
//! subsystem that needs it stays unwired.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, NodeList};

/// Element ids shared between the rendered markup and the controller.
pub mod ids {
    pub const HEADER: &str = "header";
    pub const NAV_MENU: &str = "nav-menu";
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const TESTIMONIALS_SLIDER: &str = "testimonials-slider";
    pub const TESTIMONIALS_PREV: &str = "testimonials-prev";
    pub const TESTIMONIALS_NEXT: &str = "testimonials-next";
    pub const TESTIMONIALS_DOTS: &str = "testimonials-dots";
    pub const STICKY_WIDGET: &str = "sticky-widget";
    pub const WIDGET_TOGGLE: &str = "widget-toggle";
    pub const WIDGET_CONTENT: &str = "widget-content";
    pub const WIDGET_FORM: &str = "widget-form";
    pub const WIDGET_SUCCESS: &str = "widget-success";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const FORM_SUCCESS: &str = "form-success";
    pub const CURRENT_YEAR: &str = "current-year";
}

/// Class names the controller reads or writes.
pub mod classes {
    pub const NAV_LINK: &str = "nav-link";
    pub const ACTIVE: &str = "active";
    pub const OPEN: &str = "is-open";
    pub const SCROLLED: &str = "is-scrolled";
    pub const VISIBLE: &str = "is-visible";
    pub const LOADING: &str = "is-loading";
    pub const ANIMATE_ON_SCROLL: &str = "animate-on-scroll";
    pub const STATS: &str = "stats";
    pub const STAT_NUMBER: &str = "stat-item-number";
    pub const TESTIMONIAL_CARD: &str = "testimonial-card";
    pub const TESTIMONIAL_DOT: &str = "testimonials-dot";
}

pub struct Elements {
    pub header: Option<HtmlElement>,
    pub nav_menu: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_links: Vec<Element>,
    pub sections: Vec<HtmlElement>,
    pub hash_links: Vec<Element>,

    pub testimonial_cards: Vec<Element>,
    pub testimonials_prev: Option<Element>,
    pub testimonials_next: Option<Element>,
    pub testimonial_dots: Vec<Element>,

    pub sticky_widget: Option<Element>,
    pub widget_toggle: Option<Element>,
    pub widget_form: Option<HtmlFormElement>,
    pub widget_success: Option<Element>,

    pub contact_form: Option<HtmlFormElement>,
    pub form_success: Option<Element>,

    pub animated: Vec<Element>,
    pub stats_section: Option<Element>,
    pub stat_numbers: Vec<Element>,

    pub current_year: Option<Element>,
}

impl Elements {
    pub fn collect(document: &Document) -> Self {
        let testimonial_dots = by_id::<Element>(document, ids::TESTIMONIALS_DOTS)
            .map(|dots| nodes(dots.query_selector_all(&format!(".{}", classes::TESTIMONIAL_DOT))))
            .unwrap_or_default();

        Self {
            header: by_id(document, ids::HEADER),
            nav_menu: by_id(document, ids::NAV_MENU),
            nav_toggle: by_id(document, ids::NAV_TOGGLE),
            nav_links: all(document, &format!(".{}", classes::NAV_LINK)),
            sections: all(document, "section[id]"),
            hash_links: all(document, "a[href^=\"#\"]"),

            testimonial_cards: all(document, &format!(".{}", classes::TESTIMONIAL_CARD)),
            testimonials_prev: by_id(document, ids::TESTIMONIALS_PREV),
            testimonials_next: by_id(document, ids::TESTIMONIALS_NEXT),
            testimonial_dots,

            sticky_widget: by_id(document, ids::STICKY_WIDGET),
            widget_toggle: by_id(document, ids::WIDGET_TOGGLE),
            widget_form: by_id(document, ids::WIDGET_FORM),
            widget_success: by_id(document, ids::WIDGET_SUCCESS),

            contact_form: by_id(document, ids::CONTACT_FORM),
            form_success: by_id(document, ids::FORM_SUCCESS),

            animated: all(document, &format!(".{}", classes::ANIMATE_ON_SCROLL)),
            stats_section: document
                .query_selector(&format!(".{}", classes::STATS))
                .ok()
                .flatten(),
            stat_numbers: all(document, &format!(".{}[data-count]", classes::STAT_NUMBER)),

            current_year: by_id(document, ids::CURRENT_YEAR),
        }
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    nodes(document.query_selector_all(selector))
}

fn nodes<T: JsCast>(list: Result<NodeList, JsValue>) -> Vec<T> {
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            log::warn!("selector lookup failed: {:?}", e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
