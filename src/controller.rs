//! Page interactivity: everything that reacts to scrolling, clicks, keys
//! and form submissions once the page markup is in the DOM.

pub mod carousel;
pub mod effects;
pub mod elements;
pub mod listener;
pub mod nav;
pub mod panel;
pub mod scheduler;

use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node, Window};

use crate::config;
use crate::forms::dom::{read_control, DomForm};
use crate::forms::submit::{Completion, FormSubmission, ServiceLookup, SubmitOutcome};
use crate::forms::validate::Rules;
use carousel::TestimonialSlider;
use effects::ScrollEffects;
use elements::Elements;
use listener::Listeners;
use nav::Navigation;
use panel::Panel;
use scheduler::{Debounce, Scheduler, Throttle};

/// Owns every listener wired onto the current page. Dropping it detaches
/// them all and closes the menu and widget.
pub struct Controller {
    listeners: Listeners,
    nav: Rc<Navigation>,
    widget: Option<Rc<Panel>>,
}

impl Controller {
    /// `None` outside a browser.
    pub fn attach(scheduler: Rc<dyn Scheduler>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let elements = Elements::collect(&document);
        let controller = Self::wire(window, document, &elements, scheduler);
        log::info!("page controller attached ({} listeners)", controller.listeners.len());
        Some(controller)
    }

    fn wire(
        window: Window,
        document: Document,
        elements: &Elements,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let mut listeners = Listeners::default();

        if let Some(year) = &elements.current_year {
            year.set_text_content(Some(&chrono::Local::now().year().to_string()));
        }

        let nav = Rc::new(Navigation::new(window.clone(), document.clone(), elements));
        let effects = Rc::new(ScrollEffects::new(window.clone(), elements, scheduler.clone()));
        let widget = elements
            .sticky_widget
            .clone()
            .map(|root| Rc::new(Panel::new(root, elements.widget_toggle.clone())));

        nav.mark_header_solid();

        // Scroll: active link, reveal, stats, in that order.
        let scroll_tick = {
            let nav = nav.clone();
            let effects = effects.clone();
            move || {
                let y = nav.scroll_y();
                nav.update_active_link(y);
                effects.reveal();
                effects.trigger_stats();
            }
        };
        scroll_tick();
        if let Some(id) = window.location().hash().ok().as_deref().and_then(nav::in_page_target) {
            nav.smooth_scroll_to(id);
        }
        let throttle = Throttle::new(config::SCROLL_THROTTLE_MS, scheduler.clone());
        listeners.on(&window, "scroll", move |_| {
            throttle.run(&scroll_tick);
        });

        Self::wire_navigation(&mut listeners, &window, &document, elements, &nav, &widget, &scheduler);
        Self::wire_testimonials(&mut listeners, &window, elements);
        if let Some(widget) = &widget {
            Self::wire_widget(&mut listeners, &document, elements, widget);
        }

        if let Some(form) = &elements.contact_form {
            let lookup: ServiceLookup = Rc::new(config::service_label);
            let host = DomForm::new(
                window.clone(),
                document.clone(),
                form.clone(),
                elements.form_success.clone(),
            );
            let submission =
                FormSubmission::new(host, Rules::Full, Completion::Mail { lookup }, scheduler.clone());
            Self::wire_form(&mut listeners, submission, "contact");
        }

        if let Some(form) = &elements.widget_form {
            let close: Rc<dyn Fn()> = match &widget {
                Some(widget) => {
                    let widget = widget.clone();
                    Rc::new(move || widget.close())
                }
                None => Rc::new(|| ()),
            };
            let host = DomForm::new(
                window.clone(),
                document.clone(),
                form.clone(),
                elements.widget_success.clone(),
            );
            let submission = FormSubmission::new(
                host,
                Rules::RequiredOnly,
                Completion::ClosePanel { close },
                scheduler.clone(),
            );
            Self::wire_form(&mut listeners, submission, "widget");
        }

        Self {
            listeners,
            nav,
            widget,
        }
    }

    fn wire_navigation(
        listeners: &mut Listeners,
        window: &Window,
        document: &Document,
        elements: &Elements,
        nav: &Rc<Navigation>,
        widget: &Option<Rc<Panel>>,
        scheduler: &Rc<dyn Scheduler>,
    ) {
        if let Some(toggle) = &elements.nav_toggle {
            let nav = nav.clone();
            listeners.on(toggle, "click", move |_| nav.toggle_menu());
        }

        for anchor in &elements.hash_links {
            let nav = nav.clone();
            listeners.on(anchor, "click", move |e: Event| nav.handle_anchor_click(&e));
        }

        {
            let nav = nav.clone();
            let widget = widget.clone();
            listeners.on(document, "keydown", move |e: Event| {
                let escape = e
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|k| k.key() == "Escape");
                if escape {
                    nav.close_menu();
                    if let Some(widget) = &widget {
                        widget.close();
                    }
                }
            });
        }

        if nav.has_menu() {
            let debounce = Debounce::new(config::RESIZE_DEBOUNCE_MS, scheduler.clone());
            let nav = nav.clone();
            let win = window.clone();
            listeners.on(window, "resize", move |_| {
                let nav = nav.clone();
                let win = win.clone();
                debounce.call(move || {
                    let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                    if width > config::MOBILE_BREAKPOINT_PX {
                        nav.close_menu();
                    }
                });
            });
        }
    }

    fn wire_testimonials(listeners: &mut Listeners, window: &Window, elements: &Elements) {
        if elements.testimonial_cards.is_empty() {
            log::debug!("no testimonials on this page");
            return;
        }
        let slider = Rc::new(TestimonialSlider::new(window.clone(), elements));

        if let Some(prev) = &elements.testimonials_prev {
            let slider = slider.clone();
            listeners.on(prev, "click", move |_| slider.prev());
        }
        if let Some(next) = &elements.testimonials_next {
            let slider = slider.clone();
            listeners.on(next, "click", move |_| slider.next());
        }
        for (index, dot) in elements.testimonial_dots.iter().enumerate() {
            let slider = slider.clone();
            listeners.on(dot, "click", move |_| slider.go_to(index));
        }
        log::debug!("testimonials wired with {} dots", slider.dot_count());
    }

    fn wire_widget(
        listeners: &mut Listeners,
        document: &Document,
        elements: &Elements,
        widget: &Rc<Panel>,
    ) {
        if let Some(toggle) = &elements.widget_toggle {
            let widget = widget.clone();
            listeners.on(toggle, "click", move |_| {
                widget.toggle();
            });
        }

        let widget = widget.clone();
        listeners.on(document, "click", move |e: Event| {
            if !widget.is_open() {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !widget.contains(target.as_ref()) {
                widget.close();
            }
        });
    }

    fn wire_form(
        listeners: &mut Listeners,
        submission: Rc<FormSubmission<DomForm>>,
        label: &'static str,
    ) {
        let form = submission.host().form().clone();

        {
            let submission = submission.clone();
            listeners.on(&form, "submit", move |e: Event| {
                e.prevent_default();
                match submission.submit() {
                    SubmitOutcome::Pending => log::debug!("{} form accepted", label),
                    SubmitOutcome::Rejected => log::debug!("{} form has invalid fields", label),
                    SubmitOutcome::Busy => {}
                }
            });
        }

        let Ok(controls) = form.query_selector_all("input, textarea, select") else {
            return;
        };
        for control in (0..controls.length())
            .filter_map(|i| controls.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            let Some((name, _, _)) = read_control(&control) else {
                continue;
            };
            let submission = submission.clone();
            listeners.on(&control, "input", move |_| submission.clear_error(&name));
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        // Header and widget markup survive a route change. Open state must not.
        self.nav.close_menu();
        if let Some(widget) = &self.widget {
            widget.close();
        }
        log::debug!("page controller detached");
    }
}
