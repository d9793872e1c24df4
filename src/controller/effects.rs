use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, Window};

use super::elements::{classes, Elements};
use super::scheduler::Scheduler;
use crate::config;

/// Whether an element whose top edge is at `top` (viewport coordinates) has
/// come within `offset` of the bottom of the viewport. Elements already
/// scrolled past count as in view.
pub fn in_viewport(top: f64, viewport_height: f64, offset: f64) -> bool {
    top <= viewport_height - offset
}

/// Leading integer of `raw`, the way `data-count="1200+"` is meant to read.
pub fn parse_count(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// Counts from zero to `target` in fixed per-frame increments so the whole
/// run takes about `COUNTER_DURATION_MS` at 60fps.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        let frames = config::COUNTER_DURATION_MS / config::COUNTER_FRAME_MS;
        Self {
            target,
            current: 0.0,
            increment: target as f64 / frames,
        }
    }

    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame {
                value: self.current.floor() as i64,
                done: false,
            }
        } else {
            CounterFrame {
                value: self.target,
                done: true,
            }
        }
    }
}

/// Runs `animation` one step per frame, handing each value to `render`.
pub fn animate_counter(
    scheduler: Rc<dyn Scheduler>,
    animation: CounterAnimation,
    render: impl FnMut(i64) + 'static,
) {
    schedule_frame(scheduler, animation, Box::new(render));
}

fn schedule_frame(
    scheduler: Rc<dyn Scheduler>,
    mut animation: CounterAnimation,
    mut render: Box<dyn FnMut(i64)>,
) {
    let next = scheduler.clone();
    scheduler.next_frame(Box::new(move || {
        let frame = animation.step();
        render(frame.value);
        if !frame.done {
            schedule_frame(next, animation, render);
        }
    }));
}

/// A flag that can be claimed exactly once.
#[derive(Default)]
pub struct OneShot(Cell<bool>);

impl OneShot {
    pub fn claim(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn is_spent(&self) -> bool {
        self.0.get()
    }
}

pub struct ScrollEffects {
    window: Window,
    animated: Vec<Element>,
    stats_section: Option<Element>,
    stat_numbers: Vec<Element>,
    stats_started: OneShot,
    scheduler: Rc<dyn Scheduler>,
}

impl ScrollEffects {
    pub fn new(window: Window, elements: &Elements, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            window,
            animated: elements.animated.clone(),
            stats_section: elements.stats_section.clone(),
            stat_numbers: elements.stat_numbers.clone(),
            stats_started: OneShot::default(),
            scheduler,
        }
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn is_in_view(&self, element: &Element) -> bool {
        in_viewport(
            element.get_bounding_client_rect().top(),
            self.viewport_height(),
            config::REVEAL_OFFSET_PX,
        )
    }

    /// Marks newly visible elements. The marker is never taken off again.
    pub fn reveal(&self) {
        for element in &self.animated {
            let class_list = element.class_list();
            if !class_list.contains(classes::VISIBLE) && self.is_in_view(element) {
                let _ = class_list.add_1(classes::VISIBLE);
            }
        }
    }

    pub fn trigger_stats(&self) {
        if self.stats_started.is_spent() {
            return;
        }
        let Some(section) = &self.stats_section else {
            return;
        };
        if !self.is_in_view(section) || !self.stats_started.claim() {
            return;
        }

        log::debug!("animating {} stat counters", self.stat_numbers.len());
        for stat in &self.stat_numbers {
            let Some(target) = stat.get_attribute("data-count").as_deref().and_then(parse_count) else {
                continue;
            };
            let stat = stat.clone();
            animate_counter(self.scheduler.clone(), CounterAnimation::new(target), move |value| {
                stat.set_text_content(Some(&value.to_string()));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controller::scheduler::manual::ManualScheduler;

    #[test]
    fn viewport_test_is_inclusive_at_the_offset_line() {
        assert!(in_viewport(700.0, 800.0, 100.0));
        assert!(!in_viewport(700.5, 800.0, 100.0));
        assert!(in_viewport(-2_000.0, 800.0, 100.0));
    }

    #[test]
    fn counts_parse_like_leading_integers() {
        assert_eq!(parse_count("250"), Some(250));
        assert_eq!(parse_count(" 1200+"), Some(1200));
        assert_eq!(parse_count("-15"), Some(-15));
        assert_eq!(parse_count("98%"), Some(98));
        assert_eq!(parse_count("many"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn counter_ends_exactly_on_target() {
        let clock = Rc::new(ManualScheduler::new());
        let shown = Rc::new(RefCell::new(Vec::new()));
        {
            let shown = shown.clone();
            animate_counter(clock.clone(), CounterAnimation::new(100), move |v| {
                shown.borrow_mut().push(v)
            });
        }

        let frames = clock.run_frames(1_000);
        let shown = shown.borrow();
        assert_eq!(shown.last(), Some(&100));
        assert!(shown.iter().all(|v| *v <= 100));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        // 2000ms at 16ms a frame
        assert!((124..=127).contains(&frames), "ran {} frames", frames);
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut animation = CounterAnimation::new(0);
        assert_eq!(animation.step(), CounterFrame { value: 0, done: true });
    }

    #[test]
    fn stats_flag_claims_once() {
        let flag = OneShot::default();
        assert!(!flag.is_spent());
        assert!(flag.claim());
        assert!(!flag.claim());
        assert!(flag.is_spent());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::controller::scheduler::BrowserScheduler;

    #[wasm_bindgen_test]
    fn reveal_marks_elements_already_in_view_and_keeps_the_marker() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let body = document.body().unwrap();
        let element = document.create_element("div").unwrap();
        body.prepend_with_node_1(&element).unwrap();

        let effects = ScrollEffects {
            window,
            animated: vec![element.clone()],
            stats_section: None,
            stat_numbers: Vec::new(),
            stats_started: OneShot::default(),
            scheduler: Rc::new(BrowserScheduler),
        };
        effects.reveal();
        assert!(element.class_list().contains(classes::VISIBLE));

        effects.reveal();
        assert!(element.class_list().contains(classes::VISIBLE));
        element.remove();
    }
}
