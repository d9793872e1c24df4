use std::cell::Cell;

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use super::elements::{classes, Elements};
use crate::config;

/// Index over a fixed number of slides that wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Below zero lands on the last slide, past the end lands on the first.
    /// Returns `None` when there are no slides.
    pub fn go_to(&mut self, index: isize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = if index < 0 {
            self.len - 1
        } else if index as usize >= self.len {
            0
        } else {
            index as usize
        };
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.index as isize + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.index as isize - 1)
    }
}

pub struct TestimonialSlider {
    window: Window,
    cards: Vec<Element>,
    dots: Vec<Element>,
    state: Cell<Carousel>,
}

impl TestimonialSlider {
    pub fn new(window: Window, elements: &Elements) -> Self {
        Self {
            window,
            cards: elements.testimonial_cards.clone(),
            dots: elements.testimonial_dots.clone(),
            state: Cell::new(Carousel::new(elements.testimonial_cards.len())),
        }
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn next(&self) {
        self.update(Carousel::next);
    }

    pub fn prev(&self) {
        self.update(Carousel::prev);
    }

    pub fn go_to(&self, index: usize) {
        self.update(|c| c.go_to(index as isize));
    }

    fn update(&self, step: impl FnOnce(&mut Carousel) -> Option<usize>) {
        let mut carousel = self.state.get();
        let Some(index) = step(&mut carousel) else {
            return;
        };
        self.state.set(carousel);
        log::debug!("showing testimonial {}/{}", carousel.index() + 1, carousel.len());

        for (i, dot) in self.dots.iter().enumerate() {
            let _ = dot.class_list().toggle_with_force(classes::ACTIVE, i == index);
        }

        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(f64::MAX);
        if width <= config::MOBILE_BREAKPOINT_PX {
            if let Some(card) = self.cards.get(index) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                options.set_inline(ScrollLogicalPosition::Center);
                card.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), Some(2));
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(carousel.next(), Some(1));
        assert_eq!(carousel.next(), Some(2));
        assert_eq!(carousel.next(), Some(0));
    }

    #[test]
    fn go_to_wraps_out_of_range_targets() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.go_to(2), Some(2));
        assert_eq!(carousel.go_to(-3), Some(3));
        assert_eq!(carousel.go_to(4), Some(0));
        assert_eq!(carousel.go_to(17), Some(0));
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.go_to(-1), None);
        assert_eq!(carousel.go_to(5), None);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn index_stays_in_bounds_for_mixed_sequences() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);
            for step in 0..50isize {
                match step % 3 {
                    0 => carousel.next(),
                    1 => carousel.prev(),
                    _ => carousel.go_to(step - 25),
                };
                assert!(carousel.index() < carousel.len());
            }
        }
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(carousel.prev(), Some(0));
    }
}
