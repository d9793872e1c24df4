use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub type Task = Box<dyn FnOnce()>;

/// Source of delayed continuations. Everything the controller defers goes
/// through here so tests can swap in a virtual clock.
pub trait Scheduler {
    /// Runs `task` once, `millis` from now.
    fn after(&self, millis: u32, task: Task);
    /// Runs `task` before the next repaint.
    fn next_frame(&self, task: Task);
}

#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, millis: u32, task: Task) {
        Timeout::new(millis, move || task()).forget();
    }

    fn next_frame(&self, task: Task) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Runs the first call and swallows every call after it until `limit`
/// milliseconds have passed.
pub struct Throttle {
    limit: u32,
    busy: Rc<Cell<bool>>,
    scheduler: Rc<dyn Scheduler>,
}

impl Throttle {
    pub fn new(limit: u32, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            limit,
            busy: Rc::new(Cell::new(false)),
            scheduler,
        }
    }

    /// Returns whether `f` ran.
    pub fn run(&self, f: impl FnOnce()) -> bool {
        if self.busy.get() {
            return false;
        }
        f();
        self.busy.set(true);
        let busy = self.busy.clone();
        self.scheduler.after(self.limit, Box::new(move || busy.set(false)));
        true
    }
}

/// Runs only the latest call, once `wait` milliseconds pass without another.
pub struct Debounce {
    wait: u32,
    generation: Rc<Cell<u64>>,
    scheduler: Rc<dyn Scheduler>,
}

impl Debounce {
    pub fn new(wait: u32, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            wait,
            generation: Rc::new(Cell::new(0)),
            scheduler,
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        // Timers are fire-and-forget, so stale ones just check their ticket.
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);
        let generation = self.generation.clone();
        self.scheduler.after(
            self.wait,
            Box::new(move || {
                if generation.get() == ticket {
                    f();
                }
            }),
        );
    }
}
