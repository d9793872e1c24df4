use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Outbound mail handoff
pub const CONTACT_RECIPIENT: &str = "networkth365@gmail.com";
pub const CONTACT_SUBJECT: &str = "Message From Networkth365 Homepage";
pub const CONTACT_GREETING: &str = "Hi Nish,";

// Simulated submission and feedback timings, in milliseconds
pub const SUBMIT_LATENCY_MS: u32 = 1_500;
pub const CONTACT_SUCCESS_MS: u32 = 5_000;
pub const WIDGET_SUCCESS_MS: u32 = 3_000;

pub const SCROLL_THROTTLE_MS: u32 = 100;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Viewports at or below this width use the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const REVEAL_OFFSET_PX: f64 = 100.0;
pub const NAV_LOOKAHEAD_PX: f64 = 100.0;

pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0; // ~60fps

/// Services offered in the contact form, as `(value, label)` pairs.
pub const SERVICES: &[(&str, &str)] = &[
    ("consulting", "Consulting"),
    ("managed-it", "Managed IT Services"),
    ("networking", "Network Design & Installation"),
    ("security", "Cybersecurity"),
    ("cloud", "Cloud Migration"),
    ("other", "Something Else"),
];

pub fn service_label(value: &str) -> Option<String> {
    SERVICES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
}
