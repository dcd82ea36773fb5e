use log::Level;

/// Simulated round trip of a contact form submission.
pub const SUBMIT_DELAY_MS: u32 = 1_200;

/// Vertical offset after which the nav bar switches to its solid style.
pub const SCROLLED_OFFSET_PX: f64 = 50.0;

/// A section counts as visible once its top edge is above this share of the viewport.
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.8;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
