use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the quote success view stays up before the modal resets itself.
pub const SUCCESS_DISMISS_MS: u32 = 4_000;

/// `maxlength` of the optional message textarea; the counter counts down from this.
pub const MESSAGE_MAX_LENGTH: usize = 500;

pub const TEXT_SCALE_BASE_WIDTH: f64 = 1200.0;
pub const TEXT_SCALE_MIN: f64 = 0.7;
pub const TEXT_SCALE_MAX: f64 = 1.2;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;
