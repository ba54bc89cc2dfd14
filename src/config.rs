use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose animation lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a counter that must be on screen before it starts counting.
pub const COUNTER_THRESHOLD: f64 = 0.3;

/// Fraction of a feature or menu card that must be on screen before it fades in.
pub const CARD_THRESHOLD: f64 = 0.2;

/// Scroll offset in pixels after which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const FEATURE_STAGGER_MS: u32 = 200;
pub const MENU_STAGGER_MS: u32 = 100;

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3645.9483588266817!2d115.17727747464026!3d-8.711823791337396!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x2dd246c84b624c43%3A0x43c45e475aaa916!2sKopi%20Zeen%20%3A%20best%20cafe%20Bali%20Kuta!5e1!3m2!1sid!2sid!4v1748498803962!5m2!1sid!2sid";

pub const MAPS_DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";
