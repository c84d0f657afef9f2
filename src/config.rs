use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Countdown
pub const COUNTDOWN_CONTAINER_ID: &str = "header-countdown";
pub const COUNTDOWN_LABEL_ID: &str = "pill-text";
pub const COUNTDOWN_TICK_MS: u32 = 60_000;

// Reveal
pub const REVEAL_SELECTOR: &str =
    ".card, .club-card, .team-member, .news-preview, .event-card, section h2, .hero h1, .hero p";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const REVEAL_CLASS: &str = "animated";

// Scroll
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const NAV_SELECTOR: &str = "nav";
pub const HERO_SELECTOR: &str = ".hero";
pub const PARALLAX_SPEED: f64 = 0.5;
pub const PARALLAX_FADE_DISTANCE: f64 = 500.0;
pub const NAVBAR_ELEVATE_OFFSET: f64 = 50.0;

// Counters
pub const COUNTER_SELECTOR: &str = ".member-number";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const COUNTED_CLASS: &str = "counted";

// Pointer and lifecycle
pub const BUTTON_SELECTOR: &str = ".btn";
pub const TILT_SELECTOR: &str = ".card, .club-card, .event-card, .team-member";
pub const HOVER_SELECTOR: &str = ".card, .club-card, .btn";
pub const FLOAT_SELECTOR: &str = ".nav-logo img, .loader-img";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADER_HOLD_MS: u32 = 1000;
pub const LOADER_FADE_MS: u32 = 800;
