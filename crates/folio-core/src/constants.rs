//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Active-line tracking
pub mod tracking {
    /// Fraction of the viewport excluded from the top of the observation band
    pub const BAND_TOP_MARGIN: f64 = 0.2;

    /// Fraction of the viewport excluded from the bottom of the observation band
    pub const BAND_BOTTOM_MARGIN: f64 = 0.2;

    /// Intersection ratios at which the visibility observer reports
    pub const OBSERVER_THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

    /// Below `container_top + TOP_GUARD * viewport_height` the first line is forced
    pub const TOP_GUARD: f64 = 0.1;
}

/// Hero layout, expressed as fractions of the viewport height
pub mod layout {
    /// Container height per line (60vh each)
    pub const CONTAINER_PER_LINE: f64 = 0.6;

    /// Minimum container height (200vh)
    pub const CONTAINER_MIN: f64 = 2.0;

    /// Vertical padding above and below the sentinel list (10vh)
    pub const LIST_PADDING: f64 = 0.1;

    /// Height of the slot holding one sentinel (50vh)
    pub const SLOT_HEIGHT: f64 = 0.5;

    /// Height of a sentinel, centered inside its slot (20vh)
    pub const SENTINEL_HEIGHT: f64 = 0.2;

    /// Default height of the page header above the hero, in pixels
    pub const DEFAULT_HEADER_HEIGHT: f64 = 96.0;

    /// Default height of the sections following the hero, in pixels
    pub const DEFAULT_TRAILING_HEIGHT: f64 = 1600.0;
}

/// Navigation bar
pub mod nav {
    /// Scroll offset (pixels) past which the navigation bar counts as scrolled
    pub const SCROLLED_THRESHOLD: f64 = 20.0;

    /// Brand shown at the left of the navigation bar
    pub const DEFAULT_BRAND: &str = "Lydia Hsu";
}

/// Hero text
pub mod hero {
    /// Stagger between consecutive emoji emphasis, in milliseconds
    pub const EMOJI_STAGGER_MS: u64 = 100;

    /// Lines shown when no configuration overrides them
    pub const DEFAULT_LINES: [&str; 4] = [
        "From 🔢 data insights 📈 to positioning 📝 and product sense,",
        "Lydia has what you need 🤝🏼 to help 🍎 Apple's small business customers thrive.",
        "All in 📌 one marketer.",
        "This is strategic PMM ✅ at work.",
    ];
}

/// Paths and environment
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "hero.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Environment variable forcing the reduced-motion preference
    pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";
}
