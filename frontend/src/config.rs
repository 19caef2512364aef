use log::Level;
use web_sys::ScrollBehavior;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Show controller transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// The footer "Home" link glides back to the hero.
pub const SCROLL_TO_TOP_BEHAVIOR: ScrollBehavior = ScrollBehavior::Smooth;

/// Pixels scrolled before the nav switches to its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 80.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_top_is_smooth() {
        assert_eq!(SCROLL_TO_TOP_BEHAVIOR, ScrollBehavior::Smooth);
    }
}
