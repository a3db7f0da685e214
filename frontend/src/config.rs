//! Build-time settings and the fixed timings of the landing page.
//!
//! String settings can be overridden at compile time through environment
//! variables, e.g. `PAYMENT_NUMBER=... trunk build`.

/// Widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const NOTIFICATION_LIFETIME_MS: u32 = 3_000;
pub const SEARCH_LATENCY_MS: u32 = 1_500;
pub const HIGHLIGHT_DURATION_MS: u32 = 3_000;
pub const MODAL_CLOSE_DELAY_MS: u32 = 2_000;
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Most recent searches kept in local storage.
pub const RECENT_SEARCHES_LIMIT: usize = 5;

pub fn get_recent_searches_key() -> &'static str {
    option_env!("RECENT_SEARCHES_KEY").unwrap_or("bdeskgigs_recent_searches")
}

pub fn get_payment_number() -> &'static str {
    option_env!("PAYMENT_NUMBER").unwrap_or("০১৩১২-১৮৫২৭৭")
}

/// Id of the element the overlay root (toast and modals) is mounted into.
pub fn get_overlay_root_id() -> &'static str {
    option_env!("OVERLAY_ROOT_ID").unwrap_or("bdeskgigs-overlays")
}

pub fn get_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_site() {
        assert_eq!(get_recent_searches_key(), "bdeskgigs_recent_searches");
        assert_eq!(get_payment_number(), "০১৩১২-১৮৫২৭৭");
        assert_eq!(RECENT_SEARCHES_LIMIT, 5);
    }
}
