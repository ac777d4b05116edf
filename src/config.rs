/// Application-level constants
pub const APP_NAME: &str = "Medicenter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Below this quantity a medication is classified "low stock".
pub const LOW_STOCK_THRESHOLD: u32 = 100;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,medicenter=debug"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_medicenter() {
        assert_eq!(APP_NAME, "Medicenter");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }

    #[test]
    fn low_stock_threshold_is_one_hundred() {
        assert_eq!(LOW_STOCK_THRESHOLD, 100);
    }
}
