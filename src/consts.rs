/// Gateway address used when neither the CLI nor the config file names one
pub(crate) const DEFAULT_SERVER: &str = "http://localhost:3000";

/// Standard date format for stored dates: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) const PRICING_PATH: &str = "/api/pricing";
pub(crate) const HOME_PAGE_CONTENT_PATH: &str = "/api/home_page_content";
pub(crate) const NOTICE_PATH: &str = "/api/notice";
