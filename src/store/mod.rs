//! Small persistent key-value store
//!
//! Holds the last home page content, the notice dismissal date, and the last
//! good pricing body for offline use.

mod file;
mod memory;

pub(crate) use file::FileStore;
pub(crate) use memory::MemoryStore;

use crate::error::StoreError;

pub(crate) const HOME_PAGE_CONTENT_KEY: &str = "home_page_content";
pub(crate) const NOTICE_CLOSE_DATE_KEY: &str = "notice_close_date";
pub(crate) const PRICING_RESPONSE_KEY: &str = "pricing_response";

pub(crate) trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
