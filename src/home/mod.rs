mod content;
mod notice;

pub(crate) use content::{HomeContent, HomePage, load_home_page};
pub(crate) use notice::{dismiss_notice, pending_notice};
